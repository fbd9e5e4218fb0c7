// SPDX-License-Identifier: MPL-2.0

//! Width measurement for chips and control chips.

use super::chip::{Chip, ControlTemplate, Margins};
use cosmic::iced::advanced::text::{self, Paragraph as _};
use cosmic::iced::{Pixels, Size, alignment};
use unicode_width::UnicodeWidthStr;

type Paragraph = <cosmic::Renderer as text::Renderer>::Paragraph;

/// Metrics used to measure and draw chips.
///
/// Labels are shaped with the renderer's font system in the default font.
/// The widget draws every label at `font_size` and gives every rendered chip
/// exactly its measured width, which keeps the drawn rows identical to the
/// simulated ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChipMetrics {
    /// Font size of chip labels.
    pub font_size: f32,
    /// Average advance of one display column, as a fraction of the font
    /// size, used instead of shaping. Wide CJK glyphs count as two columns.
    pub estimated_advance: Option<f32>,
    /// Horizontal padding inside the chip, on each side.
    pub padding: u16,
    /// Vertical padding inside the chip, on each side.
    pub vertical_padding: u16,
    /// Size of a control icon.
    pub icon_size: u16,
    /// Gap between a control label and its icon.
    pub icon_spacing: u16,
}

impl Default for ChipMetrics {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            estimated_advance: None,
            padding: 12,
            vertical_padding: 6,
            icon_size: 16,
            icon_spacing: 4,
        }
    }
}

impl ChipMetrics {
    /// Width of a label without padding.
    pub fn text_width(&self, text: &str) -> f32 {
        if text.is_empty() {
            return 0.0;
        }

        match self.estimated_advance {
            Some(advance) => (text.width() as f32 * self.font_size * advance).ceil(),
            None => shaped_width(text, self.font_size),
        }
    }

    /// Width of a chip's content (label plus optional icon), without padding.
    pub fn content_width(&self, label: &str, with_icon: bool) -> f32 {
        let text = self.text_width(label);
        if with_icon {
            text + f32::from(self.icon_spacing) + f32::from(self.icon_size)
        } else {
            text
        }
    }

    /// Width of the chip body as drawn, padding included.
    pub fn body_width(&self, label: &str, with_icon: bool) -> f32 {
        self.content_width(label, with_icon) + 2.0 * f32::from(self.padding)
    }

    /// Width a chip takes in its row, margins included.
    pub fn chip_width<D>(&self, chip: &Chip<D>) -> f32 {
        self.with_margins(self.body_width(&chip.label, false), chip.margins)
    }

    /// Width a control takes in its row when showing `label`.
    pub fn control_width(&self, template: &ControlTemplate, label: &str) -> f32 {
        self.with_margins(
            self.body_width(label, template.icon.is_some()),
            template.margins,
        )
    }

    fn with_margins(&self, width: f32, margins: Margins) -> f32 {
        width + margins.horizontal()
    }
}

/// Width of `label` on a single unwrapped line.
fn shaped_width(label: &str, font_size: f32) -> f32 {
    let paragraph = Paragraph::with_text(text::Text {
        content: label,
        bounds: Size::INFINITY,
        size: Pixels(font_size),
        line_height: text::LineHeight::default(),
        font: cosmic::font::default(),
        horizontal_alignment: alignment::Horizontal::Left,
        vertical_alignment: alignment::Vertical::Top,
        shaping: text::Shaping::Advanced,
        wrapping: text::Wrapping::None,
    });

    paragraph.min_width().ceil()
}
