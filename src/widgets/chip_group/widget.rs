// SPDX-License-Identifier: MPL-2.0

//! Expandable chip group builder and rendering.

use super::chip::{Chip, ControlKind, Margins};
use super::measure::ChipMetrics;
use super::message::ChipGroupMessage;
use super::state::{Arrangement, ChipGroupState, PlacedControl, Slot};
use cosmic::iced::alignment::Horizontal;
use cosmic::iced::{Alignment, Length, Padding};
use cosmic::prelude::*;
use cosmic::widget::{self, icon};
use std::fmt::Debug;

/// Builder for the expandable chip group widget.
///
/// # Type Parameters
///
/// - `D`: The custom data type carried by each chip
/// - `Message`: The parent's message type
///
/// # Example
///
/// ```ignore
/// ExpandableChipGroup::new(&chip_state, Message::Chips)
///     .metrics(ChipMetrics::default())
///     .height(Length::Fill)
///     .into()
/// ```
pub struct ExpandableChipGroup<'a, D, Message>
where
    D: Clone + Debug + 'a,
    Message: Clone + 'static,
{
    state: &'a ChipGroupState<D>,
    on_message: Box<dyn Fn(ChipGroupMessage) -> Message + 'a>,
    metrics: ChipMetrics,
    height: Length,
    chip_content: Option<Box<dyn Fn(&Chip<D>) -> Element<'a, Message> + 'a>>,
}

impl<'a, D, Message> ExpandableChipGroup<'a, D, Message>
where
    D: Clone + Debug + 'a,
    Message: Clone + 'static,
{
    /// Creates a new chip group widget.
    ///
    /// # Arguments
    ///
    /// - `state`: The chip group state (owned by parent)
    /// - `on_message`: Function to wrap `ChipGroupMessage` into the parent's `Message` type
    pub fn new(
        state: &'a ChipGroupState<D>,
        on_message: impl Fn(ChipGroupMessage) -> Message + 'a,
    ) -> Self {
        Self {
            state,
            on_message: Box::new(on_message),
            metrics: ChipMetrics::default(),
            height: Length::Fill,
            chip_content: None,
        }
    }

    /// Sets the metrics used to measure and draw chips.
    pub fn metrics(mut self, metrics: ChipMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn height(mut self, height: Length) -> Self {
        self.height = height;
        self
    }

    /// Sets a custom renderer for the inside of a chip.
    ///
    /// The chip body keeps its measured width, so the content should not be
    /// wider than the label it replaces at the metrics' font size.
    pub fn chip_content<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&Chip<D>) -> Element<'a, Message> + 'a,
    {
        self.chip_content = Some(Box::new(renderer));
        self
    }

    fn margin_padding(margins: Margins) -> Padding {
        Padding {
            top: 0.0,
            right: margins.right,
            bottom: 0.0,
            left: margins.left,
        }
    }

    /// Renders a single chip.
    fn render_chip(&self, chip: &Chip<D>) -> Element<'a, Message> {
        let content = if let Some(ref renderer) = self.chip_content {
            renderer(chip)
        } else {
            widget::text::body(chip.label.clone())
                .size(self.metrics.font_size)
                .into()
        };

        let class = if chip.checked {
            cosmic::theme::Button::Suggested
        } else {
            cosmic::theme::Button::Standard
        };

        let toggle = (self.on_message)(ChipGroupMessage::Toggle {
            id: chip.id.clone(),
            checked: !chip.checked,
        });

        let body = widget::button::custom(
            widget::container(content)
                .width(Length::Fixed(self.metrics.content_width(&chip.label, false)))
                .align_x(Horizontal::Center),
        )
        .padding([self.metrics.vertical_padding, self.metrics.padding])
        .class(class)
        .on_press(toggle);

        widget::container(body)
            .padding(Self::margin_padding(chip.margins))
            .into()
    }

    /// Renders the expand or collapse control.
    fn render_control(&self, control: &PlacedControl) -> Element<'a, Message> {
        let config = self.state.config();
        let template = match control.kind {
            ControlKind::Expand => config.expand_control.as_ref(),
            ControlKind::Collapse => config.collapse_control.as_ref(),
        };
        let icon_name = template.and_then(|template| template.icon.clone());
        let margins = template.map(|template| template.margins).unwrap_or_default();

        let content_width = self
            .metrics
            .content_width(&control.label, icon_name.is_some());

        let content = widget::row::with_capacity(2)
            .push(widget::text::body(control.label.clone()).size(self.metrics.font_size))
            .push_maybe(icon_name.map(|name| icon::from_name(name).size(self.metrics.icon_size)))
            .spacing(self.metrics.icon_spacing)
            .align_y(Alignment::Center);

        let body = widget::button::custom(
            widget::container(content)
                .width(Length::Fixed(content_width))
                .align_x(Horizontal::Center),
        )
        .padding([self.metrics.vertical_padding, self.metrics.padding])
        .class(cosmic::theme::Button::Text)
        .on_press((self.on_message)(ChipGroupMessage::Activate(control.kind)));

        widget::container(body)
            .padding(Self::margin_padding(margins))
            .into()
    }

    /// Lays the group out at the given width.
    fn arrange(&self, available_width: f32) -> Arrangement {
        match self.state.arrange(available_width, &self.metrics) {
            Ok(arrangement) => arrangement,
            Err(err) => {
                self.state.report_failure(available_width, &err);
                self.state.arrange_chips(available_width, &self.metrics)
            }
        }
    }

    /// Renders the rows that fit in `available_width`.
    fn render(&self, available_width: f32) -> Element<'a, Message> {
        let state = self.state;
        let arrangement = self.arrange(available_width);
        let spacing = state.config().spacing;

        let mut column = widget::column::with_capacity(arrangement.rows.len()).spacing(spacing);

        for row in &arrangement.rows {
            let mut line = widget::row::with_capacity(row.len())
                .spacing(spacing)
                .align_y(Alignment::Center);

            for slot in row {
                let element = match slot {
                    Slot::Chip(index) => self.render_chip(&state.chips()[*index]),
                    Slot::Control => match arrangement.control {
                        Some(ref control) => self.render_control(control),
                        None => continue,
                    },
                };
                line = line.push(element);
            }

            column = column.push(line);
        }

        widget::scrollable(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Builds the widget and returns it as an Element.
    ///
    /// The arrangement is recomputed every time the toolkit reports a new
    /// size for the group.
    pub fn build(self) -> Element<'a, Message> {
        let height = self.height;

        widget::container(cosmic::iced::widget::responsive(move |size| {
            self.render(size.width)
        }))
        .width(Length::Fill)
        .height(height)
        .into()
    }
}

impl<'a, D, Message> From<ExpandableChipGroup<'a, D, Message>> for Element<'a, Message>
where
    D: Clone + Debug + 'a,
    Message: Clone + 'static,
{
    fn from(group: ExpandableChipGroup<'a, D, Message>) -> Self {
        group.build()
    }
}
