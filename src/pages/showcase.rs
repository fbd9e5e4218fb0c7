// SPDX-License-Identifier: MPL-2.0

//! Showcase page view for the Chipfold application.

use crate::app::{AppModel, Message};
use crate::fl;
use crate::shades;
use crate::widgets::chip_group::{ExpandableChipGroup, Mode};
use cosmic::iced::{Alignment, Length};
use cosmic::prelude::*;
use cosmic::widget;

use super::widgets::stat_card;

/// View for the Showcase page
pub fn view(app: &AppModel, space_s: u16, space_m: u16) -> Element<'_, Message> {
    let header = widget::column::with_capacity(2)
        .push(widget::text::title1(fl!("showcase")))
        .push(widget::text::caption(fl!("showcase-description")))
        .spacing(4);

    let chips = app.chips.chips();
    let checked = app.chips.checked_chip();

    let toolbar = widget::row::with_capacity(4)
        .push(widget::button::standard(fl!("shuffle")).on_press(Message::Shuffle))
        .push(
            widget::button::standard(fl!("add-chip"))
                .on_press_maybe(shades::next_unused(chips).map(|_| Message::AddChip)),
        )
        .push(
            widget::button::standard(fl!("remove-chip"))
                .on_press_maybe((!chips.is_empty()).then_some(Message::RemoveChip)),
        )
        .push(
            widget::button::standard(fl!("copy-checked"))
                .on_press_maybe(checked.map(|_| Message::CopyChecked)),
        )
        .spacing(space_s)
        .align_y(Alignment::Center);

    let mode = match app.chips.mode() {
        Mode::Collapsed => fl!("mode-collapsed"),
        Mode::Expanded => fl!("mode-expanded"),
    };
    let selection = match checked {
        Some(chip) => fl!("checked-chip", label = chip.data.name, hex = chip.data.hex),
        None => fl!("no-checked-chip"),
    };

    let stats = widget::row::with_capacity(3)
        .push(stat_card(fl!("mode"), mode))
        .push(stat_card(fl!("chips"), fl!("chip-count", count = chips.len())))
        .push(stat_card(fl!("selection"), selection))
        .spacing(space_m);

    // Unchecked chips are drawn in their own shade.
    let font_size = app.metrics.font_size;
    let group = widget::container(
        ExpandableChipGroup::new(&app.chips, Message::Chips)
            .metrics(app.metrics)
            .chip_content(move |chip| {
                let label = widget::text::body(chip.label.clone()).size(font_size);
                match chip.data.color() {
                    Some(color) if !chip.checked => {
                        label.class(cosmic::style::Text::Color(color)).into()
                    }
                    _ => label.into(),
                }
            })
            .height(Length::Fill),
    )
    .padding(space_s)
    .width(Length::Fill)
    .height(Length::Fill)
    .class(cosmic::style::Container::Card);

    widget::column::with_capacity(4)
        .push(header)
        .push(toolbar)
        .push(stats)
        .push(group)
        .spacing(space_m)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
