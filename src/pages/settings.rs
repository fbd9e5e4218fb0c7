// SPDX-License-Identifier: MPL-2.0

//! Settings page view for the Chipfold application.

use crate::app::{AppModel, Message};
use crate::config::{MAX_ROWS_UPPER, SPACING_UPPER};
use crate::fl;
use cosmic::iced::{Alignment, Length};
use cosmic::prelude::*;
use cosmic::widget::{self, icon};

/// Row limit offered when switching from unlimited back to a limit.
const DEFAULT_ROWS: u32 = 2;

/// Step used by the spacing stepper.
const SPACING_STEP: u16 = 2;

/// View for the Settings page
pub fn view(app: &AppModel, space_s: u16, space_m: u16) -> Element<'_, Message> {
    let header = widget::text::title1(fl!("settings"));
    let config = &app.config;

    let rows = config.max_rows.unwrap_or(DEFAULT_ROWS).clamp(1, MAX_ROWS_UPPER);
    let rows_stepper = stepper(
        rows.to_string(),
        config
            .max_rows
            .filter(|rows| *rows > 1)
            .map(|rows| Message::SetMaxRows(Some(rows - 1))),
        config
            .max_rows
            .filter(|rows| *rows < MAX_ROWS_UPPER)
            .map(|rows| Message::SetMaxRows(Some(rows + 1))),
        space_s,
    );

    let spacing = config.spacing.min(SPACING_UPPER);
    let spacing_stepper = stepper(
        format!("{spacing} px"),
        (spacing > 0).then(|| Message::SetSpacing(spacing.saturating_sub(SPACING_STEP))),
        (spacing < SPACING_UPPER)
            .then(|| Message::SetSpacing((spacing + SPACING_STEP).min(SPACING_UPPER))),
        space_s,
    );

    let layout_section = widget::settings::section()
        .title(fl!("layout"))
        .add(
            widget::settings::item::builder(fl!("unlimited-rows"))
                .description(fl!("unlimited-rows-description"))
                .toggler(config.max_rows.is_none(), move |unlimited| {
                    Message::SetMaxRows(if unlimited { None } else { Some(rows) })
                }),
        )
        .add(
            widget::settings::item::builder(fl!("max-rows"))
                .description(fl!("max-rows-description"))
                .control(rows_stepper),
        )
        .add(
            widget::settings::item::builder(fl!("spacing"))
                .description(fl!("spacing-description"))
                .control(spacing_stepper),
        )
        .add(
            widget::settings::item::builder(fl!("initially-collapsed"))
                .toggler(config.initially_collapsed, Message::SetInitiallyCollapsed),
        );

    let behavior_section = widget::settings::section()
        .title(fl!("behavior"))
        .add(
            widget::settings::item::builder(fl!("single-selection"))
                .description(fl!("single-selection-description"))
                .toggler(config.single_selection, Message::SetSingleSelection),
        )
        .add(
            widget::settings::item::builder(fl!("control-icons"))
                .toggler(config.show_control_icons, Message::SetShowControlIcons),
        )
        .add(
            widget::settings::item::builder(fl!("counted-labels"))
                .description(fl!("counted-labels-description"))
                .toggler(config.counted_control_labels, Message::SetCountedControlLabels),
        );

    widget::scrollable(
        widget::column::with_capacity(3)
            .push(header)
            .push(layout_section)
            .push(behavior_section)
            .spacing(space_m)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// Minus and plus buttons around a value; a `None` message disables that side
fn stepper(
    value: String,
    decrement: Option<Message>,
    increment: Option<Message>,
    spacing: u16,
) -> Element<'static, Message> {
    widget::row::with_capacity(3)
        .push(
            widget::button::icon(icon::from_name("list-remove-symbolic"))
                .on_press_maybe(decrement),
        )
        .push(
            widget::container(widget::text::body(value))
                .width(Length::Fixed(56.0))
                .align_x(cosmic::iced::alignment::Horizontal::Center),
        )
        .push(
            widget::button::icon(icon::from_name("list-add-symbolic")).on_press_maybe(increment),
        )
        .spacing(spacing)
        .align_y(Alignment::Center)
        .into()
}
