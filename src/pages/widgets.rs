// SPDX-License-Identifier: MPL-2.0

//! Shared widgets for the Chipfold application pages.

use crate::app::{Message, Notification, NotificationLevel};
use cosmic::iced::{Alignment, Length};
use cosmic::prelude::*;
use cosmic::widget::{self, icon};

/// Notification toast widget
pub fn notification_toast(notification: &Notification) -> Element<'_, Message> {
    let level_icon = match notification.level {
        NotificationLevel::Success => icon::from_name("object-select-symbolic").size(20),
        NotificationLevel::Error => icon::from_name("dialog-error-symbolic").size(20),
    };

    let content = widget::row::with_capacity(3)
        .push(level_icon)
        .push(
            widget::column::with_capacity(2)
                .push(widget::text::body(&notification.title))
                .push_maybe(if notification.message.is_empty() {
                    None
                } else {
                    Some(widget::text::caption(&notification.message))
                })
                .spacing(2)
                .width(Length::Fill),
        )
        .push(
            widget::button::icon(icon::from_name("window-close-symbolic"))
                .on_press(Message::DismissNotification(notification.id))
                .class(cosmic::theme::Button::Standard),
        )
        .spacing(8)
        .align_y(Alignment::Center);

    widget::container(content)
        .padding(12)
        .width(Length::Fixed(400.0))
        .class(cosmic::style::Container::Card)
        .into()
}

/// Small labelled value shown in a card
pub fn stat_card(label: String, value: String) -> Element<'static, Message> {
    widget::container(
        widget::column::with_capacity(2)
            .push(widget::text::caption(label))
            .push(widget::text::title4(value))
            .spacing(4),
    )
    .padding(cosmic::theme::spacing().space_s)
    .width(Length::FillPortion(1))
    .class(cosmic::style::Container::Card)
    .into()
}
