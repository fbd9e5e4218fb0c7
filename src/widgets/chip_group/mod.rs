// SPDX-License-Identifier: MPL-2.0

//! Expandable chip group widget.
//!
//! Chips are laid out left to right and wrap onto new rows when the width
//! runs out. While collapsed the group shows at most `max_rows` rows and
//! appends an expand control that reveals the rest; chips are evicted from
//! the end of the last row until that control fits beside them. While
//! expanded every chip is shown, followed by a collapse control whenever
//! collapsing would hide something.
//!
//! # Example
//!
//! ```ignore
//! use crate::widgets::chip_group::{
//!     Chip, ChipGroupMessage, ChipGroupState, ControlTemplate, ExpandableChipGroup, GroupConfig,
//!     Mode, RowLimit,
//! };
//!
//! // In your app state
//! struct AppModel {
//!     chips: ChipGroupState<()>,
//! }
//!
//! // At init
//! let mut chips = ChipGroupState::new(
//!     GroupConfig::default()
//!         .max_rows(RowLimit::at_most(2))
//!         .expand_control(ControlTemplate::new("More"))
//!         .collapse_control(ControlTemplate::new("Less")),
//! );
//! chips.set_label_provider(|mode, hidden| match mode {
//!     Mode::Collapsed => format!("Show ({hidden})"),
//!     Mode::Expanded => "Hide".into(),
//! });
//! chips.set_chips(vec![Chip::new("a", "Apple", ()), Chip::new("b", "Basil", ())]);
//!
//! // In your message enum
//! enum Message {
//!     Chips(ChipGroupMessage),
//! }
//!
//! // In your view function
//! fn view(&self) -> Element<'_, Message> {
//!     ExpandableChipGroup::new(&self.chips, Message::Chips).into()
//! }
//!
//! // In your update function
//! fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Chips(msg) => self.chips.update(msg),
//!     }
//!     Task::none()
//! }
//! ```

mod chip;
mod layout;
mod measure;
mod message;
mod state;
mod widget;

pub use chip::{Chip, ControlTemplate, Margins};
pub use layout::RowLimit;
pub use measure::ChipMetrics;
pub use message::ChipGroupMessage;
pub use state::{ChipGroupState, GroupConfig, Mode};
pub use widget::ExpandableChipGroup;
