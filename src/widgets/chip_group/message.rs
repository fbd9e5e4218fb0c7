// SPDX-License-Identifier: MPL-2.0

//! Messages emitted by the expandable chip group.

use super::chip::{ChipId, ControlKind};

/// Messages emitted by the expandable chip group.
///
/// These should be wrapped by the parent's message type and handed back to
/// [`ChipGroupState::update`](super::ChipGroupState::update).
#[derive(Debug, Clone, PartialEq)]
pub enum ChipGroupMessage {
    /// User clicked a chip.
    Toggle {
        /// The chip that was clicked.
        id: ChipId,
        /// The checked state the chip should take.
        checked: bool,
    },

    /// User clicked the expand or collapse control.
    Activate(ControlKind),
}
