// SPDX-License-Identifier: MPL-2.0

//! Chip and control-template types for the expandable chip group.

/// Unique identifier for chips in a group.
pub type ChipId = String;

/// Horizontal margins around a chip, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
}

impl Margins {
    /// Total horizontal space taken by the margins.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }
}

/// A single selectable chip.
///
/// Generic over `D` which is the custom data type carried by each chip.
#[derive(Debug, Clone)]
pub struct Chip<D> {
    /// Unique identifier for this chip.
    pub id: ChipId,
    /// Display label.
    pub label: String,
    /// Whether the chip is currently checked.
    pub checked: bool,
    /// Space kept free to the left and right of the chip.
    pub margins: Margins,
    /// Custom data associated with this chip.
    pub data: D,
}

impl<D> Chip<D> {
    /// Creates a new unchecked chip without margins.
    pub fn new(id: impl Into<String>, label: impl Into<String>, data: D) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            checked: false,
            margins: Margins::default(),
            data,
        }
    }

}

/// Which control element is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Reveals the hidden chips.
    Expand,
    /// Folds the group back to its row limit.
    Collapse,
}

/// Definition of a control chip.
///
/// The label is used as-is unless the group has a label provider, in which
/// case the provider's text replaces it every time the control is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlTemplate {
    /// Fallback label.
    pub label: String,
    /// Optional symbolic icon name drawn after the label.
    pub icon: Option<String>,
    /// Space kept free to the left and right of the control.
    pub margins: Margins,
}

impl ControlTemplate {
    /// Creates a template with a plain label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            margins: Margins::default(),
        }
    }

    /// Adds a symbolic icon after the label.
    pub fn icon(mut self, name: impl Into<String>) -> Self {
        self.icon = Some(name.into());
        self
    }

    /// Sets the control margins.
    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }
}
