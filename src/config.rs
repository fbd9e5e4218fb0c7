// SPDX-License-Identifier: MPL-2.0

use crate::fl;
use crate::widgets::chip_group::{
    ChipGroupState, ControlTemplate, GroupConfig, Margins, Mode, RowLimit,
};
use cosmic::cosmic_config::{self, cosmic_config_derive::CosmicConfigEntry, CosmicConfigEntry};

/// Largest row limit offered in settings.
pub const MAX_ROWS_UPPER: u32 = 10;

/// Largest chip spacing offered in settings.
pub const SPACING_UPPER: u16 = 32;

/// Extra space in front of the expand and collapse controls.
const CONTROL_GAP: f32 = 4.0;

#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq)]
#[version = 1]
pub struct Config {
    /// Rows shown while the group is collapsed; `None` for no limit
    pub max_rows: Option<u32>,
    /// Start the group collapsed
    pub initially_collapsed: bool,
    /// Gap between chips, in pixels
    pub spacing: u16,
    /// Allow only one checked chip at a time
    pub single_selection: bool,
    /// Draw an arrow icon on the expand and collapse controls
    pub show_control_icons: bool,
    /// Show the hidden chip count on the expand control
    pub counted_control_labels: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_rows: Some(2),
            initially_collapsed: true,
            spacing: 8,
            single_selection: true,
            show_control_icons: true,
            counted_control_labels: true,
        }
    }
}

impl Config {
    /// Row limit for the chip group.
    pub fn row_limit(&self) -> RowLimit {
        match self.max_rows {
            Some(rows) => RowLimit::at_most(rows.clamp(1, MAX_ROWS_UPPER) as usize),
            None => RowLimit::Unbounded,
        }
    }

    /// Chip group configuration with localized control templates.
    pub fn group_config(&self) -> GroupConfig {
        let gap = Margins {
            left: CONTROL_GAP,
            right: 0.0,
        };
        let mut expand = ControlTemplate::new(fl!("show-more")).margins(gap);
        let mut collapse = ControlTemplate::new(fl!("hide")).margins(gap);
        if self.show_control_icons {
            expand = expand.icon("go-down-symbolic");
            collapse = collapse.icon("go-up-symbolic");
        }

        GroupConfig::default()
            .max_rows(self.row_limit())
            .initially_collapsed(self.initially_collapsed)
            .spacing(f32::from(self.spacing.min(SPACING_UPPER)))
            .single_selection(self.single_selection)
            .expand_control(expand)
            .collapse_control(collapse)
    }

    /// Reconfigures a chip group and installs its control labels.
    ///
    /// Chips and their checked state are kept; the group returns to its
    /// initial mode.
    pub fn apply_to<D: Clone>(&self, chips: &mut ChipGroupState<D>) {
        chips.reconfigure(self.group_config());
        if self.counted_control_labels {
            chips.set_label_provider(|mode, hidden| match mode {
                Mode::Collapsed => fl!("show-hidden", count = hidden),
                Mode::Expanded => fl!("hide"),
            });
        } else {
            chips.clear_label_provider();
        }
    }
}
