// SPDX-License-Identifier: MPL-2.0

//! State management for the expandable chip group.

use super::chip::{Chip, ChipId, ControlKind, ControlTemplate};
use super::layout::{LayoutError, RowLimit, RowWrap, WrapOutcome};
use super::measure::ChipMetrics;
use super::message::ChipGroupMessage;
use std::cell::Cell;
use std::fmt;
use std::sync::Arc;

/// Whether the group is folded to its row limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Chips past the row limit are hidden behind the expand control.
    #[default]
    Collapsed,
    /// All chips are shown.
    Expanded,
}

impl Mode {
    /// Returns the mode that activating `control` leads to, if any.
    ///
    /// Only the expand control leaves `Collapsed` and only the collapse
    /// control leaves `Expanded`.
    pub fn on_control(self, control: ControlKind) -> Option<Mode> {
        match (self, control) {
            (Mode::Collapsed, ControlKind::Expand) => Some(Mode::Expanded),
            (Mode::Expanded, ControlKind::Collapse) => Some(Mode::Collapsed),
            _ => None,
        }
    }
}

/// Produces the text of a control chip from the current mode and the number
/// of hidden chips.
pub type LabelProvider = Arc<dyn Fn(Mode, usize) -> String + Send + Sync>;

/// Construction-time configuration of a chip group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupConfig {
    /// Rows shown while collapsed.
    pub max_rows: RowLimit,
    /// Start in `Collapsed` mode.
    pub initially_collapsed: bool,
    /// Gap between chips in a row, and between rows.
    pub spacing: f32,
    /// Checking a chip unchecks all others.
    pub single_selection: bool,
    /// Control shown while collapsed with hidden chips.
    pub expand_control: Option<ControlTemplate>,
    /// Control shown while expanded when collapsing would hide chips.
    pub collapse_control: Option<ControlTemplate>,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            max_rows: RowLimit::Unbounded,
            initially_collapsed: true,
            spacing: 8.0,
            single_selection: false,
            expand_control: None,
            collapse_control: None,
        }
    }
}

impl GroupConfig {
    pub fn max_rows(mut self, max_rows: RowLimit) -> Self {
        self.max_rows = max_rows;
        self
    }

    pub fn initially_collapsed(mut self, collapsed: bool) -> Self {
        self.initially_collapsed = collapsed;
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn single_selection(mut self, single: bool) -> Self {
        self.single_selection = single;
        self
    }

    pub fn expand_control(mut self, template: ControlTemplate) -> Self {
        self.expand_control = Some(template);
        self
    }

    pub fn collapse_control(mut self, template: ControlTemplate) -> Self {
        self.collapse_control = Some(template);
        self
    }

    /// Mode the group starts in.
    pub fn initial_mode(&self) -> Mode {
        if self.initially_collapsed {
            Mode::Collapsed
        } else {
            Mode::Expanded
        }
    }
}

/// One element of an arranged row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Index into the group's chips.
    Chip(usize),
    /// The control chip.
    Control,
}

/// A control chip placed by the arrangement.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedControl {
    pub kind: ControlKind,
    pub label: String,
    /// Measured width, margins included.
    pub width: f32,
}

/// Result of arranging a group at a given width.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Arrangement {
    /// Rows to draw, top to bottom.
    pub rows: Vec<Vec<Slot>>,
    /// The attached control, if one is needed.
    pub control: Option<PlacedControl>,
}

impl Arrangement {
    /// Builds rows from a wrap outcome, keeping visible chips only.
    fn from_outcome(outcome: &WrapOutcome) -> Vec<(usize, Vec<Slot>)> {
        let mut rows: Vec<(usize, Vec<Slot>)> = Vec::new();
        for (index, (&row, &visible)) in outcome.rows.iter().zip(&outcome.visible).enumerate() {
            if !visible {
                continue;
            }
            match rows.last_mut() {
                Some((current, slots)) if *current == row => slots.push(Slot::Chip(index)),
                _ => rows.push((row, vec![Slot::Chip(index)])),
            }
        }
        rows
    }
}

/// State for the expandable chip group.
///
/// This state is owned by the parent component and passed to the widget.
#[derive(Clone)]
pub struct ChipGroupState<D> {
    chips: Vec<Chip<D>>,
    mode: Mode,
    config: GroupConfig,
    label_provider: Option<LabelProvider>,
    /// Width of the last impossible layout that was logged.
    reported_failure: Cell<Option<f32>>,
}

impl<D: fmt::Debug> fmt::Debug for ChipGroupState<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChipGroupState")
            .field("chips", &self.chips)
            .field("mode", &self.mode)
            .field("config", &self.config)
            .field("label_provider", &self.label_provider.is_some())
            .finish()
    }
}

impl<D: Clone> Default for ChipGroupState<D> {
    fn default() -> Self {
        Self::new(GroupConfig::default())
    }
}

impl<D: Clone> ChipGroupState<D> {
    /// Creates an empty group in the configured initial mode.
    pub fn new(config: GroupConfig) -> Self {
        Self {
            chips: Vec::new(),
            mode: config.initial_mode(),
            config,
            label_provider: None,
            reported_failure: Cell::new(None),
        }
    }

    /// Replaces all chips.
    pub fn set_chips(&mut self, chips: Vec<Chip<D>>) {
        self.chips = chips;
        self.reported_failure.set(None);
        tracing::debug!(count = self.chips.len(), "chips replaced");
    }

    /// Replaces the configuration and returns to its initial mode.
    pub fn reconfigure(&mut self, config: GroupConfig) {
        self.mode = config.initial_mode();
        self.config = config;
        self.reported_failure.set(None);
    }

    /// Sets the function producing control labels.
    pub fn set_label_provider<F>(&mut self, provider: F)
    where
        F: Fn(Mode, usize) -> String + Send + Sync + 'static,
    {
        self.label_provider = Some(Arc::new(provider));
        self.reported_failure.set(None);
    }

    /// Falls back to the control templates' own labels.
    pub fn clear_label_provider(&mut self) {
        self.label_provider = None;
        self.reported_failure.set(None);
    }

    pub fn chips(&self) -> &[Chip<D>] {
        &self.chips
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    /// Returns the first checked chip.
    pub fn checked_chip(&self) -> Option<&Chip<D>> {
        self.chips.iter().find(|chip| chip.checked)
    }

    /// Sets the checked state of a chip.
    ///
    /// With single selection, checking a chip unchecks every other chip.
    /// Returns false if no chip has this id.
    pub fn set_checked(&mut self, id: &ChipId, checked: bool) -> bool {
        if !self.chips.iter().any(|chip| &chip.id == id) {
            return false;
        }

        for chip in &mut self.chips {
            if &chip.id == id {
                chip.checked = checked;
            } else if checked && self.config.single_selection {
                chip.checked = false;
            }
        }
        true
    }

    /// Applies a control activation and returns the new mode, if it changed.
    pub fn activate(&mut self, control: ControlKind) -> Option<Mode> {
        let next = self.mode.on_control(control)?;
        tracing::info!(from = ?self.mode, to = ?next, "chip group mode changed");
        self.mode = next;
        self.reported_failure.set(None);
        Some(next)
    }

    /// Logs an impossible layout unless it was already logged for this
    /// width since the group last changed. Returns true if it was logged.
    pub fn report_failure(&self, available_width: f32, err: &LayoutError) -> bool {
        if self.reported_failure.get() == Some(available_width) {
            return false;
        }
        self.reported_failure.set(Some(available_width));
        tracing::error!(%err, available_width, "chip group cannot place its control");
        true
    }

    /// Applies a message emitted by the widget.
    pub fn update(&mut self, message: ChipGroupMessage) {
        match message {
            ChipGroupMessage::Toggle { id, checked } => {
                if !self.set_checked(&id, checked) {
                    tracing::warn!(%id, "toggle for unknown chip");
                }
            }
            ChipGroupMessage::Activate(control) => {
                self.activate(control);
            }
        }
    }

    /// Text shown on a control for the given mode and hidden count.
    pub fn control_label(&self, template: &ControlTemplate, mode: Mode, hidden: usize) -> String {
        match &self.label_provider {
            Some(provider) => provider(mode, hidden),
            None => template.label.clone(),
        }
    }

    /// Decides which chips are shown at `available_width` and where the
    /// control goes.
    ///
    /// Nothing is laid out until the width is positive.
    pub fn arrange(
        &self,
        available_width: f32,
        metrics: &ChipMetrics,
    ) -> Result<Arrangement, LayoutError> {
        if available_width <= 0.0 {
            return Ok(Arrangement {
                rows: Vec::new(),
                control: None,
            });
        }

        let widths: Vec<f32> = self
            .chips
            .iter()
            .map(|chip| metrics.chip_width(chip))
            .collect();
        let wrap = RowWrap::new(available_width, self.config.spacing, self.config.max_rows);

        match self.mode {
            Mode::Collapsed => self.arrange_collapsed(&wrap, &widths, metrics),
            Mode::Expanded => Ok(self.arrange_expanded(&wrap, &widths, metrics)),
        }
    }

    /// Row-wraps the chips for the current mode without attaching a control.
    pub fn arrange_chips(&self, available_width: f32, metrics: &ChipMetrics) -> Arrangement {
        let widths: Vec<f32> = self
            .chips
            .iter()
            .map(|chip| metrics.chip_width(chip))
            .collect();
        let limit = match self.mode {
            Mode::Collapsed => self.config.max_rows,
            Mode::Expanded => RowLimit::Unbounded,
        };
        let outcome = RowWrap::new(available_width, self.config.spacing, limit).simulate(&widths);

        Arrangement {
            rows: Arrangement::from_outcome(&outcome)
                .into_iter()
                .map(|(_, slots)| slots)
                .collect(),
            control: None,
        }
    }

    fn arrange_collapsed(
        &self,
        wrap: &RowWrap,
        widths: &[f32],
        metrics: &ChipMetrics,
    ) -> Result<Arrangement, LayoutError> {
        let mut outcome = wrap.simulate(widths);

        let (template, control_row) = match (&self.config.expand_control, outcome.last_visible_row())
        {
            (Some(template), Some(row)) if outcome.hidden_count() > 0 => (template, row),
            _ => {
                return Ok(Arrangement {
                    rows: Arrangement::from_outcome(&outcome)
                        .into_iter()
                        .map(|(_, slots)| slots)
                        .collect(),
                    control: None,
                });
            }
        };

        let mut label = String::new();
        let fit = wrap.fit_control(&mut outcome, widths, |hidden| {
            label = self.control_label(template, Mode::Collapsed, hidden);
            metrics.control_width(template, &label)
        })?;

        tracing::trace!(
            hidden = outcome.hidden_count(),
            evicted = fit.evicted,
            width = fit.width,
            "expand control placed"
        );

        let mut rows = Arrangement::from_outcome(&outcome);
        match rows.last_mut() {
            Some((row, slots)) if *row == control_row => slots.push(Slot::Control),
            _ => rows.push((control_row, vec![Slot::Control])),
        }

        Ok(Arrangement {
            rows: rows.into_iter().map(|(_, slots)| slots).collect(),
            control: Some(PlacedControl {
                kind: ControlKind::Expand,
                label,
                width: fit.width,
            }),
        })
    }

    fn arrange_expanded(&self, wrap: &RowWrap, widths: &[f32], metrics: &ChipMetrics) -> Arrangement {
        let control = match &self.config.collapse_control {
            Some(template) if wrap.would_overflow(widths) => {
                let label = self.control_label(template, Mode::Expanded, 0);
                let width = metrics.control_width(template, &label);
                Some(PlacedControl {
                    kind: ControlKind::Collapse,
                    label,
                    width,
                })
            }
            _ => None,
        };

        let mut all = widths.to_vec();
        if let Some(control) = &control {
            all.push(control.width);
        }
        let outcome = wrap.unbounded().simulate(&all);

        let chip_count = widths.len();
        let rows = Arrangement::from_outcome(&outcome)
            .into_iter()
            .map(|(_, slots)| {
                slots
                    .into_iter()
                    .map(|slot| match slot {
                        Slot::Chip(index) if index >= chip_count => Slot::Control,
                        other => other,
                    })
                    .collect()
            })
            .collect();

        Arrangement {
            rows,
            control,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::chip_group::chip::Margins;

    /// Metrics where a chip's width equals its label length times ten.
    fn metrics() -> ChipMetrics {
        ChipMetrics {
            font_size: 10.0,
            estimated_advance: Some(1.0),
            padding: 0,
            icon_size: 0,
            icon_spacing: 0,
            ..ChipMetrics::default()
        }
    }

    /// A chip `len` characters long, so `len * 10` pixels wide.
    fn chip(id: usize, len: usize) -> Chip<()> {
        Chip::new(id.to_string(), "x".repeat(len), ())
    }

    /// Whether each chip of `state` appears in the arrangement.
    fn visible(state: &ChipGroupState<()>, arrangement: &Arrangement) -> Vec<bool> {
        (0..state.chips().len())
            .map(|index| arrangement.rows.iter().flatten().any(|slot| *slot == Slot::Chip(index)))
            .collect()
    }

    fn hidden(state: &ChipGroupState<()>, arrangement: &Arrangement) -> usize {
        visible(state, arrangement).iter().filter(|shown| !**shown).count()
    }

    fn config() -> GroupConfig {
        GroupConfig::default()
            .spacing(0.0)
            .max_rows(RowLimit::at_most(1))
            .expand_control(ControlTemplate::new("12345678"))
            .collapse_control(ControlTemplate::new("Hide"))
    }

    fn state(config: GroupConfig, lens: &[usize]) -> ChipGroupState<()> {
        let mut state = ChipGroupState::new(config);
        state.set_chips(lens.iter().enumerate().map(|(i, len)| chip(i, *len)).collect());
        state
    }

    #[test]
    fn test_mode_transitions() {
        assert_eq!(Mode::Collapsed.on_control(ControlKind::Expand), Some(Mode::Expanded));
        assert_eq!(Mode::Expanded.on_control(ControlKind::Collapse), Some(Mode::Collapsed));
        assert_eq!(Mode::Collapsed.on_control(ControlKind::Collapse), None);
        assert_eq!(Mode::Expanded.on_control(ControlKind::Expand), None);
    }

    #[test]
    fn test_initial_mode_follows_config() {
        let collapsed: ChipGroupState<()> = ChipGroupState::new(GroupConfig::default());
        let expanded: ChipGroupState<()> =
            ChipGroupState::new(GroupConfig::default().initially_collapsed(false));

        assert_eq!(collapsed.mode(), Mode::Collapsed);
        assert_eq!(expanded.mode(), Mode::Expanded);
    }

    #[test]
    fn test_collapsed_evicts_for_expand_control() {
        // 300 wide, four 100 px chips, 80 px control
        let state = state(config(), &[10, 10, 10, 10]);
        let arrangement = state.arrange(300.0, &metrics()).unwrap();

        assert_eq!(
            arrangement.rows,
            vec![vec![Slot::Chip(0), Slot::Chip(1), Slot::Control]]
        );
        assert_eq!(visible(&state, &arrangement), vec![true, true, false, false]);
        let control = arrangement.control.unwrap();
        assert_eq!(control.kind, ControlKind::Expand);
        assert_eq!(control.width, 80.0);
    }

    #[test]
    fn test_label_provider_sees_final_hidden_count() {
        let mut state = state(config(), &[10, 10, 10, 10]);
        state.set_label_provider(|mode, hidden| match mode {
            Mode::Collapsed => format!("+{hidden}"),
            Mode::Expanded => "Hide".to_string(),
        });

        let arrangement = state.arrange(300.0, &metrics()).unwrap();
        let hidden_chips = hidden(&state, &arrangement);
        let control = arrangement.control.unwrap();

        assert_eq!(control.label, "+2");
        assert_eq!(hidden_chips, 2);
    }

    #[test]
    fn test_clearing_label_provider_restores_template_label() {
        let mut state = state(config(), &[10, 10, 10, 10]);
        state.set_label_provider(|_, hidden| format!("+{hidden}"));
        state.clear_label_provider();

        let arrangement = state.arrange(300.0, &metrics()).unwrap();
        let control = arrangement.control.unwrap();

        assert_eq!(control.label, "12345678");
        assert_eq!(control.width, 80.0);
    }

    #[test]
    fn test_no_control_without_hidden_chips() {
        let state = state(config(), &[10, 10]);
        let arrangement = state.arrange(300.0, &metrics()).unwrap();

        assert!(arrangement.control.is_none());
        assert_eq!(arrangement.rows, vec![vec![Slot::Chip(0), Slot::Chip(1)]]);
    }

    #[test]
    fn test_no_control_without_template() {
        let config = GroupConfig::default()
            .spacing(0.0)
            .max_rows(RowLimit::at_most(1));
        let state = state(config, &[10, 10, 10, 10]);
        let arrangement = state.arrange(300.0, &metrics()).unwrap();

        assert!(arrangement.control.is_none());
        assert_eq!(hidden(&state, &arrangement), 1);
    }

    #[test]
    fn test_unbounded_never_shows_controls() {
        let config = config().max_rows(RowLimit::Unbounded);
        let mut state = state(config, &[25, 25, 25, 25, 25]);

        let collapsed = state.arrange(100.0, &metrics()).unwrap();
        assert!(collapsed.control.is_none());
        assert_eq!(hidden(&state, &collapsed), 0);
        assert_eq!(collapsed.rows.len(), 5);

        state.update(ChipGroupMessage::Activate(ControlKind::Expand));
        let expanded = state.arrange(100.0, &metrics()).unwrap();
        assert!(expanded.control.is_none());
    }

    #[test]
    fn test_collapsed_rows_never_exceed_limit() {
        let config = config().max_rows(RowLimit::at_most(2)).spacing(5.0);
        let state = state(config, &[3, 7, 12, 4, 9, 2, 15, 6, 6, 6, 8]);

        for width in [160.0, 200.0, 260.0, 400.0] {
            let arrangement = state.arrange(width, &metrics()).unwrap();
            assert!(arrangement.rows.len() <= 2);

            let control = arrangement.control.as_ref();
            for row in &arrangement.rows {
                let used: f32 = row
                    .iter()
                    .map(|slot| match slot {
                        Slot::Chip(index) => state.chips()[*index].label.len() as f32 * 10.0,
                        Slot::Control => control.map_or(0.0, |c| c.width),
                    })
                    .sum::<f32>()
                    + 5.0 * (row.len() as f32 - 1.0);
                assert!(used <= width, "row {row:?} uses {used} of {width}");
            }
        }
    }

    #[test]
    fn test_expanded_shows_all_and_collapse_control() {
        let mut state = state(config(), &[10, 10, 10, 10]);
        assert_eq!(state.activate(ControlKind::Expand), Some(Mode::Expanded));

        let arrangement = state.arrange(300.0, &metrics()).unwrap();

        assert_eq!(visible(&state, &arrangement), vec![true; 4]);
        assert_eq!(
            arrangement.rows,
            vec![
                vec![Slot::Chip(0), Slot::Chip(1), Slot::Chip(2)],
                vec![Slot::Chip(3), Slot::Control],
            ]
        );
        let control = arrangement.control.unwrap();
        assert_eq!(control.kind, ControlKind::Collapse);
        assert_eq!(control.label, "Hide");
    }

    #[test]
    fn test_expanded_without_overflow_has_no_control() {
        let mut state = state(config(), &[10, 10]);
        state.activate(ControlKind::Expand);

        let arrangement = state.arrange(300.0, &metrics()).unwrap();
        assert!(arrangement.control.is_none());
    }

    #[test]
    fn test_round_trip_restores_visibility() {
        let mut state = state(config().max_rows(RowLimit::at_most(2)), &[8, 14, 6, 9, 11, 4, 7]);
        let before = state.arrange(250.0, &metrics()).unwrap();

        state.update(ChipGroupMessage::Activate(ControlKind::Expand));
        assert_eq!(state.mode(), Mode::Expanded);
        state.update(ChipGroupMessage::Activate(ControlKind::Collapse));
        assert_eq!(state.mode(), Mode::Collapsed);

        let after = state.arrange(250.0, &metrics()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_wrong_control_is_ignored() {
        let mut state = state(config(), &[10]);
        assert_eq!(state.activate(ControlKind::Collapse), None);
        assert_eq!(state.mode(), Mode::Collapsed);
    }

    #[test]
    fn test_impossible_layout() {
        let config = config().expand_control(ControlTemplate::new("x".repeat(40)));
        let state = state(config, &[10, 10, 10, 10]);

        let err = state.arrange(300.0, &metrics()).unwrap_err();
        assert!(matches!(err, LayoutError::ImpossibleLayout { .. }));

        let plain = state.arrange_chips(300.0, &metrics());
        assert_eq!(visible(&state, &plain), vec![true, true, true, false]);
        assert!(plain.control.is_none());
    }

    #[test]
    fn test_impossible_layout_is_reported_once_per_change() {
        let config = config().expand_control(ControlTemplate::new("x".repeat(40)));
        let mut state = state(config, &[10, 10, 10, 10]);
        let err = state.arrange(300.0, &metrics()).unwrap_err();

        assert!(state.report_failure(300.0, &err));
        assert!(!state.report_failure(300.0, &err));
        assert!(state.report_failure(310.0, &err));

        state.set_chips(vec![chip(0, 10), chip(1, 10), chip(2, 10), chip(3, 10)]);
        assert!(state.report_failure(310.0, &err));
        assert!(!state.report_failure(310.0, &err));
    }

    #[test]
    fn test_empty_group_and_zero_width() {
        let empty = state(config(), &[]);
        let arrangement = empty.arrange(300.0, &metrics()).unwrap();
        assert!(arrangement.rows.is_empty());
        assert!(arrangement.control.is_none());

        let full = state(config(), &[10, 10]);
        let arrangement = full.arrange(0.0, &metrics()).unwrap();
        assert!(arrangement.rows.is_empty());
        assert!(arrangement.control.is_none());
    }

    #[test]
    fn test_control_moves_to_emptied_row() {
        // first row: one 250 px chip; second row: 250 px chip (visible); rest hidden
        let config = config().max_rows(RowLimit::at_most(2));
        let state = state(config, &[25, 25, 10]);
        let arrangement = state.arrange(300.0, &metrics()).unwrap();

        assert_eq!(
            arrangement.rows,
            vec![vec![Slot::Chip(0)], vec![Slot::Control]]
        );
        assert_eq!(visible(&state, &arrangement), vec![true, false, false]);
    }

    #[test]
    fn test_single_selection() {
        let mut state = state(config().single_selection(true), &[1, 1, 1]);

        state.update(ChipGroupMessage::Toggle {
            id: "0".to_string(),
            checked: true,
        });
        state.update(ChipGroupMessage::Toggle {
            id: "2".to_string(),
            checked: true,
        });

        assert_eq!(state.checked_chip().map(|c| c.id.as_str()), Some("2"));
        assert_eq!(state.chips().iter().filter(|c| c.checked).count(), 1);
    }

    #[test]
    fn test_multi_selection_and_unknown_chip() {
        let mut state = state(config(), &[1, 1, 1]);

        assert!(state.set_checked(&"1".to_string(), true));
        assert!(state.set_checked(&"2".to_string(), true));
        assert!(!state.set_checked(&"9".to_string(), true));

        assert_eq!(state.checked_chip().map(|c| c.id.as_str()), Some("1"));
        assert_eq!(state.chips().iter().filter(|c| c.checked).count(), 2);
    }

    #[test]
    fn test_margins_count_towards_row_width() {
        let mut state: ChipGroupState<()> = ChipGroupState::new(config());
        state.set_chips(vec![
            Chip {
                margins: Margins {
                    left: 10.0,
                    right: 10.0,
                },
                ..Chip::new("a", "x".repeat(10), ())
            },
            Chip {
                margins: Margins {
                    left: 10.0,
                    right: 10.0,
                },
                ..Chip::new("b", "x".repeat(10), ())
            },
            Chip::new("c", "x".repeat(5), ()),
        ]);

        // 120 + 120 fit in 280 and the third chip wraps; the 80 px control
        // then only fits after evicting "b"
        let arrangement = state.arrange(280.0, &metrics()).unwrap();
        assert_eq!(visible(&state, &arrangement), vec![true, false, false]);
    }

    #[test]
    fn test_reconfigure_resets_mode() {
        let mut state = state(config(), &[10, 10]);
        state.activate(ControlKind::Expand);

        state.reconfigure(config().initially_collapsed(true));
        assert_eq!(state.mode(), Mode::Collapsed);
        assert_eq!(state.chips().len(), 2);
    }
}
