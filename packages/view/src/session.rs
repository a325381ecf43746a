//! A single dashboard session: an immutable snapshot plus its view state.

use waste_dashboard_dataset::Snapshot;
use waste_dashboard_dataset_models::DateRange;
use waste_dashboard_view_models::{Section, View, ViewState};

use crate::ViewError;
use crate::select::{parse_section, select};

/// Owns one session's data and selection.
///
/// The snapshot never changes after construction. The [`ViewState`] only
/// changes through the methods below, and a rejected change leaves it
/// untouched.
#[derive(Debug, Clone)]
pub struct Session {
    snapshot: Snapshot,
    state: ViewState,
}

impl Session {
    /// Starts a session on the first section with the full date span.
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        let state = ViewState::new(snapshot.span());
        Self { snapshot, state }
    }

    /// The session's immutable data.
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The current selection.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Switches to `section`. Any section may follow any other.
    pub fn select_section(&mut self, section: Section) {
        log::debug!("Section {} -> {section}", self.state.section);
        self.state.section = section;
    }

    /// Switches to the section with the given tag or label.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidSection`] for an unknown name.
    pub fn select_section_by_name(&mut self, name: &str) -> Result<(), ViewError> {
        let section = parse_section(name)?;
        self.select_section(section);
        Ok(())
    }

    /// Replaces the date filter.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidRange`] if `range` starts after it ends.
    pub fn set_date_range(&mut self, range: DateRange) -> Result<(), ViewError> {
        if !range.is_ordered() {
            return Err(ViewError::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }
        log::debug!("Date range {} -> {range}", self.state.date_range);
        self.state.date_range = range;
        Ok(())
    }

    /// Restores the date filter to the full dataset span.
    pub fn reset_date_range(&mut self) {
        self.state.date_range = self.snapshot.span();
    }

    /// Computes the view for the current state.
    ///
    /// # Errors
    ///
    /// Only fails if the state holds an inverted range, which the setters
    /// never store.
    pub fn view(&self) -> Result<View<'_>, ViewError> {
        select(&self.snapshot, self.state.section, Some(self.state.date_range))
    }
}
