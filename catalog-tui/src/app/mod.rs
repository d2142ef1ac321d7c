use crate::types::{FilterOptions, Project};
use std::collections::HashSet;

mod filters;
mod state;
pub use filters::{AppliedFilters, FilterKind, FilterModal, ModalSection, SortOrder};
pub use state::{TextInput, View};

pub struct App {
    pub running: bool,
    pub current_view: View,
    pub status_message: Option<String>,

    // Listing
    pub projects: Vec<Project>,
    pub selected_index: usize,

    // Filters
    pub filter_options: FilterOptions,
    pub applied_filters: AppliedFilters,
    pub filter_modal: Option<FilterModal>,
    pub search_input: Option<TextInput>, // Some(_) while editing the search term
    pub focused_chip: Option<usize>,      // index into applied_filters.chips()

    // Detail view
    pub detail: Option<Project>,
    pub detail_scroll: u16,

    // Projects the user has applied to in this session
    pub applied_projects: HashSet<i64>,

    // Loading indicator
    pub is_loading: bool,
    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            current_view: View::List,
            status_message: None,
            projects: Vec::new(),
            selected_index: 0,
            filter_options: FilterOptions::default(),
            applied_filters: AppliedFilters::default(),
            filter_modal: None,
            search_input: None,
            focused_chip: None,
            detail: None,
            detail_scroll: 0,
            applied_projects: HashSet::new(),
            is_loading: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    // ---------------------------------------------------------------------
    // Listing
    // ---------------------------------------------------------------------

    pub fn set_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
        if self.selected_index >= self.projects.len() {
            self.selected_index = self.projects.len().saturating_sub(1);
        }
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.projects.get(self.selected_index)
    }

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.projects.len() {
            self.selected_index += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Flip between newest and oldest first.
    pub fn toggle_sort(&mut self) {
        self.applied_filters.sort_by = self.applied_filters.sort_by.toggled();
    }

    /// Drop every id filter. Returns whether anything was cleared.
    pub fn clear_filters(&mut self) -> bool {
        if !self.applied_filters.has_id_filters() {
            return false;
        }
        self.applied_filters.clear_id_filters();
        self.focused_chip = None;
        true
    }

    // ---------------------------------------------------------------------
    // Active filter chips
    // ---------------------------------------------------------------------

    /// Move chip focus right, wrapping. The first press focuses the first chip.
    pub fn focus_next_chip(&mut self) {
        let count = self.applied_filters.chips().len();
        if count == 0 {
            self.focused_chip = None;
            return;
        }
        self.focused_chip = Some(match self.focused_chip {
            Some(i) => (i + 1) % count,
            None => 0,
        });
    }

    /// Move chip focus left, wrapping. The first press focuses the last chip.
    pub fn focus_prev_chip(&mut self) {
        let count = self.applied_filters.chips().len();
        if count == 0 {
            self.focused_chip = None;
            return;
        }
        self.focused_chip = Some(match self.focused_chip {
            Some(i) => (i + count - 1) % count,
            None => count - 1,
        });
    }

    /// Remove the focused chip. Returns whether a filter was removed.
    pub fn remove_focused_chip(&mut self) -> bool {
        let chips = self.applied_filters.chips();
        let Some(index) = self.focused_chip else {
            return false;
        };
        let Some(&(kind, id)) = chips.get(index) else {
            return false;
        };
        self.applied_filters.remove(kind, id);

        let remaining = chips.len() - 1;
        self.focused_chip = (remaining > 0).then(|| index.min(remaining - 1));
        self.selected_index = 0;
        true
    }

    // ---------------------------------------------------------------------
    // Search term
    // ---------------------------------------------------------------------

    pub fn start_search_edit(&mut self) {
        self.search_input = Some(TextInput::from_str(&self.applied_filters.search));
    }

    /// Commit the edited term. Returns whether it changed.
    pub fn commit_search(&mut self) -> bool {
        let Some(input) = self.search_input.take() else {
            return false;
        };
        let term = input.value.trim().to_string();
        if term == self.applied_filters.search {
            return false;
        }
        self.applied_filters.search = term;
        true
    }

    pub fn cancel_search(&mut self) {
        self.search_input = None;
    }

    // ---------------------------------------------------------------------
    // Filter modal
    // ---------------------------------------------------------------------

    pub fn open_filter_modal(&mut self) {
        self.filter_modal = Some(FilterModal::seeded_from(&self.applied_filters));
    }

    pub fn close_filter_modal(&mut self) {
        self.filter_modal = None;
    }

    /// Replace the applied id filters and sort order with the modal draft.
    /// The search term is owned by the list view and is kept.
    pub fn apply_filter_modal(&mut self) -> bool {
        let Some(modal) = self.filter_modal.take() else {
            return false;
        };
        let search = std::mem::take(&mut self.applied_filters.search);
        self.applied_filters = AppliedFilters {
            search,
            ..modal.draft
        };
        self.focused_chip = None;
        self.selected_index = 0;
        true
    }

    // ---------------------------------------------------------------------
    // Detail view
    // ---------------------------------------------------------------------

    pub fn open_detail(&mut self, project: Project) {
        self.detail = Some(project);
        self.detail_scroll = 0;
        self.current_view = View::Detail;
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
        self.current_view = View::List;
    }

    pub fn scroll_detail_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    pub fn is_applied(&self, project_id: i64) -> bool {
        self.applied_projects.contains(&project_id)
    }

    /// Flip the local "applied" flag for a project. Returns the new state.
    pub fn toggle_applied(&mut self, project_id: i64) -> bool {
        if self.applied_projects.remove(&project_id) {
            false
        } else {
            self.applied_projects.insert(project_id);
            true
        }
    }
}
