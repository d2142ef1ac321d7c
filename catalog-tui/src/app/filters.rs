use crate::types::{FilterOptions, ReferenceEntity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Published date (newest first)",
            Self::Oldest => "Published date (oldest first)",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Newest => Self::Oldest,
            Self::Oldest => Self::Newest,
        }
    }
}

/// One id-list filter kind, in the order the modal and the active filters block show them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Specialties,
    Skills,
    Categories,
    Industries,
}

impl FilterKind {
    pub const ALL: [FilterKind; 4] = [
        FilterKind::Specialties,
        FilterKind::Skills,
        FilterKind::Categories,
        FilterKind::Industries,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Specialties => "Specialties",
            Self::Skills => "Skills",
            Self::Categories => "Project type",
            Self::Industries => "Industry",
        }
    }

    /// Query parameter name understood by catalog-api.
    pub fn param(self) -> &'static str {
        match self {
            Self::Specialties => "specialties",
            Self::Skills => "skills",
            Self::Categories => "category",
            Self::Industries => "industry",
        }
    }

    pub fn options(self, options: &FilterOptions) -> &[ReferenceEntity] {
        match self {
            Self::Specialties => &options.specialties,
            Self::Skills => &options.skills,
            Self::Categories => &options.categories,
            Self::Industries => &options.industries,
        }
    }
}

/// Filters currently driving the project listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedFilters {
    pub search: String,
    pub specialties: Vec<i64>,
    pub skills: Vec<i64>,
    pub categories: Vec<i64>,
    pub industries: Vec<i64>,
    pub sort_by: SortOrder,
}

impl AppliedFilters {
    pub fn ids(&self, kind: FilterKind) -> &[i64] {
        match kind {
            FilterKind::Specialties => &self.specialties,
            FilterKind::Skills => &self.skills,
            FilterKind::Categories => &self.categories,
            FilterKind::Industries => &self.industries,
        }
    }

    fn ids_mut(&mut self, kind: FilterKind) -> &mut Vec<i64> {
        match kind {
            FilterKind::Specialties => &mut self.specialties,
            FilterKind::Skills => &mut self.skills,
            FilterKind::Categories => &mut self.categories,
            FilterKind::Industries => &mut self.industries,
        }
    }

    /// Add `id` to the `kind` list, or remove it if already present.
    pub fn toggle(&mut self, kind: FilterKind, id: i64) {
        let ids = self.ids_mut(kind);
        if let Some(pos) = ids.iter().position(|existing| *existing == id) {
            ids.remove(pos);
        } else {
            ids.push(id);
        }
    }

    /// Remove one id from the `kind` list. Returns whether it was present.
    pub fn remove(&mut self, kind: FilterKind, id: i64) -> bool {
        let ids = self.ids_mut(kind);
        let before = ids.len();
        ids.retain(|existing| *existing != id);
        ids.len() != before
    }

    /// Every active id as a removable chip, in display order.
    pub fn chips(&self) -> Vec<(FilterKind, i64)> {
        FilterKind::ALL
            .iter()
            .flat_map(|kind| self.ids(*kind).iter().map(move |id| (*kind, *id)))
            .collect()
    }

    pub fn has_id_filters(&self) -> bool {
        FilterKind::ALL
            .iter()
            .any(|kind| !self.ids(*kind).is_empty())
    }

    /// Query parameters for `GET /projects`. Empty filters are omitted.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("search", search.to_string()));
        }
        for kind in FilterKind::ALL {
            let ids = self.ids(kind);
            if !ids.is_empty() {
                let joined = ids
                    .iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                params.push((kind.param(), joined));
            }
        }
        params.push(("sortBy", self.sort_by.as_param().to_string()));
        params
    }

    /// Display names for the active id filters, grouped by kind.
    /// Ids missing from `options` are shown as the raw id.
    pub fn active_labels(&self, options: &FilterOptions) -> Vec<(FilterKind, Vec<String>)> {
        FilterKind::ALL
            .iter()
            .filter(|kind| !self.ids(**kind).is_empty())
            .map(|kind| {
                let names = self
                    .ids(*kind)
                    .iter()
                    .map(|id| {
                        kind.options(options)
                            .iter()
                            .find(|entity| entity.id == *id)
                            .map(|entity| entity.name.clone())
                            .unwrap_or_else(|| id.to_string())
                    })
                    .collect();
                (*kind, names)
            })
            .collect()
    }

    pub fn clear_id_filters(&mut self) {
        for kind in FilterKind::ALL {
            self.ids_mut(kind).clear();
        }
    }
}

/// Section of the filter modal that currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalSection {
    Filter(FilterKind),
    Sort,
}

impl ModalSection {
    pub const ALL: [ModalSection; 5] = [
        ModalSection::Filter(FilterKind::Specialties),
        ModalSection::Filter(FilterKind::Skills),
        ModalSection::Filter(FilterKind::Categories),
        ModalSection::Filter(FilterKind::Industries),
        ModalSection::Sort,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Filter(kind) => kind.label(),
            Self::Sort => "Sort by",
        }
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Draft state of the filter modal. Nothing here reaches the listing until applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterModal {
    pub draft: AppliedFilters,
    pub section: ModalSection,
    pub cursor: usize,
}

impl FilterModal {
    /// Open a modal whose draft mirrors `applied`.
    pub fn seeded_from(applied: &AppliedFilters) -> Self {
        Self {
            draft: applied.clone(),
            section: ModalSection::ALL[0],
            cursor: 0,
        }
    }

    fn section_len(&self, options: &FilterOptions) -> usize {
        match self.section {
            ModalSection::Filter(kind) => kind.options(options).len(),
            ModalSection::Sort => 2,
        }
    }

    pub fn next_section(&mut self) {
        self.section = self.section.next();
        self.cursor = 0;
    }

    pub fn prev_section(&mut self) {
        self.section = self.section.prev();
        self.cursor = 0;
    }

    pub fn move_down(&mut self, options: &FilterOptions) {
        let len = self.section_len(options);
        if len > 0 && self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Toggle the option under the cursor, or pick the sort order under it.
    pub fn toggle_current(&mut self, options: &FilterOptions) {
        match self.section {
            ModalSection::Filter(kind) => {
                if let Some(entity) = kind.options(options).get(self.cursor) {
                    self.draft.toggle(kind, entity.id);
                }
            }
            ModalSection::Sort => {
                self.draft.sort_by = if self.cursor == 0 {
                    SortOrder::Newest
                } else {
                    SortOrder::Oldest
                };
            }
        }
    }

    /// Drop every draft selection and reset the sort order to newest.
    pub fn clear(&mut self) {
        self.draft.clear_id_filters();
        self.draft.sort_by = SortOrder::Newest;
    }
}
