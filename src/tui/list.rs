//! Filterable, scrollable parameter list.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use ratatui::widgets::ListState;

use crate::core::domain::Parameter;

/// Parameters plus the filter and selection applied to them.
#[derive(Debug, Default)]
pub struct ParameterList {
    items: Vec<Parameter>,
    filter: String,
    /// Indices into `items`, best match first.
    visible: Vec<usize>,
    state: ListState,
}

impl ParameterList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all items, keeping the current filter.
    pub fn set_items(&mut self, items: Vec<Parameter>) {
        self.items = items;
        self.apply_filter();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items that pass the filter, in display order.
    pub fn visible(&self) -> impl Iterator<Item = &Parameter> {
        self.visible.iter().map(|&i| &self.items[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn is_filtered(&self) -> bool {
        !self.filter.is_empty()
    }

    pub fn push_filter(&mut self, c: char) {
        self.filter.push(c);
        self.apply_filter();
    }

    pub fn pop_filter(&mut self) {
        self.filter.pop();
        self.apply_filter();
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.apply_filter();
    }

    /// Recompute visible items; the best match becomes selected.
    fn apply_filter(&mut self) {
        if self.filter.is_empty() {
            self.visible = (0..self.items.len()).collect();
        } else {
            let matcher = SkimMatcherV2::default();
            let mut scored: Vec<(i64, usize)> = self
                .items
                .iter()
                .enumerate()
                .filter_map(|(i, item)| {
                    matcher
                        .fuzzy_match(&item.key, &self.filter)
                        .map(|score| (score, i))
                })
                .collect();
            // Equal scores: shorter keys are tighter matches.
            let items = &self.items;
            scored.sort_by(|a, b| {
                b.0.cmp(&a.0)
                    .then(items[a.1].key.len().cmp(&items[b.1].key.len()))
                    .then(a.1.cmp(&b.1))
            });
            self.visible = scored.into_iter().map(|(_, i)| i).collect();
        }

        if self.visible.is_empty() {
            self.state.select(None);
        } else {
            self.state.select(Some(0));
        }
        *self.state.offset_mut() = 0;
    }

    pub fn selected(&self) -> Option<&Parameter> {
        self.state
            .selected()
            .and_then(|i| self.visible.get(i))
            .map(|&i| &self.items[i])
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn state_mut(&mut self) -> &mut ListState {
        &mut self.state
    }

    pub fn next(&mut self) {
        self.move_by(1);
    }

    pub fn previous(&mut self) {
        self.move_by(-1);
    }

    pub fn page_down(&mut self, per_page: usize) {
        self.move_by(per_page.max(1) as isize);
    }

    pub fn page_up(&mut self, per_page: usize) {
        self.move_by(-(per_page.max(1) as isize));
    }

    pub fn first(&mut self) {
        if !self.visible.is_empty() {
            self.state.select(Some(0));
        }
    }

    pub fn last(&mut self) {
        if let Some(last) = self.visible.len().checked_sub(1) {
            self.state.select(Some(last));
        }
    }

    /// Move the selection, stopping at either end.
    fn move_by(&mut self, delta: isize) {
        let Some(last) = self.visible.len().checked_sub(1) else {
            return;
        };
        let current = self.state.selected().unwrap_or(0) as isize;
        let target = (current + delta).clamp(0, last as isize);
        self.state.select(Some(target as usize));
    }
}
