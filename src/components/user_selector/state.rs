use im::Vector;

use crate::environment::model::{Author, AuthorId};
use crate::environment::ApiError;
use crate::loc;
use crate::view_model::LoadState;

/// The author list, loaded once, and the current selection.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UserSelectorState {
    pub authors: LoadState<Vector<Author>>,
    pub selected: Option<Author>,
    /// Is the dropdown menu expanded
    pub is_open: bool,
}

impl UserSelectorState {
    pub fn begin_load(&mut self) {
        self.authors = LoadState::Loading;
    }

    pub fn finish_load(&mut self, result: Result<Vec<Author>, ApiError>) {
        self.authors.finish_list(result);
    }

    pub fn toggle_dropdown(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close_dropdown(&mut self) {
        self.is_open = false;
    }

    /// Returns the id whose posts have to be loaded next
    pub fn select(&mut self, author: Author) -> AuthorId {
        let id = author.id;
        self.selected = Some(author);
        self.is_open = false;
        id
    }

    pub fn is_selected(&self, id: AuthorId) -> bool {
        self.selected.as_ref().map(|a| a.id) == Some(id)
    }

    pub fn label(&self) -> &str {
        match &self.selected {
            Some(author) => author.name.as_str(),
            None => loc!("Choose a user"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::test_backend::author;

    #[test]
    fn loads_authors_once() {
        let mut state = UserSelectorState::default();
        state.begin_load();
        assert!(state.authors.is_loading());
        state.finish_load(Ok(vec![author(1, "Leanne"), author(2, "Ervin")]));
        assert_eq!(state.authors.value().map(|a| a.len()), Some(2));
    }

    #[test]
    fn selecting_closes_dropdown() {
        let mut state = UserSelectorState::default();
        assert_eq!(state.label(), "Choose a user");
        state.toggle_dropdown();
        assert!(state.is_open);
        let id = state.select(author(2, "Ervin"));
        assert_eq!(id, AuthorId(2));
        assert!(!state.is_open);
        assert!(state.is_selected(AuthorId(2)));
        assert!(!state.is_selected(AuthorId(1)));
        assert_eq!(state.label(), "Ervin");
    }

    #[test]
    fn only_one_author_selected() {
        let mut state = UserSelectorState::default();
        state.select(author(1, "Leanne"));
        state.select(author(2, "Ervin"));
        assert!(!state.is_selected(AuthorId(1)));
        assert_eq!(state.selected.as_ref().map(|a| a.id), Some(AuthorId(2)));
    }

    #[test]
    fn toggling_twice_closes() {
        let mut state = UserSelectorState::default();
        state.toggle_dropdown();
        state.toggle_dropdown();
        assert!(!state.is_open);
        state.toggle_dropdown();
        state.close_dropdown();
        assert!(!state.is_open);
    }
}
