//! Shared state building blocks and the pure derivations that decide which
//! region of the window is rendered.

use im::Vector;

use crate::components::post_details::PostDetailsState;
use crate::components::posts_list::PostsState;
use crate::components::user_selector::UserSelectorState;
use crate::environment::model::Comment;

/// Identifies one load scope. Results issued under an older generation are
/// dropped by the state that owns the scope.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Lifecycle of a remote collection. `Loading` and `Error` can't coexist.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Error,
    Success(T),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadState::Error)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            LoadState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            LoadState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn finish<E>(&mut self, result: Result<T, E>) {
        *self = match result {
            Ok(value) => LoadState::Success(value),
            Err(_) => LoadState::Error,
        };
    }
}

impl<T: Clone> LoadState<Vector<T>> {
    pub fn finish_list<E>(&mut self, result: Result<Vec<T>, E>) {
        self.finish(result.map(Vector::from))
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UsersRegion {
    /// The authors could not be loaded. Nothing else is shown.
    Error,
    Selector,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PostsRegion {
    NoAuthor,
    Loading,
    Error,
    NoPosts,
    Table,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CommentsRegion {
    Loading,
    Error,
    NoComments,
    List,
}

pub fn users_region(users: &UserSelectorState) -> UsersRegion {
    if users.authors.is_error() {
        UsersRegion::Error
    } else {
        UsersRegion::Selector
    }
}

pub fn posts_region(users: &UserSelectorState, posts: &PostsState) -> PostsRegion {
    if users.selected.is_none() {
        return PostsRegion::NoAuthor;
    }
    match &posts.posts {
        // selecting an author starts the load in the same transition
        LoadState::Idle | LoadState::Loading => PostsRegion::Loading,
        LoadState::Error => PostsRegion::Error,
        LoadState::Success(posts) if posts.is_empty() => PostsRegion::NoPosts,
        LoadState::Success(_) => PostsRegion::Table,
    }
}

pub fn comments_region(comments: &LoadState<Vector<Comment>>) -> CommentsRegion {
    match comments {
        LoadState::Idle | LoadState::Loading => CommentsRegion::Loading,
        LoadState::Error => CommentsRegion::Error,
        LoadState::Success(comments) if comments.is_empty() => CommentsRegion::NoComments,
        LoadState::Success(_) => CommentsRegion::List,
    }
}

pub fn shows_write_button(details: &PostDetailsState) -> bool {
    !details.comments.is_loading() && !details.comments.is_error() && !details.composer_open
}
