use crate::components::post_details::PostDetailsState;
use crate::components::posts_list::PostsState;
use crate::components::user_selector::UserSelectorState;
use crate::environment::model::{Author, AuthorId, Comment, CommentId, NewComment, Post, PostId};
use crate::environment::types::FormField;
use crate::environment::{ApiError, Environment};
use crate::view_model::Generation;
use navicula::Effect;

pub type ViewStore<'a> = navicula::ViewStore<'a, super::BoardReducer>;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BoardState {
    pub users: UserSelectorState,
    pub posts: PostsState,
    /// The open post and everything shown for it. `None` iff no post is open.
    pub details: Option<PostDetailsState>,
    /// Last generation handed to a details scope
    scopes: Generation,
}

impl BoardState {
    /// Selects `author` and starts loading its posts. The open post and all
    /// comment state are gone before this returns.
    pub fn select_author(&mut self, author: Author) -> (AuthorId, Generation) {
        let id = self.users.select(author);
        self.details = None;
        (id, self.posts.load(id))
    }

    pub fn open_post(&self) -> Option<&Post> {
        self.details.as_ref().map(|details| &details.post)
    }

    pub fn is_open(&self, id: PostId) -> bool {
        self.open_post().map(|p| p.id) == Some(id)
    }

    pub fn button_label(&self, id: PostId) -> &'static str {
        if self.is_open(id) {
            "Close"
        } else {
            "Open"
        }
    }

    /// Opens or closes `post`. Returns the comments load to issue when a new
    /// details scope was entered. Only posts of the loaded list can be opened.
    pub fn toggle_post(&mut self, post: &Post) -> Option<(PostId, Generation)> {
        if self.is_open(post.id) {
            self.details = None;
            return None;
        }
        let Some(known) = self.posts.find(post.id).cloned() else {
            log::debug!("Ignoring toggle of unknown post {}", post.id);
            return None;
        };
        self.scopes = self.scopes.next();
        let id = known.id;
        self.details = Some(PostDetailsState::new(known, self.scopes));
        Some((id, self.scopes))
    }

    /// The details scope, if it is the one `generation` was issued for
    pub fn details_for(&mut self, generation: Generation) -> Option<&mut PostDetailsState> {
        match self.details.as_mut() {
            Some(details) if details.accepts(generation) => Some(details),
            _ => {
                log::debug!("Dropping stale comment result {generation:?}");
                None
            }
        }
    }

    pub fn finish_comments(
        &mut self,
        generation: Generation,
        result: Result<Vec<Comment>, ApiError>,
    ) -> bool {
        self.details_for(generation)
            .map(|details| details.finish_load(result))
            .is_some()
    }

    /// Validates the form of the open post. Returns the draft to send and the
    /// scope it belongs to, or `None` when nothing may be sent.
    pub fn begin_submit(&mut self) -> Option<(NewComment, Generation)> {
        let details = self.details.as_mut()?;
        if details.form.submitting {
            log::debug!("Already submitting a comment");
            return None;
        }
        match details.form.submit(details.post.id) {
            Ok(draft) => Some((draft, details.generation())),
            Err(e) => {
                log::debug!("Not submitting: {e}");
                None
            }
        }
    }

    pub fn finish_submit(
        &mut self,
        generation: Generation,
        result: Result<Comment, ApiError>,
    ) -> bool {
        self.details_for(generation)
            .map(|details| details.finish_submit(result))
            .is_some()
    }

    /// Returns the scope the delete of `id` is issued under, or `None` if it
    /// must not be sent.
    pub fn begin_delete(&mut self, id: CommentId) -> Option<Generation> {
        let details = self.details.as_mut()?;
        details.begin_delete(id).then(|| details.generation())
    }

    pub fn finish_delete(
        &mut self,
        generation: Generation,
        id: CommentId,
        result: Result<(), ApiError>,
    ) -> bool {
        self.details_for(generation)
            .map(|details| details.finish_delete(id, result))
            .is_some()
    }
}

#[derive(Clone)]
pub enum Action {
    Initial,
    LoadedAuthors(Result<Vec<Author>, ApiError>),
    ToggleDropdown,
    CloseDropdown,
    SelectAuthor(Author),
    LoadedPosts(Generation, Result<Vec<Post>, ApiError>),
    TogglePost(Post),
    LoadedComments(Generation, Result<Vec<Comment>, ApiError>),
    OpenComposer,
    UpdateField(FormField, String),
    SubmitComment,
    SubmittedComment(Generation, Result<Comment, ApiError>),
    ClearForm,
    DeleteComment(CommentId),
    DeletedComment(Generation, CommentId, Result<(), ApiError>),
    ClearDeleteError,
    OpenEmail(String),
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initial => write!(f, "Initial"),
            Self::LoadedAuthors(_arg0) => f.debug_tuple("LoadedAuthors").finish(),
            Self::ToggleDropdown => write!(f, "ToggleDropdown"),
            Self::CloseDropdown => write!(f, "CloseDropdown"),
            Self::SelectAuthor(arg0) => f.debug_tuple("SelectAuthor").field(&arg0.id).finish(),
            Self::LoadedPosts(arg0, _arg1) => f.debug_tuple("LoadedPosts").field(arg0).finish(),
            Self::TogglePost(arg0) => f.debug_tuple("TogglePost").field(&arg0.id).finish(),
            Self::LoadedComments(arg0, _arg1) => {
                f.debug_tuple("LoadedComments").field(arg0).finish()
            }
            Self::OpenComposer => write!(f, "OpenComposer"),
            Self::UpdateField(arg0, _arg1) => f.debug_tuple("UpdateField").field(arg0).finish(),
            Self::SubmitComment => write!(f, "SubmitComment"),
            Self::SubmittedComment(arg0, arg1) => f
                .debug_tuple("SubmittedComment")
                .field(arg0)
                .field(&arg1.is_ok())
                .finish(),
            Self::ClearForm => write!(f, "ClearForm"),
            Self::DeleteComment(arg0) => f.debug_tuple("DeleteComment").field(arg0).finish(),
            Self::DeletedComment(arg0, arg1, arg2) => f
                .debug_tuple("DeletedComment")
                .field(arg0)
                .field(arg1)
                .field(&arg2.is_ok())
                .finish(),
            Self::ClearDeleteError => write!(f, "ClearDeleteError"),
            Self::OpenEmail(arg0) => f.debug_tuple("OpenEmail").field(arg0).finish(),
        }
    }
}

pub fn reduce<'a>(
    _context: &'a impl navicula::types::MessageContext<Action, Action, Action>,
    action: Action,
    state: &'a mut BoardState,
    environment: &'a Environment,
) -> Effect<'static, Action> {
    log::trace!("{action:?}");
    let model = environment.model.clone();

    match action {
        Action::Initial => {
            state.users.begin_load();
            return Effect::future(async move { model.authors().await }, Action::LoadedAuthors);
        }
        Action::LoadedAuthors(result) => state.users.finish_load(result),
        Action::ToggleDropdown => state.users.toggle_dropdown(),
        Action::CloseDropdown => state.users.close_dropdown(),
        Action::SelectAuthor(author) => {
            let (id, generation) = state.select_author(author);
            return Effect::future(async move { model.posts(id).await }, move |result| {
                Action::LoadedPosts(generation, result)
            });
        }
        Action::LoadedPosts(generation, result) => {
            state.posts.finish(generation, result);
        }
        Action::TogglePost(post) => {
            let Some((id, generation)) = state.toggle_post(&post) else {
                return Effect::NONE
            };
            return Effect::future(async move { model.comments(id).await }, move |result| {
                Action::LoadedComments(generation, result)
            });
        }
        Action::LoadedComments(generation, result) => {
            state.finish_comments(generation, result);
        }
        Action::OpenComposer => {
            if let Some(details) = state.details.as_mut() {
                details.open_composer();
            }
        }
        Action::UpdateField(field, value) => {
            if let Some(details) = state.details.as_mut() {
                details.form.update(field, &value);
            }
        }
        Action::SubmitComment => {
            let Some((draft, generation)) = state.begin_submit() else {
                return Effect::NONE
            };
            return Effect::future(
                async move { model.create_comment(draft).await },
                move |result| Action::SubmittedComment(generation, result),
            );
        }
        Action::SubmittedComment(generation, result) => {
            state.finish_submit(generation, result);
        }
        Action::ClearForm => {
            if let Some(details) = state.details.as_mut() {
                details.form.reset();
            }
        }
        Action::DeleteComment(id) => {
            let Some(generation) = state.begin_delete(id) else {
                return Effect::NONE
            };
            return Effect::future(async move { model.delete_comment(id).await }, move |result| {
                Action::DeletedComment(generation, id, result)
            });
        }
        Action::DeletedComment(generation, id, result) => {
            state.finish_delete(generation, id, result);
        }
        Action::ClearDeleteError => {
            if let Some(details) = state.details.as_mut() {
                details.clear_delete_error();
            }
        }
        Action::OpenEmail(address) => environment.open_url(&format!("mailto:{address}")),
    }
    Effect::NONE
}
