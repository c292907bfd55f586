use im::{HashSet, Vector};

use crate::components::comment_form::CommentFormState;
use crate::environment::model::{Comment, CommentId, Post};
use crate::environment::ApiError;
use crate::view_model::{Generation, LoadState};

/// Everything shown for the open post. A new value is created whenever the
/// open post changes; it is never reused for a different post.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PostDetailsState {
    pub post: Post,
    pub comments: LoadState<Vector<Comment>>,
    pub composer_open: bool,
    pub form: CommentFormState,
    /// The last delete request failed
    pub delete_error: bool,
    /// Comments with a delete request in flight
    deleting: HashSet<CommentId>,
    generation: Generation,
}

impl PostDetailsState {
    /// Enters the scope of `post`: comments are loading, the composer is closed
    pub fn new(post: Post, generation: Generation) -> Self {
        Self {
            post,
            comments: LoadState::Loading,
            composer_open: false,
            form: CommentFormState::default(),
            delete_error: false,
            deleting: HashSet::new(),
            generation,
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn accepts(&self, generation: Generation) -> bool {
        self.generation == generation
    }

    pub fn finish_load(&mut self, result: Result<Vec<Comment>, ApiError>) {
        self.comments.finish_list(result);
    }

    /// Only possible once the comments are there
    pub fn open_composer(&mut self) -> bool {
        if self.comments.is_loading() || self.comments.is_error() {
            return false;
        }
        self.composer_open = true;
        true
    }

    pub fn finish_submit(&mut self, result: Result<Comment, ApiError>) {
        self.form.finish(&result);
        if let Ok(comment) = result {
            self.append(comment);
        }
    }

    fn append(&mut self, comment: Comment) {
        match self.comments.value_mut() {
            Some(comments) => comments.push_back(comment),
            None => log::debug!("Dropping comment {} without a comment list", comment.id),
        }
    }

    /// Marks `id` as being deleted. Refused for comments that are not listed
    /// or already have a request in flight.
    pub fn begin_delete(&mut self, id: CommentId) -> bool {
        if !self.contains(id) || self.deleting.contains(&id) {
            log::debug!("Not deleting comment {id}");
            return false;
        }
        self.deleting.insert(id);
        true
    }

    pub fn is_deleting(&self, id: CommentId) -> bool {
        self.deleting.contains(&id)
    }

    pub fn finish_delete(&mut self, id: CommentId, result: Result<(), ApiError>) {
        self.deleting.remove(&id);
        match result {
            Ok(()) => {
                self.delete_error = false;
                self.remove(id);
            }
            Err(_) if !self.contains(id) => {
                log::debug!("Ignoring failed delete of removed comment {id}");
            }
            Err(_) => self.delete_error = true,
        }
    }

    fn contains(&self, id: CommentId) -> bool {
        self.comments
            .value()
            .map_or(false, |comments| comments.iter().any(|c| c.id == id))
    }

    fn remove(&mut self, id: CommentId) {
        if let Some(comments) = self.comments.value_mut() {
            comments.retain(|c| c.id != id);
        }
    }

    pub fn clear_delete_error(&mut self) {
        self.delete_error = false;
    }
}
