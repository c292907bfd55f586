use im::Vector;

use crate::environment::model::{AuthorId, Post, PostId};
use crate::environment::ApiError;
use crate::view_model::{Generation, LoadState};

/// The posts of the selected author. Which post is open is owned by the
/// details scope, not by the list.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PostsState {
    pub posts: LoadState<Vector<Post>>,
    pub author: Option<AuthorId>,
    generation: Generation,
}

impl PostsState {
    /// Starts loading the posts of `author`. Any earlier load becomes stale.
    pub fn load(&mut self, author: AuthorId) -> Generation {
        self.generation = self.generation.next();
        self.author = Some(author);
        self.posts = LoadState::Loading;
        self.generation
    }

    /// Applies the result of the load issued as `generation`. Returns `false`
    /// if that load has been superseded.
    pub fn finish(&mut self, generation: Generation, result: Result<Vec<Post>, ApiError>) -> bool {
        if generation != self.generation {
            log::debug!("Dropping stale posts result {generation:?}");
            return false;
        }
        self.posts.finish_list(result);
        true
    }

    /// A post of the current list
    pub fn find(&self, id: PostId) -> Option<&Post> {
        self.posts.value()?.iter().find(|p| p.id == id)
    }
}
