use std::sync::Arc;

use super::backend::{Backend, HttpBackend};
use super::config::Config;
use super::error::ApiError;
pub use super::types::{Author, AuthorId, Comment, CommentId, NewComment, Post, PostId};

/// Typed gateway to the REST API. Cheap to clone; every clone talks to the
/// same backend.
#[derive(Clone)]
pub struct Model {
    pub url: String,
    client: Arc<dyn Backend>,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model").field("url", &self.url).finish()
    }
}

impl Model {
    pub fn new(config: &Config) -> Self {
        let backend = HttpBackend::new(config.api_url.clone());
        Self::with_backend(config.api_url.to_string(), backend)
    }

    pub fn with_backend(url: String, backend: impl Backend + 'static) -> Self {
        Self {
            url,
            client: Arc::new(backend),
        }
    }

    pub async fn authors(&self) -> Result<Vec<Author>, ApiError> {
        log::trace!("Authors");
        self.client.list_authors().await.log_error()
    }

    pub async fn posts(&self, author: AuthorId) -> Result<Vec<Post>, ApiError> {
        log::trace!("Posts for author {author}");
        self.client.list_posts(author).await.log_error()
    }

    pub async fn comments(&self, post: PostId) -> Result<Vec<Comment>, ApiError> {
        log::trace!("Comments for post {post}");
        self.client.list_comments(post).await.log_error()
    }

    pub async fn create_comment(&self, comment: NewComment) -> Result<Comment, ApiError> {
        log::trace!("Create comment on post {}", comment.post_id);
        self.client.create_comment(comment).await.log_error()
    }

    pub async fn delete_comment(&self, comment: CommentId) -> Result<(), ApiError> {
        log::trace!("Delete comment {comment}");
        self.client.delete_comment(comment).await.log_error()
    }
}

trait ResultExt {
    fn log_error(self) -> Self;
}

impl<T> ResultExt for Result<T, ApiError> {
    fn log_error(self) -> Self {
        if let Err(ref e) = self {
            log::error!("{} failed: {e}", e.call());
        }
        self
    }
}
