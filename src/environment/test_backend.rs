//! In-memory [`Backend`] for tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::backend::Backend;
use super::error::ApiError;
use super::types::{Author, AuthorId, Comment, CommentId, NewComment, Post, PostId};

#[derive(Default)]
struct Tables {
    authors: Vec<Author>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    next_comment: i64,
    failure: Option<ApiError>,
}

#[derive(Clone, Default)]
pub struct MemoryBackend {
    tables: Arc<Mutex<Tables>>,
    calls: Arc<AtomicUsize>,
}

pub fn author(id: i64, name: &str) -> Author {
    Author {
        id: AuthorId(id),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        username: None,
        phone: None,
        website: None,
    }
}

pub fn post(id: i64, author: i64) -> Post {
    Post {
        id: PostId(id),
        author_id: AuthorId(author),
        title: format!("Post {id}"),
        body: format!("Body of post {id}"),
    }
}

pub fn comment(id: i64, post: i64) -> Comment {
    Comment {
        id: CommentId(id),
        post_id: PostId(post),
        name: format!("Commenter {id}"),
        email: format!("c{id}@example.com"),
        body: format!("Comment {id}"),
    }
}

impl MemoryBackend {
    /// Two authors; author 1 has posts 10 and 11, author 2 has none.
    /// Post 10 has comments 100..=102, post 11 has none.
    pub fn seeded() -> Self {
        let backend = Self::default();
        if let Ok(mut tables) = backend.tables.lock() {
            tables.authors = vec![author(1, "Leanne"), author(2, "Ervin")];
            tables.posts = vec![post(10, 1), post(11, 1)];
            tables.comments = vec![comment(100, 10), comment(101, 10), comment(102, 10)];
            tables.next_comment = 1000;
        }
        backend
    }

    /// Every following call fails with `error`
    pub fn fail_with(&self, error: ApiError) {
        if let Ok(mut tables) = self.tables.lock() {
            tables.failure = Some(error);
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn with<T>(&self, f: impl FnOnce(&mut Tables) -> Result<T, ApiError>) -> Result<T, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut tables = self.tables.lock().map_err(|e| ApiError::Network {
            call: "memory",
            detail: format!("Poison Error {e}"),
        })?;
        if let Some(failure) = tables.failure.clone() {
            return Err(failure);
        }
        f(&mut tables)
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn list_authors(&self) -> Result<Vec<Author>, ApiError> {
        self.with(|t| Ok(t.authors.clone()))
    }

    async fn list_posts(&self, author: AuthorId) -> Result<Vec<Post>, ApiError> {
        self.with(|t| {
            Ok(t.posts
                .iter()
                .filter(|p| p.author_id == author)
                .cloned()
                .collect())
        })
    }

    async fn list_comments(&self, post: PostId) -> Result<Vec<Comment>, ApiError> {
        self.with(|t| {
            Ok(t.comments
                .iter()
                .filter(|c| c.post_id == post)
                .cloned()
                .collect())
        })
    }

    async fn create_comment(&self, comment: NewComment) -> Result<Comment, ApiError> {
        self.with(|t| {
            t.next_comment += 1;
            let created = Comment {
                id: CommentId(t.next_comment),
                post_id: comment.post_id,
                name: comment.name,
                email: comment.email,
                body: comment.body,
            };
            t.comments.push(created.clone());
            Ok(created)
        })
    }

    async fn delete_comment(&self, comment: CommentId) -> Result<(), ApiError> {
        self.with(|t| {
            let before = t.comments.len();
            t.comments.retain(|c| c.id != comment);
            if t.comments.len() == before {
                return Err(ApiError::Http {
                    call: "delete_comment",
                    status: 404,
                    body: String::new(),
                });
            }
            Ok(())
        })
    }
}
