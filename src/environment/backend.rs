use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use super::error::ApiError;
use super::types::{Author, AuthorId, Comment, CommentId, NewComment, PostId, Post};

/// The REST data source. One call is exactly one request, there is no caching
/// and no retrying at this level.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn list_authors(&self) -> Result<Vec<Author>, ApiError>;
    async fn list_posts(&self, author: AuthorId) -> Result<Vec<Post>, ApiError>;
    async fn list_comments(&self, post: PostId) -> Result<Vec<Comment>, ApiError>;
    async fn create_comment(&self, comment: NewComment) -> Result<Comment, ApiError>;
    async fn delete_comment(&self, comment: CommentId) -> Result<(), ApiError>;
}

pub struct HttpBackend {
    client: Client,
    base: Url,
}

impl HttpBackend {
    pub fn new(base: Url) -> Self {
        Self {
            client: Client::new(),
            base,
        }
    }

    fn endpoint(&self, call: &'static str, path: &str) -> Result<Url, ApiError> {
        self.base.join(path).map_err(|e| ApiError::Network {
            call,
            detail: format!("invalid url for {path}: {e}"),
        })
    }

    fn endpoint_with_query(
        &self,
        call: &'static str,
        path: &str,
        key: &str,
        value: i64,
    ) -> Result<Url, ApiError> {
        let mut url = self.endpoint(call, path)?;
        url.query_pairs_mut().append_pair(key, &value.to_string());
        Ok(url)
    }

    async fn execute(&self, call: &'static str, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await.map_err(|e| ApiError::Network {
            call,
            detail: e.to_string(),
        })?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| ApiError::Network {
            call,
            detail: format!("could not read body: {e}"),
        })?;
        log::trace!("{call} answered with HTTP {status}");
        check_status(call, status, body)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        call: &'static str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let body = self.execute(call, request).await?;
        decode(call, &body)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn list_authors(&self) -> Result<Vec<Author>, ApiError> {
        let url = self.endpoint("list_authors", "users")?;
        self.fetch("list_authors", self.client.get(url)).await
    }

    async fn list_posts(&self, author: AuthorId) -> Result<Vec<Post>, ApiError> {
        let url = self.endpoint_with_query("list_posts", "posts", "userId", author.0)?;
        self.fetch("list_posts", self.client.get(url)).await
    }

    async fn list_comments(&self, post: PostId) -> Result<Vec<Comment>, ApiError> {
        let url = self.endpoint_with_query("list_comments", "comments", "postId", post.0)?;
        self.fetch("list_comments", self.client.get(url)).await
    }

    async fn create_comment(&self, comment: NewComment) -> Result<Comment, ApiError> {
        let url = self.endpoint("create_comment", "comments")?;
        self.fetch("create_comment", self.client.post(url).json(&comment))
            .await
    }

    async fn delete_comment(&self, comment: CommentId) -> Result<(), ApiError> {
        let url = self.endpoint("delete_comment", &format!("comments/{comment}"))?;
        self.execute("delete_comment", self.client.delete(url))
            .await
            .map(|_| ())
    }
}

fn check_status(call: &'static str, status: u16, body: String) -> Result<String, ApiError> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ApiError::Http { call, status, body })
    }
}

fn decode<T: DeserializeOwned>(call: &'static str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode {
        call,
        detail: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> HttpBackend {
        HttpBackend::new(Url::parse("http://localhost:3000/api/").unwrap())
    }

    #[test]
    fn builds_endpoint_urls() {
        let backend = backend();
        assert_eq!(
            backend.endpoint("list_authors", "users").unwrap().as_str(),
            "http://localhost:3000/api/users"
        );
        assert_eq!(
            backend
                .endpoint_with_query("list_posts", "posts", "userId", 4)
                .unwrap()
                .as_str(),
            "http://localhost:3000/api/posts?userId=4"
        );
        assert_eq!(
            backend
                .endpoint("delete_comment", &format!("comments/{}", CommentId(12)))
                .unwrap()
                .as_str(),
            "http://localhost:3000/api/comments/12"
        );
    }

    #[test]
    fn non_success_status_is_http_error() {
        assert_eq!(check_status("x", 204, String::new()), Ok(String::new()));
        assert_eq!(
            check_status("list_posts", 404, "missing".to_string()),
            Err(ApiError::Http {
                call: "list_posts",
                status: 404,
                body: "missing".to_string()
            })
        );
    }

    #[test]
    fn undecodable_body_is_decode_error() {
        let result: Result<Vec<Post>, _> = decode("list_posts", "<html>");
        assert!(matches!(result, Err(ApiError::Decode { call: "list_posts", .. })));

        let posts: Vec<Post> = decode(
            "list_posts",
            r#"[{"id": 1, "userId": 2, "title": "a", "body": "b"}]"#,
        )
        .unwrap();
        assert_eq!(posts.len(), 1);
    }

    #[tokio::test]
    async fn unreachable_server_is_network_error() {
        // Port 9 (discard) is not expected to accept HTTP connections
        let backend = HttpBackend::new(Url::parse("http://127.0.0.1:9/").unwrap());
        let result = backend.list_authors().await;
        assert!(matches!(
            result,
            Err(ApiError::Network {
                call: "list_authors",
                ..
            })
        ));
    }
}
