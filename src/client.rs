use crate::errors::ApiError;
use crate::models::{Blog, BlogDraft, ContactMessage, ContactResponse, NewMessage, Post};
use reqwest::{Client, Response};

/// Typed handle on the portfolio JSON API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let response = self.http.get(self.url("/api/routine/posts")).send().await?;
        Ok(ensure_success(response)?.json().await?)
    }

    pub async fn create_post(&self, message: &str) -> Result<(), ApiError> {
        let body = NewMessage {
            message: message.to_string(),
        };
        let response = self
            .http
            .post(self.url("/api/routine/post"))
            .json(&body)
            .send()
            .await?;
        ensure_success(response)?;
        Ok(())
    }

    pub async fn add_reply(&self, post_id: i64, message: &str) -> Result<(), ApiError> {
        let body = NewMessage {
            message: message.to_string(),
        };
        let response = self
            .http
            .post(self.url(&format!("/api/routine/reply/{post_id}")))
            .json(&body)
            .send()
            .await?;
        ensure_success(response)?;
        Ok(())
    }

    /// The contact endpoint reports failure in the body, so the status code
    /// is not checked here.
    pub async fn send_contact(&self, contact: &ContactMessage) -> Result<ContactResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/api/contact"))
            .json(contact)
            .send()
            .await?;
        Ok(response.json().await?)
    }

    pub async fn list_blogs(&self) -> Result<Vec<Blog>, ApiError> {
        let response = self.http.get(self.url("/api/blogs")).send().await?;
        Ok(ensure_success(response)?.json().await?)
    }

    pub async fn create_blog(&self, draft: &BlogDraft) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/api/blogs"))
            .json(draft)
            .send()
            .await?;
        ensure_success(response)?;
        Ok(())
    }

    pub async fn update_blog(&self, id: i64, draft: &BlogDraft) -> Result<(), ApiError> {
        let response = self
            .http
            .put(self.url(&format!("/api/blogs/{id}")))
            .json(draft)
            .send()
            .await?;
        ensure_success(response)?;
        Ok(())
    }

    pub async fn delete_blog(&self, id: i64) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/blogs/{id}")))
            .send()
            .await?;
        ensure_success(response)?;
        Ok(())
    }
}

fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status))
    }
}
