use crate::client::ApiClient;
use crate::errors::ApiError;
use crate::models::{Blog, BlogDraft};
use tracing::error;

pub const PUBLISH_LABEL: &str = "Publish Blog";
pub const UPDATE_LABEL: &str = "Update Blog";

/// Blog admin list plus the publish/update form above it.
#[derive(Debug, Clone)]
pub struct BlogAdmin {
    pub blogs: Vec<Blog>,
    pub form: BlogDraft,
    pub editing: Option<i64>,
    pub button_label: &'static str,
}

impl Default for BlogAdmin {
    fn default() -> Self {
        Self {
            blogs: Vec::new(),
            form: BlogDraft::default(),
            editing: None,
            button_label: PUBLISH_LABEL,
        }
    }
}

impl BlogAdmin {
    pub async fn load(&mut self, client: &ApiClient) {
        match client.list_blogs().await {
            Ok(blogs) => self.blogs = blogs,
            Err(err) => error!("error loading blogs: {err}"),
        }
    }

    pub fn find(&self, id: i64) -> Option<&Blog> {
        self.blogs.iter().find(|blog| blog.id == id)
    }

    /// Sets the form contents; an edit id switches the button to update mode.
    pub fn fill(&mut self, form: BlogDraft, editing: Option<i64>) {
        self.form = form;
        self.editing = editing;
        self.button_label = if editing.is_some() { UPDATE_LABEL } else { PUBLISH_LABEL };
    }

    /// Puts a blog into the form for editing.
    pub fn edit(&mut self, blog: &Blog) {
        let form = BlogDraft {
            title: blog.title.clone(),
            category: blog.category.clone(),
            content: blog.content.clone(),
        };
        self.fill(form, Some(blog.id));
    }

    fn reset_form(&mut self) {
        self.fill(BlogDraft::default(), None);
    }

    /// Publishes the form, or updates the blog being edited. Returns the
    /// alert to show, if any.
    pub async fn save(&mut self, client: &ApiClient) -> Option<String> {
        let result = match self.editing {
            Some(id) => client.update_blog(id, &self.form).await,
            None => client.create_blog(&self.form).await,
        };

        match result {
            Ok(()) => {
                let alert = if self.editing.is_some() {
                    "Blog updated successfully!"
                } else {
                    "Blog published successfully!"
                };
                self.reset_form();
                self.load(client).await;
                Some(alert.to_string())
            }
            Err(ApiError::Status(status)) => {
                error!("saving blog returned {status}");
                None
            }
            Err(err) => {
                error!("error saving blog: {err}");
                Some("Error saving blog. Please try again.".to_string())
            }
        }
    }

    /// Deletes a blog once the user confirmed it.
    pub async fn delete(&mut self, client: &ApiClient, id: i64, confirmed: bool) -> Option<String> {
        if !confirmed {
            return None;
        }

        match client.delete_blog(id).await {
            Ok(()) => {
                self.load(client).await;
                Some("Blog deleted successfully!".to_string())
            }
            Err(err) => {
                error!("error deleting blog: {err}");
                None
            }
        }
    }

    /// Distinct categories in list order, for the filter buttons.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for blog in &self.blogs {
            if !seen.iter().any(|category| category.eq_ignore_ascii_case(&blog.category)) {
                seen.push(blog.category.clone());
            }
        }
        seen
    }
}
