use crate::client::ApiClient;
use crate::models::Post;
use std::collections::BTreeSet;
use tracing::error;

/// View state of the daily-routine feed.
#[derive(Debug, Clone, Default)]
pub struct RoutineFeed {
    pub posts: Vec<Post>,
    open_replies: BTreeSet<i64>,
}

impl RoutineFeed {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            open_replies: BTreeSet::new(),
        }
    }

    pub async fn load(&mut self, client: &ApiClient) {
        match client.list_posts().await {
            Ok(posts) => self.posts = posts,
            Err(err) => error!("error loading posts: {err}"),
        }
    }

    /// Returns true when the API accepted the post.
    pub async fn submit_post(&mut self, client: &ApiClient, message: &str) -> bool {
        let message = message.trim();
        if message.is_empty() {
            return false;
        }

        match client.create_post(message).await {
            Ok(()) => {
                self.load(client).await;
                true
            }
            Err(err) => {
                error!("error posting: {err}");
                false
            }
        }
    }

    pub async fn submit_reply(&mut self, client: &ApiClient, post_id: i64, message: &str) -> bool {
        let message = message.trim();
        if message.is_empty() {
            return false;
        }

        match client.add_reply(post_id, message).await {
            Ok(()) => {
                self.load(client).await;
                true
            }
            Err(err) => {
                error!("error replying: {err}");
                false
            }
        }
    }

    /// Shows or hides the reply form of a post. Unknown posts are ignored.
    pub fn toggle_reply(&mut self, post_id: i64) {
        if !self.posts.iter().any(|post| post.id == post_id) {
            return;
        }
        if !self.open_replies.remove(&post_id) {
            self.open_replies.insert(post_id);
        }
    }

    pub fn reply_open(&self, post_id: i64) -> bool {
        self.open_replies.contains(&post_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64) -> Post {
        Post {
            id,
            timestamp: "2026-01-05T09:00:00".to_string(),
            message: format!("post {id}"),
            replies: Vec::new(),
        }
    }

    #[test]
    fn toggle_reply_flips_visibility() {
        let mut feed = RoutineFeed::new(vec![post(1), post(2)]);
        feed.toggle_reply(2);
        assert!(feed.reply_open(2));
        assert!(!feed.reply_open(1));
        feed.toggle_reply(2);
        assert!(!feed.reply_open(2));
    }

    #[test]
    fn toggle_reply_ignores_missing_post() {
        let mut feed = RoutineFeed::new(vec![post(1)]);
        feed.toggle_reply(9);
        assert!(!feed.reply_open(9));
    }

    #[tokio::test]
    async fn blank_messages_never_reach_the_api() {
        // Nothing listens here; a request would fail and be logged, not panic.
        let client = ApiClient::new("http://127.0.0.1:9");
        let mut feed = RoutineFeed::new(vec![post(1)]);
        assert!(!feed.submit_post(&client, "   \n").await);
        assert!(!feed.submit_reply(&client, 1, "").await);
        assert_eq!(feed.posts.len(), 1);
    }

    #[tokio::test]
    async fn failed_load_keeps_previous_posts() {
        let client = ApiClient::new("http://127.0.0.1:9");
        let mut feed = RoutineFeed::new(vec![post(1)]);
        feed.load(&client).await;
        assert_eq!(feed.posts, vec![post(1)]);
    }
}
