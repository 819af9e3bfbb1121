mod common;

use common::spawn_mock_api;
use portfolio_site::blog::{BlogAdmin, PUBLISH_LABEL};
use portfolio_site::contact::{ContactField, ContactForm};
use portfolio_site::routine::RoutineFeed;
use portfolio_site::ApiClient;

#[tokio::test]
async fn routine_post_and_reply_refetch_the_feed() {
    let api = spawn_mock_api();
    let client = ApiClient::new(&api.base_url);
    let mut feed = RoutineFeed::default();

    assert!(feed.submit_post(&client, "  Woke up at six  ").await);
    assert_eq!(feed.posts.len(), 1);
    assert_eq!(feed.posts[0].message, "Woke up at six");

    let post_id = feed.posts[0].id;
    assert!(feed.submit_reply(&client, post_id, "Impressive").await);
    assert_eq!(feed.posts[0].replies.len(), 1);
    assert_eq!(feed.posts[0].replies[0].message, "Impressive");
}

#[tokio::test]
async fn reply_to_missing_post_is_logged_not_applied() {
    let api = spawn_mock_api();
    let client = ApiClient::new(&api.base_url);
    let mut feed = RoutineFeed::default();
    feed.load(&client).await;

    assert!(!feed.submit_reply(&client, 404, "hello?").await);
    assert!(feed.posts.is_empty());
}

#[tokio::test]
async fn blog_publish_edit_delete_lifecycle() {
    let api = spawn_mock_api();
    let client = ApiClient::new(&api.base_url);
    let mut admin = BlogAdmin::default();

    admin.form.title = "First".to_string();
    admin.form.category = "Rust".to_string();
    admin.form.content = "Ownership notes".to_string();
    let alert = admin.save(&client).await;
    assert_eq!(alert.as_deref(), Some("Blog published successfully!"));
    assert_eq!(admin.blogs.len(), 1);
    assert_eq!(admin.form.title, "");
    assert_eq!(admin.button_label, PUBLISH_LABEL);

    let blog = admin.blogs[0].clone();
    admin.edit(&blog);
    admin.form.title = "First, revised".to_string();
    let alert = admin.save(&client).await;
    assert_eq!(alert.as_deref(), Some("Blog updated successfully!"));
    assert_eq!(admin.editing, None);
    assert_eq!(admin.blogs[0].title, "First, revised");

    let alert = admin.delete(&client, blog.id, true).await;
    assert_eq!(alert.as_deref(), Some("Blog deleted successfully!"));
    assert!(admin.blogs.is_empty());
}

#[tokio::test]
async fn rejected_blog_save_shows_no_alert_and_keeps_form() {
    let api = spawn_mock_api();
    api.data.lock().unwrap().fail_blog_writes = true;
    let client = ApiClient::new(&api.base_url);
    let mut admin = BlogAdmin::default();
    admin.form.title = "Draft".to_string();

    assert_eq!(admin.save(&client).await, None);
    assert_eq!(admin.form.title, "Draft");
}

#[tokio::test]
async fn successful_contact_clears_and_disables_form() {
    let api = spawn_mock_api();
    let client = ApiClient::new(&api.base_url);
    let mut form = ContactForm::default();
    form.input(ContactField::Fullname, "Ada Lovelace");
    form.input(ContactField::Email, "ada@example.com");
    form.input(ContactField::Message, "Let's build an engine.");
    assert!(!form.button_disabled);

    let alert = form.submit(&client).await;
    assert_eq!(alert, "Message sent successfully!");
    assert_eq!(form, ContactForm::default());
    assert!(form.button_disabled);
    assert_eq!(api.data.lock().unwrap().contacts.len(), 1);
}

#[tokio::test]
async fn contact_error_status_surfaces_server_message() {
    let api = spawn_mock_api();
    let client = ApiClient::new(&api.base_url);
    let mut form = ContactForm::default();
    form.input(ContactField::Fullname, "Bob");
    form.input(ContactField::Email, "bob@fail.test");
    form.input(ContactField::Message, "Hi");

    let alert = form.submit(&client).await;
    assert_eq!(alert, "Error: Failed to send email. Please try again.");
    assert_eq!(form.fields.email, "bob@fail.test");
}
