#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use chrono::Local;
use portfolio_site::models::{Blog, BlogDraft, ContactMessage, NewMessage, Post, Reply};
use serde_json::{json, Value};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
pub struct MockData {
    pub posts: Vec<Post>,
    pub blogs: Vec<Blog>,
    pub contacts: Vec<ContactMessage>,
    next_id: i64,
    /// When set, every blog write answers 500.
    pub fail_blog_writes: bool,
}

impl MockData {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

type Shared = Arc<Mutex<MockData>>;

/// In-memory stand-in for the portfolio JSON API.
pub struct MockApi {
    pub base_url: String,
    pub data: Shared,
}

impl MockApi {
    pub fn seed_blog(&self, title: &str, category: &str, content: &str) -> i64 {
        let mut data = self.data.lock().unwrap();
        let id = data.next_id();
        data.blogs.insert(
            0,
            Blog {
                id,
                title: title.to_string(),
                category: category.to_string(),
                content: content.to_string(),
                timestamp: now(),
            },
        );
        id
    }

    pub fn seed_post(&self, message: &str) -> i64 {
        let mut data = self.data.lock().unwrap();
        let id = data.next_id();
        data.posts.insert(
            0,
            Post {
                id,
                timestamp: now(),
                message: message.to_string(),
                replies: Vec::new(),
            },
        );
        id
    }
}

fn now() -> String {
    Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

async fn list_posts(State(data): State<Shared>) -> Json<Vec<Post>> {
    Json(data.lock().unwrap().posts.clone())
}

async fn create_post(State(data): State<Shared>, Json(body): Json<NewMessage>) -> Json<Post> {
    let mut data = data.lock().unwrap();
    let post = Post {
        id: data.next_id(),
        timestamp: now(),
        message: body.message,
        replies: Vec::new(),
    };
    data.posts.insert(0, post.clone());
    Json(post)
}

async fn add_reply(
    State(data): State<Shared>,
    Path(post_id): Path<i64>,
    Json(body): Json<NewMessage>,
) -> Result<Json<Reply>, StatusCode> {
    let mut data = data.lock().unwrap();
    let id = data.next_id();
    let post = data
        .posts
        .iter_mut()
        .find(|post| post.id == post_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    let reply = Reply {
        id: Some(id),
        timestamp: now(),
        message: body.message,
    };
    post.replies.push(reply.clone());
    Ok(Json(reply))
}

async fn contact(State(data): State<Shared>, Json(body): Json<ContactMessage>) -> Json<Value> {
    if body.email.ends_with("@fail.test") {
        return Json(json!({
            "status": "error",
            "message": "Failed to send email. Please try again."
        }));
    }
    data.lock().unwrap().contacts.push(body);
    Json(json!({ "status": "success", "message": "Email sent successfully!" }))
}

async fn list_blogs(State(data): State<Shared>) -> Json<Vec<Blog>> {
    Json(data.lock().unwrap().blogs.clone())
}

async fn create_blog(
    State(data): State<Shared>,
    Json(body): Json<BlogDraft>,
) -> Result<Json<Blog>, StatusCode> {
    let mut data = data.lock().unwrap();
    if data.fail_blog_writes {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let blog = Blog {
        id: data.next_id(),
        title: body.title,
        category: body.category,
        content: body.content,
        timestamp: now(),
    };
    data.blogs.insert(0, blog.clone());
    Ok(Json(blog))
}

async fn update_blog(
    State(data): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<BlogDraft>,
) -> Result<Json<Blog>, StatusCode> {
    let mut data = data.lock().unwrap();
    if data.fail_blog_writes {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let blog = data
        .blogs
        .iter_mut()
        .find(|blog| blog.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    blog.title = body.title;
    blog.category = body.category;
    blog.content = body.content;
    blog.timestamp = now();
    Ok(Json(blog.clone()))
}

async fn delete_blog(State(data): State<Shared>, Path(id): Path<i64>) -> Json<Value> {
    data.lock().unwrap().blogs.retain(|blog| blog.id != id);
    Json(json!({ "status": "success", "message": "Blog deleted successfully!" }))
}

fn mock_router(data: Shared) -> Router {
    Router::new()
        .route("/api/routine/posts", get(list_posts))
        .route("/api/routine/post", post(create_post))
        .route("/api/routine/reply/:post_id", post(add_reply))
        .route("/api/contact", post(contact))
        .route("/api/blogs", get(list_blogs).post(create_blog))
        .route("/api/blogs/:id", put(update_blog).delete(delete_blog))
        .with_state(data)
}

/// Serves the mock API from its own thread so it outlives any single test
/// runtime.
pub fn spawn_mock_api() -> MockApi {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock api");
    listener.set_nonblocking(true).expect("nonblocking listener");
    let port = listener.local_addr().unwrap().port();

    let data: Shared = Arc::default();
    let app = mock_router(Arc::clone(&data));

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("mock api runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("tokio listener");
            axum::serve(listener, app).await.expect("mock api server");
        });
    });

    MockApi {
        base_url: format!("http://127.0.0.1:{port}"),
        data,
    }
}
