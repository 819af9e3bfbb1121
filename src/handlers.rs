use crate::blog::BlogAdmin;
use crate::contact::ContactForm;
use crate::errors::AppError;
use crate::models::{BlogDraft, BlogForm, ContactMessage, DeleteForm, IndexQuery, MessageForm, RoutineQuery};
use crate::page::{CategoryFilter, Navigation, Sidebar, TestimonialModal};
use crate::routine::RoutineFeed;
use crate::state::AppState;
use crate::ui::{render_index, render_routine_page, stylesheet, IndexView};
use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse, Redirect},
    Form,
};
use chrono::Local;
use tracing::info;

/// Per-request portfolio page state, built from the query string the way the
/// page's click handlers would have left the DOM.
#[derive(Default)]
struct IndexPage {
    nav: Navigation,
    sidebar: Sidebar,
    modal: TestimonialModal,
    filter: CategoryFilter,
    blogs: BlogAdmin,
    contact: ContactForm,
    notice: Option<String>,
}

impl IndexPage {
    fn render(&self, state: &AppState) -> Html<String> {
        Html(render_index(&IndexView {
            nav: &self.nav,
            sidebar: &self.sidebar,
            modal: &self.modal,
            testimonials: &state.testimonials,
            filter: &self.filter,
            blogs: &self.blogs,
            contact: &self.contact,
            notice: self.notice.as_deref(),
        }))
    }
}

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Result<Html<String>, AppError> {
    let mut page = IndexPage::default();

    if query.sidebar == Some(true) {
        page.sidebar.toggle();
    }

    if let Some(name) = query.page.as_deref() {
        page.nav.select(name);
    }

    if let Some(index) = query.testimonial {
        let testimonial = state
            .testimonials
            .get(index)
            .ok_or_else(|| AppError::not_found(format!("no testimonial at {index}")))?;
        page.modal.open(testimonial);
    }

    // The blog list is always rendered; it is what the page loads on start.
    page.blogs.load(&state.client).await;

    if query.select == Some(true) {
        page.filter.toggle_select();
    }

    if let Some(value) = query.category.as_deref() {
        let label = category_label(&page.blogs, value);
        if page.filter.select_open {
            page.filter.select_item(&label);
        } else {
            page.filter.click_button(&label);
        }
    }

    if let Some(id) = query.edit {
        let blog = page
            .blogs
            .find(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("no blog with id {id}")))?;
        page.blogs.edit(&blog);
        page.nav.select("blog");
    }

    Ok(page.render(&state))
}

/// Display label of a category value: the first blog category spelled that
/// way, ignoring case.
fn category_label(blogs: &BlogAdmin, value: &str) -> String {
    if value.eq_ignore_ascii_case("all") {
        return "All".to_string();
    }
    blogs
        .categories()
        .into_iter()
        .find(|category| category.eq_ignore_ascii_case(value))
        .unwrap_or_else(|| value.to_string())
}

pub async fn style() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], stylesheet())
}

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn daily_routine(
    State(state): State<AppState>,
    Query(query): Query<RoutineQuery>,
) -> Html<String> {
    let mut feed = RoutineFeed::default();
    feed.load(&state.client).await;

    if let Some(post_id) = query.reply {
        feed.toggle_reply(post_id);
    }

    Html(render_routine_page(&feed, Local::now().naive_local()))
}

pub async fn create_post(State(state): State<AppState>, Form(form): Form<MessageForm>) -> Redirect {
    let mut feed = RoutineFeed::default();
    if feed.submit_post(&state.client, &form.message).await {
        info!("routine post created");
    }
    Redirect::to("/daily-routine")
}

pub async fn create_reply(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    Form(form): Form<MessageForm>,
) -> Redirect {
    let mut feed = RoutineFeed::default();
    if feed.submit_reply(&state.client, post_id, &form.message).await {
        info!(post_id, "routine reply created");
    }
    Redirect::to("/daily-routine")
}

pub async fn contact(State(state): State<AppState>, Form(form): Form<ContactMessage>) -> Html<String> {
    let mut page = IndexPage::default();
    page.nav.select("contact");
    page.contact = ContactForm::from_message(form);
    // A disabled submit button never fires.
    if !page.contact.button_disabled {
        page.notice = Some(page.contact.submit(&state.client).await);
    }
    page.blogs.load(&state.client).await;
    page.render(&state)
}

pub async fn save_blog(
    State(state): State<AppState>,
    Form(form): Form<BlogForm>,
) -> Result<Html<String>, AppError> {
    let editing = match form.blog_id.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(
            raw.parse::<i64>()
                .map_err(|_| AppError::bad_request("blog_id must be a number"))?,
        ),
    };

    let mut page = IndexPage::default();
    page.nav.select("blog");
    let draft = BlogDraft {
        title: form.title,
        category: form.category,
        content: form.content,
    };
    page.blogs.fill(draft, editing);

    page.notice = page.blogs.save(&state.client).await;
    if page.blogs.blogs.is_empty() {
        page.blogs.load(&state.client).await;
    }
    Ok(page.render(&state))
}

pub async fn delete_blog(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<DeleteForm>,
) -> Html<String> {
    let confirmed = form.confirmed.as_deref() == Some("true");

    let mut page = IndexPage::default();
    page.nav.select("blog");
    page.notice = page.blogs.delete(&state.client, id, confirmed).await;
    if page.notice.is_none() {
        page.blogs.load(&state.client).await;
    }
    page.render(&state)
}
