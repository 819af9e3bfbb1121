use crate::blog::BlogAdmin;
use crate::contact::ContactForm;
use crate::format::{escape_html, excerpt, format_blog_date, format_time_at};
use crate::models::{Post, Testimonial};
use crate::page::{CategoryFilter, Navigation, Sidebar, TestimonialModal};
use crate::routine::RoutineFeed;
use chrono::NaiveDateTime;
use std::fmt::Write;

pub const EMPTY_POSTS: &str =
    r#"<div class="empty-state"><p>No posts yet. Be the first to share your daily routine!</p></div>"#;
pub const EMPTY_BLOGS: &str =
    r#"<p style="text-align: center; color: #999;">No blogs yet. Write your first blog!</p>"#;

/// Everything the portfolio page shows for one request.
pub struct IndexView<'a> {
    pub nav: &'a Navigation,
    pub sidebar: &'a Sidebar,
    pub modal: &'a TestimonialModal,
    pub testimonials: &'a [Testimonial],
    pub filter: &'a CategoryFilter,
    pub blogs: &'a BlogAdmin,
    pub contact: &'a ContactForm,
    pub notice: Option<&'a str>,
}

pub fn render_posts(feed: &RoutineFeed, now: NaiveDateTime) -> String {
    if feed.posts.is_empty() {
        return EMPTY_POSTS.to_string();
    }

    let mut html = String::new();
    for post in &feed.posts {
        render_post(&mut html, post, feed.reply_open(post.id), now);
    }
    html
}

fn render_post(html: &mut String, post: &Post, reply_open: bool, now: NaiveDateTime) {
    let id = post.id;
    let show = if reply_open { " show" } else { "" };
    let toggle_href = if reply_open {
        "/daily-routine".to_string()
    } else {
        format!("/daily-routine?reply={id}#replyForm-{id}")
    };

    let _ = write!(
        html,
        r#"
<div class="post-card" data-post-id="{id}">
  <div class="post-header">
    <div class="post-time">{time}</div>
  </div>
  <div class="post-message">{message}</div>
  <div class="post-actions">
    <a class="btn-reply" href="{toggle_href}" data-action="toggle-reply" data-post-id="{id}">Reply</a>
  </div>
  <form class="reply-form{show}" id="replyForm-{id}" method="post" action="/daily-routine/reply/{id}">
    <textarea name="message" placeholder="Write a reply..." id="replyText-{id}" rows="3"></textarea>
    <button type="submit" data-action="submit-reply" data-post-id="{id}">Post Reply</button>
  </form>"#,
        time = format_time_at(&post.timestamp, now),
        message = escape_html(&post.message),
    );

    if !post.replies.is_empty() {
        html.push_str("\n  <div class=\"replies-container\">");
        for reply in &post.replies {
            let _ = write!(
                html,
                r#"
    <div class="reply-item">
      <div class="reply-time">{time}</div>
      <div class="reply-text">{message}</div>
    </div>"#,
                time = format_time_at(&reply.timestamp, now),
                message = escape_html(&reply.message),
            );
        }
        html.push_str("\n  </div>");
    }

    html.push_str("\n</div>");
}

pub fn render_routine_page(feed: &RoutineFeed, now: NaiveDateTime) -> String {
    let initial = serde_json::to_string(&feed.posts).unwrap_or_else(|_| "[]".to_string());
    let initial = escape_html(&initial);
    let posts = render_posts(feed, now);
    fill_template(
        ROUTINE_HTML,
        &[("INITIAL_POSTS", initial.as_str()), ("POSTS", posts.as_str())],
    )
}

/// Substitutes `{{NAME}}` placeholders in one left-to-right pass. Inserted
/// values are never scanned again, so user text that happens to look like a
/// placeholder stays literal. Unknown placeholders are kept as written.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = &after[..end];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

pub fn render_blogs(admin: &BlogAdmin, filter: &CategoryFilter) -> String {
    if admin.blogs.is_empty() {
        return EMPTY_BLOGS.to_string();
    }

    let mut html = String::new();
    for blog in &admin.blogs {
        let category = blog.category.to_lowercase();
        let active = if filter.matches(&category) { " active" } else { "" };
        let _ = write!(
            html,
            r#"
<li class="blog-post-item{active}" data-filter-item data-category="{data_category}">
  <div class="blog-content" style="padding: 15px;">
    <div class="blog-meta">
      <p class="blog-category">{category}</p>
      <span class="dot"></span>
      <time>{date}</time>
    </div>
    <h3 class="h3 blog-item-title">{title}</h3>
    <p class="blog-text">{text}</p>
    <div style="margin-top: 10px; display: flex; gap: 10px;">
      <form method="get" action="/">
        <input type="hidden" name="page" value="blog">
        <button class="form-btn" style="padding: 5px 15px; font-size: 0.9rem;" name="edit" value="{id}">Edit</button>
      </form>
      <form method="post" action="/blogs/{id}/delete" onsubmit="return confirm('Are you sure you want to delete this blog?');">
        <input type="hidden" name="confirmed" value="true">
        <button class="form-btn" style="padding: 5px 15px; font-size: 0.9rem; background-color: #ff6b6b;">Delete</button>
      </form>
    </div>
  </div>
</li>"#,
            id = blog.id,
            data_category = escape_html(&category),
            category = escape_html(&blog.category),
            date = format_blog_date(&blog.timestamp),
            title = escape_html(&blog.title),
            text = escape_html(&excerpt(&blog.content)),
        );
    }
    html
}

fn render_nav(nav: &Navigation) -> String {
    let mut html = String::new();
    for page in &nav.pages {
        let active = if nav.is_active(page) { " active" } else { "" };
        let _ = write!(
            html,
            r#"<li class="navbar-item"><a class="navbar-link{active}" href="/?page={page}" data-nav-link>{label}</a></li>"#,
            label = capitalize(page),
        );
    }
    html
}

fn render_testimonials(testimonials: &[Testimonial]) -> String {
    let mut html = String::new();
    for (index, testimonial) in testimonials.iter().enumerate() {
        let _ = write!(
            html,
            r#"
<li class="testimonials-item">
  <a class="content-card" href="/?testimonial={index}" data-testimonials-item>
    <img src="{avatar}" alt="{name}" width="60" data-testimonials-avatar>
    <h4 class="h4 testimonials-item-title" data-testimonials-title>{name}</h4>
    <div class="testimonials-text" data-testimonials-text><p>{text}</p></div>
  </a>
</li>"#,
            avatar = escape_html(&testimonial.avatar),
            name = escape_html(&testimonial.name),
            text = escape_html(&testimonial.text),
        );
    }
    html
}

fn render_filter(admin: &BlogAdmin, filter: &CategoryFilter) -> String {
    let mut labels = vec!["All".to_string()];
    labels.extend(admin.categories());

    let mut html = String::new();
    for label in labels {
        let value = label.to_lowercase();
        let _ = write!(
            html,
            r#"<li class="filter-item"><button class="filter-btn{active}" name="category" value="{value}" data-filter-btn>{label}</button></li>"#,
            active = active_class(filter.selected == value),
            value = escape_html(&value),
            label = escape_html(&label),
        );
    }
    html
}

fn active_class(active: bool) -> &'static str {
    if active { " active" } else { "" }
}

pub fn render_index(view: &IndexView<'_>) -> String {
    let admin = view.blogs;
    let contact = view.contact;
    let notice = view
        .notice
        .map(|text| format!(r#"<div class="notice" role="alert">{}</div>"#, escape_html(text)))
        .unwrap_or_default();
    let blog_id = admin
        .editing
        .map(|id| format!(r#"<input type="hidden" name="blog_id" value="{id}">"#))
        .unwrap_or_default();
    let disabled = if contact.button_disabled { " disabled" } else { "" };

    let nav = render_nav(view.nav);
    let testimonials = render_testimonials(view.testimonials);
    let filters = render_filter(admin, view.filter);
    let blogs = render_blogs(admin, view.filter);
    let modal_img_src = escape_html(&view.modal.img_src);
    let modal_img_alt = escape_html(&view.modal.img_alt);
    let modal_title = escape_html(&view.modal.title);
    let modal_text = escape_html(&view.modal.text);
    let select_value = escape_html(&view.filter.select_label);
    let blog_title = escape_html(&admin.form.title);
    let blog_category = escape_html(&admin.form.category);
    let blog_content = escape_html(&admin.form.content);
    let contact_fullname = escape_html(&contact.fields.fullname);
    let contact_email = escape_html(&contact.fields.email);
    let contact_message = escape_html(&contact.fields.message);

    fill_template(
        INDEX_HTML,
        &[
            ("NOTICE", notice.as_str()),
            ("SIDEBAR_ACTIVE", active_class(view.sidebar.active)),
            ("SIDEBAR_HREF", if view.sidebar.active { "/" } else { "/?sidebar=true" }),
            ("NAV", nav.as_str()),
            ("ABOUT_ACTIVE", active_class(view.nav.is_active("about"))),
            ("BLOG_ACTIVE", active_class(view.nav.is_active("blog"))),
            ("CONTACT_ACTIVE", active_class(view.nav.is_active("contact"))),
            ("TESTIMONIALS", testimonials.as_str()),
            ("MODAL_ACTIVE", active_class(view.modal.active)),
            ("OVERLAY_ACTIVE", active_class(view.modal.overlay_active)),
            ("MODAL_IMG_SRC", modal_img_src.as_str()),
            ("MODAL_IMG_ALT", modal_img_alt.as_str()),
            ("MODAL_TITLE", modal_title.as_str()),
            ("MODAL_TEXT", modal_text.as_str()),
            ("SELECT_ACTIVE", active_class(view.filter.select_open)),
            ("SELECT_VALUE", select_value.as_str()),
            ("FILTERS", filters.as_str()),
            ("BLOG_ID", blog_id.as_str()),
            ("BLOG_TITLE", blog_title.as_str()),
            ("BLOG_CATEGORY", blog_category.as_str()),
            ("BLOG_CONTENT", blog_content.as_str()),
            ("BLOG_BUTTON", admin.button_label),
            ("BLOGS", blogs.as_str()),
            ("CONTACT_FULLNAME", contact_fullname.as_str()),
            ("CONTACT_EMAIL", contact_email.as_str()),
            ("CONTACT_MESSAGE", contact_message.as_str()),
            ("CONTACT_DISABLED", disabled),
        ],
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

const STYLE: &str = r#"
    :root { --bg: #1e1e1f; --card: #2b2b2c; --ink: #d6d6d6; --accent: #ffdb70; }
    * { box-sizing: border-box; }
    body { margin: 0; background: var(--bg); color: var(--ink); font-family: "Poppins", sans-serif; }
    main { width: min(960px, 100%); margin: 0 auto; padding: 24px 16px 48px; display: grid; gap: 20px; }
    a { color: inherit; }
    .sidebar, article, .post-card, .blog-post-item { background: var(--card); border-radius: 20px; padding: 20px; }
    .sidebar-info_more { display: none; }
    .sidebar.active .sidebar-info_more { display: block; }
    .navbar-list { display: flex; gap: 18px; list-style: none; padding: 0; }
    .navbar-link.active, .filter-item .active { color: var(--accent); }
    article { display: none; }
    article.active { display: block; }
    .modal-container, .overlay { display: none; }
    .modal-container.active, .overlay.active { display: block; }
    .overlay { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.6); }
    .testimonials-modal { position: fixed; top: 20%; left: 50%; transform: translateX(-50%); background: var(--card); padding: 24px; border-radius: 14px; }
    .blog-post-item { display: none; list-style: none; }
    .blog-post-item.active { display: block; }
    .reply-form { display: none; margin-top: 10px; }
    .reply-form.show { display: block; }
    .reply-item { border-left: 2px solid var(--accent); padding-left: 10px; margin-top: 8px; }
    .post-time, .reply-time { font-size: 0.8rem; color: #9a9a9a; }
    .notice { background: var(--accent); color: #1e1e1f; padding: 12px 16px; border-radius: 12px; }
    textarea, input { width: 100%; padding: 10px; border-radius: 10px; border: 1px solid #383838; background: transparent; color: inherit; }
    .form-btn[disabled] { opacity: 0.5; cursor: not-allowed; }
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Portfolio</title>
  <link rel="stylesheet" href="/style.css" />
</head>
<body>
  <main>
    {{NOTICE}}
    <aside class="sidebar{{SIDEBAR_ACTIVE}}" data-sidebar>
      <a class="info_more-btn" href="{{SIDEBAR_HREF}}" data-sidebar-btn>Show Contacts</a>
      <div class="sidebar-info_more">
        <a href="/daily-routine">Daily routine</a>
      </div>
    </aside>

    <nav class="navbar">
      <ul class="navbar-list">{{NAV}}</ul>
    </nav>

    <article class="about{{ABOUT_ACTIVE}}" data-page="about">
      <h2 class="h2 article-title">About me</h2>
      <section class="testimonials">
        <h3 class="h3 testimonials-title">Testimonials</h3>
        <ul class="testimonials-list">{{TESTIMONIALS}}</ul>
      </section>

      <div class="modal-container{{MODAL_ACTIVE}}" data-modal-container>
        <a class="overlay{{OVERLAY_ACTIVE}}" href="/" data-overlay></a>
        <section class="testimonials-modal">
          <a class="modal-close-btn" href="/" data-modal-close-btn>Close</a>
          <img src="{{MODAL_IMG_SRC}}" alt="{{MODAL_IMG_ALT}}" width="80" data-modal-img>
          <h4 class="h3 modal-title" data-modal-title>{{MODAL_TITLE}}</h4>
          <div data-modal-text><p>{{MODAL_TEXT}}</p></div>
        </section>
      </div>
    </article>

    <article class="blog{{BLOG_ACTIVE}}" data-page="blog">
      <h2 class="h2 article-title">Blog</h2>

      <form class="form" method="post" action="/blogs" data-blog-form>
        {{BLOG_ID}}
        <input type="text" name="title" class="form-input" placeholder="Title" value="{{BLOG_TITLE}}" required>
        <input type="text" name="category" class="form-input" placeholder="Category" value="{{BLOG_CATEGORY}}" required>
        <textarea name="content" class="form-input" placeholder="Write your blog..." required>{{BLOG_CONTENT}}</textarea>
        <button class="form-btn" type="submit" data-blog-btn><span>{{BLOG_BUTTON}}</span></button>
      </form>

      <form class="filter-select-box{{SELECT_ACTIVE}}" method="get" action="/" data-select>
        <input type="hidden" name="page" value="blog">
        <div class="select-value" data-select-value>{{SELECT_VALUE}}</div>
        <ul class="filter-list">{{FILTERS}}</ul>
      </form>

      <ul class="blog-posts-list" id="blogs-container">{{BLOGS}}</ul>
    </article>

    <article class="contact{{CONTACT_ACTIVE}}" data-page="contact">
      <h2 class="h2 article-title">Contact</h2>
      <form class="form" method="post" action="/contact" data-form>
        <input type="text" name="fullname" class="form-input" placeholder="Full name" value="{{CONTACT_FULLNAME}}" required data-form-input>
        <input type="email" name="email" class="form-input" placeholder="Email address" value="{{CONTACT_EMAIL}}" required data-form-input>
        <textarea name="message" class="form-input" placeholder="Your Message" required data-form-input>{{CONTACT_MESSAGE}}</textarea>
        <button class="form-btn" type="submit"{{CONTACT_DISABLED}} data-form-btn><span>Send Message</span></button>
      </form>
    </article>
  </main>
</body>
</html>
"#;

const ROUTINE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Routine</title>
  <link rel="stylesheet" href="/style.css" />
</head>
<body>
  <main>
    <header>
      <h1>Daily Routine</h1>
      <a href="/">Back to portfolio</a>
    </header>

    <form id="postForm" method="post" action="/daily-routine/post">
      <textarea id="postMessage" name="message" rows="3" placeholder="What did your day look like?"></textarea>
      <button type="submit">Post</button>
    </form>

    <section id="postsContainer" data-initial-posts="{{INITIAL_POSTS}}">{{POSTS}}</section>
  </main>
</body>
</html>
"#;

pub fn stylesheet() -> &'static str {
    STYLE
}
