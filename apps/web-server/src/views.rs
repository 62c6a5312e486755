//! HTML views.
//!
//! Rendering is deliberately thin: each page is assembled as a string around
//! a shared layout. All user-supplied text goes through [`escape`].

use serde::Deserialize;

use vernoquill_core::domain::Post;

/// Flash-style messages carried in `success`/`error` query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct Flash {
    pub success: Option<String>,
    pub error: Option<String>,
}

/// Navigation state rendered on every page.
#[derive(Debug, Default)]
pub struct Nav {
    pub username: Option<String>,
}

impl Nav {
    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }
}

/// Minimal HTML escaping for user-supplied text.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn flash_block(flash: &Flash) -> String {
    let mut block = String::new();
    if let Some(success) = &flash.success {
        block.push_str(&format!(
            r#"<div class="flash flash-success">{}</div>"#,
            escape(success)
        ));
    }
    if let Some(error) = &flash.error {
        block.push_str(&format!(
            r#"<div class="flash flash-error">{}</div>"#,
            escape(error)
        ));
    }
    block
}

fn nav_block(nav: &Nav) -> String {
    let account = match &nav.username {
        Some(username) => format!(
            concat!(
                r#"<a href="/dashboard">Dashboard</a> "#,
                r#"<span class="nav-user">{}</span> "#,
                r#"<form class="nav-logout" method="post" action="/logout">"#,
                r#"<button type="submit">Log out</button></form>"#
            ),
            escape(username)
        ),
        None => r#"<a href="/login">Writer login</a>"#.to_string(),
    };
    format!(
        r#"<nav><a href="/">Home</a> <a href="/about">About</a> {}</nav>"#,
        account
    )
}

fn layout(title: &str, nav: &Nav, flash: &Flash, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en"><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{title} - Vernoquill</title>",
            r#"<link rel="stylesheet" href="/static/css/style.css">"#,
            "</head><body><header><h1>Vernoquill</h1>{nav}</header>",
            "{flash}<main>{body}</main>",
            "<footer>Vernoquill - a quiet place to write</footer>",
            "</body></html>"
        ),
        title = escape(title),
        nav = nav_block(nav),
        flash = flash_block(flash),
        body = body,
    )
}

fn post_card(post: &Post) -> String {
    format!(
        concat!(
            r#"<article class="post-card">"#,
            r#"<h2><a href="/post/{id}">{title}</a></h2>"#,
            r#"<p class="post-meta">by {author} on {date}</p>"#,
            "<p>{excerpt}</p></article>"
        ),
        id = post.id,
        title = escape(&post.title),
        author = escape(&post.author),
        date = post.date,
        excerpt = escape(&post.excerpt),
    )
}

fn post_form(action: &str, submit: &str, post: Option<&Post>) -> String {
    let (title, author, content) = match post {
        Some(p) => (escape(&p.title), escape(&p.author), escape(&p.content)),
        None => (String::new(), String::new(), String::new()),
    };
    format!(
        concat!(
            r#"<form method="post" action="{action}">"#,
            r#"<label>Title <input name="title" value="{title}"></label>"#,
            r#"<label>Author <input name="author" value="{author}"></label>"#,
            r#"<label>Content <textarea name="content">{content}</textarea></label>"#,
            r#"<button type="submit">{submit}</button></form>"#
        ),
        action = action,
        title = title,
        author = author,
        content = content,
        submit = submit,
    )
}

pub fn index_page(posts: &[Post], flash: &Flash, nav: &Nav) -> String {
    let cards: String = posts.iter().map(post_card).collect();
    let body = if posts.is_empty() {
        "<p>No posts yet.</p>".to_string()
    } else {
        cards
    };
    layout("Vernoquill Blog", nav, flash, &body)
}

pub fn post_page(post: &Post, flash: &Flash, nav: &Nav) -> String {
    let mut body = format!(
        concat!(
            "<article><h2>{title}</h2>",
            r#"<p class="post-meta">by {author} on {date}</p>"#,
            "<div>{content}</div></article>"
        ),
        title = escape(&post.title),
        author = escape(&post.author),
        date = post.date,
        content = escape(&post.content),
    );
    if nav.is_authenticated() {
        body.push_str(&format!(
            concat!(
                r#"<p><a href="/post/{id}/edit">Edit</a></p>"#,
                r#"<form method="post" action="/post/{id}/delete">"#,
                r#"<button type="submit">Delete</button></form>"#
            ),
            id = post.id
        ));
    }
    layout(&post.title, nav, flash, &body)
}

pub fn edit_page(post: &Post, flash: &Flash, nav: &Nav) -> String {
    let body = post_form(
        &format!("/post/{}/edit", post.id),
        "Save changes",
        Some(post),
    );
    layout(&format!("Edit: {}", post.title), nav, flash, &body)
}

pub fn login_page(flash: &Flash, nav: &Nav) -> String {
    let body = concat!(
        r#"<form method="post" action="/login">"#,
        r#"<label>Username <input name="username"></label>"#,
        r#"<label>Password <input type="password" name="password"></label>"#,
        r#"<button type="submit">Log in</button></form>"#
    );
    layout("Writer Login", nav, flash, body)
}

pub fn dashboard_page(posts: &[Post], flash: &Flash, nav: &Nav) -> String {
    let mut body = String::from("<h2>Writer Dashboard</h2>");
    body.push_str(&post_form("/posts", "Publish", None));
    body.push_str("<h3>Your posts</h3>");
    for post in posts {
        body.push_str(&format!(
            concat!(
                r#"<div class="dash-row">{title} "#,
                r#"<a href="/post/{id}/edit">edit</a> "#,
                r#"<form class="dash-delete" method="post" action="/post/{id}/delete">"#,
                r#"<button type="submit">delete</button></form></div>"#
            ),
            title = escape(&post.title),
            id = post.id,
        ));
    }
    layout("Writer Dashboard", nav, flash, &body)
}

pub fn about_page(nav: &Nav) -> String {
    let body = concat!(
        "<h2>About Vernoquill</h2>",
        "<p>Vernoquill is a small server-rendered blog. Posts live in memory ",
        "and reset when the server restarts.</p>"
    );
    layout("About Vernoquill", nav, &Flash::default(), body)
}

pub fn not_found_page() -> String {
    layout(
        "Post Not Found",
        &Nav::default(),
        &Flash::default(),
        r#"<h2>404</h2><p>That page does not exist.</p><p><a href="/">Back home</a></p>"#,
    )
}

pub fn internal_error_page() -> String {
    layout(
        "Something went wrong",
        &Nav::default(),
        &Flash::default(),
        "<h2>500</h2><p>Something went wrong. Please try again.</p>",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<script>"x" & 'y'</script>"#),
            "&lt;script&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn nav_shows_login_state() {
        let anon = nav_block(&Nav::default());
        assert!(anon.contains("Writer login"));

        let authed = nav_block(&Nav {
            username: Some("writer".to_string()),
        });
        assert!(authed.contains("Dashboard"));
        assert!(authed.contains("writer"));
    }
}
