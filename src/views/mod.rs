//! Server-rendered pages. Everything here is derived from a freshly fetched
//! snapshot on each request; nothing is cached between renders.

pub mod admin;
pub mod login;
pub mod manager;
pub mod user;

use chrono::{DateTime, Utc};
use crate::models::{TicketStatus, User};
use crate::notify::{Level, Notice};

const LAYOUT: &str = include_str!("../../templates/layout.html");

pub fn render_page(title: &str, user: &User, notice: Option<&Notice>, content: &str) -> String {
    LAYOUT
        .replace("{{title}}", &escape(title))
        .replace("{{role_label}}", user.role.label())
        .replace("{{user_name}}", &escape(&user.name))
        .replace("{{user_email}}", &escape(&user.email))
        .replace("{{notice}}", &render_notice(notice))
        .replace("{{content}}", content)
}

pub fn render_notice(notice: Option<&Notice>) -> String {
    match notice {
        Some(Notice { level, message }) => {
            let class = match level {
                Level::Success => "notice success",
                Level::Failure => "notice failure",
            };
            format!(r#"<div class="{}" role="status">{}</div>"#, class, escape(message))
        }
        None => String::new(),
    }
}

pub fn status_badge(status: TicketStatus) -> String {
    format!(
        r#"<span class="badge status-{}">{}</span>"#,
        status.as_str().to_lowercase(),
        status.label()
    )
}

pub fn format_date(time: &DateTime<Utc>) -> String {
    time.format("%b %-d, %H:%M").to_string()
}

/// Local part of an email address, used where the UI shows a short name.
pub fn short_name(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_short_name() {
        assert_eq!(short_name("manager@example.com"), "manager");
        assert_eq!(short_name("no-at-sign"), "no-at-sign");
    }

    #[test]
    fn test_page_shows_role_and_escaped_name() {
        let user = User {
            id: 9,
            name: "<b>Eve</b>".into(),
            email: "eve@example.com".into(),
            role: Role::Manager,
        };
        let notice = Notice {
            level: Level::Failure,
            message: "Failed".into(),
        };
        let html = render_page("My work", &user, Some(&notice), "<p>body</p>");
        assert!(html.contains("Manager Dashboard"));
        assert!(html.contains("&lt;b&gt;Eve&lt;/b&gt;"));
        assert!(html.contains(r#"<span class="user-email">eve@example.com</span>"#));
        assert!(html.contains(r#"<div class="notice failure" role="status">Failed</div>"#));
        assert!(html.contains("<p>body</p>"));
    }
}
