use crate::models::{Ticket, User};
use crate::notify::Notice;
use super::{escape, format_date, render_page, short_name, status_badge};

pub fn sort_newest_first(tickets: &mut [Ticket]) {
    tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

pub fn render(user: &User, mut tickets: Vec<Ticket>, notice: Option<&Notice>) -> String {
    sort_newest_first(&mut tickets);

    let list = if tickets.is_empty() {
        r#"<div class="empty-state">
            <h3>No requests yet</h3>
            <p>Create your first support request</p>
        </div>"#
            .to_string()
    } else {
        tickets.iter().map(ticket_card).collect::<Vec<_>>().join("\n")
    };

    let content = format!(
        r#"<p class="subtitle">Track and manage your support tickets</p>
        <form method="post" action="/dashboard/tickets" class="new-ticket">
            <label for="title">Title</label>
            <input id="title" name="title" placeholder="Short summary of the problem" required>
            <label for="category">Category</label>
            <input id="category" name="category" placeholder="e.g. Authentication, Payments, Performance">
            <label for="description">Description</label>
            <textarea id="description" name="description" rows="4" required></textarea>
            <button type="submit">Create request</button>
        </form>
        <section class="ticket-grid">
        {}
        </section>"#,
        list
    );

    render_page("My requests", user, notice, &content)
}

fn ticket_card(ticket: &Ticket) -> String {
    let category = ticket
        .category
        .as_deref()
        .map(|c| format!(r#"<p class="category">{}</p>"#, escape(c)))
        .unwrap_or_default();
    let assignee = ticket
        .assigned_to
        .as_deref()
        .map(|a| format!(r#"<span class="assignee">Assignee: {}</span>"#, escape(short_name(a))))
        .unwrap_or_default();

    format!(
        r#"<article class="ticket-card" data-ticket-id="{}">
            <h3>{}</h3>
            {}
            {}
            <p class="description">{}</p>
            <footer><span class="created">{}</span>{}</footer>
        </article>"#,
        ticket.id,
        escape(&ticket.title),
        category,
        status_badge(ticket.status),
        escape(&ticket.description),
        format_date(&ticket.created_at),
        assignee
    )
}
