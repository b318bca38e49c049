use crate::models::{Ticket, TicketStatus, User};
use crate::notify::Notice;
use super::{escape, format_date, render_page, short_name};

pub struct Column<'a> {
    pub status: TicketStatus,
    pub tickets: Vec<&'a Ticket>,
}

/// One column per status, in board order, including empty ones.
pub fn columns(tickets: &[Ticket]) -> Vec<Column<'_>> {
    TicketStatus::ALL
        .into_iter()
        .map(|status| Column {
            status,
            tickets: tickets.iter().filter(|t| t.status == status).collect(),
        })
        .collect()
}

pub fn render(user: &User, tickets: &[Ticket], notice: Option<&Notice>) -> String {
    let board = columns(tickets)
        .iter()
        .map(render_column)
        .collect::<Vec<_>>()
        .join("\n");

    let content = format!(
        r#"<p class="subtitle">Manage the tickets assigned to you</p>
        <section class="board">
        {}
        </section>"#,
        board
    );

    render_page("My work", user, notice, &content)
}

fn render_column(column: &Column<'_>) -> String {
    let cards = if column.tickets.is_empty() {
        r#"<div class="empty-column">No tickets</div>"#.to_string()
    } else {
        column.tickets.iter().map(|t| card(t)).collect::<Vec<_>>().join("\n")
    };

    format!(
        r#"<div class="column" data-status="{}">
            <h2>{} <span class="count">{}</span></h2>
            {}
        </div>"#,
        column.status,
        column.status.label(),
        column.tickets.len(),
        cards
    )
}

fn card(ticket: &Ticket) -> String {
    let options = TicketStatus::ALL
        .iter()
        .map(|status| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                status,
                if *status == ticket.status { " selected" } else { "" },
                status.label()
            )
        })
        .collect::<String>();
    let category = ticket
        .category
        .as_deref()
        .map(|c| format!(r#"<p class="category">{}</p>"#, escape(c)))
        .unwrap_or_default();

    format!(
        r#"<article class="ticket-card" data-ticket-id="{id}">
            <h3>{title}</h3>
            {category}
            <p class="description">{description}</p>
            <form method="post" action="/manager/tickets/{id}/status">
                <select name="status">{options}</select>
                <button type="submit">Update</button>
            </form>
            <footer><span class="created">{created}</span><span class="reporter">{reporter}</span></footer>
        </article>"#,
        id = ticket.id,
        title = escape(&ticket.title),
        category = category,
        description = escape(&ticket.description),
        options = options,
        created = format_date(&ticket.created_at),
        reporter = escape(short_name(&ticket.created_by)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::seed;

    #[test]
    fn test_columns_group_by_status_in_board_order() {
        let tickets = seed::seed_tickets();
        let columns = columns(&tickets);
        let summary: Vec<_> = columns
            .iter()
            .map(|c| (c.status, c.tickets.iter().map(|t| t.id).collect::<Vec<_>>()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (TicketStatus::NotStarted, vec![2]),
                (TicketStatus::InProgress, vec![1]),
                (TicketStatus::Done, vec![3]),
                (TicketStatus::Rejected, vec![]),
            ]
        );
    }

    #[test]
    fn test_render_marks_current_status_and_empty_columns() {
        let manager = User {
            id: 2,
            name: "Morgan Manager".into(),
            email: seed::MANAGER_EMAIL.into(),
            role: crate::models::Role::Manager,
        };
        let html = render(&manager, &seed::seed_tickets(), None);
        assert!(html.contains(r#"action="/manager/tickets/1/status""#));
        assert!(html.contains(r#"<option value="IN_PROGRESS" selected>"#));
        assert_eq!(html.matches("No tickets").count(), 1);
    }
}
