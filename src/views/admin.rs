use crate::models::{Ticket, TicketStatus, User};
use crate::notify::Notice;
use super::{escape, format_date, render_page, short_name, status_badge};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub done: usize,
}

pub fn stats(tickets: &[Ticket]) -> Stats {
    let count = |status: TicketStatus| tickets.iter().filter(|t| t.status == status).count();
    Stats {
        total: tickets.len(),
        not_started: count(TicketStatus::NotStarted),
        in_progress: count(TicketStatus::InProgress),
        done: count(TicketStatus::Done),
    }
}

pub fn render(user: &User, tickets: &[Ticket], managers: &[User], notice: Option<&Notice>) -> String {
    let stats = stats(tickets);

    let rows = if tickets.is_empty() {
        r#"<tr><td colspan="8" class="empty">No tickets</td></tr>"#.to_string()
    } else {
        tickets
            .iter()
            .map(|t| row(t, managers))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let content = format!(
        r#"<p class="subtitle">Overview of every ticket and its assignee</p>
        <section class="stats">
            <div class="stat" data-stat="total"><span>Total</span><strong>{}</strong></div>
            <div class="stat" data-stat="not-started"><span>Not started</span><strong>{}</strong></div>
            <div class="stat" data-stat="in-progress"><span>In progress</span><strong>{}</strong></div>
            <div class="stat" data-stat="done"><span>Done</span><strong>{}</strong></div>
        </section>
        <table class="tickets">
            <thead>
                <tr><th>ID</th><th>Title</th><th>Category</th><th>Status</th><th>Reporter</th><th>Assignee</th><th>Created</th><th>Reassign</th></tr>
            </thead>
            <tbody>
            {}
            </tbody>
        </table>"#,
        stats.total, stats.not_started, stats.in_progress, stats.done, rows
    );

    render_page("All tickets", user, notice, &content)
}

fn row(ticket: &Ticket, managers: &[User]) -> String {
    let current = ticket.assigned_to.as_deref();
    let mut options = String::new();
    if current.is_none() {
        options.push_str(r#"<option value="" selected disabled>Select a manager</option>"#);
    }
    for manager in managers {
        options.push_str(&format!(
            r#"<option value="{}"{}>{} ({})</option>"#,
            escape(&manager.email),
            if current == Some(manager.email.as_str()) { " selected" } else { "" },
            escape(&manager.name),
            escape(&manager.email)
        ));
    }

    format!(
        r#"<tr data-ticket-id="{id}">
            <td>#{id}</td>
            <td>{title}</td>
            <td>{category}</td>
            <td>{status}</td>
            <td>{reporter}</td>
            <td>{assignee}</td>
            <td>{created}</td>
            <td>
                <form method="post" action="/admin/tickets/{id}/assign">
                    <select name="managerEmail" required>{options}</select>
                    <button type="submit">Reassign</button>
                </form>
            </td>
        </tr>"#,
        id = ticket.id,
        title = escape(&ticket.title),
        category = ticket.category.as_deref().map(escape).unwrap_or_else(|| "-".to_string()),
        status = status_badge(ticket.status),
        reporter = escape(short_name(&ticket.created_by)),
        assignee = current.map(|a| escape(short_name(a))).unwrap_or_else(|| "Unassigned".to_string()),
        created = format_date(&ticket.created_at),
        options = options,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::services::seed;

    #[test]
    fn test_stats() {
        assert_eq!(
            stats(&seed::seed_tickets()),
            Stats { total: 3, not_started: 1, in_progress: 1, done: 1 }
        );
        assert_eq!(stats(&[]), Stats::default());
    }

    #[test]
    fn test_rejected_counts_only_in_total() {
        let mut tickets = seed::seed_tickets();
        tickets[0].status = TicketStatus::Rejected;
        let stats = stats(&tickets);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.in_progress, 0);
    }

    #[test]
    fn test_reassign_select_preselects_current_manager() {
        let users = seed::seed_users();
        let admin = users.iter().find(|u| u.role == Role::Admin).unwrap();
        let managers: Vec<_> = users.iter().filter(|u| u.role == Role::Manager).cloned().collect();
        let mut tickets = seed::seed_tickets();
        tickets[2].assigned_to = None;

        let html = render(admin, &tickets, &managers, None);
        assert!(html.contains(r#"<option value="manager@example.com" selected>"#));
        assert!(html.contains("Select a manager"));
        assert!(html.contains("Unassigned"));
        assert!(html.contains(r#"action="/admin/tickets/3/assign""#));
    }

    #[test]
    fn test_row_shows_category_or_dash() {
        let mut tickets = seed::seed_tickets();
        tickets[0].category = Some("Hardware & Peripherals".into());
        tickets[1].category = None;

        let first = row(&tickets[0], &[]);
        assert!(first.contains("<td>Hardware &amp; Peripherals</td>"));
        let second = row(&tickets[1], &[]);
        assert!(second.contains("<td>-</td>"));
    }
}
