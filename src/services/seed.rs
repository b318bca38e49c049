// Fixed identities and tickets loaded at startup.
use chrono::{DateTime, Utc};
use crate::models::{Role, Ticket, TicketStatus, User};

pub const USER_EMAIL: &str = "user@example.com";
pub const MANAGER_EMAIL: &str = "manager@example.com";
pub const ADMIN_EMAIL: &str = "admin@example.com";

pub fn seed_users() -> Vec<User> {
    vec![
        User { id: 1, name: "Sam User".into(), email: USER_EMAIL.into(), role: Role::User },
        User { id: 2, name: "Morgan Manager".into(), email: MANAGER_EMAIL.into(), role: Role::Manager },
        User { id: 3, name: "Alex Admin".into(), email: ADMIN_EMAIL.into(), role: Role::Admin },
    ]
}

pub fn seed_tickets() -> Vec<Ticket> {
    vec![
        seed_ticket(
            1,
            "Login fails on mobile",
            "Signing in from a mobile device returns a 500 error",
            TicketStatus::InProgress,
            "Authentication",
            "2025-10-14T10:00:00Z",
        ),
        seed_ticket(
            2,
            "Payment gateway error",
            "Checkout fails while the payment is being processed",
            TicketStatus::NotStarted,
            "Payments",
            "2025-10-14T09:30:00Z",
        ),
        seed_ticket(
            3,
            "Slow dashboard",
            "The dashboard takes a long time to load with large data sets",
            TicketStatus::Done,
            "Performance",
            "2025-10-13T14:00:00Z",
        ),
    ]
}

fn seed_ticket(
    id: u32,
    title: &str,
    description: &str,
    status: TicketStatus,
    category: &str,
    created_at: &str,
) -> Ticket {
    Ticket {
        id,
        title: title.into(),
        description: description.into(),
        status,
        category: Some(category.into()),
        created_by: USER_EMAIL.into(),
        assigned_to: Some(MANAGER_EMAIL.into()),
        created_at: created_at.parse::<DateTime<Utc>>().unwrap_or_default(),
        updated_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_identities_are_unique() {
        let users = seed_users();
        let emails: HashSet<_> = users.iter().map(|u| u.email.as_str()).collect();
        let ids: HashSet<_> = users.iter().map(|u| u.id).collect();
        assert_eq!(emails.len(), 3);
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_seed_timestamps_parse() {
        let tickets = seed_tickets();
        assert_eq!(tickets.len(), 3);
        assert_eq!(tickets[0].created_at.to_rfc3339(), "2025-10-14T10:00:00+00:00");
        assert!(tickets.iter().all(|t| t.updated_at.is_none()));
    }
}
