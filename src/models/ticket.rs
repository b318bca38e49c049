use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::fmt;
use super::user::Role;

pub type TicketId = u32;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    NotStarted,
    InProgress,
    Done,
    Rejected,
}

impl TicketStatus {
    /// Board order, also the order of the status selector.
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::NotStarted,
        TicketStatus::InProgress,
        TicketStatus::Done,
        TicketStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::NotStarted => "NOT_STARTED",
            TicketStatus::InProgress => "IN_PROGRESS",
            TicketStatus::Done => "DONE",
            TicketStatus::Rejected => "REJECTED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::NotStarted => "Not started",
            TicketStatus::InProgress => "In progress",
            TicketStatus::Done => "Done",
            TicketStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_by: String,          // owner email, fixed at creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>, // manager email
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Ticket {
    /// Users see what they filed, managers what is assigned to them, admins everything.
    pub fn is_visible_to(&self, email: &str, role: Role) -> bool {
        match role {
            Role::User => self.created_by == email,
            Role::Manager => self.assigned_to.as_deref() == Some(email),
            Role::Admin => true,
        }
    }
}

/// Caller-supplied fields of a ticket; id, status and timestamps are set by the store.
#[derive(Debug, Clone, Default)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub created_by: String,
    pub assigned_to: Option<String>,
}

impl NewTicket {
    pub fn into_ticket(self, id: TicketId, created_at: DateTime<Utc>) -> Ticket {
        Ticket {
            id,
            title: self.title,
            description: self.description,
            status: TicketStatus::NotStarted,
            category: self.category,
            created_by: self.created_by,
            assigned_to: self.assigned_to,
            created_at,
            updated_at: None,
        }
    }
}

/// `max(existing ∪ {0}) + 1`
pub fn next_ticket_id<I>(existing: I) -> TicketId
where
    I: IntoIterator<Item = TicketId>,
{
    existing.into_iter().max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_ticket_id() {
        assert_eq!(next_ticket_id(Vec::new()), 1);
        assert_eq!(next_ticket_id(vec![1, 2, 3]), 4);
        // gaps are not reused
        assert_eq!(next_ticket_id(vec![7, 2]), 8);
    }

    #[test]
    fn test_visibility_rules() {
        let mut ticket = NewTicket {
            title: "t".into(),
            created_by: "user@example.com".into(),
            ..Default::default()
        }
        .into_ticket(1, Utc::now());

        assert!(ticket.is_visible_to("user@example.com", Role::User));
        assert!(!ticket.is_visible_to("other@example.com", Role::User));
        assert!(!ticket.is_visible_to("manager@example.com", Role::Manager));
        assert!(ticket.is_visible_to("anyone", Role::Admin));

        ticket.assigned_to = Some("manager@example.com".into());
        assert!(ticket.is_visible_to("manager@example.com", Role::Manager));
        // a manager's own filing does not make it visible on their board
        assert!(!ticket.is_visible_to("user@example.com", Role::Manager));
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_value(TicketStatus::NotStarted).unwrap(), "NOT_STARTED");
        assert_eq!(serde_json::to_value(TicketStatus::InProgress).unwrap(), "IN_PROGRESS");
        assert_eq!(serde_json::from_value::<TicketStatus>("REJECTED".into()).unwrap(), TicketStatus::Rejected);
        assert!(serde_json::from_value::<TicketStatus>("done".into()).is_err());
    }

    #[test]
    fn test_ticket_json_uses_camel_case_and_omits_absent_fields() {
        let ticket = NewTicket {
            title: "A".into(),
            description: "B".into(),
            created_by: "user@example.com".into(),
            ..Default::default()
        }
        .into_ticket(4, Utc::now());

        let json = serde_json::to_value(&ticket).unwrap();
        assert_eq!(json["createdBy"], "user@example.com");
        assert_eq!(json["status"], "NOT_STARTED");
        assert!(json.get("updatedAt").is_none());
        assert!(json.get("assignedTo").is_none());
        assert!(json.get("category").is_none());
    }
}
