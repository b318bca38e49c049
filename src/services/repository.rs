//! Storage seam for tickets.
//!
//! The ticket store only talks to [`TicketRepository`], so the visibility and
//! status rules do not depend on how tickets are kept. The one backend here is
//! an in-memory vector; every mutation runs entirely under its write lock.

use std::future::Future;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use crate::errors::AppResult;
use crate::models::{next_ticket_id, NewTicket, Ticket, TicketId};

pub trait TicketRepository: Send + Sync {
    fn find_by_id(&self, id: TicketId) -> impl Future<Output = AppResult<Option<Ticket>>> + Send;

    fn list_by<P>(&self, predicate: P) -> impl Future<Output = AppResult<Vec<Ticket>>> + Send
    where
        P: Fn(&Ticket) -> bool + Send;

    /// Stores a new ticket, assigning the next id in the same step.
    fn insert(
        &self,
        draft: NewTicket,
        created_at: DateTime<Utc>,
    ) -> impl Future<Output = AppResult<Ticket>> + Send;

    /// Applies `apply` to the ticket and returns the updated copy, or `None` if absent.
    fn update<F>(&self, id: TicketId, apply: F) -> impl Future<Output = AppResult<Option<Ticket>>> + Send
    where
        F: FnOnce(&mut Ticket) + Send;
}

#[derive(Debug, Default)]
pub struct InMemoryTicketRepository {
    tickets: RwLock<Vec<Ticket>>,
}

impl InMemoryTicketRepository {
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self {
            tickets: RwLock::new(tickets),
        }
    }
}

impl TicketRepository for InMemoryTicketRepository {
    async fn find_by_id(&self, id: TicketId) -> AppResult<Option<Ticket>> {
        let tickets = self.tickets.read().await;
        Ok(tickets.iter().find(|t| t.id == id).cloned())
    }

    async fn list_by<P>(&self, predicate: P) -> AppResult<Vec<Ticket>>
    where
        P: Fn(&Ticket) -> bool + Send,
    {
        let tickets = self.tickets.read().await;
        Ok(tickets.iter().filter(|t| predicate(*t)).cloned().collect())
    }

    async fn insert(&self, draft: NewTicket, created_at: DateTime<Utc>) -> AppResult<Ticket> {
        let mut tickets = self.tickets.write().await;
        let id = next_ticket_id(tickets.iter().map(|t| t.id));
        let ticket = draft.into_ticket(id, created_at);
        tickets.push(ticket.clone());
        Ok(ticket)
    }

    async fn update<F>(&self, id: TicketId, apply: F) -> AppResult<Option<Ticket>>
    where
        F: FnOnce(&mut Ticket) + Send,
    {
        let mut tickets = self.tickets.write().await;
        Ok(tickets.iter_mut().find(|t| t.id == id).map(|ticket| {
            apply(ticket);
            ticket.clone()
        }))
    }
}
