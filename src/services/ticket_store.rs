use std::sync::Arc;
use bcrypt::{hash, verify};
use chrono::Utc;
use crate::errors::{AppError, AppResult};
use crate::models::{AuthResponse, NewTicket, Role, Ticket, TicketId, TicketStatus, User};
use super::latency::{Latency, Op};
use super::repository::{InMemoryTicketRepository, TicketRepository};
use super::seed;

pub const TOKEN_PREFIX: &str = "mock-token-";

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub fn token_for(user_id: u32) -> String {
    format!("{}{}", TOKEN_PREFIX, user_id)
}

/// Inverse of `token_for`: only the canonical spelling of an id is accepted.
pub fn user_id_from_token(token: &str) -> Option<u32> {
    let id: u32 = token.strip_prefix(TOKEN_PREFIX)?.parse().ok()?;
    (token_for(id) == token).then_some(id)
}

struct UserRecord {
    user: User,
    password_hash: String,
}

/// Mock backend: owns the ticket collection and the user table.
pub struct TicketStore<R = InMemoryTicketRepository> {
    repo: Arc<R>,
    users: Arc<Vec<UserRecord>>,
    latency: Latency,
}

impl TicketStore {
    /// Store holding the seed users and tickets. Every user shares `password`.
    pub fn seeded(latency: Latency, password: &str, bcrypt_cost: u32) -> AppResult<Self> {
        let repo = InMemoryTicketRepository::new(seed::seed_tickets());
        Self::with_repository(repo, seed::seed_users(), password, bcrypt_cost, latency)
    }
}

impl<R: TicketRepository> TicketStore<R> {
    pub fn with_repository(
        repo: R,
        users: Vec<User>,
        password: &str,
        bcrypt_cost: u32,
        latency: Latency,
    ) -> AppResult<Self> {
        let password_hash = hash(password, bcrypt_cost)?;
        let users = users
            .into_iter()
            .map(|user| UserRecord {
                user,
                password_hash: password_hash.clone(),
            })
            .collect();

        Ok(Self {
            repo: Arc::new(repo),
            users: Arc::new(users),
            latency,
        })
    }

    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthResponse> {
        self.latency.wait(Op::Write).await;

        let record = self
            .users
            .iter()
            .find(|r| r.user.email == email)
            .ok_or_else(|| {
                tracing::info!("Login rejected, unknown email: {}", email);
                AppError::Authentication(INVALID_CREDENTIALS.into())
            })?;

        if !verify(password, &record.password_hash)? {
            tracing::info!("Login rejected, wrong password for: {}", email);
            return Err(AppError::Authentication(INVALID_CREDENTIALS.into()));
        }

        tracing::info!("User {} logged in as {}", email, record.user.role);
        Ok(AuthResponse {
            token: token_for(record.user.id),
            user: record.user.clone(),
        })
    }

    pub async fn get_current_user(&self, token: &str) -> AppResult<User> {
        self.latency.wait(Op::Read).await;

        user_id_from_token(token)
            .and_then(|id| self.users.iter().find(|r| r.user.id == id))
            .map(|r| r.user.clone())
            .ok_or_else(|| AppError::Authentication("User not found".into()))
    }

    /// Tickets visible to the actor. An unrecognized role sees nothing.
    pub async fn get_tickets(&self, actor_email: &str, actor_role: &str) -> AppResult<Vec<Ticket>> {
        self.latency.wait(Op::Write).await;

        let role = match actor_role.parse::<Role>() {
            Ok(role) => role,
            Err(e) => {
                tracing::warn!("No tickets visible to {}: {}", actor_email, e);
                return Ok(Vec::new());
            }
        };

        let email = actor_email.to_string();
        let tickets = self.repo.list_by(move |t| t.is_visible_to(&email, role)).await?;

        tracing::debug!("{} ({}) sees {} tickets", actor_email, role, tickets.len());
        Ok(tickets)
    }

    /// Single ticket, provided the actor may see it.
    pub async fn get_ticket(&self, ticket_id: TicketId, actor: &User) -> AppResult<Ticket> {
        self.latency.wait(Op::Read).await;

        self.repo
            .find_by_id(ticket_id)
            .await?
            .filter(|t| t.is_visible_to(&actor.email, actor.role))
            .ok_or_else(|| not_found(ticket_id))
    }

    pub async fn tickets_for(&self, user: &User) -> AppResult<Vec<Ticket>> {
        self.get_tickets(&user.email, user.role.as_str()).await
    }

    pub async fn create_ticket(&self, draft: NewTicket) -> AppResult<Ticket> {
        self.latency.wait(Op::Write).await;

        let ticket = self.repo.insert(draft, Utc::now()).await?;
        tracing::info!("Ticket {} created by {}", ticket.id, ticket.created_by);
        Ok(ticket)
    }

    pub async fn update_ticket_status(&self, ticket_id: TicketId, status: TicketStatus) -> AppResult<Ticket> {
        self.latency.wait(Op::Write).await;

        let ticket = self
            .repo
            .update(ticket_id, |t| {
                t.status = status;
                t.updated_at = Some(Utc::now());
            })
            .await?
            .ok_or_else(|| not_found(ticket_id))?;

        tracing::info!("Ticket {} moved to {}", ticket_id, status);
        Ok(ticket)
    }

    pub async fn assign_ticket(&self, ticket_id: TicketId, manager_email: &str) -> AppResult<Ticket> {
        self.latency.wait(Op::Write).await;

        let assignee = manager_email.to_string();
        let ticket = self
            .repo
            .update(ticket_id, move |t| {
                t.assigned_to = Some(assignee);
                t.updated_at = Some(Utc::now());
            })
            .await?
            .ok_or_else(|| not_found(ticket_id))?;

        tracing::info!("Ticket {} assigned to {}", ticket_id, manager_email);
        Ok(ticket)
    }

    pub async fn get_managers(&self) -> AppResult<Vec<User>> {
        self.latency.wait(Op::Read).await;

        Ok(self
            .users
            .iter()
            .filter(|r| r.user.role == Role::Manager)
            .map(|r| r.user.clone())
            .collect())
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.users
            .iter()
            .find(|r| r.user.email == email)
            .map(|r| r.user.clone())
    }
}

fn not_found(ticket_id: TicketId) -> AppError {
    AppError::NotFound(format!("Ticket {} not found", ticket_id))
}

impl<R> Clone for TicketStore<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            users: self.users.clone(),
            latency: self.latency,
        }
    }
}
