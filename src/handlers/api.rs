//! JSON surface of the ticket store, authenticated with `Bearer <token>`.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path, State},
    http::{header, request::Parts, StatusCode},
    Json,
};
use crate::errors::{ApiError, AppError, AppResult};
use crate::models::{
    AssignForm, AuthResponse, CreateTicketForm, LoginForm, Role, StatusForm, Ticket, TicketId, User,
};
use crate::state::AppState;
use super::ensure_manager;

type ApiResult<T> = Result<T, ApiError>;

/// Identity behind the request's bearer token.
pub struct Actor(pub User);

#[async_trait]
impl FromRequestParts<AppState> for Actor {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| AppError::Authentication("Missing bearer token".into()))?;

        let user = state.store.get_current_user(token.trim()).await?;
        Ok(Actor(user))
    }
}

fn require_role(actor: &User, allowed: &[Role]) -> AppResult<()> {
    if allowed.contains(&actor.role) {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "role {} may not perform this action",
            actor.role
        )))
    }
}

pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<LoginForm>,
) -> ApiResult<Json<AuthResponse>> {
    let auth = state.store.login(&credentials.email, &credentials.password).await?;
    Ok(Json(auth))
}

pub async fn me(Actor(user): Actor) -> Json<User> {
    Json(user)
}

pub async fn list_tickets(
    State(state): State<AppState>,
    Actor(user): Actor,
) -> ApiResult<Json<Vec<Ticket>>> {
    Ok(Json(state.store.tickets_for(&user).await?))
}

pub async fn get_ticket(
    State(state): State<AppState>,
    Actor(user): Actor,
    Path(ticket_id): Path<TicketId>,
) -> ApiResult<Json<Ticket>> {
    Ok(Json(state.store.get_ticket(ticket_id, &user).await?))
}

pub async fn create_ticket(
    State(state): State<AppState>,
    Actor(user): Actor,
    Json(form): Json<CreateTicketForm>,
) -> ApiResult<(StatusCode, Json<Ticket>)> {
    let draft = form.into_new_ticket(&user.email)?;
    let ticket = state.store.create_ticket(draft).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

pub async fn update_status(
    State(state): State<AppState>,
    Actor(user): Actor,
    Path(ticket_id): Path<TicketId>,
    Json(form): Json<StatusForm>,
) -> ApiResult<Json<Ticket>> {
    require_role(&user, &[Role::Manager, Role::Admin])?;
    Ok(Json(state.store.update_ticket_status(ticket_id, form.status).await?))
}

pub async fn assign_ticket(
    State(state): State<AppState>,
    Actor(user): Actor,
    Path(ticket_id): Path<TicketId>,
    Json(form): Json<AssignForm>,
) -> ApiResult<Json<Ticket>> {
    require_role(&user, &[Role::Admin])?;
    ensure_manager(&state, &form.manager_email)?;
    Ok(Json(state.store.assign_ticket(ticket_id, &form.manager_email).await?))
}

pub async fn managers(
    State(state): State<AppState>,
    Actor(_): Actor,
) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(state.store.get_managers().await?))
}
