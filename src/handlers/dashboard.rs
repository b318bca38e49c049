use axum::{
    extract::{Form, Path, State},
    response::{Html, IntoResponse, Response, Redirect},
};
use tower_sessions::Session;
use crate::errors::{AppError, AppResult};
use crate::models::{AssignForm, CreateTicketForm, StatusForm, Ticket, TicketId, User};
use crate::notify::{self, Level, Notice};
use crate::session;
use crate::state::AppState;
use crate::views;
use super::ensure_manager;

async fn signed_in_user(session: &Session) -> AppResult<User> {
    session::current_user(session)
        .await?
        .ok_or_else(|| AppError::Authentication("Not authenticated".into()))
}

/// Pending notice, replaced by a failure notice when the snapshot could not be loaded.
async fn load_tickets(
    state: &AppState,
    session: &Session,
    user: &User,
) -> AppResult<(Vec<Ticket>, Option<Notice>)> {
    let notice = notify::take(session).await?;
    match state.store.tickets_for(user).await {
        Ok(tickets) => Ok((tickets, notice)),
        Err(e) => {
            tracing::error!("Failed to load tickets for {}: {}", user.email, e);
            Ok((Vec::new(), Some(failure_notice("Failed to load tickets"))))
        }
    }
}

fn failure_notice(message: &str) -> Notice {
    Notice {
        level: Level::Failure,
        message: message.to_string(),
    }
}

pub async fn serve_user_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Response> {
    tracing::info!("Accessing user dashboard");
    let user = signed_in_user(&session).await?;
    let (tickets, notice) = load_tickets(&state, &session, &user).await?;
    Ok(Html(views::user::render(&user, tickets, notice.as_ref())).into_response())
}

pub async fn serve_manager_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Response> {
    tracing::info!("Accessing manager dashboard");
    let user = signed_in_user(&session).await?;
    let (tickets, notice) = load_tickets(&state, &session, &user).await?;
    Ok(Html(views::manager::render(&user, &tickets, notice.as_ref())).into_response())
}

pub async fn serve_admin_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Response> {
    tracing::info!("Accessing admin dashboard");
    let user = signed_in_user(&session).await?;
    let mut notice = notify::take(&session).await?;

    let (tickets, managers) = tokio::join!(state.store.tickets_for(&user), state.store.get_managers());
    let (tickets, managers) = match (tickets, managers) {
        (Ok(tickets), Ok(managers)) => (tickets, managers),
        (Err(e), _) | (_, Err(e)) => {
            tracing::error!("Failed to load admin data: {}", e);
            notice = Some(failure_notice("Failed to load data"));
            (Vec::new(), Vec::new())
        }
    };

    Ok(Html(views::admin::render(&user, &tickets, &managers, notice.as_ref())).into_response())
}

/// Reports the outcome of a mutation and sends the browser back to `to`,
/// which reloads the whole list.
async fn finish(
    session: &Session,
    result: AppResult<Ticket>,
    success: &str,
    failure: &str,
    to: &str,
) -> AppResult<Response> {
    match result {
        Ok(ticket) => {
            tracing::debug!("Mutation on ticket {} succeeded", ticket.id);
            notify::success(session, success).await?;
        }
        Err(e) => {
            tracing::warn!("{}: {}", failure, e);
            notify::failure(session, failure).await?;
        }
    }
    Ok(Redirect::to(to).into_response())
}

pub async fn create_ticket(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CreateTicketForm>,
) -> AppResult<Response> {
    let user = signed_in_user(&session).await?;
    let result = match form.into_new_ticket(&user.email) {
        Ok(draft) => state.store.create_ticket(draft).await,
        Err(e) => Err(e),
    };
    finish(&session, result, "Ticket created", "Failed to create ticket", "/dashboard").await
}

pub async fn update_ticket_status(
    State(state): State<AppState>,
    session: Session,
    Path(ticket_id): Path<TicketId>,
    Form(form): Form<StatusForm>,
) -> AppResult<Response> {
    let result = state.store.update_ticket_status(ticket_id, form.status).await;
    finish(&session, result, "Ticket status updated", "Failed to update ticket status", "/manager").await
}

pub async fn assign_ticket(
    State(state): State<AppState>,
    session: Session,
    Path(ticket_id): Path<TicketId>,
    Form(form): Form<AssignForm>,
) -> AppResult<Response> {
    let result = match ensure_manager(&state, &form.manager_email) {
        Ok(()) => state.store.assign_ticket(ticket_id, &form.manager_email).await,
        Err(e) => Err(e),
    };
    finish(&session, result, "Ticket reassigned", "Failed to reassign ticket", "/admin").await
}
