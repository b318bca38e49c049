mod auth;
mod dashboard;
pub mod api;

use crate::errors::{AppError, AppResult};
use crate::models::Role;
use crate::state::AppState;

pub use auth::{serve_login_page, handle_login, handle_logout, root_redirect, not_found};
pub use dashboard::{
    serve_user_dashboard, serve_manager_dashboard, serve_admin_dashboard,
    create_ticket, update_ticket_status, assign_ticket,
};

/// Reassignment targets must be known managers.
fn ensure_manager(state: &AppState, email: &str) -> AppResult<()> {
    match state.store.find_user_by_email(email) {
        Some(user) if user.role == Role::Manager => Ok(()),
        _ => Err(AppError::Validation(format!("{} is not a manager", email))),
    }
}
