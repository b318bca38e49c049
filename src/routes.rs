//! Route table and router assembly.

use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tower_sessions::{cookie::SameSite, MemoryStore, SessionManagerLayer};
use axum::middleware::from_fn;
use crate::handlers;
use crate::middleware;
use crate::models::Role;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Reachable without a session.
    Public,
    /// Requires a session whose role is in the set.
    Roles(&'static [Role]),
    /// `/`: sends the visitor to the dashboard for their role.
    RoleRedirect,
    /// Bearer-token JSON API, not guarded by the session.
    Api,
}

pub struct RouteEntry {
    pub path: &'static str,
    pub access: Access,
}

/// Paths below an entry inherit its access rule.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry { path: "/login", access: Access::Public },
    RouteEntry { path: "/logout", access: Access::Public },
    RouteEntry { path: "/dashboard", access: Access::Roles(&[Role::User]) },
    RouteEntry { path: "/manager", access: Access::Roles(&[Role::Manager]) },
    RouteEntry { path: "/admin", access: Access::Roles(&[Role::Admin]) },
    RouteEntry { path: "/api", access: Access::Api },
    RouteEntry { path: "/", access: Access::RoleRedirect },
];

/// Access rule for a request path, `None` for paths outside the table.
pub fn access_for(path: &str) -> Option<Access> {
    ROUTES
        .iter()
        .find(|entry| {
            path == entry.path
                || (entry.path != "/"
                    && path
                        .strip_prefix(entry.path)
                        .is_some_and(|rest| rest.starts_with('/')))
        })
        .map(|entry| entry.access)
}

pub fn app(state: AppState) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(state.config.session.secure)
        .with_same_site(SameSite::Lax)
        .with_name(state.config.session.cookie_name.clone());
    let max_body_size = state.config.http.max_body_size;

    let api = Router::new()
        .route("/login", post(handlers::api::login))
        .route("/me", get(handlers::api::me))
        .route("/tickets", get(handlers::api::list_tickets).post(handlers::api::create_ticket))
        .route("/tickets/:id", get(handlers::api::get_ticket))
        .route("/tickets/:id/status", patch(handlers::api::update_status))
        .route("/tickets/:id/assignee", patch(handlers::api::assign_ticket))
        .route("/managers", get(handlers::api::managers));

    Router::new()
        // Auth routes
        .route("/", get(handlers::root_redirect))
        .route("/login", get(handlers::serve_login_page).post(handlers::handle_login))
        .route("/logout", get(handlers::handle_logout))

        // Dashboard routes
        .route("/dashboard", get(handlers::serve_user_dashboard))
        .route("/dashboard/tickets", post(handlers::create_ticket))
        .route("/manager", get(handlers::serve_manager_dashboard))
        .route("/manager/tickets/:id/status", post(handlers::update_ticket_status))
        .route("/admin", get(handlers::serve_admin_dashboard))
        .route("/admin/tickets/:id/assign", post(handlers::assign_ticket))

        .nest("/api", api)
        .fallback(handlers::not_found)

        // Add middleware
        .layer(from_fn(middleware::require_auth))
        .layer(session_layer)
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(TraceLayer::new_for_http())

        // Add state
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_table() {
        assert_eq!(access_for("/login"), Some(Access::Public));
        assert_eq!(access_for("/"), Some(Access::RoleRedirect));
        assert_eq!(access_for("/dashboard"), Some(Access::Roles(&[Role::User])));
        assert_eq!(access_for("/manager/tickets/3/status"), Some(Access::Roles(&[Role::Manager])));
        assert_eq!(access_for("/admin/tickets/1/assign"), Some(Access::Roles(&[Role::Admin])));
        assert_eq!(access_for("/api/tickets"), Some(Access::Api));
    }

    #[test]
    fn test_unlisted_paths() {
        assert_eq!(access_for("/nowhere"), None);
        // prefix must end at a segment boundary
        assert_eq!(access_for("/administrator"), None);
        assert_eq!(access_for("/dashboards"), None);
    }
}
