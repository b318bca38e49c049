//! Route guard: decides whether a page may render for the current session.

use crate::models::{Role, User};
use crate::session::SessionState;

pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect(&'static str),
}

/// Canonical dashboard for a role.
pub fn home_for(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::Manager => "/manager",
        Role::User => "/dashboard",
    }
}

pub fn evaluate(state: &SessionState, allowed: Option<&[Role]>) -> Decision {
    if !state.is_authenticated() {
        return Decision::Redirect(LOGIN_PATH);
    }

    match (allowed, state.user.as_ref()) {
        (Some(roles), Some(user)) if !roles.contains(&user.role) => {
            Decision::Redirect(home_for(user.role))
        }
        _ => Decision::Allow,
    }
}

/// Target of `/`: login for anonymous visitors, otherwise the role's dashboard.
pub fn resolve_root(state: &SessionState) -> &'static str {
    match (state.is_authenticated(), state.user.as_ref()) {
        (true, Some(User { role, .. })) => home_for(*role),
        (true, None) => home_for(Role::User),
        (false, _) => LOGIN_PATH,
    }
}
