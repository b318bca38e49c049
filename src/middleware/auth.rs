use axum::{
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    extract::Request,
    body::Body,
};
use tower_sessions::Session;
use crate::guard::{self, Decision};
use crate::routes::{self, Access};
use crate::session;

/// Applies the route guard before any role-restricted page handler runs.
pub async fn require_auth(
    session: Session,
    req: Request<Body>,
    next: Next,
) -> Response {
    let roles = match routes::access_for(req.uri().path()) {
        Some(Access::Roles(roles)) => roles,
        _ => return next.run(req).await,
    };

    let state = match session::load(&session).await {
        Ok(state) => state,
        Err(e) => return e.into_response(),
    };

    match guard::evaluate(&state, Some(roles)) {
        Decision::Allow => next.run(req).await,
        Decision::Redirect(to) => {
            tracing::debug!("Guard redirected {} to {}", req.uri().path(), to);
            Redirect::to(to).into_response()
        }
    }
}
