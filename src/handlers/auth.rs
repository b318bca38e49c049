use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;
use crate::errors::{AppError, AppResult};
use crate::guard::{self, LOGIN_PATH};
use crate::models::LoginForm;
use crate::notify::{self, Level, Notice};
use crate::session;
use crate::state::AppState;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub error: Option<String>,
}

pub async fn serve_login_page(
    session: Session,
    Query(query): Query<LoginQuery>,
) -> AppResult<Html<String>> {
    // A pending notice wins over the error carried in the query string
    let notice = notify::take(&session).await?.or_else(|| {
        query.error.map(|message| Notice {
            level: Level::Failure,
            message,
        })
    });
    Ok(Html(views::login::render(notice.as_ref())))
}

#[axum::debug_handler]
pub async fn handle_login(
    State(state): State<AppState>,
    session: Session,
    Form(login_form): Form<LoginForm>,
) -> AppResult<Response> {
    tracing::info!("Login attempt for user: {}", login_form.email);

    match state.store.login(&login_form.email, &login_form.password).await {
        Ok(auth) => {
            let home = guard::home_for(auth.user.role);
            session::set_auth(&session, auth.user, auth.token).await?;
            notify::success(&session, "Signed in").await?;
            Ok(Redirect::to(home).into_response())
        }
        Err(AppError::Authentication(msg)) => {
            notify::failure(&session, msg).await?;
            Ok(Redirect::to(LOGIN_PATH).into_response())
        }
        Err(e) => Err(e),
    }
}

pub async fn handle_logout(session: Session) -> AppResult<Redirect> {
    if !session::is_authenticated(&session).await? {
        tracing::debug!("Logout without an active session");
    }
    session::logout(&session).await?;
    Ok(Redirect::to(LOGIN_PATH))
}

pub async fn root_redirect(session: Session) -> AppResult<Redirect> {
    let state = session::load(&session).await?;
    Ok(Redirect::to(guard::resolve_root(&state)))
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Html(r#"<h1>404</h1><p>Page not found</p><a href="/">Back to home</a>"#),
    )
}
