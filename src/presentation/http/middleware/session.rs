// src/presentation/http/middleware/session.rs
use crate::application::{dto::AdminSession, error::ApplicationError};
use crate::presentation::http::{error::PageError, extractors::CurrentSession, state::HttpState};
use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue, header::SET_COOKIE},
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Cookie, HeaderMapExt};

pub const SESSION_COOKIE: &str = "pressroom_session";

pub fn session_id_from(headers: &HeaderMap) -> Option<String> {
    headers
        .typed_get::<Cookie>()
        .and_then(|cookie| cookie.get(SESSION_COOKIE).map(str::to_owned))
}

fn cookie_value(value: String) -> Result<HeaderValue, ApplicationError> {
    HeaderValue::from_str(&value)
        .map_err(|_| ApplicationError::infrastructure("session cookie is not a valid header"))
}

/// `Set-Cookie` value binding the browser to `session`.
pub fn session_cookie(session: &AdminSession, secure: bool) -> Result<HeaderValue, ApplicationError> {
    let max_age = (session.expires_at - session.created_at).num_seconds().max(0);
    let mut value = format!(
        "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}",
        session.id
    );
    if secure {
        value.push_str("; Secure");
    }
    cookie_value(value)
}

pub fn expired_session_cookie(secure: bool) -> Result<HeaderValue, ApplicationError> {
    let mut value = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    if secure {
        value.push_str("; Secure");
    }
    cookie_value(value)
}

/// Resume the session named by the cookie, or start an anonymous one, and
/// expose it to handlers as [`CurrentSession`]. A newly started session is
/// announced with `Set-Cookie` unless the handler already set one.
pub async fn load_session(mut req: Request, next: Next) -> Response {
    let Some(state) = req.extensions().get::<HttpState>().cloned() else {
        return PageError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };
    let auth = &state.services.auth;

    let resumed = match session_id_from(req.headers()) {
        Some(id) => auth.resume_session(&id).await,
        None => Ok(None),
    };
    let (session, fresh) = match resumed {
        Ok(Some(session)) => (session, false),
        Ok(None) => (auth.start_session(), true),
        Err(err) => return PageError::from_error(err).into_response(),
    };

    let cookie = if fresh {
        match session_cookie(&session, state.settings.secure_cookies) {
            Ok(cookie) => Some(cookie),
            Err(err) => return PageError::from_error(err).into_response(),
        }
    } else {
        None
    };

    req.extensions_mut().insert(CurrentSession(session));
    let mut response = next.run(req).await;

    if let Some(cookie) = cookie
        && !response.headers().contains_key(SET_COOKIE)
    {
        response.headers_mut().append(SET_COOKIE, cookie);
    }
    response
}
