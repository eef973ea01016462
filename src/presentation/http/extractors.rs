// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AdminSession, error::ApplicationError},
    presentation::http::error::{LOGIN_PATH, PageError},
};
use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};

/// The session attached by the session middleware, authenticated or not.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub AdminSession);

/// An authenticated admin session. Anonymous visitors are redirected to the
/// login page.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AdminSession);

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = PageError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentSession>()
            .cloned()
            .ok_or_else(|| {
                PageError::from_error(ApplicationError::infrastructure(
                    "session middleware not installed",
                ))
            })
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CurrentSession(session) = CurrentSession::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        if !session.authenticated {
            return Err(Redirect::to(LOGIN_PATH).into_response());
        }
        Ok(Self(session))
    }
}
