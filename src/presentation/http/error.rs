// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use crate::presentation::http::templates::{ErrorPage, render_with_status};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;

pub const LOGIN_PATH: &str = "/admin/login";

pub fn status_for(err: &ApplicationError) -> StatusCode {
    match err {
        ApplicationError::Domain(domain) => match domain {
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::SlugCollision(_) => StatusCode::CONFLICT,
            DomainError::CorruptRecord { .. } | DomainError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        },
        ApplicationError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        ApplicationError::Forbidden(_) => StatusCode::FORBIDDEN,
        ApplicationError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Server-side failures are logged in full and reported generically.
fn public_message(status: StatusCode, err: &ApplicationError) -> String {
    if status.is_server_error() {
        tracing::error!(error = %err, "request failed");
        "internal server error".into()
    } else {
        err.to_string()
    }
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let status = status_for(&err);
        let message = public_message(status, &err);
        Self::new(status, message)
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorBody {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

/// HTML counterpart of [`HttpError`]. An unauthenticated request is sent to
/// the login page instead of seeing a 401.
#[derive(Debug)]
pub struct PageError {
    status: StatusCode,
    message: String,
}

impl PageError {
    pub fn from_error(err: ApplicationError) -> Self {
        let status = status_for(&err);
        let message = public_message(status, &err);
        Self { status, message }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        if self.status == StatusCode::UNAUTHORIZED {
            return Redirect::to(LOGIN_PATH).into_response();
        }
        let page = ErrorPage {
            status: self.status.as_u16(),
            reason: self.status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.message,
        };
        render_with_status(self.status, &page)
    }
}

pub type PageResult<T> = Result<T, PageError>;

pub trait IntoPageResult<T> {
    fn into_page(self) -> PageResult<T>;
}

impl<T> IntoPageResult<T> for ApplicationResult<T> {
    fn into_page(self) -> PageResult<T> {
        self.map_err(PageError::from_error)
    }
}
