use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    Json,
    extract::rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const INTERNAL_MESSAGE: &str = "internal server error";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let kind = err.kind();
        match err {
            ApplicationError::Validation(msg) => {
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, kind, msg)
            }
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, kind, msg),
            ApplicationError::Conflict(msg) => Self::new(StatusCode::CONFLICT, kind, msg),
            ApplicationError::Unauthenticated(msg) => {
                Self::new(StatusCode::UNAUTHORIZED, kind, msg)
            }
            ApplicationError::Forbidden(msg) => Self::new(StatusCode::FORBIDDEN, kind, msg),
            ApplicationError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error while handling request");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    kind,
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        }
    }

    fn new(status: StatusCode, kind: &'static str, message: String) -> Self {
        Self {
            status,
            kind,
            message,
        }
    }

    fn unprocessable(message: String) -> Self {
        Self::from_error(ApplicationError::Validation(message))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            kind: self.kind.to_string(),
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        let mut response = (self.status, Json(payload)).into_response();
        if self.status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error category.
    pub kind: String,
    pub error: String,
    pub message: String,
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::unprocessable(rejection.body_text())
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        Self::unprocessable(rejection.body_text())
    }
}

impl From<FormRejection> for HttpError {
    fn from(rejection: FormRejection) -> Self {
        Self::unprocessable(rejection.body_text())
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        Self::unprocessable(rejection.body_text())
    }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        let cases = [
            (ApplicationError::validation("x"), StatusCode::UNPROCESSABLE_ENTITY),
            (ApplicationError::not_found("x"), StatusCode::NOT_FOUND),
            (ApplicationError::conflict("x"), StatusCode::CONFLICT),
            (ApplicationError::unauthenticated("x"), StatusCode::UNAUTHORIZED),
            (ApplicationError::forbidden("x"), StatusCode::FORBIDDEN),
            (ApplicationError::internal("x"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(HttpError::from_error(err).status(), status);
        }
    }

    #[test]
    fn internal_details_are_not_exposed() {
        let err = HttpError::from_error(ApplicationError::internal("connection reset by peer"));
        assert_eq!(err.message, INTERNAL_MESSAGE);
        assert_eq!(err.kind, "internal");
    }

    #[test]
    fn unauthorized_carries_challenge_header() {
        let response =
            HttpError::from_error(ApplicationError::unauthenticated("nope")).into_response();
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }
}
