use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

pub type ServiceResult<T> = Result<T, AppError>;
pub type ServiceResponse<T> = ServiceResult<Json<T>>;

#[track_caller]
pub fn unexpected<T, E: Into<anyhow::Error>>(e: E) -> ServiceResult<T> {
    let caller = std::panic::Location::caller();
    error!("An unexpected error has occurred at {caller}: {}", e.into());
    Err(AppError::Unexpected)
}

#[derive(Debug, PartialEq)]
pub enum AppError {
    Unexpected,
    DecodingRequestFailed,

    ScoresInvalidScore,
    ScoresInvalidPlayerName,
    ScoresInvalidLimit,

    RanksInvalidLimit,
    RanksInvalidAround,
}

impl AppError {
    pub const fn code(&self) -> &'static str {
        match self {
            AppError::Unexpected => "unexpected",
            AppError::DecodingRequestFailed => "decoding_request_failed",

            AppError::ScoresInvalidScore => "scores.invalid_score",
            AppError::ScoresInvalidPlayerName => "scores.invalid_player_name",
            AppError::ScoresInvalidLimit => "scores.invalid_limit",

            AppError::RanksInvalidLimit => "ranks.invalid_limit",
            AppError::RanksInvalidAround => "ranks.invalid_around",
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            AppError::Unexpected => "An unexpected error has occurred.",
            AppError::DecodingRequestFailed => "Failed to decode request",

            AppError::ScoresInvalidScore => "Expected a nonzero score.",
            AppError::ScoresInvalidPlayerName => {
                "Player name must be between 1 and 32 characters."
            }
            AppError::ScoresInvalidLimit => "Limit must be between 0 and 100.",

            AppError::RanksInvalidLimit => "Limit must be between 0 and 1000.",
            AppError::RanksInvalidAround => "Around must be between 0 and 500.",
        }
    }

    pub const fn http_status_code(&self) -> StatusCode {
        match self {
            AppError::DecodingRequestFailed
            | AppError::ScoresInvalidScore
            | AppError::ScoresInvalidPlayerName
            | AppError::ScoresInvalidLimit
            | AppError::RanksInvalidLimit
            | AppError::RanksInvalidAround => StatusCode::BAD_REQUEST,

            AppError::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub const fn response_parts(&self) -> (StatusCode, Json<ErrorResponse>) {
        let status = self.http_status_code();
        let response = ErrorResponse {
            code: self.code(),
            message: self.message(),
        };
        (status, Json(response))
    }
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    #[track_caller]
    fn from(e: E) -> Self {
        unexpected::<(), E>(e).unwrap_err()
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.response_parts().into_response()
    }
}
