//! Maps domain errors onto HTTP responses.
//!
//! Client faults (400, 404, 409) are returned verbatim. Server faults (500,
//! 503) are logged in full and reach the client with a fixed message.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};
use crate::inbound::http::validation::{invalid_json_error, invalid_query_error};

/// Result alias returned by recipe handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn opaque_message(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::ServiceUnavailable => "Recipe store unavailable",
        _ => "Internal server error",
    }
}

/// The payload a client is allowed to see for `error`.
fn public_view(error: &Error) -> Error {
    if !error.is_server_fault() {
        return error.clone();
    }
    error!(code = ?error.code(), message = error.message(), "request failed");
    let public = Error::new(error.code(), opaque_message(error.code()));
    let Some(id) = error.trace_id() else {
        return public;
    };
    public.with_trace_id(id)
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let body = public_view(self);
        let mut response = HttpResponse::build(self.status_code());
        if let Some(id) = body.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        response.json(body)
    }
}

/// `web::JsonConfig` hook: undecodable bodies become `invalid_json` 400s.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, "rejected request body");
    let reason = match &err {
        JsonPayloadError::ContentType => "request body must be application/json".to_owned(),
        JsonPayloadError::Deserialize(inner) => format!("malformed request body: {inner}"),
        other => format!("unreadable request body: {other}"),
    };
    invalid_json_error(reason).into()
}

/// `web::QueryConfig` hook: undecodable filter queries become `invalid_query`
/// 400s.
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, query = req.query_string(), "rejected query string");
    invalid_query_error(format!("malformed query string: {err}")).into()
}

#[cfg(test)]
mod tests;
