//! Request failures and their HTTP rendering.

use bytes::Bytes;
use http::header::{ALLOW, CONTENT_TYPE};
use http::{HeaderValue, Response, StatusCode};
use http_body_util::Full;
use tax_core::calculations::BracketError;
use tax_core::{IncomeTaxError, ValidationError};
use thiserror::Error;

use crate::wire::ErrorBody;

pub type HttpResponse = Response<Full<Bytes>>;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Everything that can stop a request from producing a tax response.
///
/// The `Display` text is what the client sees in the `error` field, so
/// internal variants keep their details in `source` only.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    /// The body could not be read or is not a valid calculation request.
    #[error("invalid JSON body")]
    InvalidBody(#[source] BoxError),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("internal server error")]
    Calculation(#[source] BracketError),

    #[error("internal server error")]
    Encode(#[source] serde_json::Error),
}

impl From<IncomeTaxError> for ApiError {
    fn from(error: IncomeTaxError) -> Self {
        match error {
            IncomeTaxError::Invalid(invalid) => Self::Invalid(invalid),
            IncomeTaxError::Bracket(bracket) => Self::Calculation(bracket),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidBody(Box::new(error))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidBody(_) | Self::Invalid(_) => StatusCode::BAD_REQUEST,
            Self::Calculation(_) | Self::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Server-side faults, as opposed to problems with the client's request.
    pub fn is_internal(&self) -> bool {
        self.status().is_server_error()
    }

    pub fn into_response(self) -> HttpResponse {
        let body = serde_json::to_vec(&ErrorBody {
            error: self.to_string(),
        })
        .unwrap_or_else(|_| br#"{"error":"internal server error"}"#.to_vec());

        let mut response = json_response(self.status(), body);
        if matches!(self, Self::MethodNotAllowed) {
            response
                .headers_mut()
                .insert(ALLOW, HeaderValue::from_static("POST"));
        }
        response
    }
}

/// Builds a response with an `application/json` body.
pub fn json_response(
    status: StatusCode,
    body: Vec<u8>,
) -> HttpResponse {
    let mut response = Response::new(Full::new(Bytes::from(body)));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;

    use super::*;

    async fn body_text(response: HttpResponse) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn statuses_match_failure_kind() {
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::Invalid(ValidationError::NegativeWithholding).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Calculation(BracketError::NoTaxBrackets).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn income_tax_errors_split_into_client_and_internal() {
        let invalid = ApiError::from(IncomeTaxError::Invalid(
            ValidationError::WithholdingExceedsIncome,
        ));
        let internal = ApiError::from(IncomeTaxError::Bracket(BracketError::NoTaxBrackets));

        assert!(!invalid.is_internal());
        assert!(internal.is_internal());
    }

    #[test]
    fn json_errors_become_invalid_body() {
        let json_error = serde_json::from_slice::<ErrorBody>(b"{").unwrap_err();

        let error = ApiError::from(json_error);

        assert_eq!(error.to_string(), "invalid JSON body");
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn into_response_writes_json_error_body() {
        let response = ApiError::Invalid(ValidationError::WithholdingExceedsIncome).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            body_text(response).await,
            r#"{"error":"wht cannot be greater than totalIncome"}"#
        );
    }

    #[tokio::test]
    async fn internal_errors_hide_details() {
        let response = ApiError::Calculation(BracketError::NoTaxBrackets).into_response();

        assert_eq!(
            body_text(response).await,
            r#"{"error":"internal server error"}"#
        );
    }

    #[test]
    fn method_not_allowed_advertises_post() {
        let response = ApiError::MethodNotAllowed.into_response();

        assert_eq!(response.headers().get(ALLOW).unwrap(), "POST");
    }
}
