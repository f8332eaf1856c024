//! The `/tax/calculations` endpoint.

use http::{Method, Request, StatusCode};
use http_body_util::{BodyExt, Limited};
use hyper::body::Body;
use tax_core::IncomeTaxWorksheet;
use tracing::{debug, error};

use crate::error::{ApiError, BoxError, HttpResponse, json_response};
use crate::wire::{self, TaxResponseBody};

pub const CALCULATIONS_PATH: &str = "/tax/calculations";

/// Largest request body read before the request is rejected as malformed.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Stateless request handler shared by every connection.
#[derive(Debug, Clone, Default)]
pub struct TaxService {
    worksheet: IncomeTaxWorksheet<'static>,
}

impl TaxService {
    /// Answers one request. Every failure is rendered as a JSON error response.
    pub async fn handle<B>(
        &self,
        req: Request<B>,
    ) -> HttpResponse
    where
        B: Body,
        B::Error: Into<BoxError>,
    {
        let method = req.method().clone();
        let path = req.uri().path().to_owned();

        match self.respond(req).await {
            Ok(response) => response,
            Err(err) => {
                if err.is_internal() {
                    error!(%method, %path, error = ?err, "request failed");
                } else {
                    debug!(%method, %path, status = %err.status(), "request rejected: {err}");
                }
                err.into_response()
            }
        }
    }

    async fn respond<B>(
        &self,
        req: Request<B>,
    ) -> Result<HttpResponse, ApiError>
    where
        B: Body,
        B::Error: Into<BoxError>,
    {
        if req.uri().path() != CALCULATIONS_PATH {
            return Err(ApiError::NotFound);
        }
        if req.method() != Method::POST {
            return Err(ApiError::MethodNotAllowed);
        }

        let body = Limited::new(req.into_body(), MAX_BODY_BYTES)
            .collect()
            .await
            .map_err(ApiError::InvalidBody)?
            .to_bytes();

        let request = wire::parse_request(&body)?;
        let result = self.worksheet.calculate(&request)?;

        let payload =
            serde_json::to_vec(&TaxResponseBody::from(result)).map_err(ApiError::Encode)?;
        Ok(json_response(StatusCode::OK, payload))
    }
}
