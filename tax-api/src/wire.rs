//! JSON shapes exchanged on `/tax/calculations`.
//!
//! ## Request
//!
//! | Field | Type | Notes |
//! |-------|------|-------|
//! | `totalIncome` | integer | missing or `null` reads as `0` |
//! | `wht` | integer | withheld tax, missing or `null` reads as `0` |
//! | `allowances` | array | optional, `null` reads as empty |
//! | `allowances[].allowanceType` | string | only `donation` is deducted |
//! | `allowances[].amount` | integer | |
//!
//! ## Success response
//!
//! ```json
//! {"tax": 28999, "taxLevel": [{"level": "0-150,000", "tax": 0}, ...]}
//! ```
//!
//! ## Error response
//!
//! ```json
//! {"error": "wht cannot be greater than totalIncome"}
//! ```

use serde::{Deserialize, Serialize};
use tax_core::{Allowance, TaxCalculationRequest, TaxCalculationResult, TaxLevel};

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculationBody {
    pub total_income: Option<i64>,
    #[serde(rename = "wht")]
    pub withheld_tax: Option<i64>,
    pub allowances: Option<Vec<Option<AllowanceBody>>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AllowanceBody {
    pub allowance_type: Option<String>,
    pub amount: Option<i64>,
}

impl From<AllowanceBody> for Allowance {
    fn from(body: AllowanceBody) -> Self {
        Allowance::new(
            body.allowance_type.unwrap_or_default(),
            body.amount.unwrap_or_default(),
        )
    }
}

impl From<CalculationBody> for TaxCalculationRequest {
    fn from(body: CalculationBody) -> Self {
        TaxCalculationRequest {
            total_income: body.total_income.unwrap_or_default(),
            withheld_tax: body.withheld_tax.unwrap_or_default(),
            allowances: body
                .allowances
                .unwrap_or_default()
                .into_iter()
                .flatten()
                .map(Allowance::from)
                .collect(),
        }
    }
}

/// Decodes a request body. Unknown fields are ignored.
pub fn parse_request(body: &[u8]) -> Result<TaxCalculationRequest, serde_json::Error> {
    serde_json::from_slice::<CalculationBody>(body).map(TaxCalculationRequest::from)
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxResponseBody {
    pub tax: i64,
    pub tax_level: Vec<TaxLevelBody>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxLevelBody {
    pub level: String,
    pub tax: i64,
}

impl From<TaxLevel> for TaxLevelBody {
    fn from(level: TaxLevel) -> Self {
        Self {
            level: level.label,
            tax: level.tax,
        }
    }
}

impl From<TaxCalculationResult> for TaxResponseBody {
    fn from(result: TaxCalculationResult) -> Self {
        Self {
            tax: result.final_tax,
            tax_level: result.levels.into_iter().map(TaxLevelBody::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn parse_request_reads_all_fields() {
        let body = br#"{
            "totalIncome": 500000,
            "wht": 1000,
            "allowances": [{"allowanceType": "donation", "amount": 200}]
        }"#;

        let request = parse_request(body).unwrap();

        assert_eq!(
            request,
            TaxCalculationRequest {
                total_income: 500_000,
                withheld_tax: 1_000,
                allowances: vec![Allowance::new("donation", 200)],
            }
        );
    }

    #[test]
    fn parse_request_treats_missing_and_null_as_zero() {
        let request = parse_request(br#"{"totalIncome": null, "allowances": null}"#).unwrap();

        assert_eq!(request, TaxCalculationRequest::default());
    }

    #[test]
    fn parse_request_accepts_empty_object() {
        let request = parse_request(b"{}").unwrap();

        assert_eq!(request, TaxCalculationRequest::default());
    }

    #[test]
    fn parse_request_skips_null_allowances() {
        let body = br#"{"totalIncome": 1, "allowances": [null, {"amount": 5}]}"#;

        let request = parse_request(body).unwrap();

        assert_eq!(request.allowances, vec![Allowance::new("", 5)]);
    }

    #[test]
    fn parse_request_ignores_unknown_fields() {
        let request = parse_request(br#"{"totalIncome": 10, "currency": "THB"}"#).unwrap();

        assert_eq!(request.total_income, 10);
    }

    #[test]
    fn parse_request_rejects_fractional_amounts() {
        assert!(parse_request(br#"{"totalIncome": 500000.5}"#).is_err());
    }

    #[test]
    fn parse_request_rejects_wrong_types() {
        assert!(parse_request(br#"{"totalIncome": "500000"}"#).is_err());
        assert!(parse_request(br#"{"allowances": {}}"#).is_err());
    }

    #[test]
    fn parse_request_rejects_duplicate_keys() {
        let result = parse_request(br#"{"totalIncome": 1000, "wht": 1, "wht": 2}"#);

        assert!(result.unwrap_err().to_string().contains("duplicate field `wht`"));
    }

    #[test]
    fn parse_request_rejects_malformed_json() {
        assert!(parse_request(b"").is_err());
        assert!(parse_request(b"{\"totalIncome\": ").is_err());
        assert!(parse_request(b"42").is_err());
    }

    #[test]
    fn response_uses_wire_field_names() {
        let result = TaxCalculationResult {
            donation_deduction: 0,
            taxable_income: 440_000,
            total_tax: 28_999,
            final_tax: 28_999,
            levels: vec![TaxLevel {
                label: "150,001-500,000".to_string(),
                tax: 28_999,
            }],
        };

        let value = serde_json::to_value(TaxResponseBody::from(result)).unwrap();

        assert_eq!(
            value,
            json!({
                "tax": 28999,
                "taxLevel": [{"level": "150,001-500,000", "tax": 28999}]
            })
        );
    }

    #[test]
    fn error_body_shape() {
        let value = serde_json::to_value(ErrorBody {
            error: "method not allowed".to_string(),
        })
        .unwrap();

        assert_eq!(value, json!({"error": "method not allowed"}));
    }
}
