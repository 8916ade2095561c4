//! Handler for the conversion endpoint.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;

use crate::api::dto::convert::{ConvertQuery, ConvertResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Converts an amount from one currency to another.
///
/// # Endpoint
///
/// `GET /api/convert?from=divine&to=exalt&amount=3`
///
/// # Response
///
/// ```json
/// {
///   "from": "divine", "to": "exalt", "amount": 3.0, "result": 1200.0,
///   "from_price": 400.0, "to_price": 1.0, "exchange_rate": 400.0
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if `from`, `to` or `amount` is missing, or `amount` is not a
/// finite number greater than 0, or the converted amount is out of range.
/// Returns 404 if either currency is unknown.
/// Returns 500 if the price table cannot be read.
pub async fn convert_handler(
    State(state): State<AppState>,
    Query(params): Query<ConvertQuery>,
) -> Result<Json<ConvertResponse>, AppError> {
    let (from, to, amount) = parse_params(params)?;

    let result = state
        .converter_service
        .convert(&from, &to, amount)
        .await?;

    Ok(Json(result.into()))
}

/// Checks presence of every parameter and parses the amount.
fn parse_params(params: ConvertQuery) -> Result<(String, String, f64), AppError> {
    let from = params.from.filter(|s| !s.is_empty());
    let to = params.to.filter(|s| !s.is_empty());

    let (Some(from), Some(to)) = (from, to) else {
        return Err(AppError::bad_request(
            "Parameters 'from' and 'to' are required",
            json!({}),
        ));
    };

    let Some(raw_amount) = params.amount.filter(|s| !s.is_empty()) else {
        return Err(AppError::bad_request(
            "Parameter 'amount' is required",
            json!({}),
        ));
    };

    match raw_amount.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok((from, to, amount)),
        _ => Err(AppError::bad_request(
            "Parameter 'amount' must be a valid number greater than 0",
            json!({"amount": raw_amount}),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(from: Option<&str>, to: Option<&str>, amount: Option<&str>) -> ConvertQuery {
        ConvertQuery {
            from: from.map(String::from),
            to: to.map(String::from),
            amount: amount.map(String::from),
        }
    }

    #[test]
    fn test_parse_valid() {
        let (from, to, amount) =
            parse_params(query(Some("divine"), Some("exalt"), Some("2.5"))).unwrap();

        assert_eq!(from, "divine");
        assert_eq!(to, "exalt");
        assert_eq!(amount, 2.5);
    }

    #[test]
    fn test_missing_currency_params() {
        for q in [
            query(None, Some("exalt"), Some("1")),
            query(Some("divine"), None, Some("1")),
            query(Some(""), Some("exalt"), Some("1")),
        ] {
            let err = parse_params(q).unwrap_err();
            assert_eq!(err.to_string(), "Parameters 'from' and 'to' are required");
        }
    }

    #[test]
    fn test_missing_amount() {
        let err = parse_params(query(Some("divine"), Some("exalt"), None)).unwrap_err();
        assert_eq!(err.to_string(), "Parameter 'amount' is required");

        let err = parse_params(query(Some("divine"), Some("exalt"), Some(""))).unwrap_err();
        assert_eq!(err.to_string(), "Parameter 'amount' is required");
    }

    #[test]
    fn test_bad_amounts() {
        for raw in ["abc", "0", "-3", "NaN", "inf", "1e400", " 3 ", "3 ", "\t2"] {
            let err = parse_params(query(Some("divine"), Some("exalt"), Some(raw))).unwrap_err();
            assert!(
                matches!(err, AppError::Validation { .. }),
                "amount '{raw}' should be rejected"
            );
        }
    }
}
