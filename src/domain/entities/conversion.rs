//! Value object produced by a single conversion.

/// Outcome of converting an amount from one currency to another.
///
/// `from` and `to` hold the short names as stored, not as the caller typed
/// them. `exchange_rate` is the number of target units worth one source unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub result: f64,
    pub from_price: f64,
    pub to_price: f64,
    pub exchange_rate: f64,
}
