/// Monetary amounts are whole currency units. Floats only appear as transient
/// multipliers and are floored where they are applied.
pub type Money = i64;

pub struct CurrencyUtils;

impl CurrencyUtils {
    /// `floor(amount * rate)`, never negative for non-negative inputs.
    pub fn apply_rate(amount: Money, rate: f64) -> Money {
        (amount as f64 * rate).floor() as Money
    }

    pub fn scale(amount: Money, multiplier: f64) -> Money {
        (amount as f64 * multiplier).floor() as Money
    }
}
