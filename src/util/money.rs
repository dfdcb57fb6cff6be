//! Currency formatting.
//!
//! Amounts are shown as whole units with thousands grouping, the way the
//! ledger displays New Taiwan dollars (`NT$1,000`).

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

/// Symbol and grouping separator for a zero-decimal currency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoneyFormat {
    pub symbol: &'static str,
    pub grouping: char,
}

impl MoneyFormat {
    pub const TWD: Self = Self { symbol: "NT$", grouping: ',' };

    /// Format `amount` rounded half away from zero, no decimals.
    ///
    /// The sign follows the unrounded amount, so `-0.4` reads `-NT$0`.
    pub fn format(self, amount: f64) -> String {
        if amount.is_nan() {
            return format!("{}NaN", self.symbol);
        }
        let sign = if amount.is_sign_negative() { "-" } else { "" };
        if amount.is_infinite() {
            return format!("{sign}{}\u{221e}", self.symbol);
        }
        let digits = format!("{:.0}", amount.abs().round());
        format!("{sign}{}{}", self.symbol, group_digits(&digits, self.grouping))
    }
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self::TWD
    }
}

/// Format `amount` in the default ledger currency (TWD).
pub fn format_money(amount: f64) -> String {
    MoneyFormat::TWD.format(amount)
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
