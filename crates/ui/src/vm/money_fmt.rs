use campaign_core::model::Cents;

/// `$1234.50` style, always two decimals, no grouping.
#[must_use]
pub fn format_money(amount: Cents) -> String {
    let value = amount.value();
    let sign = if value < 0 { "-" } else { "" };
    let abs = value.unsigned_abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}
