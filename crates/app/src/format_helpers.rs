//! Shared formatting utilities for the UI layer.

use chrono::{DateTime, Utc};

/// Format a price as French retail copy: "12,50 €".
pub fn format_price(price: f64) -> String {
    format!("{price:.2} €").replace('.', ",")
}

/// Format an order timestamp as "30/08/2026 à 18h05".
pub fn format_order_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y à %Hh%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn prices_use_comma_and_euro_sign() {
        assert_eq!(format_price(12.5), "12,50 €");
        assert_eq!(format_price(8.0), "8,00 €");
        assert_eq!(format_price(0.0), "0,00 €");
    }

    #[test]
    fn order_dates_render_in_french_form() {
        let date = Utc.with_ymd_and_hms(2026, 8, 30, 18, 5, 0).unwrap();
        assert_eq!(format_order_date(&date), "30/08/2026 à 18h05");
    }
}
