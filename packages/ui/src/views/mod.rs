//! One screen per API collection.
//!
//! Each module implements [`AdminResource`](crate::AdminResource) for its
//! record type and exposes a route component that renders
//! [`resource_page`](crate::resource_page) for it.

mod blog;
pub use blog::Blog;

mod businesses;
pub use businesses::Businesses;

mod contacts;
pub use contacts::Contacts;

mod dealerships;
pub use dealerships::Dealerships;

mod inventory;
pub use inventory::Inventory;

mod offers;
pub use offers::Offers;

mod parts;
pub use parts::Parts;

mod service;
pub use service::Service;

mod specials;
pub use specials::Specials;

/// `YYYY-MM-DD` prefix of an ISO timestamp.
pub(crate) fn short_date(value: &str) -> String {
    value.chars().take(10).collect()
}

/// Today's local date as `YYYY-MM-DD`.
#[cfg(target_arch = "wasm32")]
pub(crate) fn today() -> String {
    let date = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        date.get_full_year(),
        date.get_month() + 1,
        date.get_date()
    )
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn today() -> String {
    String::new()
}

/// "$24,999" style price.
pub(crate) fn money(value: Option<f64>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let whole = value.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_money() {
        assert_eq!(money(Some(24999.5)), "$25,000");
        assert_eq!(money(Some(950.0)), "$950");
        assert_eq!(money(Some(1234567.0)), "$1,234,567");
        assert_eq!(money(None), "");
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("2025-06-01T10:00:00.000Z"), "2025-06-01");
        assert_eq!(short_date(""), "");
    }
}
