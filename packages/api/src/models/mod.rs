//! Typed records for each REST collection.
//!
//! Records decode from camelCase JSON with `_id` as identity. Text fields
//! default to empty; numeric fields are decoded leniently because the API
//! stores some of them as strings.

mod booking;
mod business;
mod contact;
mod dealership;
mod offer;
mod parts;
mod post;
mod special;
mod vehicle;

pub use booking::ServiceBooking;
pub use business::{AutoBusiness, BUSINESS_TYPES};
pub use contact::{ContactStatus, ContactSubmission};
pub use dealership::Dealership;
pub use offer::SpecialOffer;
pub use parts::PartsRequest;
pub use post::{BlogPost, MAX_IMAGE_BYTES};
pub use special::WeeklySpecial;
pub use vehicle::Vehicle;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::Result;

/// Lifecycle shared by service bookings and parts requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 4] = [
        RequestStatus::Pending,
        RequestStatus::Confirmed,
        RequestStatus::Completed,
        RequestStatus::Cancelled,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(RequestStatus::Pending),
            "confirmed" => Some(RequestStatus::Confirmed),
            "completed" => Some(RequestStatus::Completed),
            "cancelled" | "canceled" => Some(RequestStatus::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Confirmed => "confirmed",
            RequestStatus::Completed => "completed",
            RequestStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Confirmed => "Confirmed",
            RequestStatus::Completed => "Completed",
            RequestStatus::Cancelled => "Cancelled",
        }
    }

    /// `pending → confirmed | cancelled`, `confirmed → completed`.
    pub fn next(&self) -> &'static [RequestStatus] {
        match self {
            RequestStatus::Pending => &[RequestStatus::Confirmed, RequestStatus::Cancelled],
            RequestStatus::Confirmed => &[RequestStatus::Completed],
            RequestStatus::Completed | RequestStatus::Cancelled => &[],
        }
    }
}

/// A dealership reference, either populated by the API or a bare id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DealershipRef {
    Populated {
        #[serde(rename = "_id")]
        id: String,
        #[serde(default)]
        name: String,
    },
    Id(String),
}

impl DealershipRef {
    pub fn id(&self) -> &str {
        match self {
            DealershipRef::Populated { id, .. } | DealershipRef::Id(id) => id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            DealershipRef::Populated { name, .. } if !name.is_empty() => Some(name),
            _ => None,
        }
    }
}

/// Picker entry from `dealerships/searchIdName`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealershipOption {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl ApiClient {
    /// Id/name pairs for dealership pickers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the list cannot be decoded.
    pub async fn dealership_options(&self) -> Result<Vec<DealershipOption>> {
        self.get_data("dealerships/searchIdName").await
    }
}

/// Display name for a reference, resolving bare ids against picker options.
pub fn dealership_name<'a>(
    dealership: Option<&'a DealershipRef>,
    options: &'a [DealershipOption],
) -> Option<&'a str> {
    let dealership = dealership?;
    dealership.name().or_else(|| {
        options
            .iter()
            .find(|o| o.id == dealership.id())
            .map(|o| o.name.as_str())
    })
}

pub(crate) fn lenient_u64<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Option<u64>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::Number(n)) => n.as_u64().or_else(|| n.as_f64().map(|f| f as u64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

pub(crate) fn lenient_f64<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Option<f64>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

pub(crate) fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<String, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

/// Number as form text; empty when absent.
pub(crate) fn number_text<N: ToString>(n: Option<N>) -> String {
    n.map(|n| n.to_string()).unwrap_or_default()
}

/// First ten characters of an ISO timestamp, for `<input type="date">`.
pub(crate) fn date_part(value: &str) -> String {
    value.chars().take(10).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dealership_ref_forms() {
        let populated: DealershipRef =
            serde_json::from_str(r#"{"_id":"d1","name":"Nellis Auto"}"#).unwrap();
        assert_eq!(populated.id(), "d1");
        assert_eq!(populated.name(), Some("Nellis Auto"));

        let bare: DealershipRef = serde_json::from_str(r#""d2""#).unwrap();
        assert_eq!(bare.id(), "d2");
        assert_eq!(bare.name(), None);

        let options = vec![DealershipOption {
            id: "d2".to_string(),
            name: "Desert Motors".to_string(),
        }];
        assert_eq!(dealership_name(Some(&bare), &options), Some("Desert Motors"));
        assert_eq!(dealership_name(None, &options), None);
    }

    #[test]
    fn test_request_status_lifecycle() {
        assert_eq!(
            RequestStatus::Pending.next(),
            &[RequestStatus::Confirmed, RequestStatus::Cancelled]
        );
        assert_eq!(RequestStatus::Confirmed.next(), &[RequestStatus::Completed]);
        assert!(RequestStatus::Completed.next().is_empty());
        assert!(RequestStatus::Cancelled.next().is_empty());
        assert_eq!(RequestStatus::parse("Canceled"), Some(RequestStatus::Cancelled));
        assert_eq!(RequestStatus::parse("unknown"), None);
    }

    #[test]
    fn test_date_part() {
        assert_eq!(date_part("2025-06-01T00:00:00.000Z"), "2025-06-01");
        assert_eq!(date_part(""), "");
    }
}
