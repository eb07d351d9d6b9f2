use crud::Identified;
use serde::{Deserialize, Serialize};

use super::{lenient_string, RequestStatus};
use crate::resource::{Editable, Resource, StatusRoute};

/// Service appointment submitted by a customer. Read-only apart from status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBooking {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub service_needed: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub vehicle_year: String,
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub preferred_date: String,
    #[serde(default)]
    pub preferred_time: String,
    #[serde(default)]
    pub additional_notes: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
}

impl ServiceBooking {
    pub fn vehicle(&self) -> String {
        format!("{} {} {}", self.vehicle_year, self.make, self.model)
            .trim()
            .to_string()
    }

    pub fn request_status(&self) -> Option<RequestStatus> {
        RequestStatus::parse(&self.status)
    }
}

impl Identified for ServiceBooking {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for ServiceBooking {
    const PATH: &'static str = "services";
    const STATUS_ROUTE: Option<StatusRoute> = Some(StatusRoute::PutPrefix);
}

impl Editable for ServiceBooking {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode() {
        let booking: ServiceBooking = serde_json::from_str(
            r#"{"_id":"s1","name":"Ana","serviceNeeded":"Oil Change","vehicleYear":"2019",
                "make":"Honda","model":"Civic","status":"pending"}"#,
        )
        .unwrap();
        assert_eq!(booking.vehicle(), "2019 Honda Civic");
        assert_eq!(booking.request_status(), Some(RequestStatus::Pending));
    }
}
