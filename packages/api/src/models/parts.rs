use crud::Identified;
use serde::{Deserialize, Serialize};

use super::{lenient_string, RequestStatus};
use crate::resource::{Editable, Resource, StatusRoute};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartsRequest {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub vehicle_year: String,
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default, rename = "VIN")]
    pub vin: String,
    #[serde(default)]
    pub parts_needed: Vec<String>,
    #[serde(default)]
    pub preferred_pickup: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
}

impl PartsRequest {
    pub fn vehicle(&self) -> String {
        format!("{} {} {}", self.vehicle_year, self.make, self.model)
            .trim()
            .to_string()
    }

    pub fn request_status(&self) -> Option<RequestStatus> {
        RequestStatus::parse(&self.status)
    }
}

impl Identified for PartsRequest {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for PartsRequest {
    const PATH: &'static str = "parts";
    const STATUS_ROUTE: Option<StatusRoute> = Some(StatusRoute::PutPrefix);
}

impl Editable for PartsRequest {}
