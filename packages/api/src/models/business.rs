use crud::{join_list, FieldSpec, FormDraft, Identified, ListEncoding};
use serde::{Deserialize, Serialize};

use crate::resource::{Editable, Resource};

pub const BUSINESS_TYPES: &[&str] = &[
    "Service Center",
    "Repair Shop",
    "Detailing",
    "Car Wash",
    "Parts Store",
    "Oil Change",
    "Tire Shop",
    "Body Shop",
    "Towing Service",
    "Insurance",
    "Financing",
    "Other",
];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoBusiness {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hours_services: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
}

impl Identified for AutoBusiness {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for AutoBusiness {
    const PATH: &'static str = "businesses";
}

/// Sent as JSON with list fields split into arrays.
impl Editable for AutoBusiness {
    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("name", "Business Name").required(),
            FieldSpec::select("type", "Type", BUSINESS_TYPES).required(),
            FieldSpec::text("address", "Address").required(),
            FieldSpec::textarea("description", "Description").required(),
            FieldSpec::tel("phone", "Phone").required(),
            FieldSpec::email("email", "Email").required(),
            FieldSpec::url("website", "Website"),
            FieldSpec::text("hoursServices", "Hours")
                .required()
                .list(ListEncoding::Array)
                .placeholder("Mon-Fri: 8AM-6PM, Sat: 9AM-3PM"),
            FieldSpec::text("services", "Services")
                .required()
                .list(ListEncoding::Array)
                .placeholder("Oil Change, Brake Repair"),
        ]
    }

    fn to_draft(&self) -> FormDraft {
        Self::empty_draft()
            .with_text("name", self.name.as_str())
            .with_text("type", self.kind.as_str())
            .with_text("address", self.address.as_str())
            .with_text("description", self.description.as_str())
            .with_text("phone", self.phone.as_str())
            .with_text("email", self.email.as_str())
            .with_text("website", self.website.as_str())
            .with_text("hoursServices", join_list(&self.hours_services))
            .with_text("services", join_list(&self.services))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_json_payload_splits_lists() {
        let business = AutoBusiness {
            id: "b1".to_string(),
            name: "Quick Lube".to_string(),
            kind: "Oil Change".to_string(),
            address: "1 Main St".to_string(),
            description: "Fast oil changes".to_string(),
            phone: "702-555-0101".to_string(),
            email: "hi@quicklube.test".to_string(),
            hours_services: vec!["Mon-Fri 8-6".to_string()],
            services: vec!["Oil".to_string()],
            ..AutoBusiness::default()
        };
        let draft = business
            .to_draft()
            .with_text("services", "Oil Change, , Filters ");
        let payload = AutoBusiness::build_payload(&draft).unwrap();
        let body = payload.as_json().unwrap();
        assert_eq!(body["type"], json!("Oil Change"));
        assert_eq!(body["hoursServices"], json!(["Mon-Fri 8-6"]));
        assert_eq!(body["services"], json!(["Oil Change", "Filters"]));
    }

    #[test]
    fn test_type_list() {
        assert_eq!(BUSINESS_TYPES.len(), 12);
        assert_eq!(BUSINESS_TYPES.last(), Some(&"Other"));
    }
}
