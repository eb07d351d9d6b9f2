use crud::{join_list, FieldSpec, FormDraft, Identified, ListEncoding};
use serde::{Deserialize, Serialize};

use crate::payload::Encoding;
use crate::resource::{Editable, Resource};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dealership {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub hours: Vec<String>,
    #[serde(default)]
    pub map_url: String,
    #[serde(default)]
    pub description: String,
}

impl Identified for Dealership {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Dealership {
    const PATH: &'static str = "dealerships";
}

impl Editable for Dealership {
    const ENCODING: Encoding = Encoding::Multipart;

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("name", "Dealership Name").required(),
            FieldSpec::file("logo", "Logo", "image/*").send_empty(),
            FieldSpec::file("coverImage", "Cover Image", "image/*").send_empty(),
            FieldSpec::text("address", "Address").required(),
            FieldSpec::tel("phone", "Phone").required(),
            FieldSpec::email("email", "Email").required(),
            FieldSpec::url("website", "Website"),
            FieldSpec::text("services", "Services")
                .required()
                .list(ListEncoding::Literal)
                .placeholder("Sales, Financing, Service"),
            FieldSpec::text("hours", "Hours")
                .required()
                .list(ListEncoding::Literal)
                .placeholder("Mon-Fri: 9AM-7PM, Sat: 9AM-5PM"),
            FieldSpec::text("specialties", "Specialties").list(ListEncoding::Literal),
            FieldSpec::textarea("description", "Description"),
            FieldSpec::url("mapUrl", "Map URL"),
        ]
    }

    fn to_draft(&self) -> FormDraft {
        let mut draft = Self::empty_draft();
        draft.set_text("name", self.name.as_str());
        if !self.logo.is_empty() {
            draft.set_text("logo", self.logo.as_str());
        }
        if !self.cover_image.is_empty() {
            draft.set_text("coverImage", self.cover_image.as_str());
        }
        draft.set_text("address", self.address.as_str());
        draft.set_text("phone", self.phone.as_str());
        draft.set_text("email", self.email.as_str());
        draft.set_text("website", self.website.as_str());
        draft.set_text("services", join_list(&self.services));
        draft.set_text("hours", join_list(&self.hours));
        draft.set_text("specialties", join_list(&self.specialties));
        draft.set_text("description", self.description.as_str());
        draft.set_text("mapUrl", self.map_url.as_str());
        draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Dealership {
        Dealership {
            id: "d1".to_string(),
            name: "Nellis Auto".to_string(),
            logo: "https://cdn/logo.png".to_string(),
            address: "123 Nellis Blvd".to_string(),
            phone: "702-555-0100".to_string(),
            email: "sales@nellisauto.com".to_string(),
            services: vec!["Sales".to_string(), "Service".to_string()],
            hours: vec!["Mon-Fri 9-7".to_string()],
            ..Dealership::default()
        }
    }

    #[test]
    fn test_existing_logo_resubmitted_and_missing_cover_cleared() {
        let payload = Dealership::build_payload(&sample().to_draft()).unwrap();
        let body = payload.as_multipart().unwrap();
        assert_eq!(body.text_value("logo"), Some("https://cdn/logo.png"));
        assert_eq!(body.text_value("coverImage"), Some(""));
        assert_eq!(body.text_value("services"), Some("Sales, Service"));
    }

    #[test]
    fn test_clearing_logo_sends_empty_string() {
        let mut draft = sample().to_draft();
        draft.clear("logo");
        let payload = Dealership::build_payload(&draft).unwrap();
        assert_eq!(payload.as_multipart().unwrap().text_value("logo"), Some(""));
    }
}
