use crud::Identified;
use serde::{Deserialize, Serialize};

use crate::resource::{Editable, Resource, StatusRoute};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactStatus {
    New,
    Responded,
    Archive,
}

impl ContactStatus {
    pub const ALL: [ContactStatus; 3] = [
        ContactStatus::New,
        ContactStatus::Responded,
        ContactStatus::Archive,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "new" => Some(ContactStatus::New),
            "responded" => Some(ContactStatus::Responded),
            "archive" => Some(ContactStatus::Archive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::New => "new",
            ContactStatus::Responded => "responded",
            ContactStatus::Archive => "archive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactStatus::New => "New",
            ContactStatus::Responded => "Responded",
            ContactStatus::Archive => "Archived",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, alias = "submittedAt")]
    pub created_at: String,
}

impl ContactSubmission {
    pub fn contact_status(&self) -> Option<ContactStatus> {
        ContactStatus::parse(&self.status)
    }
}

impl Identified for ContactSubmission {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for ContactSubmission {
    const PATH: &'static str = "contact";
    const STATUS_ROUTE: Option<StatusRoute> = Some(StatusRoute::PatchSuffix);
}

impl Editable for ContactSubmission {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submitted_at_alias() {
        let c: ContactSubmission = serde_json::from_str(
            r#"{"_id":"c1","name":"Bo","status":"responded","submittedAt":"2025-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(c.created_at, "2025-05-01T10:00:00Z");
        assert_eq!(c.contact_status(), Some(ContactStatus::Responded));
    }
}
