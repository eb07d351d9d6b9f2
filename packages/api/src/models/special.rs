use crud::{FieldSpec, FormDraft, Identified};
use serde::{Deserialize, Serialize};

use super::{date_part, DealershipRef};
use crate::error::{ApiError, Result};
use crate::payload::Encoding;
use crate::resource::{Editable, Resource};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySpecial {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub dealership: Option<DealershipRef>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub video: String,
    #[serde(default)]
    pub description: String,
}

impl Identified for WeeklySpecial {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for WeeklySpecial {
    const PATH: &'static str = "weekly-specials";
}

impl Editable for WeeklySpecial {
    const ENCODING: Encoding = Encoding::Multipart;

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("title", "Title").required(),
            FieldSpec::dealership("dealership", "Dealership"),
            FieldSpec::file("thumbnail", "Thumbnail", "image/*").send_empty(),
            FieldSpec::file("video", "Video", "video/*").send_empty(),
            FieldSpec::date("date", "Date").required(),
            FieldSpec::textarea("description", "Description").required(),
        ]
    }

    fn to_draft(&self) -> FormDraft {
        let mut draft = Self::empty_draft();
        draft.set_text("title", self.title.as_str());
        draft.set_text(
            "dealership",
            self.dealership.as_ref().map(DealershipRef::id).unwrap_or_default(),
        );
        if !self.thumbnail.is_empty() {
            draft.set_text("thumbnail", self.thumbnail.as_str());
        }
        if !self.video.is_empty() {
            draft.set_text("video", self.video.as_str());
        }
        draft.set_text("date", date_part(&self.date));
        draft.set_text("description", self.description.as_str());
        draft
    }

    /// A special must be attached to a dealership.
    fn check(draft: &FormDraft) -> Result<()> {
        if draft.is_blank("dealership") {
            return Err(ApiError::precondition("Please select a dealership"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dealership_required_before_submit() {
        let draft = WeeklySpecial::empty_draft()
            .with_text("title", "Oil change week")
            .with_text("date", "2025-06-01")
            .with_text("description", "Half price");
        let err = WeeklySpecial::build_payload(&draft).unwrap_err();
        assert!(matches!(err, ApiError::Precondition(_)));
        assert_eq!(err.user_message(), "Please select a dealership");

        let draft = draft.with_text("dealership", "d1");
        let payload = WeeklySpecial::build_payload(&draft).unwrap();
        let body = payload.as_multipart().unwrap();
        assert_eq!(body.text_value("dealership"), Some("d1"));
        assert_eq!(body.text_value("thumbnail"), Some(""));
        assert_eq!(body.text_value("video"), Some(""));
    }

    #[test]
    fn test_date_trimmed_for_input() {
        let special = WeeklySpecial {
            id: "w1".to_string(),
            date: "2025-06-01T00:00:00.000Z".to_string(),
            dealership: Some(DealershipRef::Id("d1".to_string())),
            ..WeeklySpecial::default()
        };
        let draft = special.to_draft();
        assert_eq!(draft.text("date"), "2025-06-01");
        assert_eq!(draft.text("dealership"), "d1");
    }
}
