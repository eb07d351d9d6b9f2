use crud::{FieldSpec, FormDraft, Identified};
use serde::{Deserialize, Serialize};

use super::{date_part, DealershipRef};
use crate::payload::Encoding;
use crate::resource::{Editable, Resource};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialOffer {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub offer: String,
    #[serde(default)]
    pub dealership: Option<DealershipRef>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub valid_until: String,
    #[serde(default)]
    pub terms_conditions: String,
}

impl SpecialOffer {
    /// Expired once `today` (`YYYY-MM-DD`) is past the valid-until date.
    /// Offers without a date never expire.
    pub fn is_expired_on(&self, today: &str) -> bool {
        let until = date_part(&self.valid_until);
        !until.is_empty() && until.as_str() < today
    }
}

impl Identified for SpecialOffer {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for SpecialOffer {
    const PATH: &'static str = "special-offers";
}

impl Editable for SpecialOffer {
    const ENCODING: Encoding = Encoding::Multipart;

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("title", "Title").required(),
            FieldSpec::textarea("description", "Description").required(),
            FieldSpec::text("tag", "Tag").placeholder("e.g. Limited Time"),
            FieldSpec::text("offer", "Offer").required().placeholder("e.g. 0% APR for 60 months"),
            FieldSpec::dealership("dealership", "Dealership").required(),
            FieldSpec::file("image", "Image", "image/*"),
            FieldSpec::date("validUntil", "Valid Until").required(),
            FieldSpec::textarea("termsConditions", "Terms & Conditions"),
        ]
    }

    fn to_draft(&self) -> FormDraft {
        let mut draft = Self::empty_draft();
        draft.set_text("title", self.title.as_str());
        draft.set_text("description", self.description.as_str());
        draft.set_text("tag", self.tag.as_str());
        draft.set_text("offer", self.offer.as_str());
        draft.set_text(
            "dealership",
            self.dealership.as_ref().map(DealershipRef::id).unwrap_or_default(),
        );
        if !self.image.is_empty() {
            draft.set_text("image", self.image.as_str());
        }
        draft.set_text("validUntil", date_part(&self.valid_until));
        draft.set_text("termsConditions", self.terms_conditions.as_str());
        draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(valid_until: &str) -> SpecialOffer {
        SpecialOffer {
            id: "o1".to_string(),
            valid_until: valid_until.to_string(),
            ..SpecialOffer::default()
        }
    }

    #[test]
    fn test_expiry_badge() {
        assert!(!offer("2025-06-30T00:00:00.000Z").is_expired_on("2025-06-30"));
        assert!(offer("2025-06-29").is_expired_on("2025-06-30"));
        assert!(!offer("").is_expired_on("2025-06-30"));
    }

    #[test]
    fn test_untouched_image_is_omitted() {
        let draft = offer("2025-06-30")
            .to_draft()
            .with_text("title", "Summer")
            .with_text("description", "Deals")
            .with_text("offer", "10% off")
            .with_text("dealership", "d1");
        let payload = SpecialOffer::build_payload(&draft).unwrap();
        assert!(!payload.as_multipart().unwrap().has_key("image"));
    }
}
