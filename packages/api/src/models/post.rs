use crud::{join_list, FieldSpec, FormDraft, Identified, ListEncoding};
use serde::{Deserialize, Serialize};

use crate::payload::Encoding;
use crate::resource::{Editable, Resource};

/// Blog images above this size are rejected before upload.
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

const POST_STATUSES: &[&str] = &["Published", "Draft"];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// HTML body.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub publish_date: String,
}

impl BlogPost {
    pub fn is_published(&self) -> bool {
        self.status.eq_ignore_ascii_case("published")
    }
}

impl Identified for BlogPost {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for BlogPost {
    const PATH: &'static str = "posts";
}

impl Editable for BlogPost {
    const ENCODING: Encoding = Encoding::Multipart;

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("title", "Title").required(),
            FieldSpec::textarea("content", "Content").required(),
            FieldSpec::text("author", "Author").required(),
            FieldSpec::select("status", "Status", POST_STATUSES).required(),
            FieldSpec::file("image", "Featured Image", "image/*").max_bytes(MAX_IMAGE_BYTES),
            FieldSpec::text("tags", "Tags")
                .list(ListEncoding::Literal)
                .placeholder("maintenance, tips, news"),
        ]
    }

    fn empty_draft() -> FormDraft {
        FormDraft::blank(&Self::fields()).with_text("status", "Draft")
    }

    fn to_draft(&self) -> FormDraft {
        let mut draft = Self::empty_draft()
            .with_text("title", self.title.as_str())
            .with_text("content", self.content.as_str())
            .with_text("author", self.author.as_str())
            .with_text("tags", join_list(&self.tags));
        if !self.status.is_empty() {
            draft.set_text("status", self.status.as_str());
        }
        if !self.image.is_empty() {
            draft.set_text("image", self.image.as_str());
        }
        draft
    }
}
