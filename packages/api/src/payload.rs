//! # Request bodies for create and update
//!
//! [`Payload::from_draft`] walks a resource's field descriptors in form order
//! and turns the draft into either a JSON object or a multipart body.
//!
//! | Field | Sent as |
//! |-------|---------|
//! | checkbox | `true` / `false` |
//! | list, [`ListEncoding::Array`] | split with `split_list`; JSON array or one part per entry |
//! | list, [`ListEncoding::Literal`] | the raw input string, untouched |
//! | file, new file(s) chosen | file part(s) |
//! | file, existing URL kept | the URL as text, under [`FieldSpec::existing_key`] |
//! | file, empty | `""` for [`ClearPolicy::SendEmpty`], nothing for [`ClearPolicy::Omit`] |
//! | anything else | the input text, empty string included |

use crud::{split_list, ClearPolicy, FieldKind, FieldSpec, FieldValue, FileUpload, FormDraft, ListEncoding};
use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value};

use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Json,
    Multipart,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PartValue {
    Text(String),
    File(FileUpload),
}

/// An ordered list of multipart fields, kept inspectable until it is sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultipartBody {
    parts: Vec<(String, PartValue)>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, key: &str, value: impl Into<String>) {
        self.parts
            .push((key.to_string(), PartValue::Text(value.into())));
    }

    pub fn file(&mut self, key: &str, file: FileUpload) {
        self.parts.push((key.to_string(), PartValue::File(file)));
    }

    pub fn parts(&self) -> &[(String, PartValue)] {
        &self.parts
    }

    /// First text value sent under `key`.
    pub fn text_value(&self, key: &str) -> Option<&str> {
        self.parts.iter().find_map(|(k, v)| match v {
            PartValue::Text(t) if k == key => Some(t.as_str()),
            _ => None,
        })
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.parts.iter().any(|(k, _)| k == key)
    }

    pub fn into_form(self) -> Result<Form> {
        let mut form = Form::new();
        for (key, value) in self.parts {
            form = match value {
                PartValue::Text(text) => form.text(key, text),
                PartValue::File(file) => {
                    let mut part = Part::bytes(file.bytes).file_name(file.name);
                    if let Some(mime) = file.mime.as_deref() {
                        part = part.mime_str(mime)?;
                    }
                    form.part(key, part)
                }
            };
        }
        Ok(form)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Json(Value),
    Multipart(MultipartBody),
}

impl Payload {
    pub fn from_draft(draft: &FormDraft, fields: &[FieldSpec], encoding: Encoding) -> Self {
        match encoding {
            Encoding::Json => Payload::Json(json_body(draft, fields)),
            Encoding::Multipart => Payload::Multipart(multipart_body(draft, fields)),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(v) => Some(v),
            Payload::Multipart(_) => None,
        }
    }

    pub fn as_multipart(&self) -> Option<&MultipartBody> {
        match self {
            Payload::Multipart(m) => Some(m),
            Payload::Json(_) => None,
        }
    }
}

fn json_body(draft: &FormDraft, fields: &[FieldSpec]) -> Value {
    let mut map = Map::new();
    for field in fields {
        if field.kind.is_file() {
            // JSON resources carry no binary media; keep a URL if one is present.
            if let Some(FieldValue::Text(url)) = draft.get(field.key) {
                if !url.trim().is_empty() {
                    map.insert(field.existing_key().to_string(), Value::String(url.clone()));
                    continue;
                }
            }
            if field.clear == ClearPolicy::SendEmpty {
                map.insert(field.key.to_string(), Value::String(String::new()));
            }
            continue;
        }
        let value = match (field.kind, field.list) {
            (FieldKind::Checkbox, _) => Value::Bool(draft.flag(field.key)),
            (_, Some(ListEncoding::Array)) => Value::Array(
                split_list(draft.text(field.key))
                    .into_iter()
                    .map(Value::String)
                    .collect(),
            ),
            _ => Value::String(draft.text(field.key).to_string()),
        };
        map.insert(field.key.to_string(), value);
    }
    Value::Object(map)
}

fn multipart_body(draft: &FormDraft, fields: &[FieldSpec]) -> MultipartBody {
    let mut body = MultipartBody::new();
    for field in fields {
        if field.kind.is_file() {
            match draft.get(field.key) {
                Some(FieldValue::File(file)) => body.file(field.key, file.clone()),
                Some(FieldValue::Files(files)) if !files.is_empty() => {
                    for file in files {
                        body.file(field.key, file.clone());
                    }
                }
                Some(FieldValue::Text(url)) if !url.trim().is_empty() => {
                    body.text(field.existing_key(), url.clone());
                }
                _ => {
                    if field.clear == ClearPolicy::SendEmpty {
                        body.text(field.key, "");
                    }
                }
            }
            continue;
        }
        match (field.kind, field.list) {
            (FieldKind::Checkbox, _) => {
                body.text(field.key, draft.flag(field.key).to_string());
            }
            (_, Some(ListEncoding::Array)) => {
                for item in split_list(draft.text(field.key)) {
                    body.text(field.key, item);
                }
            }
            _ => body.text(field.key, draft.text(field.key)),
        }
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_json_splits_array_lists() {
        let fields = [
            FieldSpec::text("name", "Name"),
            FieldSpec::text("services", "Services").list(ListEncoding::Array),
            FieldSpec::checkbox("isFeatured", "Featured"),
        ];
        let draft = FormDraft::new()
            .with_text("name", "Quick Lube")
            .with_text("services", "Oil Change,  Tires , ,Brakes")
            .with_flag("isFeatured", true);

        let payload = Payload::from_draft(&draft, &fields, Encoding::Json);
        assert_eq!(
            payload.as_json(),
            Some(&json!({
                "name": "Quick Lube",
                "services": ["Oil Change", "Tires", "Brakes"],
                "isFeatured": true,
            }))
        );
    }

    #[test]
    fn test_literal_list_is_sent_untouched() {
        let fields = [FieldSpec::text("features", "Features").list(ListEncoding::Literal)];
        let draft = FormDraft::new().with_text("features", "A, B,  , C");
        let payload = Payload::from_draft(&draft, &fields, Encoding::Multipart);
        let body = payload.as_multipart().unwrap();
        assert_eq!(body.text_value("features"), Some("A, B,  , C"));
        assert_eq!(body.parts().len(), 1);
    }

    #[test]
    fn test_file_fields_new_kept_and_cleared() {
        let fields = [
            FieldSpec::file("logo", "Logo", "image/*").send_empty(),
            FieldSpec::file("coverImage", "Cover", "image/*").send_empty(),
            FieldSpec::file("video", "Video", "video/*").keep_existing_as("videoUrl"),
            FieldSpec::file("image", "Image", "image/*"),
        ];
        let mut draft = FormDraft::blank(&fields);
        draft.set_file("logo", FileUpload::new("logo.png", Some("image/png".into()), vec![1]));
        draft.clear("coverImage");
        draft.set_text("video", "https://cdn.example/v.mp4");

        let payload = Payload::from_draft(&draft, &fields, Encoding::Multipart);
        let body = payload.as_multipart().unwrap();

        assert!(matches!(&body.parts()[0], (k, PartValue::File(f)) if k == "logo" && f.name == "logo.png"));
        assert_eq!(body.text_value("coverImage"), Some(""));
        assert_eq!(body.text_value("videoUrl"), Some("https://cdn.example/v.mp4"));
        assert!(!body.has_key("video"));
        assert!(!body.has_key("image"));
    }

    #[test]
    fn test_multiple_files_become_repeated_parts() {
        let fields = [FieldSpec::files("images", "Images", "image/*")];
        let mut draft = FormDraft::new();
        draft.add_files(
            "images",
            vec![
                FileUpload::new("a.jpg", None, vec![1]),
                FileUpload::new("b.jpg", None, vec![2]),
            ],
        );
        let payload = Payload::from_draft(&draft, &fields, Encoding::Multipart);
        let keys: Vec<&str> = payload
            .as_multipart()
            .unwrap()
            .parts()
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(keys, vec!["images", "images"]);
    }

    #[test]
    fn test_into_form_accepts_files() {
        let mut body = MultipartBody::new();
        body.text("title", "Spring Sale");
        body.file("image", FileUpload::new("a.png", Some("image/png".into()), vec![1, 2]));
        assert!(body.into_form().is_ok());
    }
}
