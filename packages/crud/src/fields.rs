//! Field descriptors.
//!
//! Each resource declares its form as a slice of [`FieldSpec`]s. The same
//! descriptors drive three things: which input is rendered, how a record is
//! copied into a [`FormDraft`](crate::FormDraft), and how the draft is turned
//! into the request body on submit.

use crate::list::ListEncoding;

/// What to send for a field whose value is empty on submit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClearPolicy {
    /// Leave the field out of the request.
    #[default]
    Omit,
    /// Send an empty string so the server clears the stored value.
    SendEmpty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Url,
    Number,
    Date,
    TextArea,
    Select(&'static [&'static str]),
    /// A dealership picked from the dealership options list.
    Reference,
    Checkbox,
    File {
        accept: &'static str,
        multiple: bool,
    },
}

impl FieldKind {
    /// The HTML `type` attribute for plain `<input>` kinds.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Url => "url",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Checkbox => "checkbox",
            FieldKind::File { .. } => "file",
            _ => "text",
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, FieldKind::File { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Request field name, also the draft key.
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Set for list-valued fields edited as one comma-separated input.
    pub list: Option<ListEncoding>,
    pub clear: ClearPolicy,
    pub placeholder: &'static str,
    /// Upload size limit in bytes, checked before submit.
    pub max_bytes: Option<usize>,
    /// Request key used to resubmit an existing media URL when no new file
    /// was chosen. Defaults to `key`.
    pub keep_key: Option<&'static str>,
}

impl FieldSpec {
    pub fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
            list: None,
            clear: ClearPolicy::Omit,
            placeholder: "",
            max_bytes: None,
            keep_key: None,
        }
    }

    pub fn text(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    pub fn email(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Email)
    }

    pub fn tel(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Tel)
    }

    pub fn url(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Url)
    }

    pub fn number(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Number)
    }

    pub fn date(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Date)
    }

    pub fn textarea(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::TextArea)
    }

    pub fn select(key: &'static str, label: &'static str, options: &'static [&'static str]) -> Self {
        Self::new(key, label, FieldKind::Select(options))
    }

    pub fn dealership(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Reference)
    }

    pub fn checkbox(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Checkbox)
    }

    pub fn file(key: &'static str, label: &'static str, accept: &'static str) -> Self {
        Self::new(
            key,
            label,
            FieldKind::File {
                accept,
                multiple: false,
            },
        )
    }

    pub fn files(key: &'static str, label: &'static str, accept: &'static str) -> Self {
        Self::new(
            key,
            label,
            FieldKind::File {
                accept,
                multiple: true,
            },
        )
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Edited as a comma-separated list, submitted per `encoding`.
    pub fn list(mut self, encoding: ListEncoding) -> Self {
        self.list = Some(encoding);
        self
    }

    /// Send `""` when the value is empty on submit.
    pub fn send_empty(mut self) -> Self {
        self.clear = ClearPolicy::SendEmpty;
        self
    }

    pub fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = text;
        self
    }

    pub fn max_bytes(mut self, limit: usize) -> Self {
        self.max_bytes = Some(limit);
        self
    }

    pub fn keep_existing_as(mut self, key: &'static str) -> Self {
        self.keep_key = Some(key);
        self
    }

    /// Key under which an unchanged media URL is resubmitted.
    pub fn existing_key(&self) -> &'static str {
        self.keep_key.unwrap_or(self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let spec = FieldSpec::text("name", "Name");
        assert!(!spec.required);
        assert_eq!(spec.list, None);
        assert_eq!(spec.clear, ClearPolicy::Omit);
        assert_eq!(spec.kind.input_type(), "text");
    }

    #[test]
    fn test_builder_chain() {
        let spec = FieldSpec::file("logo", "Logo", "image/*")
            .send_empty()
            .max_bytes(2 * 1024 * 1024);
        assert!(spec.kind.is_file());
        assert_eq!(spec.clear, ClearPolicy::SendEmpty);
        assert_eq!(spec.max_bytes, Some(2 * 1024 * 1024));

        let spec = FieldSpec::text("services", "Services")
            .list(ListEncoding::Array)
            .required();
        assert!(spec.required);
        assert_eq!(spec.list, Some(ListEncoding::Array));
    }

    #[test]
    fn test_input_types() {
        assert_eq!(FieldKind::Email.input_type(), "email");
        assert_eq!(FieldKind::Date.input_type(), "date");
        assert_eq!(FieldKind::TextArea.input_type(), "text");
        assert_eq!(
            FieldKind::File {
                accept: "video/*",
                multiple: false
            }
            .input_type(),
            "file"
        );
    }
}
