//! # Form drafts
//!
//! A [`FormDraft`] is the in-progress, not-yet-submitted state of one record's
//! editable fields. It is created empty for "add", pre-populated from a record
//! for "edit", and discarded on cancel or successful submit. A failed submit
//! keeps it so the user can retry without re-entering data.
//!
//! Keys keep insertion order so the draft serializes fields in the same order
//! the form shows them.

use indexmap::IndexMap;

use crate::fields::{FieldKind, FieldSpec};

/// A file picked in a file input, already read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileUpload {
    pub name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, mime: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime,
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// The value currently held by one draft field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldValue {
    #[default]
    Empty,
    Text(String),
    Flag(bool),
    /// A newly chosen file replacing any existing remote media.
    File(FileUpload),
    /// Newly chosen files for a multi-file input.
    Files(Vec<FileUpload>),
}

impl FieldValue {
    /// True for `Empty`, whitespace-only text and empty file lists.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Flag(_) | FieldValue::File(_) => false,
            FieldValue::Files(files) => files.is_empty(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormDraft {
    values: IndexMap<String, FieldValue>,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty draft holding each field's blank value in form order.
    pub fn blank(fields: &[FieldSpec]) -> Self {
        let mut draft = Self::new();
        for field in fields {
            let value = match field.kind {
                FieldKind::Checkbox => FieldValue::Flag(false),
                FieldKind::File { .. } => FieldValue::Empty,
                _ => FieldValue::Text(String::new()),
            };
            draft.values.insert(field.key.to_string(), value);
        }
        draft
    }

    /// Builder method to set a text value.
    pub fn with_text(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set_text(key, value);
        self
    }

    /// Builder method to set a boolean value.
    pub fn with_flag(mut self, key: &str, value: bool) -> Self {
        self.set_flag(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: FieldValue) {
        self.values.insert(key.to_string(), value);
    }

    pub fn set_text(&mut self, key: &str, value: impl Into<String>) {
        self.set(key, FieldValue::Text(value.into()));
    }

    pub fn set_flag(&mut self, key: &str, value: bool) {
        self.set(key, FieldValue::Flag(value));
    }

    pub fn set_file(&mut self, key: &str, file: FileUpload) {
        self.set(key, FieldValue::File(file));
    }

    /// Append files to a multi-file field, keeping earlier picks.
    pub fn add_files(&mut self, key: &str, files: Vec<FileUpload>) {
        match self.values.get_mut(key) {
            Some(FieldValue::Files(existing)) => existing.extend(files),
            _ => self.set(key, FieldValue::Files(files)),
        }
    }

    pub fn remove_file(&mut self, key: &str, index: usize) {
        if let Some(FieldValue::Files(existing)) = self.values.get_mut(key) {
            if index < existing.len() {
                existing.remove(index);
            }
        }
    }

    /// Mark a field as intentionally cleared.
    pub fn clear(&mut self, key: &str) {
        self.set(key, FieldValue::Empty);
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    /// Text value of `key`, or `""` when the field is absent or not text.
    pub fn text(&self, key: &str) -> &str {
        match self.values.get(key) {
            Some(FieldValue::Text(s)) => s,
            _ => "",
        }
    }

    pub fn flag(&self, key: &str) -> bool {
        matches!(self.values.get(key), Some(FieldValue::Flag(true)))
    }

    pub fn is_blank(&self, key: &str) -> bool {
        self.values.get(key).map_or(true, FieldValue::is_blank)
    }

    /// The first required field left blank, in form order.
    pub fn first_missing<'a>(&self, fields: &'a [FieldSpec]) -> Option<&'a FieldSpec> {
        fields.iter().find(|f| f.required && self.is_blank(f.key))
    }

    /// The first file field holding an upload over its `max_bytes` limit.
    pub fn oversized_upload<'a>(&self, fields: &'a [FieldSpec]) -> Option<&'a FieldSpec> {
        fields.iter().find(|f| {
            let Some(limit) = f.max_bytes else {
                return false;
            };
            match self.values.get(f.key) {
                Some(FieldValue::File(file)) => file.size() > limit,
                Some(FieldValue::Files(files)) => files.iter().any(|file| file.size() > limit),
                _ => false,
            }
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
