//! Form inputs generated from field descriptors.
//!
//! The component never owns the draft. Every keystroke, pick or removal is
//! reported as a [`FieldEdit`] and the owner applies it, which keeps the draft
//! in one place (the resource page state) and makes the edits testable
//! without a renderer.

use api::DealershipOption;
use crud::{FieldKind, FieldSpec, FieldValue, FileUpload, FormDraft};
use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

const FORM_CSS: Asset = asset!("/assets/styling/form.css");

/// One change to a draft field.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldEdit {
    Text { key: String, value: String },
    Flag { key: String, value: bool },
    /// Files picked in a file input. Single-file fields keep only the first.
    Files {
        key: String,
        files: Vec<FileUpload>,
        multiple: bool,
    },
    RemoveFile { key: String, index: usize },
    /// Drop the current value (existing URL or picked file).
    Clear { key: String },
}

impl FieldEdit {
    pub fn apply(self, draft: &mut FormDraft) {
        match self {
            FieldEdit::Text { key, value } => draft.set_text(&key, value),
            FieldEdit::Flag { key, value } => draft.set_flag(&key, value),
            FieldEdit::Files {
                key,
                files,
                multiple,
            } => {
                if multiple {
                    draft.add_files(&key, files);
                } else if let Some(file) = files.into_iter().next() {
                    draft.set_file(&key, file);
                }
            }
            FieldEdit::RemoveFile { key, index } => draft.remove_file(&key, index),
            FieldEdit::Clear { key } => draft.clear(&key),
        }
    }
}

#[component]
pub fn FormFields(
    fields: Vec<FieldSpec>,
    draft: FormDraft,
    dealerships: Vec<DealershipOption>,
    on_edit: EventHandler<FieldEdit>,
) -> Element {
    let inputs: Vec<(FieldSpec, FieldValue)> = fields
        .into_iter()
        .map(|field| {
            let value = draft.get(field.key).cloned().unwrap_or_default();
            (field, value)
        })
        .collect();

    rsx! {
        document::Stylesheet { href: FORM_CSS }

        div {
            class: "form-grid",
            for (field, value) in inputs {
                FieldInput {
                    key: "{field.key}",
                    field,
                    value,
                    dealerships: dealerships.clone(),
                    on_edit,
                }
            }
        }
    }
}

/// Native constraint attributes shared by the text-like inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct InputAttrs {
    placeholder: &'static str,
    /// File inputs never get `required`: an existing upload is not visible
    /// to the browser, so it would block saving an unchanged record.
    required: bool,
}

impl InputAttrs {
    fn of(field: &FieldSpec) -> Self {
        Self {
            placeholder: field.placeholder,
            required: field.required && !field.kind.is_file(),
        }
    }
}

#[component]
fn FieldInput(
    field: FieldSpec,
    value: FieldValue,
    dealerships: Vec<DealershipOption>,
    on_edit: EventHandler<FieldEdit>,
) -> Element {
    let key = field.key;
    let text = match &value {
        FieldValue::Text(s) => s.clone(),
        _ => String::new(),
    };
    let attrs = InputAttrs::of(&field);
    let wide = matches!(field.kind, FieldKind::TextArea | FieldKind::File { .. });
    let on_text = move |evt: Event<FormData>| {
        on_edit.call(FieldEdit::Text {
            key: key.to_string(),
            value: evt.value(),
        })
    };

    let input = match field.kind {
        FieldKind::TextArea => rsx! {
            textarea {
                id: "{key}",
                rows: "4",
                placeholder: attrs.placeholder,
                required: attrs.required,
                value: "{text}",
                oninput: on_text,
            }
        },
        FieldKind::Select(options) => rsx! {
            select {
                id: "{key}",
                required: attrs.required,
                value: "{text}",
                onchange: on_text,
                option { value: "", "Select {field.label}" }
                for opt in options.iter() {
                    option { key: "{opt}", value: "{opt}", selected: text == *opt, "{opt}" }
                }
            }
        },
        FieldKind::Reference => rsx! {
            select {
                id: "{key}",
                required: attrs.required,
                value: "{text}",
                onchange: on_text,
                option { value: "", "Select a dealership" }
                for d in dealerships.iter() {
                    option { key: "{d.id}", value: "{d.id}", selected: text == d.id, "{d.name}" }
                }
            }
        },
        FieldKind::Checkbox => rsx! {
            label {
                class: "checkbox-row",
                input {
                    id: "{key}",
                    r#type: "checkbox",
                    checked: matches!(value, FieldValue::Flag(true)),
                    onchange: move |evt: Event<FormData>| {
                        on_edit.call(FieldEdit::Flag {
                            key: key.to_string(),
                            value: evt.checked(),
                        })
                    },
                }
                span { "{field.label}" }
            }
        },
        FieldKind::File { accept, multiple } => rsx! {
            FileInput { field_key: key, accept, multiple, value: value.clone(), on_edit }
        },
        kind => rsx! {
            input {
                id: "{key}",
                r#type: kind.input_type(),
                placeholder: attrs.placeholder,
                required: attrs.required,
                value: "{text}",
                oninput: on_text,
            }
        },
    };

    rsx! {
        div {
            class: if wide { "form-field wide" } else { "form-field" },
            if field.kind != FieldKind::Checkbox {
                label {
                    r#for: "{key}",
                    "{field.label}"
                    if field.required {
                        span { class: "required", " *" }
                    }
                }
            }
            {input}
        }
    }
}

#[component]
fn FileInput(
    field_key: &'static str,
    accept: &'static str,
    multiple: bool,
    value: FieldValue,
    on_edit: EventHandler<FieldEdit>,
) -> Element {
    let on_pick = move |evt: Event<FormData>| async move {
        let mut files = Vec::new();
        for file in evt.files() {
            match file.read_bytes().await {
                Ok(bytes) => files.push(FileUpload::new(
                    file.name(),
                    file.content_type(),
                    bytes.to_vec(),
                )),
                Err(e) => tracing::warn!("Could not read {}: {}", file.name(), e),
            }
        }
        if !files.is_empty() {
            on_edit.call(FieldEdit::Files {
                key: field_key.to_string(),
                files,
                multiple,
            });
        }
    };
    let clear = move |_: Event<MouseData>| {
        on_edit.call(FieldEdit::Clear {
            key: field_key.to_string(),
        })
    };

    let current = match value {
        FieldValue::Text(url) if !url.is_empty() => rsx! {
            div {
                class: "file-current",
                a { href: "{url}", target: "_blank", "Current file" }
                button { class: "file-remove", title: "Remove", onclick: clear,
                    Icon { icon: FaXmark, width: 12, height: 12 }
                }
            }
        },
        FieldValue::File(file) => {
            let kb = file.size() / 1024;
            rsx! {
                div {
                    class: "file-current",
                    span { "{file.name} ({kb} KB)" }
                    button { class: "file-remove", title: "Remove", onclick: clear,
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
        }
        FieldValue::Files(files) => rsx! {
            ul {
                class: "file-list",
                for (index, file) in files.into_iter().enumerate() {
                    li {
                        key: "{index}-{file.name}",
                        span { "{file.name}" }
                        button {
                            class: "file-remove",
                            title: "Remove",
                            onclick: move |_| on_edit.call(FieldEdit::RemoveFile {
                                key: field_key.to_string(),
                                index,
                            }),
                            Icon { icon: FaXmark, width: 12, height: 12 }
                        }
                    }
                }
            }
        },
        _ => rsx! {},
    };

    rsx! {
        input {
            id: "{field_key}",
            r#type: "file",
            accept,
            multiple,
            onchange: on_pick,
        }
        {current}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn upload(name: &str) -> FileUpload {
        FileUpload::new(name, None, vec![0; 4])
    }

    #[test]
    fn test_required_inputs_carry_native_constraint() {
        let name = FieldSpec::text("name", "Name").required().placeholder("Full name");
        assert_eq!(
            InputAttrs::of(&name),
            InputAttrs {
                placeholder: "Full name",
                required: true,
            }
        );

        let fuel = FieldSpec::select("fuelType", "Fuel Type", &["Petrol", "Diesel"]).required();
        assert!(InputAttrs::of(&fuel).required);

        let notes = FieldSpec::textarea("description", "Description");
        assert_eq!(InputAttrs::of(&notes).placeholder, "");
        assert!(!InputAttrs::of(&notes).required);
    }

    #[test]
    fn test_required_file_input_left_to_submit_check() {
        let logo = FieldSpec::file("logo", "Logo", "image/*").required();
        assert!(!InputAttrs::of(&logo).required);
    }

    #[test]
    fn test_text_and_flag_edits() {
        let mut draft = FormDraft::new();
        FieldEdit::Text {
            key: "brand".into(),
            value: "Ford".into(),
        }
        .apply(&mut draft);
        FieldEdit::Flag {
            key: "isFeatured".into(),
            value: true,
        }
        .apply(&mut draft);
        assert_eq!(draft.text("brand"), "Ford");
        assert!(draft.flag("isFeatured"));
    }

    #[test]
    fn test_single_file_replaces_existing_url() {
        let mut draft = FormDraft::new().with_text("logo", "https://cdn/logo.png");
        FieldEdit::Files {
            key: "logo".into(),
            files: vec![upload("new.png"), upload("ignored.png")],
            multiple: false,
        }
        .apply(&mut draft);
        assert_eq!(draft.get("logo"), Some(&FieldValue::File(upload("new.png"))));
    }

    #[test]
    fn test_multi_file_picks_accumulate_and_remove() {
        let mut draft = FormDraft::new();
        for name in ["a.jpg", "b.jpg"] {
            FieldEdit::Files {
                key: "images".into(),
                files: vec![upload(name)],
                multiple: true,
            }
            .apply(&mut draft);
        }
        FieldEdit::RemoveFile {
            key: "images".into(),
            index: 0,
        }
        .apply(&mut draft);
        assert_eq!(draft.get("images"), Some(&FieldValue::Files(vec![upload("b.jpg")])));
    }

    #[test]
    fn test_clear_blanks_the_field() {
        let mut draft = FormDraft::new().with_text("thumbnail", "https://cdn/t.jpg");
        FieldEdit::Clear {
            key: "thumbnail".into(),
        }
        .apply(&mut draft);
        assert!(draft.is_blank("thumbnail"));
    }
}
