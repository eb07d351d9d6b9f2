use api::{ContactStatus, ContactSubmission};
use crud::PageState;
use dioxus::prelude::*;

use super::short_date;
use crate::resource_page::{resource_page, AdminResource, StatusOption};
use crate::table::{Column, Lookups};
use crate::widgets::{DetailRow, StatCard, StatusBadge, Tone};

impl AdminResource for ContactSubmission {
    const TITLE: &'static str = "Contact Submissions";
    const NOUN: &'static str = "Submission";
    const SEARCH_PLACEHOLDER: &'static str = "Search by name, email or subject...";
    const CREATABLE: bool = false;
    const EDITABLE: bool = false;
    const VIEWABLE: bool = true;

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Contact", |c, _| {
                rsx! {
                    div { "{c.name}" }
                    div { class: "cell-muted", "{c.email}" }
                    if !c.phone.is_empty() {
                        div { class: "cell-muted", "{c.phone}" }
                    }
                }
            }),
            Column::new("Subject", |c, _| {
                rsx! {
                    div { "{c.subject}" }
                    div { class: "cell-muted cell-truncate", "{c.message}" }
                }
            }),
            Column::new("Submitted", |c, _| rsx! { "{short_date(&c.created_at)}" }),
            Column::new("Status", |c, _| {
                let label = c
                    .contact_status()
                    .map(|s| s.label().to_string())
                    .unwrap_or_else(|| c.status.clone());
                rsx! { StatusBadge { status: label } }
            }),
        ]
    }

    fn search_text(&self) -> Vec<String> {
        vec![self.name.clone(), self.email.clone(), self.subject.clone()]
    }

    fn label(&self) -> String {
        format!("this submission from {}", self.name)
    }

    fn detail(&self, _lookups: &Lookups) -> Element {
        rsx! {
            DetailRow { label: "Name", value: self.name.clone() }
            DetailRow { label: "Email", value: self.email.clone() }
            DetailRow { label: "Phone", value: self.phone.clone() }
            DetailRow { label: "Subject", value: self.subject.clone() }
            DetailRow { label: "Message", value: self.message.clone() }
            DetailRow { label: "Submitted", value: short_date(&self.created_at) }
            DetailRow { label: "Status", value: self.status.clone() }
        }
    }

    /// Any status other than the current one.
    fn status_options(&self) -> Vec<StatusOption> {
        let current = self.contact_status();
        ContactStatus::ALL
            .iter()
            .filter(|s| Some(**s) != current)
            .map(|s| StatusOption {
                value: s.as_str(),
                label: s.label(),
            })
            .collect()
    }

    fn stat_cards(state: &PageState<Self>) -> Vec<StatCard> {
        let new = state.count_where(|c| c.contact_status() == Some(ContactStatus::New));
        let responded =
            state.count_where(|c| c.contact_status() == Some(ContactStatus::Responded));
        vec![
            StatCard::new("New", new, Tone::Warning),
            StatCard::new("Responded", responded, Tone::Success),
            StatCard::new("Total", state.records().len(), Tone::Info),
        ]
    }
}

#[component]
pub fn Contacts() -> Element {
    resource_page::<ContactSubmission>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn submission(id: &str, status: &str) -> ContactSubmission {
        ContactSubmission {
            id: id.to_string(),
            status: status.to_string(),
            ..ContactSubmission::default()
        }
    }

    #[test]
    fn test_any_other_status_is_offered() {
        let values: Vec<&str> = submission("c1", "responded")
            .status_options()
            .iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(values, vec!["new", "archive"]);
    }

    #[test]
    fn test_contact_cards() {
        let mut state = PageState::new();
        state.finish_load(
            vec![
                submission("c1", "new"),
                submission("c2", "responded"),
                submission("c3", "archive"),
            ],
            None,
        );
        let cards = ContactSubmission::stat_cards(&state);
        let values: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["1", "1", "3"]);
    }
}
