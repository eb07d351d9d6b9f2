use api::{RequestStatus, ServiceBooking};
use crud::PageState;
use dioxus::prelude::*;

use super::short_date;
use crate::resource_page::{resource_page, AdminResource, StatusOption};
use crate::table::{Column, Lookups};
use crate::widgets::{DetailRow, StatCard, StatusBadge, Tone};

/// Counts per lifecycle stage over the loaded page.
pub(crate) fn lifecycle_cards<T: crud::Identified + Clone>(
    state: &PageState<T>,
    status: impl Fn(&T) -> Option<RequestStatus>,
) -> Vec<StatCard> {
    let tones = [Tone::Warning, Tone::Info, Tone::Success, Tone::Danger];
    RequestStatus::ALL
        .iter()
        .zip(tones)
        .map(|(s, tone)| {
            let count = state.count_where(|r| status(r) == Some(*s));
            StatCard::new(s.label(), count, tone)
        })
        .collect()
}

/// Next lifecycle steps as detail-view buttons.
pub(crate) fn lifecycle_options(status: Option<RequestStatus>) -> Vec<StatusOption> {
    status
        .map(|s| s.next())
        .unwrap_or(&[])
        .iter()
        .map(|next| StatusOption {
            value: next.as_str(),
            label: next.label(),
        })
        .collect()
}

impl AdminResource for ServiceBooking {
    const TITLE: &'static str = "Service Bookings";
    const NOUN: &'static str = "Service Booking";
    const SEARCH_PLACEHOLDER: &'static str = "Search by customer, service or vehicle...";
    const CREATABLE: bool = false;
    const EDITABLE: bool = false;
    const DELETABLE: bool = false;
    const VIEWABLE: bool = true;
    const PAGINATED: bool = true;
    const SORT: Option<&'static str> = Some("-createdAt");

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Customer", |b, _| {
                rsx! {
                    div { "{b.name}" }
                    div { class: "cell-muted", "{b.email}" }
                    div { class: "cell-muted", "{b.phone}" }
                }
            }),
            Column::new("Service", |b, _| {
                rsx! {
                    div { "{b.service_needed}" }
                    div { class: "cell-muted", "{b.vehicle()}" }
                }
            }),
            Column::new("Preferred Date", |b, _| {
                rsx! {
                    div { "{short_date(&b.preferred_date)}" }
                    div { class: "cell-muted", "{b.preferred_time}" }
                }
            }),
            Column::new("Status", |b, _| rsx! { StatusBadge { status: b.status.clone() } }),
        ]
    }

    fn search_text(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.service_needed.clone(),
            self.vehicle(),
        ]
    }

    fn label(&self) -> String {
        format!("the booking for {}", self.name)
    }

    fn detail(&self, _lookups: &Lookups) -> Element {
        rsx! {
            DetailRow { label: "Customer", value: self.name.clone() }
            DetailRow { label: "Email", value: self.email.clone() }
            DetailRow { label: "Phone", value: self.phone.clone() }
            DetailRow { label: "Service", value: self.service_needed.clone() }
            DetailRow { label: "Vehicle", value: self.vehicle() }
            DetailRow { label: "Preferred Date", value: short_date(&self.preferred_date) }
            DetailRow { label: "Preferred Time", value: self.preferred_time.clone() }
            DetailRow { label: "Notes", value: self.additional_notes.clone() }
            DetailRow { label: "Status", value: self.status.clone() }
            DetailRow { label: "Submitted", value: short_date(&self.created_at) }
        }
    }

    fn status_options(&self) -> Vec<StatusOption> {
        lifecycle_options(self.request_status())
    }

    fn stat_cards(state: &PageState<Self>) -> Vec<StatCard> {
        lifecycle_cards(state, ServiceBooking::request_status)
    }
}

#[component]
pub fn Service() -> Element {
    resource_page::<ServiceBooking>()
}
