use api::PartsRequest;
use crud::PageState;
use dioxus::prelude::*;

use super::service::{lifecycle_cards, lifecycle_options};
use super::short_date;
use crate::resource_page::{resource_page, AdminResource, StatusOption};
use crate::table::{Column, Lookups};
use crate::widgets::{DetailRow, StatCard, StatusBadge};

impl AdminResource for PartsRequest {
    const TITLE: &'static str = "Parts Requests";
    const NOUN: &'static str = "Parts Request";
    const SEARCH_PLACEHOLDER: &'static str = "Search by customer, vehicle or part...";
    const CREATABLE: bool = false;
    const EDITABLE: bool = false;
    const DELETABLE: bool = false;
    const VIEWABLE: bool = true;
    const PAGINATED: bool = true;
    const SORT: Option<&'static str> = Some("-createdAt");

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Customer", |p, _| {
                rsx! {
                    div { "{p.name}" }
                    div { class: "cell-muted", "{p.email}" }
                }
            }),
            Column::new("Vehicle", |p, _| {
                rsx! {
                    div { "{p.vehicle()}" }
                    if !p.vin.is_empty() {
                        div { class: "cell-muted", "VIN: {p.vin}" }
                    }
                }
            }),
            Column::new("Parts Needed", |p, _| {
                let parts = p.parts_needed.join(", ");
                rsx! { "{parts}" }
            }),
            Column::new("Preferred Pickup", |p, _| rsx! { "{short_date(&p.preferred_pickup)}" }),
            Column::new("Status", |p, _| rsx! { StatusBadge { status: p.status.clone() } }),
        ]
    }

    fn search_text(&self) -> Vec<String> {
        let mut text = vec![self.name.clone(), self.email.clone(), self.vehicle()];
        text.extend(self.parts_needed.iter().cloned());
        text
    }

    fn label(&self) -> String {
        format!("the parts request from {}", self.name)
    }

    fn detail(&self, _lookups: &Lookups) -> Element {
        rsx! {
            DetailRow { label: "Customer", value: self.name.clone() }
            DetailRow { label: "Email", value: self.email.clone() }
            DetailRow { label: "Phone", value: self.phone.clone() }
            DetailRow { label: "Vehicle", value: self.vehicle() }
            DetailRow { label: "VIN", value: self.vin.clone() }
            DetailRow { label: "Parts Needed", value: self.parts_needed.join("\n") }
            DetailRow { label: "Preferred Pickup", value: short_date(&self.preferred_pickup) }
            DetailRow { label: "Status", value: self.status.clone() }
            DetailRow { label: "Submitted", value: short_date(&self.created_at) }
        }
    }

    fn status_options(&self) -> Vec<StatusOption> {
        lifecycle_options(self.request_status())
    }

    fn stat_cards(state: &PageState<Self>) -> Vec<StatCard> {
        lifecycle_cards(state, PartsRequest::request_status)
    }
}

#[component]
pub fn Parts() -> Element {
    resource_page::<PartsRequest>()
}
