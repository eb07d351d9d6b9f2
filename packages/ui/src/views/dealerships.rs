use api::Dealership;
use dioxus::prelude::*;

use crate::resource_page::{resource_page, AdminResource};
use crate::table::{Column, Lookups};
use crate::widgets::DetailRow;

impl AdminResource for Dealership {
    const TITLE: &'static str = "Dealerships";
    const NOUN: &'static str = "Dealership";
    const SEARCH_PLACEHOLDER: &'static str = "Search dealerships...";
    const VIEWABLE: bool = true;
    const PAGINATED: bool = true;

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Dealership", |d, _| {
                rsx! {
                    div {
                        class: "cell-with-thumb",
                        if !d.logo.is_empty() {
                            img { class: "cell-thumb", src: "{d.logo}", alt: "{d.name}" }
                        }
                        div {
                            div { "{d.name}" }
                            div { class: "cell-muted", "{d.address}" }
                        }
                    }
                }
            }),
            Column::new("Contact", |d, _| {
                rsx! {
                    div { "{d.phone}" }
                    div { class: "cell-muted", "{d.email}" }
                }
            }),
            Column::new("Services", |d, _| {
                let services = d.services.join(", ");
                rsx! { "{services}" }
            }),
        ]
    }

    fn search_text(&self) -> Vec<String> {
        vec![self.name.clone(), self.address.clone(), self.email.clone()]
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn detail(&self, _lookups: &Lookups) -> Element {
        rsx! {
            div {
                class: "detail-media",
                if !self.cover_image.is_empty() {
                    img { src: "{self.cover_image}", alt: "Cover" }
                }
                if !self.logo.is_empty() {
                    img { src: "{self.logo}", alt: "Logo" }
                }
            }
            DetailRow { label: "Name", value: self.name.clone() }
            DetailRow { label: "Address", value: self.address.clone() }
            DetailRow { label: "Phone", value: self.phone.clone() }
            DetailRow { label: "Email", value: self.email.clone() }
            DetailRow { label: "Website", value: self.website.clone() }
            DetailRow { label: "Services", value: self.services.join(", ") }
            DetailRow { label: "Specialties", value: self.specialties.join(", ") }
            DetailRow { label: "Hours", value: self.hours.join("\n") }
            DetailRow { label: "Map", value: self.map_url.clone() }
            DetailRow { label: "Description", value: self.description.clone() }
        }
    }
}

#[component]
pub fn Dealerships() -> Element {
    resource_page::<Dealership>()
}
