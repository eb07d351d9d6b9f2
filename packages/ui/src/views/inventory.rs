use api::Vehicle;
use dioxus::prelude::*;

use super::money;
use crate::resource_page::{resource_page, AdminResource};
use crate::table::{Column, Lookups};
use crate::widgets::{DetailRow, StatusBadge};

impl AdminResource for Vehicle {
    const TITLE: &'static str = "Vehicle Inventory";
    const NOUN: &'static str = "Vehicle";
    const SEARCH_PLACEHOLDER: &'static str = "Search by brand, model, VIN or status...";
    const VIEWABLE: bool = true;
    const NEEDS_DEALERSHIPS: bool = true;

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Image", |v, _| match v.images.first() {
                Some(src) => rsx! { img { class: "cell-thumb", src: "{src}", alt: "{v.title()}" } },
                None => rsx! { span { class: "cell-muted", "No image" } },
            }),
            Column::new("Vehicle", |v, _| {
                rsx! {
                    div { "{v.title()}" }
                    if !v.vin.is_empty() {
                        div { class: "cell-muted", "VIN: {v.vin}" }
                    }
                }
            }),
            Column::new("Mileage", |v, _| {
                let miles = v.mileage.map(|m| format!("{m} mi")).unwrap_or_default();
                rsx! { "{miles}" }
            }),
            Column::new("Price", |v, _| rsx! { "{money(v.price)}" }),
            Column::new("Dealer", |v, lookups| {
                rsx! { "{lookups.dealership(v.dealership.as_ref())}" }
            }),
            Column::new("Status", |v, _| rsx! { StatusBadge { status: v.status.clone() } }),
        ]
    }

    fn search_text(&self) -> Vec<String> {
        vec![
            self.brand.clone(),
            self.model.clone(),
            self.vin.clone(),
            self.status.clone(),
            self.year.map(|y| y.to_string()).unwrap_or_default(),
            self.dealership
                .as_ref()
                .and_then(|d| d.name())
                .unwrap_or_default()
                .to_string(),
        ]
    }

    fn label(&self) -> String {
        self.title()
    }

    fn detail(&self, lookups: &Lookups) -> Element {
        let features = self.features.join(", ");
        let doors = self.num_doors.map(|n| n.to_string()).unwrap_or_default();
        let seats = self.seating_capacity.map(|n| n.to_string()).unwrap_or_default();
        let mileage = self.mileage.map(|m| format!("{m} mi")).unwrap_or_default();
        let featured = if self.is_featured { "Yes" } else { "No" };

        rsx! {
            if !self.images.is_empty() {
                div {
                    class: "detail-media",
                    for src in self.images.iter() {
                        img { key: "{src}", src: "{src}", alt: "{self.title()}" }
                    }
                }
            }
            DetailRow { label: "Vehicle", value: self.title() }
            DetailRow { label: "Price", value: money(self.price) }
            DetailRow { label: "Mileage", value: mileage }
            DetailRow { label: "Dealership", value: lookups.dealership(self.dealership.as_ref()) }
            DetailRow { label: "Condition", value: self.condition.clone() }
            DetailRow { label: "Exterior Color", value: self.exterior_color.clone() }
            DetailRow { label: "Interior Color", value: self.interior_color.clone() }
            DetailRow { label: "Transmission", value: self.transmission.clone() }
            DetailRow { label: "Fuel Type", value: self.fuel_type.clone() }
            DetailRow { label: "Body Type", value: self.body_type.clone() }
            DetailRow { label: "Engine Size", value: self.engine_size.clone() }
            DetailRow { label: "Drive Train", value: self.drive_train.clone() }
            DetailRow { label: "Doors", value: doors }
            DetailRow { label: "Seating", value: seats }
            DetailRow { label: "VIN", value: self.vin.clone() }
            DetailRow { label: "Features", value: features }
            DetailRow { label: "Featured", value: featured.to_string() }
            DetailRow { label: "Status", value: self.status.clone() }
            DetailRow { label: "Description", value: self.description.clone() }
            if !self.video.is_empty() {
                video { class: "detail-video", src: "{self.video}", controls: true, width: "100%" }
            }
        }
    }
}

#[component]
pub fn Inventory() -> Element {
    resource_page::<Vehicle>()
}
