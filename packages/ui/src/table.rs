//! Searchable table.
//!
//! Filtering is done by the caller (see [`crud::PageState::visible`]) so that
//! it only ever looks at the loaded page; the table renders what it is given
//! and owns the search box.

use api::{dealership_name, DealershipOption, DealershipRef};
use crud::Identified;
use dioxus::prelude::*;

use crate::icons::FaMagnifyingGlass;
use crate::Icon;

const TABLE_CSS: Asset = asset!("/assets/styling/table.css");

/// Reference data that cells and detail views may need to resolve ids.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lookups {
    pub dealerships: Vec<DealershipOption>,
}

impl Lookups {
    pub fn dealership(&self, dealership: Option<&DealershipRef>) -> String {
        match dealership_name(dealership, &self.dealerships) {
            Some(name) => name.to_string(),
            None => dealership.map(|d| d.id().to_string()).unwrap_or_default(),
        }
    }
}

pub type Cell<T> = fn(&T, &Lookups) -> Element;

pub struct Column<T> {
    pub header: &'static str,
    pub cell: Cell<T>,
}

impl<T> Column<T> {
    pub fn new(header: &'static str, cell: Cell<T>) -> Self {
        Self { header, cell }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header && self.cell as usize == other.cell as usize
    }
}

#[component]
pub fn SearchableTable<T: Identified + Clone + PartialEq + 'static>(
    columns: Vec<Column<T>>,
    rows: Vec<T>,
    lookups: Lookups,
    query: String,
    on_query: EventHandler<String>,
    #[props(default = "Search...".to_string())] placeholder: String,
    row_actions: Callback<T, Element>,
    #[props(default)] loading: bool,
) -> Element {
    let span = columns.len() + 1;

    rsx! {
        document::Stylesheet { href: TABLE_CSS }

        div {
            class: "table-card",
            div {
                class: "table-search",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                input {
                    r#type: "search",
                    placeholder: "{placeholder}",
                    value: "{query}",
                    oninput: move |evt| on_query.call(evt.value()),
                }
            }
            div {
                class: "table-scroll",
                table {
                    class: "data-table",
                    thead {
                        tr {
                            for column in columns.iter() {
                                th { key: "{column.header}", "{column.header}" }
                            }
                            th { class: "actions-col", "Actions" }
                        }
                    }
                    tbody {
                        if loading {
                            tr {
                                td { class: "table-empty", colspan: "{span}", "Loading..." }
                            }
                        } else if rows.is_empty() {
                            tr {
                                td { class: "table-empty", colspan: "{span}", "No records found" }
                            }
                        } else {
                            for row in rows.iter() {
                                tr {
                                    key: "{row.id()}",
                                    for column in columns.iter() {
                                        td { key: "{column.header}", {(column.cell)(row, &lookups)} }
                                    }
                                    td { class: "actions-col", {row_actions.call(row.clone())} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
