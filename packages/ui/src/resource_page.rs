//! # Generic resource page
//!
//! Every admin collection screen is the same page: a header with an "add"
//! button, optional status counts, a searchable table, pagination for the
//! server-paginated collections and one overlay at a time (form, detail or
//! delete confirmation). [`AdminResource`] supplies what differs per
//! collection and [`resource_page`] renders it.
//!
//! ## State flow
//!
//! ```text
//! reload ─▶ list fetch ─▶ PageState::settle_load ─▶ table
//!   ▲                                                 │
//!   ├── page change                          add/edit │ view │ delete
//!   └── status change ◀── detail overlay ◀────────────┘
//! ```
//!
//! Saves patch the loaded collection from the server's response; status
//! changes re-fetch the whole collection; deletes are optimistic.

use api::{Editable, ListQuery, Listing, ResourceClient};
use crud::{perform_optimistic, Identified, Overlay, PageState, Phase};
use dioxus::prelude::*;

use crate::context::{use_api, use_config};
use crate::form::{FieldEdit, FormFields};
use crate::icons::{FaEye, FaPenToSquare, FaPlus, FaTrash};
use crate::modal::{ConfirmDialog, Modal, ModalSize};
use crate::pagination::PaginationControls;
use crate::table::{Column, Lookups, SearchableTable};
use crate::toast::use_notifications;
use crate::widgets::{StatCard, StatGrid};
use crate::Icon;

const RESOURCE_PAGE_CSS: Asset = asset!("/assets/styling/resource_page.css");

/// A status a record may be moved to from its detail view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub trait AdminResource: Editable {
    /// Page heading.
    const TITLE: &'static str;
    /// Capitalised singular, used in button labels and notifications.
    const NOUN: &'static str;
    const SEARCH_PLACEHOLDER: &'static str = "Search...";

    const CREATABLE: bool = true;
    const EDITABLE: bool = true;
    const DELETABLE: bool = true;
    const VIEWABLE: bool = false;

    /// Request one page at a time (`page`/`limit`) instead of the whole collection.
    const PAGINATED: bool = false;
    const SORT: Option<&'static str> = None;
    /// Load dealership names for pickers and cells.
    const NEEDS_DEALERSHIPS: bool = false;

    fn columns() -> Vec<Column<Self>>;

    /// The fields the search box matches against.
    fn search_text(&self) -> Vec<String>;

    /// Short human label for confirmation prompts.
    fn label(&self) -> String;

    fn detail(&self, _lookups: &Lookups) -> Element {
        rsx! {}
    }

    fn status_options(&self) -> Vec<StatusOption> {
        Vec::new()
    }

    /// Summary cards over the loaded rows.
    fn stat_cards(_state: &PageState<Self>) -> Vec<StatCard> {
        Vec::new()
    }
}

/// Parameters for the next list fetch. Paginated resources take page and
/// limit from the cursor, which already holds the clamped page size.
pub(crate) fn list_query<R: AdminResource>(state: &PageState<R>) -> ListQuery {
    let query = match state.cursor() {
        Some(cursor) => ListQuery::page(cursor.current_page, cursor.page_size),
        None => ListQuery::all(),
    };
    match R::SORT {
        Some(sort) => query.sorted(sort),
        None => query,
    }
}

/// Dealership names are fetched once, and only once the list itself loaded.
pub(crate) fn needs_picker_options<R: AdminResource>(phase: Phase, lookups: &Lookups) -> bool {
    R::NEEDS_DEALERSHIPS && phase == Phase::Loaded && lookups.dealerships.is_empty()
}

/// Render the full CRUD page for `R`. Call it from a route component.
pub fn resource_page<R: AdminResource>() -> Element {
    let api = use_api();
    let page_size = use_config().api.page_size;
    let mut notes = use_notifications();

    let client = use_hook(|| CopyValue::new(api.resource::<R>()));
    let options_api = use_hook(|| CopyValue::new(api.clone()));
    let mut state = use_signal(|| {
        if R::PAGINATED {
            PageState::<R>::paginated(page_size)
        } else {
            PageState::<R>::new()
        }
    });
    let mut reload = use_signal(|| 0u32);
    let mut lookups = use_signal(Lookups::default);

    let _loader = use_resource(move || async move {
        reload();
        let query = list_query::<R>(&state.peek());
        state.write().begin_load();
        let resource: ResourceClient<R> = client.cloned();
        let result = resource
            .list(&query)
            .await
            .map(Listing::into_parts)
            .map_err(|e| e.user_message());
        state.write().settle_load(result, &mut notes.write());

        // Picker options only after a good list fetch, so an unreachable API
        // raises one error rather than two.
        if !needs_picker_options::<R>(state.peek().phase(), &lookups.peek()) {
            return;
        }
        match options_api.cloned().dealership_options().await {
            Ok(dealerships) => lookups.set(Lookups { dealerships }),
            Err(e) => {
                tracing::error!("Failed to load dealerships: {}", e);
                notes.write().error(e.user_message());
            }
        }
    });

    let on_edit = move |edit: FieldEdit| {
        if let Some(draft) = state.write().draft_mut() {
            edit.apply(draft);
        }
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let (draft, target) = {
            let s = state.read();
            if s.is_submitting() {
                return;
            }
            (s.draft().cloned(), s.editing_target().map(|r| r.id().to_string()))
        };
        let Some(draft) = draft else {
            return;
        };
        let payload = match R::build_payload(&draft) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("{} form rejected: {}", R::NOUN, e);
                notes.write().error(e.user_message());
                return;
            }
        };
        let Some(ticket) = state.write().begin_save() else {
            return;
        };
        spawn(async move {
            let message = match target {
                Some(_) => format!("{} updated successfully", R::NOUN),
                None => format!("{} added successfully", R::NOUN),
            };
            let result = client
                .cloned()
                .save(target.as_deref(), payload)
                .await
                .map_err(|e| e.user_message());
            state.write().settle_save(ticket, result, &mut notes.write(), &message);
        });
    };

    let change_status = move |id: String, status: &'static str| {
        spawn(async move {
            match client.cloned().update_status(&id, status).await {
                Ok(()) => {
                    notes.write().success(format!("Status updated to {status}"));
                    state.write().close();
                    reload += 1;
                }
                Err(e) => {
                    tracing::error!("Status change for {} failed: {}", id, e);
                    notes.write().error(e.user_message());
                }
            }
        });
    };

    let confirm_delete = move |_: ()| {
        let target = match state.read().overlay() {
            Overlay::ConfirmDelete(record) => Some(record.clone()),
            _ => None,
        };
        let Some(record) = target else {
            return;
        };
        state.write().close();
        spawn(async move {
            let id = record.id().to_string();
            let resource = client.cloned();
            let result = perform_optimistic(
                move || state.write().remove(record.id()),
                resource.delete(&id),
                move |removed| {
                    if let Some(removed) = removed {
                        state.write().restore(removed);
                    }
                },
            )
            .await;
            match result {
                Ok(()) => {
                    notes.write().success(format!("{} deleted successfully", R::NOUN));
                }
                Err(e) => {
                    tracing::warn!("Delete of {} rejected: {}", id, e);
                    notes.write().error(e.user_message());
                }
            }
        });
    };

    let row_actions = use_callback(move |record: R| {
        let view = record.clone();
        let edit = record.clone();
        rsx! {
            div {
                class: "row-actions",
                if R::VIEWABLE {
                    button {
                        class: "icon-btn",
                        title: "View",
                        onclick: move |_| state.write().open_view(view.clone()),
                        Icon { icon: FaEye, width: 14, height: 14 }
                    }
                }
                if R::EDITABLE {
                    button {
                        class: "icon-btn",
                        title: "Edit",
                        onclick: move |_| state.write().open_edit(edit.clone(), edit.to_draft()),
                        Icon { icon: FaPenToSquare, width: 14, height: 14 }
                    }
                }
                if R::DELETABLE {
                    button {
                        class: "icon-btn danger",
                        title: "Delete",
                        onclick: move |_| state.write().request_delete(record.clone()),
                        Icon { icon: FaTrash, width: 14, height: 14 }
                    }
                }
            }
        }
    });

    let snapshot = state.read();
    let rows: Vec<R> = snapshot.visible(R::search_text).into_iter().cloned().collect();
    let query = snapshot.query().to_string();
    let loading = snapshot.phase() == Phase::Loading;
    let cursor = snapshot.cursor().copied();
    let submitting = snapshot.is_submitting();
    let overlay = snapshot.overlay().clone();
    let cards = R::stat_cards(&snapshot);
    drop(snapshot);
    let current_lookups = lookups();
    let add_label = format!("Add {}", R::NOUN);

    let overlay_view = match overlay {
        Overlay::Closed => rsx! {},
        Overlay::Editing { draft, target } => {
            let title = match target {
                Some(_) => format!("Edit {}", R::NOUN),
                None => format!("Add {}", R::NOUN),
            };
            rsx! {
                Modal {
                    is_open: true,
                    on_close: move |_| state.write().close(),
                    title,
                    size: ModalSize::Large,
                    form {
                        class: "resource-form",
                        onsubmit: on_submit,
                        FormFields {
                            fields: R::fields(),
                            draft,
                            dealerships: current_lookups.dealerships.clone(),
                            on_edit,
                        }
                        div {
                            class: "modal-actions",
                            button {
                                r#type: "button",
                                class: "btn btn-secondary",
                                onclick: move |_| state.write().close(),
                                "Cancel"
                            }
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: submitting,
                                if submitting { "Saving..." } else { "Save" }
                            }
                        }
                    }
                }
            }
        }
        Overlay::Viewing(record) => {
            let id = record.id().to_string();
            let options = record.status_options();
            rsx! {
                Modal {
                    is_open: true,
                    on_close: move |_| state.write().close(),
                    title: format!("{} Details", R::NOUN),
                    size: ModalSize::Large,
                    {record.detail(&current_lookups)}
                    if !options.is_empty() {
                        div {
                            class: "status-actions",
                            span { "Update status:" }
                            for option in options {
                                button {
                                    key: "{option.value}",
                                    class: "btn btn-secondary",
                                    onclick: {
                                        let id = id.clone();
                                        move |_| change_status(id.clone(), option.value)
                                    },
                                    "{option.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
        Overlay::ConfirmDelete(record) => rsx! {
            ConfirmDialog {
                is_open: true,
                title: format!("Delete {}", R::NOUN),
                message: format!(
                    "Are you sure you want to delete {}? This action cannot be undone.",
                    record.label()
                ),
                on_confirm: confirm_delete,
                on_cancel: move |_| state.write().close(),
            }
        },
    };

    rsx! {
        document::Stylesheet { href: RESOURCE_PAGE_CSS }

        div {
            class: "resource-page",
            div {
                class: "page-header",
                h2 { {R::TITLE} }
                if R::CREATABLE {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| state.write().open_add(R::empty_draft()),
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        span { "{add_label}" }
                    }
                }
            }
            StatGrid { cards }
            SearchableTable::<R> {
                columns: R::columns(),
                rows,
                lookups: current_lookups.clone(),
                query,
                on_query: move |q: String| state.write().set_query(q),
                placeholder: R::SEARCH_PLACEHOLDER.to_string(),
                row_actions,
                loading,
            }
            if let Some(cursor) = cursor {
                PaginationControls {
                    cursor,
                    on_page_change: move |page: u32| {
                        if state.write().go_to_page(page) {
                            reload += 1;
                        }
                    },
                }
            }
        }
        {overlay_view}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{DealershipOption, ServiceBooking, WeeklySpecial};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_paginated_query_follows_cursor() {
        let mut state = PageState::<ServiceBooking>::paginated(10);
        state.finish_load(Vec::new(), Some((3, 25)));
        assert!(state.go_to_page(2));
        assert_eq!(
            list_query::<ServiceBooking>(&state),
            ListQuery::page(2, 10).sorted("-createdAt")
        );
    }

    #[test]
    fn test_zero_page_size_never_reaches_the_server() {
        let state = PageState::<ServiceBooking>::paginated(0);
        assert_eq!(list_query::<ServiceBooking>(&state).limit, Some(1));
    }

    #[test]
    fn test_picker_skipped_when_list_fetch_failed() {
        let empty = Lookups::default();
        assert!(!needs_picker_options::<WeeklySpecial>(Phase::Failed, &empty));
        assert!(needs_picker_options::<WeeklySpecial>(Phase::Loaded, &empty));

        let loaded = Lookups {
            dealerships: vec![DealershipOption {
                id: "d1".to_string(),
                name: "Nellis Auto".to_string(),
            }],
        };
        assert!(!needs_picker_options::<WeeklySpecial>(Phase::Loaded, &loaded));
        assert!(!needs_picker_options::<ServiceBooking>(Phase::Loaded, &empty));
    }

    #[test]
    fn test_unpaginated_query_has_no_parameters() {
        let state = PageState::<WeeklySpecial>::new();
        assert!(list_query::<WeeklySpecial>(&state).pairs().is_empty());
    }
}
