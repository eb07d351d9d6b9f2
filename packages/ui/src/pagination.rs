//! Page navigation for server-paginated lists.

use crud::PageCursor;
use dioxus::prelude::*;

use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::Icon;

#[component]
pub fn PaginationControls(
    cursor: PageCursor,
    /// Receives the requested 1-based page; clamping is the cursor's job.
    on_page_change: EventHandler<u32>,
) -> Element {
    let current = cursor.current_page;

    rsx! {
        div {
            class: "pagination",
            span {
                class: "pagination-info",
                "Showing {cursor.first_row()}-{cursor.last_row()} of {cursor.total_items}"
            }
            div {
                class: "pagination-buttons",
                button {
                    class: "pagination-btn",
                    disabled: !cursor.has_prev(),
                    title: "Previous page",
                    onclick: move |_| on_page_change.call(current.saturating_sub(1)),
                    Icon { icon: FaChevronLeft, width: 12, height: 12 }
                }
                for page in cursor.pages() {
                    button {
                        key: "{page}",
                        class: if page == current { "pagination-btn active" } else { "pagination-btn" },
                        onclick: move |_| on_page_change.call(page),
                        "{page}"
                    }
                }
                button {
                    class: "pagination-btn",
                    disabled: !cursor.has_next(),
                    title: "Next page",
                    onclick: move |_| on_page_change.call(current + 1),
                    Icon { icon: FaChevronRight, width: 12, height: 12 }
                }
            }
        }
    }
}
