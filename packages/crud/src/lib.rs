//! # CRUD core shared by every admin screen
//!
//! UI-agnostic building blocks behind the generic resource page:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`draft`] | [`FormDraft`]: the editable key → value mirror of one record |
//! | [`fields`] | [`FieldSpec`] descriptors that map a record onto form inputs and request fields |
//! | [`list`] | Comma-separated list codec (`split_list` / `join_list`) |
//! | [`search`] | Case-insensitive substring filter over the loaded rows |
//! | [`pagination`] | [`PageCursor`], the server-authoritative page position |
//! | [`page`] | [`PageState`], the per-page state machine (loading, overlay, optimistic delete) |
//! | [`optimistic`] | [`perform_optimistic`]: mutate locally, call remote, revert on failure |
//! | [`notify`] | Transient user-facing notifications |

pub mod draft;
pub mod fields;
pub mod list;
pub mod notify;
pub mod optimistic;
pub mod page;
pub mod pagination;
pub mod search;

pub use draft::{FieldValue, FileUpload, FormDraft};
pub use fields::{ClearPolicy, FieldKind, FieldSpec};
pub use list::{join_list, split_list, ListEncoding};
pub use notify::{Level, Notification, Notifications};
pub use optimistic::perform_optimistic;
pub use page::{Identified, Overlay, PageState, Phase, Removed};
pub use pagination::PageCursor;
