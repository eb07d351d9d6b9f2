//! This crate contains all shared UI for the admin console.

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod storage;
pub use storage::{platform_store, PlatformStore};

mod auth;
pub use auth::{use_auth, AuthProvider, Gate, LogoutButton, ProtectedRoute};

mod context;
pub use context::{use_api, use_config, ConsoleProvider};

pub mod toast;
pub use crud::Level;
pub use toast::{notify, use_notifications, Toaster};

mod modal;
pub use modal::{ConfirmDialog, Modal, ModalSize};

pub mod table;
pub use table::{Column, Lookups, SearchableTable};

mod pagination;
pub use pagination::PaginationControls;

pub mod form;
pub use form::{FieldEdit, FormFields};

mod widgets;
pub use widgets::{Badge, DetailRow, StatCard, StatGrid, StatusBadge, Tone};

pub mod resource_page;
pub use resource_page::{resource_page, AdminResource, StatusOption};

pub mod views;
