//! # API crate: typed client for the Nellis Auto REST API
//!
//! Every admin screen talks to the backend through this crate. Nothing here
//! knows about rendering; errors are returned to the caller, which turns them
//! into notifications.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URL handling, request execution, error-body extraction |
//! | [`envelope`] | `{ data }` / `{ data, pagination }` response envelopes |
//! | [`error`] | [`ApiError`]: transport, status, decode and precondition failures |
//! | [`models`] | One record type per collection, with its form mapping |
//! | [`payload`] | JSON and multipart request bodies built from form drafts |
//! | [`resource`] | [`Resource`], [`Editable`] and the generic [`ResourceClient`] |
//! | [`stats`] | Dashboard counts, fetched all-or-nothing |
//!
//! ## Endpoints
//!
//! All paths are relative to the configured base URL.
//!
//! - **Collections**: `vehicles`, `dealerships`, `weekly-specials`, `special-offers`,
//!   `businesses`, `services`, `parts`, `posts`, `contact`
//! - **Status updates**: `PATCH contact/{id}/status`, `PUT services/status/{id}`,
//!   `PUT parts/status/{id}`
//! - **Lookups**: `dealerships/searchIdName`, six `.../total*` counters

pub mod client;
pub mod envelope;
pub mod error;
pub mod models;
pub mod payload;
pub mod resource;
pub mod stats;

pub use client::ApiClient;
pub use envelope::PaginationInfo;
pub use error::{ApiError, Result};
pub use models::{
    dealership_name, AutoBusiness, BlogPost, ContactStatus, ContactSubmission, Dealership,
    DealershipOption, DealershipRef, PartsRequest, RequestStatus, ServiceBooking, SpecialOffer,
    Vehicle, WeeklySpecial, BUSINESS_TYPES, MAX_IMAGE_BYTES,
};
pub use payload::{Encoding, MultipartBody, PartValue, Payload};
pub use resource::{Editable, ListQuery, Listing, Resource, ResourceClient, StatusRoute};
pub use stats::DashboardStats;
