//! # Resources
//!
//! A [`Resource`] is one REST collection (`vehicles`, `dealerships`, ...).
//! [`ResourceClient`] issues list/get/create/update/delete against it and the
//! resource's status sub-endpoint, if it has one. [`Editable`] adds the form
//! mapping: field descriptors, record → draft, draft → request body.

use std::marker::PhantomData;

use crud::{FieldSpec, FormDraft, Identified};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::client::ApiClient;
use crate::envelope::{ListEnvelope, PaginationInfo};
use crate::error::{ApiError, Result};
use crate::payload::{Encoding, Payload};

/// Where a resource's status-only update lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusRoute {
    /// `PATCH {path}/{id}/status`
    PatchSuffix,
    /// `PUT {path}/status/{id}`
    PutPrefix,
}

impl StatusRoute {
    pub fn method(&self) -> Method {
        match self {
            StatusRoute::PatchSuffix => Method::PATCH,
            StatusRoute::PutPrefix => Method::PUT,
        }
    }

    pub fn path(&self, resource: &str, id: &str) -> String {
        match self {
            StatusRoute::PatchSuffix => format!("{resource}/{id}/status"),
            StatusRoute::PutPrefix => format!("{resource}/status/{id}"),
        }
    }
}

pub trait Resource: DeserializeOwned + Identified + Clone + PartialEq + 'static {
    /// Collection path relative to the API base URL.
    const PATH: &'static str;
    const STATUS_ROUTE: Option<StatusRoute> = None;
}

/// Optional `page`, `limit` and `sort` list parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<String>,
}

impl ListQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
            sort: None,
        }
    }

    pub fn sorted(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        pairs
    }
}

/// One fetched page (or the whole unpaginated collection).
#[derive(Clone, Debug, PartialEq)]
pub struct Listing<R> {
    pub records: Vec<R>,
    pub pagination: Option<PaginationInfo>,
}

impl<R> Listing<R> {
    /// `(total_pages, total_items)`, when the server paginated the response.
    pub fn totals(&self) -> Option<(u32, u64)> {
        self.pagination.map(|p| (p.total_pages, p.total_items))
    }

    pub fn into_parts(self) -> (Vec<R>, Option<(u32, u64)>) {
        let totals = self.totals();
        (self.records, totals)
    }
}

pub struct ResourceClient<R> {
    api: ApiClient,
    _marker: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            _marker: PhantomData,
        }
    }
}

impl<R: Resource> ResourceClient<R> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            _marker: PhantomData,
        }
    }

    fn item_path(id: &str) -> String {
        format!("{}/{id}", R::PATH)
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a list envelope.
    pub async fn list(&self, query: &ListQuery) -> Result<Listing<R>> {
        let envelope: ListEnvelope<R> = self.api.get(R::PATH, &query.pairs()).await?;
        Ok(Listing {
            records: envelope.data,
            pagination: envelope.pagination,
        })
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the record cannot be decoded.
    pub async fn get(&self, id: &str) -> Result<R> {
        self.api.get_data(&Self::item_path(id)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the created record cannot be decoded.
    pub async fn create(&self, payload: Payload) -> Result<R> {
        let record: R = self.api.send(Method::POST, R::PATH, payload).await?;
        tracing::info!(resource = R::PATH, id = record.id(), "created");
        Ok(record)
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the updated record cannot be decoded.
    pub async fn update(&self, id: &str, payload: Payload) -> Result<R> {
        let record: R = self.api.send(Method::PUT, &Self::item_path(id), payload).await?;
        tracing::info!(resource = R::PATH, id, "updated");
        Ok(record)
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the delete.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.api.delete(&Self::item_path(id)).await?;
        tracing::info!(resource = R::PATH, id, "deleted");
        Ok(())
    }

    /// Send `{ status }` to the resource's status route.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Precondition`] if the resource has no status route,
    /// otherwise an error if the request fails.
    pub async fn update_status(&self, id: &str, status: &str) -> Result<()> {
        let Some(route) = R::STATUS_ROUTE else {
            return Err(ApiError::precondition(format!(
                "{} does not support status updates",
                R::PATH
            )));
        };
        self.api
            .send_json(route.method(), &route.path(R::PATH, id), &json!({ "status": status }))
            .await?;
        tracing::info!(resource = R::PATH, id, status, "status updated");
        Ok(())
    }

    /// Create when `editing` is `None`, update that record otherwise.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create) and [`update`](Self::update).
    pub async fn save(&self, editing: Option<&str>, payload: Payload) -> Result<R> {
        match editing {
            Some(id) => self.update(id, payload).await,
            None => self.create(payload).await,
        }
    }
}

/// Form mapping for resources that can be created or edited.
///
/// Read-only resources use the defaults: no fields, JSON encoding.
pub trait Editable: Resource {
    const ENCODING: Encoding = Encoding::Json;

    fn fields() -> Vec<FieldSpec> {
        Vec::new()
    }

    /// Draft for the "add" form.
    fn empty_draft() -> FormDraft {
        FormDraft::blank(&Self::fields())
    }

    /// Draft pre-populated from this record for the "edit" form.
    fn to_draft(&self) -> FormDraft {
        Self::empty_draft()
    }

    /// Resource-specific checks run before any request is made.
    fn check(_draft: &FormDraft) -> Result<()> {
        Ok(())
    }

    /// Validate the draft and build the request body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Precondition`] when a required field is blank, an
    /// upload exceeds its limit, or [`check`](Self::check) fails.
    fn build_payload(draft: &FormDraft) -> Result<Payload> {
        let fields = Self::fields();
        if let Some(field) = draft.first_missing(&fields) {
            return Err(ApiError::precondition(format!("{} is required", field.label)));
        }
        if let Some(field) = draft.oversized_upload(&fields) {
            let limit_mb = field.max_bytes.unwrap_or_default() / (1024 * 1024);
            return Err(ApiError::precondition(format!(
                "{} must be smaller than {limit_mb}MB",
                field.label
            )));
        }
        Self::check(draft)?;
        Ok(Payload::from_draft(draft, &fields, Self::ENCODING))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_query_pairs() {
        assert!(ListQuery::all().pairs().is_empty());
        assert_eq!(
            ListQuery::page(2, 10).sorted("-createdAt").pairs(),
            vec![
                ("page", "2".to_string()),
                ("limit", "10".to_string()),
                ("sort", "-createdAt".to_string()),
            ]
        );
    }

    #[test]
    fn test_status_routes() {
        assert_eq!(StatusRoute::PatchSuffix.path("contact", "c1"), "contact/c1/status");
        assert_eq!(StatusRoute::PatchSuffix.method(), Method::PATCH);
        assert_eq!(StatusRoute::PutPrefix.path("services", "s1"), "services/status/s1");
        assert_eq!(StatusRoute::PutPrefix.method(), Method::PUT);
    }

    #[test]
    fn test_listing_totals() {
        let listing = Listing {
            records: vec![1, 2],
            pagination: Some(PaginationInfo {
                total_pages: 4,
                total_items: 37,
            }),
        };
        assert_eq!(listing.into_parts(), (vec![1, 2], Some((4, 37))));
    }
}
