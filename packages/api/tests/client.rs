//! HTTP-level tests for the resource client against a mock API.

use api::{
    ApiClient, ApiError, AutoBusiness, ContactSubmission, Dealership, Editable, ListQuery,
    ServiceBooking, Vehicle, WeeklySpecial,
};
use crud::{perform_optimistic, Notifications, PageState};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(format!("{}/api", server.uri()));
    (server, client)
}

fn dealership_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "name": name,
        "address": "1 Nellis Blvd",
        "phone": "702-555-0100",
        "email": "info@example.test",
        "services": ["Sales"],
        "hours": ["Mon-Fri 9-7"]
    })
}

#[tokio::test]
async fn test_paginated_list_sends_page_and_limit() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/dealerships"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [dealership_json("d11", "Desert Motors")],
            "pagination": { "totalPages": 2, "totalItems": 11 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let listing = client
        .resource::<Dealership>()
        .list(&ListQuery::page(2, 10))
        .await
        .unwrap();
    assert_eq!(listing.records.len(), 1);
    assert_eq!(listing.records[0].name, "Desert Motors");
    assert_eq!(listing.totals(), Some((2, 11)));
}

#[tokio::test]
async fn test_sorted_list_accepts_total_results() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/services"))
        .and(query_param("sort", "-createdAt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "_id": "s1", "name": "Ana", "status": "pending", "vehicleYear": 2019 }],
            "pagination": { "totalPages": 1, "totalResults": 1 }
        })))
        .mount(&server)
        .await;

    let listing = client
        .resource::<ServiceBooking>()
        .list(&ListQuery::page(1, 10).sorted("-createdAt"))
        .await
        .unwrap();
    assert_eq!(listing.totals(), Some((1, 1)));
    assert_eq!(listing.records[0].vehicle_year, "2019");
}

#[tokio::test]
async fn test_list_failure_clears_collection_with_one_notification() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/vehicles"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "Database unavailable" })),
        )
        .mount(&server)
        .await;

    let mut state: PageState<Vehicle> = PageState::new();
    state.finish_load(vec![Vehicle::default()], None);
    let mut notes = Notifications::new();

    let result = client
        .resource::<Vehicle>()
        .list(&ListQuery::all())
        .await
        .map(|listing| listing.into_parts())
        .map_err(|e| e.user_message());
    state.settle_load(result, &mut notes);

    assert!(state.records().is_empty());
    assert_eq!(notes.items().len(), 1);
    assert_eq!(notes.items()[0].message, "Database unavailable");
}

#[tokio::test]
async fn test_rejected_dealership_delete_restores_row() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/api/dealerships/d2"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "Cannot delete dealership: vehicles are still assigned to it"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let records: Vec<Dealership> = ["d1", "d2", "d3"]
        .iter()
        .map(|id| serde_json::from_value(dealership_json(id, id)).unwrap())
        .collect();
    let state = std::cell::RefCell::new(PageState::new());
    state.borrow_mut().finish_load(records, None);
    let mut notes = Notifications::new();

    let dealerships = client.resource::<Dealership>();
    let result = perform_optimistic(
        || state.borrow_mut().remove("d2"),
        dealerships.delete("d2"),
        |removed| {
            if let Some(removed) = removed {
                state.borrow_mut().restore(removed);
            }
        },
    )
    .await;
    if let Err(e) = &result {
        notes.error(e.user_message());
    }

    let ids: Vec<String> = state
        .borrow()
        .records()
        .iter()
        .map(|d| d.id.clone())
        .collect();
    assert_eq!(ids, vec!["d1", "d2", "d3"]);
    assert_eq!(
        notes.items()[0].message,
        "Cannot delete dealership: vehicles are still assigned to it"
    );
    assert_eq!(result.unwrap_err().status(), Some(400));
}

#[tokio::test]
async fn test_vehicle_features_submitted_as_literal_string() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/vehicles"))
        .and(body_string_contains("A, B,  , C"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "_id": "v9", "brand": "Ford", "model": "F-150", "features": ["A", "B", "C"] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let draft = Vehicle::empty_draft()
        .with_text("brand", "Ford")
        .with_text("model", "F-150")
        .with_text("year", "2022")
        .with_text("mileage", "1200")
        .with_text("price", "41000")
        .with_text("dealership", "d1")
        .with_text("fuelType", "Petrol")
        .with_text("features", "A, B,  , C");
    let payload = Vehicle::build_payload(&draft).unwrap();
    let created = client.resource::<Vehicle>().save(None, payload).await.unwrap();

    assert_eq!(created.id, "v9");
    assert_eq!(created.features, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_business_update_sends_json_arrays() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/api/businesses/b1"))
        .and(body_json(json!({
            "name": "Quick Lube",
            "type": "Oil Change",
            "address": "1 Main St",
            "description": "Fast",
            "phone": "702-555-0101",
            "email": "hi@quicklube.test",
            "website": "",
            "hoursServices": ["Mon-Fri 8-6", "Sat 9-3"],
            "services": ["Oil Change"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "_id": "b1", "name": "Quick Lube", "type": "Oil Change" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let draft = AutoBusiness::empty_draft()
        .with_text("name", "Quick Lube")
        .with_text("type", "Oil Change")
        .with_text("address", "1 Main St")
        .with_text("description", "Fast")
        .with_text("phone", "702-555-0101")
        .with_text("email", "hi@quicklube.test")
        .with_text("hoursServices", "Mon-Fri 8-6, Sat 9-3,")
        .with_text("services", "Oil Change");
    let payload = AutoBusiness::build_payload(&draft).unwrap();
    let updated = client
        .resource::<AutoBusiness>()
        .save(Some("b1"), payload)
        .await
        .unwrap();
    assert_eq!(updated.kind, "Oil Change");
}

#[tokio::test]
async fn test_status_routes() {
    let (server, client) = setup().await;
    Mock::given(method("PATCH"))
        .and(path("/api/contact/c1/status"))
        .and(body_json(json!({ "status": "responded" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/services/status/s1"))
        .and(body_json(json!({ "status": "confirmed" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    client
        .resource::<ContactSubmission>()
        .update_status("c1", "responded")
        .await
        .unwrap();
    client
        .resource::<ServiceBooking>()
        .update_status("s1", "confirmed")
        .await
        .unwrap();

    let err = client
        .resource::<Dealership>()
        .update_status("d1", "closed")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Precondition(_)));
}

#[tokio::test]
async fn test_precondition_failure_makes_no_request() {
    let (server, client) = setup().await;
    let draft = WeeklySpecial::empty_draft()
        .with_text("title", "Tire week")
        .with_text("date", "2025-06-01")
        .with_text("description", "Buy 3 get 1");

    let result = match WeeklySpecial::build_payload(&draft) {
        Ok(payload) => client
            .resource::<WeeklySpecial>()
            .save(None, payload)
            .await
            .map(|_| ()),
        Err(e) => Err(e),
    };

    assert!(matches!(result, Err(ApiError::Precondition(_))));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_error_key_used_when_message_missing() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/api/posts/p1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "Post not found" })))
        .mount(&server)
        .await;

    let err = client.resource::<api::BlogPost>().delete("p1").await.unwrap_err();
    assert_eq!(err.user_message(), "Post not found");
}

#[tokio::test]
async fn test_dashboard_stats_all_or_nothing() {
    let (server, client) = setup().await;
    let counts = [
        ("/api/vehicles/totalVehical", 42),
        ("/api/dealerships/totalDealer", 7),
        ("/api/services/totalService", 13),
        ("/api/contact/totalContact", 5),
        ("/api/posts/totalPosts", 9),
    ];
    for (p, n) in counts {
        Mock::given(method("GET"))
            .and(path(p))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": n })))
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/api/weekly-specials/totalWeekly"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let err = client.dashboard_stats().await.unwrap_err();
    assert_eq!(err.status(), Some(500));

    Mock::given(method("GET"))
        .and(path("/api/weekly-specials/totalWeekly"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": 3 })))
        .mount(&server)
        .await;

    let stats = client.dashboard_stats().await.unwrap();
    assert_eq!(stats.vehicles, 42);
    assert_eq!(stats.dealerships, 7);
    assert_eq!(stats.weekly_specials, 3);
}

#[tokio::test]
async fn test_dealership_options() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/dealerships/searchIdName"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "_id": "d1", "name": "Nellis Auto" }, { "_id": "d2", "name": "Desert Motors" }]
        })))
        .mount(&server)
        .await;

    let options = client.dealership_options().await.unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(options[1].name, "Desert Motors");
}
