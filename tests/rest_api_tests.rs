//! End-to-end tests for the REST API against seeded fixture data

use axum_test::TestServer;
use buyflex::config::StoreConfig;
use buyflex::server::{AppState, SESSION_HEADER, build_router};
use serde_json::{Value, json};

fn create_test_server() -> TestServer {
    let state = AppState::seeded(StoreConfig::default_config()).expect("state should seed");
    TestServer::new(build_router(state))
}

async fn open_session(server: &TestServer) -> String {
    let response = server.post("/api/sessions").await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["sessionId"].as_str().expect("session id").to_string()
}

async fn login(server: &TestServer, session: &str, email: &str, password: &str) {
    let response = server
        .post("/api/auth/login")
        .add_header(SESSION_HEADER, session)
        .json(&json!({ "email": email, "password": password }))
        .await;
    response.assert_status_ok();
}

mod health {
    use super::*;

    #[tokio::test]
    async fn health_check_works() {
        let server = create_test_server();
        let response = server.get("/health").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
    }
}

mod catalog {
    use super::*;

    #[tokio::test]
    async fn listing_returns_the_seeded_products_in_order() {
        let server = create_test_server();
        let response = server.get("/api/products").await;
        response.assert_status_ok();
        let body: Vec<Value> = response.json();
        assert_eq!(body.len(), 8);
        assert_eq!(body[0]["name"], "FreePods Pro");
        assert_eq!(body[7]["name"], "DriveMount Pro");
    }

    #[tokio::test]
    async fn facets_filter_the_listing() {
        let server = create_test_server();
        let response = server
            .get("/api/products")
            .add_query_param("category", "Accessories")
            .add_query_param("maxPrice", "20")
            .await;
        response.assert_status_ok();
        let body: Vec<Value> = response.json();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0]["name"], "CableWrap Kit");
    }

    #[tokio::test]
    async fn search_overrides_facets() {
        let server = create_test_server();
        // The facet excludes everything; the search query must still win.
        let response = server
            .get("/api/products")
            .add_query_param("category", "Speakers")
            .add_query_param("maxPrice", "0.01")
            .add_query_param("search", "noise")
            .await;
        response.assert_status_ok();
        let body: Vec<Value> = response.json();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0]["id"], 1);
    }

    #[tokio::test]
    async fn sort_orders_by_price() {
        let server = create_test_server();
        let response = server
            .get("/api/products")
            .add_query_param("sort", "price-asc")
            .await;
        response.assert_status_ok();
        let body: Vec<Value> = response.json();
        let prices: Vec<f64> = body.iter().map(|p| p["price"].as_f64().unwrap()).collect();
        let mut sorted = prices.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(prices, sorted);
    }

    #[tokio::test]
    async fn unknown_sort_key_is_a_bad_request() {
        let server = create_test_server();
        let response = server
            .get("/api/products")
            .add_query_param("sort", "price-sideways")
            .await;
        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["code"], "UNKNOWN_SORT_KEY");
    }

    #[tokio::test]
    async fn product_detail_includes_only_approved_reviews() {
        let server = create_test_server();
        let response = server.get("/api/products/1").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["name"], "FreePods Pro");
        assert_eq!(body["rating"], 4.5);
        // Product 1 has two approved and one pending review.
        assert_eq!(body["reviews"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn missing_product_is_not_found() {
        let server = create_test_server();
        let response = server.get("/api/products/999").await;
        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn categories_start_with_all() {
        let server = create_test_server();
        let response = server.get("/api/categories").await;
        response.assert_status_ok();
        let body: Vec<String> = response.json();
        assert_eq!(body[0], "All");
        assert_eq!(body.len(), 8);
    }

    #[tokio::test]
    async fn submitted_reviews_enter_moderation() {
        let server = create_test_server();
        let response = server
            .post("/api/products/4/reviews")
            .json(&json!({ "author": "New Buyer", "rating": 4, "comment": "Nice bass." }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "Pending");

        // Pending reviews stay off the product page.
        let detail: Value = server.get("/api/products/4").await.json();
        assert!(
            detail["reviews"]
                .as_array()
                .unwrap()
                .iter()
                .all(|r| r["author"] != "New Buyer")
        );
    }
}

mod cart_and_checkout {
    use super::*;

    #[tokio::test]
    async fn cart_requires_a_session_header() {
        let server = create_test_server();
        let response = server.get("/api/cart").await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn cart_flow_merges_and_updates_quantities() {
        let server = create_test_server();
        let session = open_session(&server).await;

        for _ in 0..2 {
            let response = server
                .post("/api/cart/items")
                .add_header(SESSION_HEADER, session.as_str())
                .json(&json!({ "productId": 1, "quantity": 1 }))
                .await;
            response.assert_status_ok();
        }

        let cart: Value = server
            .get("/api/cart")
            .add_header(SESSION_HEADER, session.as_str())
            .await
            .json();
        assert_eq!(cart["count"], 2);
        assert_eq!(cart["items"].as_array().unwrap().len(), 1);

        // Setting the quantity to zero removes the line.
        let response = server
            .put("/api/cart/items/1")
            .add_header(SESSION_HEADER, session.as_str())
            .json(&json!({ "quantity": 0 }))
            .await;
        response.assert_status_ok();
        let cart: Value = server
            .get("/api/cart")
            .add_header(SESSION_HEADER, session.as_str())
            .await
            .json();
        assert_eq!(cart["count"], 0);
    }

    #[tokio::test]
    async fn removing_a_line_that_is_not_there_fails() {
        let server = create_test_server();
        let session = open_session(&server).await;
        let response = server
            .delete("/api/cart/items/5")
            .add_header(SESSION_HEADER, session.as_str())
            .await;
        response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn wishlist_toggles_on_and_off() {
        let server = create_test_server();
        let session = open_session(&server).await;
        let on: Value = server
            .post("/api/wishlist/3")
            .add_header(SESSION_HEADER, session.as_str())
            .await
            .json();
        assert_eq!(on["inWishlist"], true);
        let off: Value = server
            .post("/api/wishlist/3")
            .add_header(SESSION_HEADER, session.as_str())
            .await
            .json();
        assert_eq!(off["inWishlist"], false);
    }

    #[tokio::test]
    async fn checkout_requires_login() {
        let server = create_test_server();
        let session = open_session(&server).await;
        server
            .post("/api/cart/items")
            .add_header(SESSION_HEADER, session.as_str())
            .json(&json!({ "productId": 1 }))
            .await
            .assert_status_ok();

        let response = server
            .post("/api/checkout")
            .add_header(SESSION_HEADER, session.as_str())
            .json(&json!({ "address": shipping_address() }))
            .await;
        response.assert_status_unauthorized();
    }

    fn shipping_address() -> Value {
        json!({
            "fullName": "Alice Johnson",
            "street": "123 Maple St",
            "city": "Springfield",
            "state": "IL",
            "zip": "62704",
            "country": "USA",
            "phone": "555-0101"
        })
    }

    #[tokio::test]
    async fn checkout_places_a_processing_order_with_shipping_fee() {
        let server = create_test_server();
        let session = open_session(&server).await;
        login(&server, &session, "alice@example.com", "password123").await;

        // Two CableWrap Kits: $30 subtotal, below the free-shipping bar.
        server
            .post("/api/cart/items")
            .add_header(SESSION_HEADER, session.as_str())
            .json(&json!({ "productId": 7, "quantity": 2 }))
            .await
            .assert_status_ok();

        let quote: Value = server
            .get("/api/checkout/quote")
            .add_header(SESSION_HEADER, session.as_str())
            .await
            .json();
        assert_eq!(quote["subtotal"], 30.0);
        assert_eq!(quote["shipping"], 5.0);

        let response = server
            .post("/api/checkout")
            .add_header(SESSION_HEADER, session.as_str())
            .json(&json!({ "address": shipping_address() }))
            .await;
        response.assert_status_ok();
        let order: Value = response.json();
        assert_eq!(order["id"], "BFX-005");
        assert_eq!(order["status"], "Processing");
        assert_eq!(order["total"], 35.0);

        // The cart is cleared and the order is visible in the history.
        let cart: Value = server
            .get("/api/cart")
            .add_header(SESSION_HEADER, session.as_str())
            .await
            .json();
        assert_eq!(cart["count"], 0);
        let orders: Vec<Value> = server
            .get("/api/orders")
            .add_header(SESSION_HEADER, session.as_str())
            .await
            .json();
        assert!(orders.iter().any(|o| o["id"] == "BFX-005"));
    }

    #[tokio::test]
    async fn checkout_with_an_empty_cart_fails() {
        let server = create_test_server();
        let session = open_session(&server).await;
        login(&server, &session, "alice@example.com", "password123").await;
        let response = server
            .post("/api/checkout")
            .add_header(SESSION_HEADER, session.as_str())
            .json(&json!({ "address": shipping_address() }))
            .await;
        response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn order_tracking_is_public() {
        let server = create_test_server();
        let response = server.get("/api/orders/BFX-002/track").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "Shipped");
        assert_eq!(body["carrier"]["name"], "UPS");

        server
            .get("/api/orders/BFX-999/track")
            .await
            .assert_status_not_found();
    }
}

mod auth {
    use super::*;

    #[tokio::test]
    async fn login_round_trip() {
        let server = create_test_server();
        let session = open_session(&server).await;
        let response = server
            .post("/api/auth/login")
            .add_header(SESSION_HEADER, session.as_str())
            .json(&json!({ "email": "alice@example.com", "password": "password123" }))
            .await;
        response.assert_status_ok();
        let user: Value = response.json();
        assert_eq!(user["name"], "Alice Johnson");
        // The password never leaves the server.
        assert!(user.get("password").is_none());

        let me: Value = server
            .get("/api/me")
            .add_header(SESSION_HEADER, session.as_str())
            .await
            .json();
        assert_eq!(me["id"], 101);

        server
            .post("/api/auth/logout")
            .add_header(SESSION_HEADER, session.as_str())
            .await
            .assert_status_ok();
        server
            .get("/api/me")
            .add_header(SESSION_HEADER, session.as_str())
            .await
            .assert_status_unauthorized();
    }

    #[tokio::test]
    async fn bad_credentials_are_unauthorized() {
        let server = create_test_server();
        let session = open_session(&server).await;
        let response = server
            .post("/api/auth/login")
            .add_header(SESSION_HEADER, session.as_str())
            .json(&json!({ "email": "alice@example.com", "password": "nope" }))
            .await;
        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn registration_rejects_a_taken_email() {
        let server = create_test_server();
        let session = open_session(&server).await;
        let response = server
            .post("/api/auth/register")
            .add_header(SESSION_HEADER, session.as_str())
            .json(&json!({ "name": "Eve", "email": "bob@example.com", "password": "pw" }))
            .await;
        response.assert_status(axum::http::StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn registration_logs_the_new_account_in() {
        let server = create_test_server();
        let session = open_session(&server).await;
        let response = server
            .post("/api/auth/register")
            .add_header(SESSION_HEADER, session.as_str())
            .json(&json!({ "name": "Dave Lee", "email": "dave@example.com", "password": "pw" }))
            .await;
        response.assert_status_ok();
        let me: Value = server
            .get("/api/me")
            .add_header(SESSION_HEADER, session.as_str())
            .await
            .json();
        assert_eq!(me["email"], "dave@example.com");
        assert_eq!(me["role"], "Customer");
    }
}

mod chat {
    use super::*;

    #[tokio::test]
    async fn store_questions_get_store_answers() {
        let server = create_test_server();
        let response = server
            .post("/api/chat")
            .json(&json!({ "query": "what is your return policy?" }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert!(body["textResponse"].as_str().unwrap().contains("14-day"));
        assert!(body["recommendations"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn product_questions_recommend_catalog_products() {
        let server = create_test_server();
        let response = server
            .post("/api/chat")
            .json(&json!({ "query": "recommend a speaker with good bass" }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        let recs = body["recommendations"].as_array().unwrap();
        assert!(!recs.is_empty());
        assert!(recs.len() <= 3);
        for rec in recs {
            let id = rec["id"].as_u64().unwrap();
            assert!((1..=8).contains(&id));
        }
    }
}

mod support {
    use super::*;

    #[tokio::test]
    async fn contact_form_lands_in_the_inbox_as_new() {
        let server = create_test_server();
        let response = server
            .post("/api/contact")
            .json(&json!({
                "name": "Sam",
                "email": "sam@example.com",
                "subject": "Hello",
                "message": "Just saying hi."
            }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "New");
        assert_eq!(body["id"], 5);
    }

    #[tokio::test]
    async fn bookings_and_claims_start_pending() {
        let server = create_test_server();
        let meeting: Value = server
            .post("/api/meetings")
            .json(&json!({
                "name": "Sam",
                "email": "sam@example.com",
                "date": "2024-03-01",
                "time": "10:00",
                "topic": "Bulk pricing"
            }))
            .await
            .json();
        assert_eq!(meeting["status"], "Pending");

        let claim: Value = server
            .post("/api/warranty-claims")
            .json(&json!({
                "productName": "BoomBass Speaker",
                "purchaseDate": "2023-11-02",
                "issueDescription": "No sound from the left channel."
            }))
            .await
            .json();
        assert_eq!(claim["status"], "Pending");
    }
}

mod admin {
    use super::*;

    async fn admin_session(server: &TestServer) -> String {
        let session = open_session(server).await;
        login(server, &session, "admin@buyflex.com", "admin123").await;
        session
    }

    #[tokio::test]
    async fn admin_routes_reject_guests_and_customers() {
        let server = create_test_server();
        let session = open_session(&server).await;
        server
            .get("/api/admin/stats")
            .add_header(SESSION_HEADER, session.as_str())
            .await
            .assert_status_unauthorized();

        login(&server, &session, "alice@example.com", "password123").await;
        server
            .get("/api/admin/stats")
            .add_header(SESSION_HEADER, session.as_str())
            .await
            .assert_status_forbidden();
    }

    #[tokio::test]
    async fn dashboard_stats_reflect_the_seed() {
        let server = create_test_server();
        let session = admin_session(&server).await;
        let stats: Value = server
            .get("/api/admin/stats")
            .add_header(SESSION_HEADER, session.as_str())
            .await
            .json();
        assert_eq!(stats["totalRevenue"], 391.49);
        assert_eq!(stats["processingOrders"], 1);
        assert_eq!(stats["lowStockProducts"], 0);
    }

    #[tokio::test]
    async fn product_crud_round_trip() {
        let server = create_test_server();
        let session = admin_session(&server).await;

        let created: Value = server
            .post("/api/admin/products")
            .add_header(SESSION_HEADER, session.as_str())
            .json(&json!({
                "name": "SoundBar Mini",
                "category": "Speakers",
                "price": 79.99,
                "imageUrl": "",
                "description": "Compact soundbar.",
                "stock": 40,
                "manufacturingDate": "2024-02-01"
            }))
            .await
            .json();
        assert_eq!(created["id"], 9);
        assert_eq!(created["rating"], 0.0);

        let mut updated = created.clone();
        updated["price"] = json!(69.99);
        let response = server
            .put("/api/admin/products/9")
            .add_header(SESSION_HEADER, session.as_str())
            .json(&updated)
            .await;
        response.assert_status_ok();

        let detail: Value = server.get("/api/products/9").await.json();
        assert_eq!(detail["price"], 69.99);

        server
            .delete("/api/admin/products/9")
            .add_header(SESSION_HEADER, session.as_str())
            .await
            .assert_status_ok();
        server.get("/api/products/9").await.assert_status_not_found();
    }

    #[tokio::test]
    async fn orders_paginate_and_update_status() {
        let server = create_test_server();
        let session = admin_session(&server).await;

        let page: Value = server
            .get("/api/admin/orders")
            .add_header(SESSION_HEADER, session.as_str())
            .add_query_param("page", "1")
            .add_query_param("limit", "2")
            .await
            .json();
        assert_eq!(page["data"].as_array().unwrap().len(), 2);
        assert_eq!(page["pagination"]["total"], 4);
        assert_eq!(page["pagination"]["total_pages"], 2);

        let updated: Value = server
            .put("/api/admin/orders/BFX-003/status")
            .add_header(SESSION_HEADER, session.as_str())
            .json(&json!({ "status": "Shipped" }))
            .await
            .json();
        assert_eq!(updated["status"], "Shipped");
    }

    #[tokio::test]
    async fn role_updates_respect_the_super_admin_lock() {
        let server = create_test_server();
        let session = admin_session(&server).await;

        let promoted: Value = server
            .put("/api/admin/users/101/role")
            .add_header(SESSION_HEADER, session.as_str())
            .json(&json!({ "role": "Admin" }))
            .await
            .json();
        assert_eq!(promoted["role"], "Admin");

        server
            .put("/api/admin/users/202/role")
            .add_header(SESSION_HEADER, session.as_str())
            .json(&json!({ "role": "Customer" }))
            .await
            .assert_status_forbidden();
    }

    #[tokio::test]
    async fn review_moderation_updates_the_product_rating() {
        let server = create_test_server();
        let session = admin_session(&server).await;

        // Product 3 sits at 5.0; approving its pending 4-star review
        // pulls the aggregate down to 4.5.
        let response = server
            .put("/api/admin/reviews/8/status")
            .add_header(SESSION_HEADER, session.as_str())
            .json(&json!({ "status": "Approved" }))
            .await;
        response.assert_status_ok();

        let detail: Value = server.get("/api/products/3").await.json();
        assert_eq!(detail["rating"], 4.5);
        assert_eq!(detail["reviews"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn message_status_moves_through_the_inbox() {
        let server = create_test_server();
        let session = admin_session(&server).await;
        let messages: Vec<Value> = server
            .get("/api/admin/messages")
            .add_header(SESSION_HEADER, session.as_str())
            .await
            .json();
        assert_eq!(messages.len(), 4);

        let archived: Value = server
            .put("/api/admin/messages/1/status")
            .add_header(SESSION_HEADER, session.as_str())
            .json(&json!({ "status": "Archived" }))
            .await
            .json();
        assert_eq!(archived["status"], "Archived");
    }
}
