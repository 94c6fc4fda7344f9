//! Router tests for the HTTP API.
//!
//! The real managers run over in-memory repositories, so these exercise
//! routing, authentication, validation and the JSON contract end to end
//! without PostgreSQL or Redis.

mod support;

use axum::http::StatusCode;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use uuid::Uuid;

use domain::CustomerRole;
use support::{admin_token, customer_token, decimal, token_for, TestApp};

fn order_body(user_id: &str, product_id: Uuid, total: &str, method: &str) -> Value {
    json!({
        "user_id": user_id,
        "items": [{
            "product_id": product_id,
            "title": "Bananas",
            "price": 1.25,
            "quantity": 2
        }],
        "address": {
            "street": "1 Market St",
            "city": "Springfield",
            "state": "OR",
            "zip": "97403",
            "country": "US"
        },
        "total": total.parse::<f64>().unwrap(),
        "payment_method": method
    })
}

// =============================================================================
// Health and authentication
// =============================================================================

#[tokio::test]
async fn test_health_reports_disabled_dependencies() {
    let app = TestApp::new();

    let (status, body) = app.send("GET", "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["services"]["database"]["status"], "disabled");
    assert_eq!(body["services"]["redis"]["status"], "disabled");
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = TestApp::new();

    for (method, uri) in [
        ("GET", "/api/v1/payments"),
        ("GET", "/api/v1/wishlist"),
        ("GET", "/api/v1/customers/me"),
        ("GET", "/api/v1/dashboard"),
        ("GET", "/api/v1/orders"),
        ("POST", "/api/v1/products"),
    ] {
        let (status, _) = app.send(method, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);
    }
}

#[tokio::test]
async fn test_invalid_token_is_unauthorized() {
    let app = TestApp::new();

    let (status, _) = app
        .send("GET", "/api/v1/wishlist", Some("not-a-jwt"), None)
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_routes_forbid_customers() {
    let app = TestApp::new();
    let token = customer_token();

    for uri in [
        "/api/v1/orders",
        "/api/v1/orders/analytics",
        "/api/v1/payments",
        "/api/v1/payments/stats",
        "/api/v1/wishlist/all",
        "/api/v1/customers",
        "/api/v1/dashboard",
    ] {
        let (status, _) = app.send("GET", uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{}", uri);
    }
}

#[tokio::test]
async fn test_register_then_login() {
    let app = TestApp::new();
    let id = app.register("Shopper@Example.com").await;

    let (status, body) = app
        .send(
            "POST",
            "/api/v1/auth/login",
            None,
            Some(json!({ "email": "shopper@example.com", "password": "correct-horse" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "customer");
    assert_eq!(body["customer_id"], id.to_string());

    let token = body["access_token"].as_str().unwrap().to_string();
    let (status, me) = app
        .send("GET", "/api/v1/customers/me", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], "shopper@example.com");
    assert!(me.get("password_hash").is_none());
}

#[tokio::test]
async fn test_duplicate_registration_is_rejected() {
    let app = TestApp::new();
    app.register("twice@example.com").await;

    let (status, _) = app
        .send(
            "POST",
            "/api/v1/auth/register",
            None,
            Some(json!({
                "first_name": "Again",
                "last_name": "Shopper",
                "email": "twice@example.com",
                "phone": "555-0101",
                "password": "another-password"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.customers.len(), 1);
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let app = TestApp::new();
    app.register("careful@example.com").await;

    let (status, _) = app
        .send(
            "POST",
            "/api/v1/auth/login",
            None,
            Some(json!({ "email": "careful@example.com", "password": "wrong-password" })),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_customer_cannot_read_someone_else() {
    let app = TestApp::new();
    let other = app.register("other@example.com").await;

    let (status, _) = app
        .send(
            "GET",
            &format!("/api/v1/customers/{}", other),
            Some(&customer_token()),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_customer_cannot_change_own_role() {
    let app = TestApp::new();
    let id = app.register("climber@example.com").await;
    let token = token_for(id, "customer");

    let (status, body) = app
        .send(
            "PUT",
            &format!("/api/v1/customers/{}", id),
            Some(&token),
            Some(json!({ "role": "admin" })),
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "FORBIDDEN");
    assert_eq!(app.customers.role_of(id), Some(CustomerRole::Customer));

    let (status, updated) = app
        .send(
            "PUT",
            &format!("/api/v1/customers/{}", id),
            Some(&token),
            Some(json!({ "first_name": "Renamed" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["first_name"], "Renamed");
    assert_eq!(updated["role"], "customer");
}

#[tokio::test]
async fn test_admin_can_change_roles() {
    let app = TestApp::new();
    let (_, admin) = app.register_admin("boss@example.com").await;
    let id = app.register("helper@example.com").await;

    let (status, updated) = app
        .send(
            "PUT",
            &format!("/api/v1/customers/{}", id),
            Some(&admin),
            Some(json!({ "role": "admin" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["role"], "admin");

    let (status, _) = app
        .send(
            "PUT",
            &format!("/api/v1/customers/{}", id),
            Some(&admin),
            Some(json!({ "role": "superuser" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_cannot_deactivate_self() {
    let app = TestApp::new();
    let (id, admin) = app.register_admin("self@example.com").await;

    let (status, body) = app
        .send("DELETE", &format!("/api/v1/customers/{}", id), Some(&admin), None)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(app.customers.role_of(id), Some(CustomerRole::Admin));
}

#[tokio::test]
async fn test_deactivated_customer_cannot_log_in_until_restored() {
    let app = TestApp::new();
    let (_, admin) = app.register_admin("desk@example.com").await;
    let id = app.register("leaving@example.com").await;
    let credentials = json!({ "email": "leaving@example.com", "password": "correct-horse" });

    let (status, _) = app
        .send("DELETE", &format!("/api/v1/customers/{}", id), Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app
        .send("POST", "/api/v1/auth/login", None, Some(credentials.clone()))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, listed) = app.send("GET", "/api/v1/customers", Some(&admin), None).await;
    assert!(listed
        .as_array()
        .unwrap()
        .iter()
        .all(|c| c["id"] != id.to_string()));

    let (status, restored) = app
        .send(
            "POST",
            &format!("/api/v1/customers/{}/restore", id),
            Some(&admin),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(restored["id"], id.to_string());
    assert!(restored.get("deactivated_at").is_none());

    let (status, _) = app
        .send("POST", "/api/v1/auth/login", None, Some(credentials))
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_restore_requires_admin() {
    let app = TestApp::new();
    let id = app.register("someone@example.com").await;

    let (status, _) = app
        .send(
            "POST",
            &format!("/api/v1/customers/{}/restore", id),
            Some(&token_for(id, "customer")),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

// =============================================================================
// Orders
// =============================================================================

#[tokio::test]
async fn test_place_order_and_list_for_user() {
    let app = TestApp::new();
    let product = app.products.seed("Bananas", Decimal::new(125, 2));
    let user_id = Uuid::new_v4().to_string();

    let (status, created) = app
        .send(
            "POST",
            "/api/v1/orders",
            None,
            Some(order_body(&user_id, product.id, "2.50", "card")),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "Paid");

    let (status, orders) = app
        .send("GET", &format!("/api/v1/orders/user/{}", user_id), None, None)
        .await;

    assert_eq!(status, StatusCode::OK);
    let orders = orders.as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["id"], created["id"]);
    assert_eq!(decimal(&orders[0]["total"]), Decimal::new(250, 2));
}

#[tokio::test]
async fn test_cash_on_delivery_starts_pending() {
    let app = TestApp::new();
    let product = app.products.seed("Milk", Decimal::new(99, 2));

    let (status, created) = app
        .send(
            "POST",
            "/api/v1/orders",
            None,
            Some(order_body(&Uuid::new_v4().to_string(), product.id, "0.99", "cod")),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "Pending");
}

#[tokio::test]
async fn test_demo_ids_resolve_to_same_owner() {
    let app = TestApp::new();
    let product = app.products.seed("Eggs", Decimal::new(300, 2));

    for _ in 0..2 {
        let (status, _) = app
            .send(
                "POST",
                "/api/v1/orders",
                None,
                Some(order_body("guest-42", product.id, "3.00", "cod")),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, orders) = app
        .send("GET", "/api/v1/orders/user/guest-42", None, None)
        .await;
    let orders = orders.as_array().unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0]["user_id"], orders[1]["user_id"]);
    assert_eq!(orders[0]["demo_ref"], "guest-42");

    let (_, others) = app
        .send("GET", "/api/v1/orders/user/guest-43", None, None)
        .await;
    assert!(others.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_order_without_items_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app
        .send(
            "POST",
            "/api/v1/orders",
            None,
            Some(json!({
                "user_id": Uuid::new_v4(),
                "items": [],
                "total": 0,
                "payment_method": "card"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_unknown_order_is_not_found() {
    let app = TestApp::new();

    let (status, _) = app
        .send("GET", &format!("/api/v1/orders/{}", Uuid::new_v4()), None, None)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_status_accepts_any_label() {
    let app = TestApp::new();
    let product = app.products.seed("Bread", Decimal::new(450, 2));
    let (_, created) = app
        .send(
            "POST",
            "/api/v1/orders",
            None,
            Some(order_body(&Uuid::new_v4().to_string(), product.id, "4.50", "cod")),
        )
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, updated) = app
        .send(
            "PUT",
            &format!("/api/v1/orders/{}/status", id),
            Some(&admin_token()),
            Some(json!({ "status": "Out for delivery" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "Out for delivery");

    let (_, fetched) = app
        .send("GET", &format!("/api/v1/orders/{}", id), None, None)
        .await;
    assert_eq!(fetched["status"], "Out for delivery");
}

#[tokio::test]
async fn test_analytics_totals_match_orders() {
    let app = TestApp::new();
    let product = app.products.seed("Apples", Decimal::new(200, 2));
    let user_id = Uuid::new_v4().to_string();

    for total in ["2.00", "4.00", "6.50"] {
        app.send(
            "POST",
            "/api/v1/orders",
            None,
            Some(order_body(&user_id, product.id, total, "card")),
        )
        .await;
    }

    let token = admin_token();
    let (status, first) = app
        .send("GET", "/api/v1/orders/analytics", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["total_orders"], 3);
    assert_eq!(decimal(&first["total_sales"]), Decimal::new(1250, 2));

    let (_, second) = app
        .send("GET", "/api/v1/orders/analytics", Some(&token), None)
        .await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_order_total_beyond_money_column_is_rejected() {
    let app = TestApp::new();
    let product = app.products.seed("Saffron", Decimal::new(999, 2));

    let (status, body) = app
        .send(
            "POST",
            "/api/v1/orders",
            None,
            Some(order_body(
                &Uuid::new_v4().to_string(),
                product.id,
                "1e28",
                "card",
            )),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_analytics_limit_is_validated() {
    let app = TestApp::new();

    let (status, _) = app
        .send(
            "GET",
            "/api/v1/orders/analytics?limit=500",
            Some(&admin_token()),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Payments
// =============================================================================

#[tokio::test]
async fn test_payment_lifecycle() {
    let app = TestApp::new();
    let admin = admin_token();

    let (status, created) = app
        .send(
            "POST",
            "/api/v1/payments",
            Some(&customer_token()),
            Some(json!({ "amount": 12.5, "method": "card", "booking_id": "order-1" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "pending");
    let id = created["id"].as_str().unwrap();

    let (status, listed) = app
        .send("GET", "/api/v1/payments", Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["meta"]["total"], 1);

    let (status, _) = app
        .send("DELETE", &format!("/api/v1/payments/{}", id), Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app
        .send("GET", &format!("/api/v1/payments/{}", id), Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_payment_is_not_found() {
    let app = TestApp::new();

    let (status, body) = app
        .send(
            "DELETE",
            &format!("/api/v1/payments/{}", Uuid::new_v4()),
            Some(&admin_token()),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

// =============================================================================
// Wishlist and catalog
// =============================================================================

#[tokio::test]
async fn test_wishlist_add_is_idempotent() {
    let app = TestApp::new();
    let product = app.products.seed("Cherries", Decimal::new(799, 2));
    let token = token_for(Uuid::new_v4(), "customer");

    for _ in 0..2 {
        let (status, wishlist) = app
            .send(
                "POST",
                "/api/v1/wishlist/add",
                Some(&token),
                Some(json!({ "product_id": product.id })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(wishlist["product_ids"].as_array().unwrap().len(), 1);
    }

    let (_, wishlist) = app.send("GET", "/api/v1/wishlist", Some(&token), None).await;
    assert_eq!(wishlist["products"][0]["name"], "Cherries");
}

#[tokio::test]
async fn test_wishlist_remove_absent_is_not_found() {
    let app = TestApp::new();
    let token = customer_token();

    let (status, _) = app
        .send(
            "DELETE",
            &format!("/api/v1/wishlist/remove/{}", Uuid::new_v4()),
            Some(&token),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wishlist_unknown_product_is_not_found() {
    let app = TestApp::new();

    let (status, _) = app
        .send(
            "POST",
            "/api/v1/wishlist/add",
            Some(&customer_token()),
            Some(json!({ "product_id": Uuid::new_v4() })),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_catalog_is_public_and_searchable() {
    let app = TestApp::new();
    app.products.seed("Green Apples", Decimal::new(300, 2));
    app.products.seed("Oat Milk", Decimal::new(250, 2));

    let (status, page) = app
        .send("GET", "/api/v1/products?search=apple", None, None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["meta"]["total"], 1);
    assert_eq!(page["data"][0]["name"], "Green Apples");
}

#[tokio::test]
async fn test_admin_manages_catalog() {
    let app = TestApp::new();
    let admin = admin_token();

    let (status, created) = app
        .send(
            "POST",
            "/api/v1/products",
            Some(&admin),
            Some(json!({
                "name": "Basmati Rice 5kg",
                "description": "Aged grain",
                "price": 12.5,
                "category": "grains",
                "stock": 20
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(decimal(&created["price"]), Decimal::new(1250, 2));
    let id = created["id"].as_str().unwrap().to_string();

    let (status, updated) = app
        .send(
            "PUT",
            &format!("/api/v1/products/{}", id),
            Some(&admin),
            Some(json!({ "price": 11.75, "stock": 0 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&updated["price"]), Decimal::new(1175, 2));
    assert_eq!(updated["stock"], 0);

    let (_, fetched) = app
        .send("GET", &format!("/api/v1/products/{}", id), None, None)
        .await;
    assert_eq!(fetched["name"], "Basmati Rice 5kg");
    assert_eq!(decimal(&fetched["price"]), Decimal::new(1175, 2));

    let (status, _) = app
        .send("DELETE", &format!("/api/v1/products/{}", id), Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app
        .send("GET", &format!("/api/v1/products/{}", id), None, None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_catalog_writes_are_admin_only() {
    let app = TestApp::new();
    let product = app.products.seed("Lentils", Decimal::new(400, 2));
    let token = customer_token();

    let (status, _) = app
        .send(
            "POST",
            "/api/v1/products",
            Some(&token),
            Some(json!({ "name": "Free Lunch", "price": 0, "category": "misc" })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .send(
            "PUT",
            &format!("/api/v1/products/{}", product.id),
            Some(&token),
            Some(json!({ "price": 0.01 })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .send(
            "DELETE",
            &format!("/api/v1/products/{}", product.id),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_product_price_is_bounded() {
    let app = TestApp::new();
    let admin = admin_token();

    for price in [json!(-1), json!(1e12)] {
        let (status, body) = app
            .send(
                "POST",
                "/api/v1/products",
                Some(&admin),
                Some(json!({ "name": "Gold Leaf", "price": price, "category": "luxury" })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "price {}", price);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_delete_unknown_product_is_not_found() {
    let app = TestApp::new();

    let (status, _) = app
        .send(
            "DELETE",
            &format!("/api/v1/products/{}", Uuid::new_v4()),
            Some(&admin_token()),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Reviews
// =============================================================================

#[tokio::test]
async fn test_review_moderation_flow() {
    let app = TestApp::new();
    let product = app.products.seed("Mangoes", Decimal::new(650, 2));
    let admin = admin_token();
    let author = token_for(Uuid::new_v4(), "customer");
    let public_uri = format!("/api/v1/reviews/product/{}", product.id);

    let (status, review) = app
        .send(
            "POST",
            "/api/v1/reviews",
            Some(&author),
            Some(json!({ "product_id": product.id, "rating": 5, "comment": "  Sweet  " })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(review["status"], "pending");
    assert_eq!(review["comment"], "Sweet");
    let id = review["id"].as_str().unwrap().to_string();

    let (status, public) = app.send("GET", &public_uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(public.as_array().unwrap().is_empty());

    let (status, pending) = app
        .send("GET", "/api/v1/reviews?status=pending", Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pending.as_array().unwrap().len(), 1);

    let (status, approved) = app
        .send(
            "PUT",
            &format!("/api/v1/reviews/{}/status", id),
            Some(&admin),
            Some(json!({ "status": "approved" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["status"], "approved");

    let (_, public) = app.send("GET", &public_uri, None, None).await;
    assert_eq!(public.as_array().unwrap().len(), 1);
    assert_eq!(public[0]["rating"], 5);

    let (status, _) = app
        .send("DELETE", &format!("/api/v1/reviews/{}", id), Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, public) = app.send("GET", &public_uri, None, None).await;
    assert!(public.as_array().unwrap().is_empty());

    let (status, _) = app
        .send("DELETE", &format!("/api/v1/reviews/{}", id), Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_review_validation_and_permissions() {
    let app = TestApp::new();
    let product = app.products.seed("Papaya", Decimal::new(300, 2));
    let token = customer_token();

    let (status, _) = app
        .send(
            "POST",
            "/api/v1/reviews",
            None,
            Some(json!({ "product_id": product.id, "rating": 4 })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .send(
            "POST",
            "/api/v1/reviews",
            Some(&token),
            Some(json!({ "product_id": product.id, "rating": 6 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .send(
            "POST",
            "/api/v1/reviews",
            Some(&token),
            Some(json!({ "product_id": Uuid::new_v4(), "rating": 3 })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.send("GET", "/api/v1/reviews", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .send(
            "PUT",
            &format!("/api/v1/reviews/{}/status", Uuid::new_v4()),
            Some(&token),
            Some(json!({ "status": "approved" })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
