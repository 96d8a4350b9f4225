use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use textile_storefront::{build_router, AppState, Config};
use tower::ServiceExt;

fn test_app() -> Router {
    let mut config = Config::default();
    config.checkout.processing_delay_ms = 0;
    build_router(AppState::new(config))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_health() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_request_id_matches_envelope() {
    let app = test_app();

    let request = Request::builder()
        .uri("/api/cart")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "abc-123");
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["request_id"], "abc-123");

    // 未提供时使用服务端生成的 id
    let request = Request::builder().uri("/api/cart").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let header = response.headers()["x-request-id"]
        .to_str()
        .unwrap()
        .to_string();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["request_id"], header.as_str());
}

#[tokio::test]
async fn test_product_listing_filters() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["count"], 6);
    assert_eq!(body["data"]["canonical_path"], "/products");

    let (_, body) = send(&app, Method::GET, "/api/products?category=silk", None).await;
    assert_eq!(body["data"]["count"], 2);
    assert_eq!(body["data"]["heading"], "Silk Fabrics");
    assert_eq!(body["data"]["canonical_path"], "/products?category=silk");
    for product in body["data"]["products"].as_array().unwrap() {
        assert_eq!(product["category"], "silk");
    }

    let (_, body) = send(
        &app,
        Method::GET,
        "/api/products?q=fabric&price=500-1000",
        None,
    )
    .await;
    let ids: Vec<&str> = body["data"]["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "3"]);

    let (_, body) = send(&app, Method::GET, "/api/products?category=home%20textiles", None).await;
    assert_eq!(body["data"]["count"], 0);
    assert_eq!(
        body["data"]["canonical_path"],
        "/products?category=home%20textiles"
    );
}

#[tokio::test]
async fn test_product_detail_and_not_found() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/api/products/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Luxury Silk Dupioni");
    assert_eq!(body["data"]["bulk_pricing"][3]["price"], 1200);

    let (status, body) = send(&app, Method::GET, "/api/products/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["message"], "Product not found");

    let (_, body) = send(&app, Method::GET, "/api/pages?path=/products/404", None).await;
    assert_eq!(body["data"]["found"], false);
    assert_eq!(body["data"]["back_link"], "/products");
}

#[tokio::test]
async fn test_cart_add_update_remove() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/cart/items",
        Some(json!({ "product_id": "1", "quantity": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["cart"]["total"], 1700);
    assert_eq!(body["data"]["item"]["color"], "Red");
    assert_eq!(body["notice"]["title"], "Added 2 meters of Premium Cotton Fabric to cart!");

    let (_, body) = send(
        &app,
        Method::PATCH,
        "/api/cart/items/1",
        Some(json!({ "quantity": 5 })),
    )
    .await;
    assert_eq!(body["data"]["total"], 4250);
    assert_eq!(body["data"]["item_count"], 5);

    let (_, body) = send(&app, Method::GET, "/api/cart/count", None).await;
    assert_eq!(body["data"]["item_count"], 5);

    let (_, body) = send(&app, Method::DELETE, "/api/cart/items/1", None).await;
    assert_eq!(body["data"]["total"], 0);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 0);

    // 删除不存在的商品是空操作
    let (status, body) = send(&app, Method::DELETE, "/api/cart/items/99", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["line_count"], 0);
}

#[tokio::test]
async fn test_cart_line_identity_and_summary() {
    let app = test_app();

    for color in ["Red", "Blue", "Red"] {
        send(
            &app,
            Method::POST,
            "/api/cart/items",
            Some(json!({ "product_id": "1", "quantity": 1, "color": color })),
        )
        .await;
    }

    let (_, body) = send(&app, Method::GET, "/api/cart", None).await;
    assert_eq!(body["data"]["line_count"], 2);
    assert_eq!(body["data"]["item_count"], 3);
    assert_eq!(body["data"]["total"], 2550);
    assert_eq!(body["data"]["summary"]["free_shipping"], true);

    // 只把蓝色这一行减到 0
    let (_, body) = send(
        &app,
        Method::PATCH,
        "/api/cart/items/1?color=Blue",
        Some(json!({ "quantity": 0 })),
    )
    .await;
    assert_eq!(body["data"]["line_count"], 1);
    assert_eq!(body["data"]["items"][0]["color"], "Red");
    assert_eq!(body["data"]["items"][0]["quantity"], 2);
}

#[tokio::test]
async fn test_cart_rejects_invalid_requests() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/cart/items",
        Some(json!({ "product_id": "1", "quantity": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Quantity must be at least 1 meter");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/cart/items",
        Some(json!({ "product_id": "77", "quantity": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_buy_now_redirects_to_cart() {
    let app = test_app();
    let (_, body) = send(
        &app,
        Method::POST,
        "/api/cart/items",
        Some(json!({ "product_id": "6", "quantity": 3, "buy_now": true })),
    )
    .await;
    assert_eq!(body["data"]["redirect"], "/cart");
}

#[tokio::test]
async fn test_checkout_flow() {
    let app = test_app();

    let (status, _) = send(&app, Method::GET, "/api/order-success", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    send(
        &app,
        Method::POST,
        "/api/cart/items",
        Some(json!({ "product_id": "2", "quantity": 2, "color": "Maroon" })),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/checkout/customer",
        Some(json!({
            "first_name": "Anika",
            "last_name": "Rao",
            "email": "anika@example.com",
            "phone": "+91 90000 11111"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["step"], "customer_info");

    let (status, _) = send(&app, Method::POST, "/api/checkout/back", None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = send(&app, Method::POST, "/api/checkout/next", None).await;
    assert_eq!(body["data"]["step"], "shipping");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/checkout/shipping",
        Some(json!({ "address": "", "city": "Coimbatore", "state": "TN", "pincode": "641001" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Address is required");

    send(
        &app,
        Method::PUT,
        "/api/checkout/shipping",
        Some(json!({
            "address": "12 Mill Road",
            "city": "Coimbatore",
            "state": "Tamil Nadu",
            "pincode": "641001"
        })),
    )
    .await;
    send(&app, Method::POST, "/api/checkout/next", None).await;
    send(
        &app,
        Method::PUT,
        "/api/checkout/payment",
        Some(json!({ "method": "credit" })),
    )
    .await;

    // 还没到 Review，不能提交
    let (status, _) = send(&app, Method::POST, "/api/checkout/submit", None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = send(&app, Method::POST, "/api/checkout/next", None).await;
    assert_eq!(body["data"]["step"], "review");
    assert_eq!(body["data"]["summary"]["subtotal"], "2400");
    assert_eq!(body["data"]["summary"]["free_shipping"], true);

    let (status, body) = send(&app, Method::POST, "/api/checkout/submit", None).await;
    assert_eq!(status, StatusCode::OK);
    let order_id = body["data"]["order"]["order_id"].as_str().unwrap().to_string();
    assert!(order_id.starts_with("JCT"));
    assert_eq!(body["data"]["redirect"], "/order-success");
    assert_eq!(body["data"]["order"]["payment_method_name"], "Credit Card");
    assert_eq!(body["data"]["order"]["customer"]["first_name"], "Anika");

    let (_, body) = send(&app, Method::GET, "/api/cart", None).await;
    assert_eq!(body["data"]["total"], 0);

    let (status, body) = send(&app, Method::GET, "/api/order-success", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["order_id"], order_id);

    let (_, body) = send(&app, Method::GET, "/api/checkout", None).await;
    assert_eq!(body["data"]["step"], "customer_info");
}

#[tokio::test]
async fn test_failed_submit_leaves_checkout_usable() {
    let mut config = Config::default();
    config.checkout.processing_delay_ms = 0;
    config.checkout.delivery_days = 100_000_000;
    let app = build_router(AppState::new(config));

    send(
        &app,
        Method::POST,
        "/api/cart/items",
        Some(json!({ "product_id": "1", "quantity": 2 })),
    )
    .await;
    for _ in 0..3 {
        send(&app, Method::POST, "/api/checkout/next", None).await;
    }

    let (status, _) = send(&app, Method::POST, "/api/checkout/submit", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (_, body) = send(&app, Method::GET, "/api/cart", None).await;
    assert_eq!(body["data"]["line_count"], 1);

    let (_, body) = send(&app, Method::GET, "/api/checkout", None).await;
    assert_eq!(body["data"]["step"], "review");

    let (status, _) = send(&app, Method::POST, "/api/checkout/back", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/checkout/payment",
        Some(json!({ "method": "debit" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, "/api/order-success", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_forms() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/contact",
        Some(json!({
            "name": "Meera",
            "email": "meera@example.com",
            "subject": "Swatches",
            "inquiry_type": "product",
            "message": "Do you ship swatches?"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notice"]["title"], "Message Sent Successfully!");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/bulk-inquiry",
        Some(json!({
            "business_name": "Loom House",
            "contact_person": "Priya",
            "email": "buyer@loomhouse.in",
            "phone": "+91 90000 00000",
            "business_type": "fashion-brand",
            "fabric_type": "home-textiles",
            "quantity": "1000-5000",
            "timeline": "2-3-months",
            "budget": "1l-5l",
            "requirements": "Curtain linen"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let reference = body["data"]["reference_id"].as_str().unwrap();
    assert!(reference.starts_with("BLK"));

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/contact",
        Some(json!({
            "name": "",
            "email": "meera@example.com",
            "subject": "Swatches",
            "message": "Hi"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_site_content() {
    let app = test_app();

    let (_, body) = send(&app, Method::GET, "/api/contact", None).await;
    assert_eq!(body["data"]["quick_contact"][0]["href"], "https://wa.me/919876543210");

    let (_, body) = send(&app, Method::GET, "/api/home", None).await;
    assert_eq!(body["data"]["featured"].as_array().unwrap().len(), 3);

    let (_, body) = send(&app, Method::GET, "/api/about", None).await;
    assert_eq!(body["data"]["milestones"][0]["year"], "1995");

    let (status, body) = send(&app, Method::GET, "/nowhere", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}
