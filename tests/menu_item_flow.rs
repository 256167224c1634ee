mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};
use serde_json::{json, Value};

#[actix_web::test]
async fn test_menu_item_create_defaults_description() {
    println!("\n\n[+] Running test: test_menu_item_create_defaults_description");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let menu = client.create_test_menu().await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/menus/{}/menu-items", menu.id))
        .set_json(json!({ "menuItem": { "name": "Toast", "inventory": 40, "price": 3 } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    println!("[<] Response body: {}", body);
    let item = &body["menuItem"];
    assert_eq!(item["name"], "Toast");
    assert_eq!(item["description"], "");
    assert_eq!(item["inventory"], 40);
    assert_eq!(item["price"], 3);
    assert_eq!(item["menu_id"], menu.id);
    println!("[/] Test passed: description defaulted.");
}

#[actix_web::test]
async fn test_menu_item_create_keeps_description_and_forces_menu() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let menu = client.create_test_menu().await;
    let other = client.create_test_menu().await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/menus/{}/menu-items", menu.id))
        .set_json(json!({ "menuItem": {
            "name": "Ramen", "description": "Pork broth", "inventory": 12, "price": 14, "menu_id": other.id
        } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["menuItem"]["description"], "Pork broth");
    assert_eq!(body["menuItem"]["menu_id"], menu.id);
}

#[actix_web::test]
async fn test_menu_item_create_validation_and_missing_menu() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let menu = client.create_test_menu().await;

    for payload in [
        json!({}),
        json!({ "menuItem": { "inventory": 1, "price": 1 } }),
        json!({ "menuItem": { "name": "Tea", "price": 1 } }),
        json!({ "menuItem": { "name": "Tea", "inventory": 1 } }),
        json!({ "menuItem": { "name": "Tea", "inventory": 1, "price": 0 } }),
    ] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/menus/{}/menu-items", menu.id))
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "payload: {}", payload);
    }
    assert!(ctx.db.list_menu_items_for(&menu).await.unwrap().is_empty());

    let req = test::TestRequest::post()
        .uri("/api/menus/999/menu-items")
        .set_json(json!({ "menuItem": { "name": "Tea", "inventory": 1, "price": 2 } }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/api/menus/999/menu-items")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_menu_item_list_is_scoped_to_menu() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let menu = client.create_test_menu().await;
    let other = client.create_test_menu().await;
    let item = client.create_test_menu_item(&menu).await;
    client.create_test_menu_item(&other).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/menus/{}/menu-items", menu.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let items = body["menuItems"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], item.id);
    assert_eq!(items[0]["description"], "Ask your server");
}

#[actix_web::test]
async fn test_menu_item_update_flow() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let menu = client.create_test_menu().await;
    let item = client.create_test_menu_item(&menu).await;

    // empty description is stored as ""
    let req = test::TestRequest::put()
        .uri(&format!("/api/menus/{}/menu-items/{}", menu.id, item.id))
        .set_json(json!({ "menuItem": { "name": "Soup", "description": "", "inventory": 5, "price": 7 } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["menuItem"]["id"], item.id);
    assert_eq!(body["menuItem"]["name"], "Soup");
    assert_eq!(body["menuItem"]["description"], "");
    assert_eq!(body["menuItem"]["inventory"], 5);
    assert_eq!(body["menuItem"]["price"], 7);
    assert_eq!(body["menuItem"]["menu_id"], menu.id);

    let req = test::TestRequest::put()
        .uri(&format!("/api/menus/{}/menu-items/{}", menu.id, item.id))
        .set_json(json!({ "menuItem": { "name": "Soup" } }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::put()
        .uri(&format!("/api/menus/{}/menu-items/999", menu.id))
        .set_json(json!({ "menuItem": {} }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::put()
        .uri(&format!("/api/menus/999/menu-items/{}", item.id))
        .set_json(json!({ "menuItem": { "name": "Soup", "inventory": 5, "price": 7 } }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_menu_item_delete_flow() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let menu = client.create_test_menu().await;
    let item = client.create_test_menu_item(&menu).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/menus/999/menu-items/{}", item.id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/menus/{}/menu-items/{}", menu.id, item.id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    // the menu is deletable once its last item is gone
    let req = test::TestRequest::delete()
        .uri(&format!("/api/menus/{}", menu.id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn test_menu_item_missing_rows_ignore_body_shape() {
    println!("\n\n[+] Running test: test_menu_item_missing_rows_ignore_body_shape");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let menu = client.create_test_menu().await;
    let fractional = json!({ "menuItem": { "name": "Tea", "inventory": 1.5, "price": 2 } });

    let req = test::TestRequest::put()
        .uri(&format!("/api/menus/{}/menu-items/999", menu.id))
        .set_json(&fractional)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::put()
        .uri("/api/menus/999/menu-items/5")
        .set_json(&fractional)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/menus/999/menu-items")
        .set_json(&fractional)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post().uri("/api/menus/999/menu-items").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    // same body against a real menu is rejected, and nothing is stored
    let req = test::TestRequest::post()
        .uri(&format!("/api/menus/{}/menu-items", menu.id))
        .set_json(&fractional)
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(ctx.db.list_menu_items_for(&menu).await.unwrap().is_empty());
    println!("[/] Test passed: 404 before body decoding.");
}
