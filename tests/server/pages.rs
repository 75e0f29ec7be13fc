use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{FETCH_PATH, spawn_app, two_images};

#[tokio::test]
async fn index_renders_empty_form() {
    let app = spawn_app().await;

    let response = reqwest::get(app.page_url("/"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("x-content-type-options")
            .and_then(|v| v.to_str().ok()),
        Some("nosniff")
    );

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("id=\"imageForm\""));
    assert!(body.contains("id=\"itemName\" name=\"itemName\" value=\"\""));
    assert!(!body.contains("id=\"globalError\""));
    assert!(!body.contains("id=\"resultsSection\""));
    assert!(!body.contains("field-error"));
}

#[tokio::test]
async fn form_disables_controls_while_submitting() {
    let app = spawn_app().await;

    let body = reqwest::get(app.page_url("/"))
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .expect("Failed to read body");

    let handler = body
        .split("form.addEventListener(\"submit\"")
        .nth(1)
        .expect("submit handler is rendered");
    assert!(handler.contains("removeAttribute(\"hidden\")"));
    assert!(handler.contains("#imageForm input, #imageForm button"));
    assert!(handler.contains("control.disabled = true"));
}

#[tokio::test]
async fn submit_renders_result_cards() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path(FETCH_PATH))
        .and(body_json(json!({
            "itemName": "Chair",
            "optionName": null,
            "imageUrl": null,
            "salesUrl": null,
            "salesChannel": "NAVER"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_images()))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    let body = app
        .post_form(&[
            ("itemName", "  Chair "),
            ("salesChannel", "naver"),
            ("action", "submit"),
        ])
        .await;

    assert!(body.contains("id=\"resultsSection\""));
    assert!(body.contains("<span id=\"totalLoadingTime\">920</span>ms"));
    assert_eq!(body.matches("class=\"image-card\"").count(), 2);
    assert!(body.contains("50 KB"));
    assert!(body.contains("800x600"));
    assert!(body.contains("Direct URL"));
    assert!(body.contains("MARKETPLACE"));
    assert!(body.contains("aria-label=\"Image 1\""));
    assert!(!body.contains("id=\"globalError\""));
}

#[tokio::test]
async fn submit_with_no_images_shows_empty_state() {
    let app = spawn_app().await;
    app.mount_backend(
        ResponseTemplate::new(200).set_body_json(json!({ "totalLoadingTimeMs": 15, "images": [] })),
    )
    .await;

    let body = app
        .post_form(&[("itemName", "Nothing"), ("action", "submit")])
        .await;

    assert!(body.contains("id=\"emptyState\""));
    assert!(!body.contains("class=\"image-card\""));
}

#[tokio::test]
async fn null_image_list_shows_empty_state() {
    let app = spawn_app().await;
    app.mount_backend(
        ResponseTemplate::new(200).set_body_json(json!({ "totalLoadingTimeMs": 7, "images": null })),
    )
    .await;

    let body = app
        .post_form(&[("itemName", "Nothing"), ("action", "submit")])
        .await;

    assert!(body.contains("id=\"emptyState\""));
    assert!(!body.contains("id=\"globalError\""));
}

#[tokio::test]
async fn invalid_fields_are_reported_without_backend_call() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path(FETCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_images()))
        .expect(0)
        .mount(&app.mock_server)
        .await;

    let body = app
        .post_form(&[
            ("itemName", "   "),
            ("imageUrl", "not a url"),
            ("salesUrl", "https://shop.example.com/chair"),
            ("action", "submit"),
        ])
        .await;

    assert!(body.contains("id=\"itemNameError\""));
    assert!(body.contains("Item name is required"));
    assert!(body.contains("id=\"imageUrlError\""));
    assert!(!body.contains("id=\"salesUrlError\""));
    assert!(body.contains("value=\"not a url\""), "input is preserved");
    assert!(!body.contains("id=\"resultsSection\""));
}

#[tokio::test]
async fn invalid_request_error_shows_warning_banner() {
    let app = spawn_app().await;
    app.mount_backend(ResponseTemplate::new(400).set_body_json(json!({
        "error": "INVALID_REQUEST",
        "message": "salesChannel is not supported"
    })))
    .await;

    let body = app
        .post_form(&[
            ("itemName", "Chair"),
            ("salesChannel", "MOON"),
            ("action", "submit"),
        ])
        .await;

    assert!(body.contains("id=\"globalError\" class=\"alert alert-warning\""));
    assert!(body.contains("Invalid Request: salesChannel is not supported"));
    assert!(!body.contains("id=\"resultsSection\""));
    assert!(!body.contains(" disabled"), "controls are re-enabled");
}

#[tokio::test]
async fn server_error_shows_error_banner() {
    let app = spawn_app().await;
    app.mount_backend(ResponseTemplate::new(500).set_body_string("boom"))
        .await;

    let body = app
        .post_form(&[("itemName", "Chair"), ("action", "submit")])
        .await;

    assert!(body.contains("id=\"globalError\" class=\"alert alert-error\""));
    assert!(body.contains("Server Error: Something went wrong on the server"));
}

#[tokio::test]
async fn example_action_fills_form_without_fetching() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path(FETCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_images()))
        .expect(0)
        .mount(&app.mock_server)
        .await;

    let body = app.post_form(&[("action", "example")]).await;

    assert!(body.contains("id=\"itemName\" name=\"itemName\" value=\"MacBook Pro\""));
    assert!(body.contains("value=\"16-inch\""));
    assert!(body.contains("placeholder=\"e.g. NAVER\" value=\"NAVER\""));
    assert!(!body.contains("id=\"resultsSection\""));
}

#[tokio::test]
async fn clear_action_resets_fields() {
    let app = spawn_app().await;

    let body = app
        .post_form(&[
            ("itemName", "Chair"),
            ("imageUrl", "bad"),
            ("action", "clear"),
        ])
        .await;

    assert!(body.contains("id=\"itemName\" name=\"itemName\" value=\"\""));
    assert!(body.contains("id=\"imageUrl\" name=\"imageUrl\" type=\"url\" value=\"\""));
    assert!(!body.contains("field-error"));
}

#[tokio::test]
async fn dismiss_action_keeps_input_and_hides_banner() {
    let app = spawn_app().await;

    let body = app
        .post_form(&[("itemName", "Chair"), ("action", "dismiss")])
        .await;

    assert!(body.contains("value=\"Chair\""));
    assert!(!body.contains("id=\"globalError\""));
}

#[tokio::test]
async fn missing_action_defaults_to_submit() {
    let app = spawn_app().await;
    app.mount_backend(ResponseTemplate::new(200).set_body_json(two_images()))
        .await;

    let body = app.post_form(&[("itemName", "Chair")]).await;

    assert_eq!(body.matches("class=\"image-card\"").count(), 2);
}
