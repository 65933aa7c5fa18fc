//! Integration tests for the Pageturn Server API

use axum::http::StatusCode;
use axum_test::TestServer;
use pageturn_core::Catalog;
use pageturn_server::config::ServerConfig;
use pageturn_server::routes::create_router;
use pageturn_server::state::AppState;
use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

/// Create a test server over the seed catalog
fn create_test_server() -> (TestServer, AppState) {
    let state = AppState::with_catalog(Catalog::seeded(), ServerConfig::default());
    let app = create_router(state.clone());
    let server = TestServer::new(app).expect("Failed to create test server");
    (server, state)
}

fn ids(books: &Value) -> Vec<&str> {
    books
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let (server, _state) = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_home_lists_catalog_in_order() {
    let (server, _state) = create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(
        ids(&body["books"]),
        ["shadows-city", "hearts-entwined", "quantum-frontier", "success-principles"]
    );
    assert_eq!(body["summary"], "Showing 4 books");
    assert!(body["empty_state"].is_null());
}

#[tokio::test]
async fn test_home_search_and_genre() {
    let (server, _state) = create_test_server();

    let response = server
        .get("/")
        .add_query_param("search", "ROSE")
        .await;
    let body: Value = response.json();
    assert_eq!(ids(&body["books"]), ["hearts-entwined"]);

    let response = server
        .get("/")
        .add_query_param("search", "quantum")
        .add_query_param("genre", "romance")
        .await;
    let body: Value = response.json();
    assert!(body["books"].as_array().unwrap().is_empty());
    assert_eq!(body["empty_state"]["title"], "No books found");
}

#[tokio::test]
async fn test_home_sort_does_not_reorder() {
    let (server, _state) = create_test_server();

    let featured: Value = server.get("/").await.json();
    let rated: Value = server.get("/").add_query_param("sort", "rating").await.json();

    assert_eq!(ids(&featured["books"]), ids(&rated["books"]));
}

#[tokio::test]
async fn test_home_unknown_sort() {
    let (server, _state) = create_test_server();

    let response = server.get("/").add_query_param("sort", "newest").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_genre_page() {
    let (server, _state) = create_test_server();

    let body: Value = server.get("/genre/science%20fiction").await.json();
    assert_eq!(ids(&body["books"]), ["quantum-frontier"]);

    let body: Value = server.get("/genre/fantasy").await.json();
    assert!(body["books"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_book_detail() {
    let (server, _state) = create_test_server();

    let response = server
        .get("/book/quantum-frontier")
        .add_query_param("format", "hardcopy")
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["book"]["id"], "quantum-frontier");
    assert_eq!(body["selected_format"], "hardcopy");
    assert_eq!(body["selected_price"], 27.99);
    assert_eq!(body["reviews"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_book_detail_wishlist_toggle() {
    let (server, _state) = create_test_server();

    let body: Value = server.get("/book/shadows-city").await.json();
    assert_eq!(body["wishlisted"], false);

    let body: Value = server
        .get("/book/shadows-city")
        .add_query_param("wishlisted", "true")
        .await
        .json();
    assert_eq!(body["wishlisted"], true);
}

#[tokio::test]
async fn test_unknown_book_redirects_home() {
    let (server, _state) = create_test_server();

    for path in ["/book/no-such-book", "/reader/no-such-book"] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/");
    }
}

#[tokio::test]
async fn test_book_detail_unknown_format() {
    let (server, _state) = create_test_server();

    let response = server
        .get("/book/shadows-city")
        .add_query_param("format", "audiobook")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reader_clamps_page_and_font() {
    let (server, _state) = create_test_server();

    let response = server
        .get("/reader/hearts-entwined")
        .add_query_param("page", "10000")
        .add_query_param("font_size", "40")
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["title"], "Hearts Entwined");
    assert_eq!(body["progress"]["current_page"], 298);
    assert_eq!(body["progress"]["can_advance"], false);
    assert_eq!(body["settings"]["font_size"], 24);
}

#[tokio::test]
async fn test_reader_clamps_oversized_font() {
    let (server, _state) = create_test_server();

    let response = server
        .get("/reader/shadows-city")
        .add_query_param("font_size", "300")
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["settings"]["font_size"], 24);
}

#[tokio::test]
async fn test_inert_routes_not_found() {
    let (server, _state) = create_test_server();

    for path in ["/profile", "/orders", "/wishlist", "/privacy", "/terms"] {
        server.get(path).await.assert_status_not_found();
    }
}

#[tokio::test]
async fn test_support_and_chrome() {
    let (server, _state) = create_test_server();

    let support: Value = server.get("/support").await.json();
    assert_eq!(support["faqs"].as_array().unwrap().len(), 8);

    let chrome: Value = server.get("/chrome").await.json();
    assert_eq!(chrome["navigation"]["brand"], "BookVault");
    assert_eq!(chrome["navigation"]["cart_items"], 3);
}

#[tokio::test]
async fn test_contact_form() {
    let (server, _state) = create_test_server();

    let response = server
        .post("/support/contact")
        .json(&json!({ "name": "Ada", "email": "ada", "subject": "Hi", "message": "Hello" }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["level"], "error");

    let response = server
        .post("/support/contact")
        .json(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Hi",
            "message": "Hello"
        }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["level"], "success");
}

#[tokio::test]
async fn test_add_to_cart() {
    let (server, state) = create_test_server();

    let response = server
        .post("/book/shadows-city/cart")
        .add_query_param("format", "hardcopy")
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(
        body["notification"]["message"],
        "Shadows in the City (hardcopy) added to cart!"
    );
    assert!(body.get("transition").is_none());
    assert_eq!(state.pending_count(), 0);
}

#[tokio::test]
async fn test_buy_now_then_cancel() {
    let (server, state) = create_test_server();

    let response = server.post("/book/quantum-frontier/purchase").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["transition"]["redirect_to"], "/reader/quantum-frontier");
    assert_eq!(body["transition"]["delay_ms"], 2000);
    assert_eq!(state.pending_count(), 1);

    let ticket = body["transition"]["ticket"].as_str().unwrap().to_string();
    server
        .delete(&format!("/purchases/{}", ticket))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    assert_eq!(state.pending_count(), 0);

    server
        .delete(&format!("/purchases/{}", ticket))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_buy_hardcopy_has_no_transition() {
    let (server, state) = create_test_server();

    let body: Value = server
        .post("/book/success-principles/purchase")
        .add_query_param("format", "hardcopy")
        .await
        .json();

    assert!(body.get("transition").is_none());
    assert_eq!(state.pending_count(), 0);
}

#[tokio::test]
async fn test_quick_buy() {
    let (server, _state) = create_test_server();

    let body: Value = server.post("/book/hearts-entwined/quick-buy").await.json();

    assert_eq!(
        body["notification"]["message"],
        "Digital copy purchased! Opening reader..."
    );
    assert_eq!(body["transition"]["delay_ms"], 1500);
}

#[tokio::test]
async fn test_actions_on_unknown_book() {
    let (server, _state) = create_test_server();

    server
        .post("/book/missing/quick-buy")
        .await
        .assert_status_not_found();
    server
        .delete("/purchases/not-a-uuid")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_state_loads_catalog_file() {
    let books = json!([{
        "id": "only-book",
        "title": "Only Book",
        "author": "Solo Writer",
        "price": { "digital": 1.5, "hardcopy": 2.5 },
        "rating": 3.5,
        "reviews": 1,
        "cover": "/assets/only.jpg",
        "genre": "Poetry",
        "description": "d",
        "publishedDate": "2023-05-01",
        "pages": 10,
        "isbn": "978-0-000000-00-0",
        "tags": [],
        "summary": "s",
        "authorBio": "b",
        "quotes": [],
        "benefits": []
    }]);
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", books).unwrap();

    let config = ServerConfig {
        catalog_path: Some(file.path().to_path_buf()),
        ..ServerConfig::default()
    };
    let state = AppState::new(config).await;
    let server = TestServer::new(create_router(state)).unwrap();

    let body: Value = server.get("/").await.json();
    assert_eq!(ids(&body["books"]), ["only-book"]);
}

#[tokio::test]
async fn test_state_falls_back_to_seed() {
    let config = ServerConfig {
        catalog_path: Some("/definitely/not/here.json".into()),
        ..ServerConfig::default()
    };
    let state = AppState::new(config).await;

    assert_eq!(state.catalog.len(), 4);
}
