//! API integration tests

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to create a book and return its id
async fn create_book(client: &Client, title: &str, author: &str) -> String {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": title,
            "author": author
        }))
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse create response");
    body["book"]["id"].as_str().expect("No book id").to_string()
}

async fn delete_book(client: &Client, id: &str) {
    let response = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send delete request");

    assert_eq!(response.status(), 200);
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_list_books_shape() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["books"].is_array());
    assert!(body["totalCount"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_create_get_delete_roundtrip() {
    let client = Client::new();

    let id = create_book(&client, "Roundtrip Book", "Test Author").await;

    // The created book is visible by id, with a server-assigned creation
    // time and no price
    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send get request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "Roundtrip Book");
    assert_eq!(body["author"], "Test Author");
    assert!(body.get("price").is_none());
    assert!(body["created_at"].is_string());

    delete_book(&client, &id).await;

    // Gone after delete
    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send get request");

    assert_eq!(response.status(), 404);

    // Deleting again still succeeds
    delete_book(&client, &id).await;
}

#[tokio::test]
#[ignore]
async fn test_create_requires_title_and_author() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": "",
            "author": "Someone"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": "Something",
            "author": "   "
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_pagination_windows() {
    let client = Client::new();

    // Seed 15 books with a marker author so the run can clean up after itself
    let mut ids = Vec::new();
    for i in 0..15 {
        ids.push(create_book(&client, &format!("Paging Book {:02}", i), "Paging Author").await);
    }

    let response = client
        .get(format!(
            "{}/books?page=1&searchTerm=Paging%20Author&searchOption=author",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["totalCount"], 15);
    assert_eq!(body["books"].as_array().unwrap().len(), 10);

    let response = client
        .get(format!(
            "{}/books?page=2&searchTerm=Paging%20Author&searchOption=author",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["totalCount"], 15);
    assert_eq!(body["books"].as_array().unwrap().len(), 5);

    for id in ids {
        delete_book(&client, &id).await;
    }
}

#[tokio::test]
#[ignore]
async fn test_title_search_is_case_insensitive_substring() {
    let client = Client::new();

    let dune = create_book(&client, "Dune", "Frank Herbert").await;
    let foundation = create_book(&client, "Foundation", "Isaac Asimov").await;

    let response = client
        .get(format!(
            "{}/books?searchTerm=dun&searchOption=title",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["totalCount"], 1);
    let books = body["books"].as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "Dune");

    delete_book(&client, &dune).await;
    delete_book(&client, &foundation).await;
}

#[tokio::test]
#[ignore]
async fn test_unknown_page_and_field_fall_back_to_defaults() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/books?page=abc&searchOption=isbn",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    // Unparsable page means page 1; unknown field means title
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["books"].is_array());
}
