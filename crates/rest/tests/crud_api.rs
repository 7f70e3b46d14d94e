//! HTTP conformance tests for the CRUD API.
//!
//! Exercises the full router + worker + memory backend stack:
//! - status codes (200, 201, 204, 409)
//! - envelope shape (status / respObj / error)
//! - decode errors and empty-id edge cases

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use hrs_persistence::backends::memory::MemoryBackend;
use hrs_rest::{ServerConfig, create_app_with_config};
use serde_json::{Value, json};

const CONTENT_TYPE: HeaderName = HeaderName::from_static("content-type");

/// Creates a test server over a fresh memory backend.
fn create_test_server() -> (TestServer, Arc<MemoryBackend>) {
    let backend = Arc::new(MemoryBackend::new());
    let app = create_app_with_config(Arc::clone(&backend), ServerConfig::for_testing());
    let server = TestServer::new(app).expect("Failed to create test server");
    (server, backend)
}

fn tortilla() -> Value {
    json!({
        "name": "Tortilla",
        "description": "Spanish",
        "steps": ["peel", "fry", "mix"]
    })
}

fn potato() -> Value {
    json!({
        "name": "Potato",
        "description": "Starchy",
        "quantity": 3
    })
}

/// Creates a recipe and returns its server-assigned id.
async fn seed_recipe(server: &TestServer) -> String {
    let response = server.post("/hrs/recipes").json(&tortilla()).await;
    response.assert_status(StatusCode::CREATED);
    let envelope: Value = response.json();
    envelope["respObj"]["id"].as_str().unwrap().to_string()
}

mod status_codes {
    use super::*;

    #[tokio::test]
    async fn test_create_recipe_returns_201() {
        let (server, _backend) = create_test_server();

        let response = server.post("/hrs/recipes").json(&tortilla()).await;

        response.assert_status(StatusCode::CREATED);
        let envelope: Value = response.json();
        assert_eq!(envelope["status"]["code"], 201);
        assert_eq!(envelope["respObj"]["name"], "Tortilla");
        assert!(!envelope["respObj"]["id"].as_str().unwrap().is_empty());
        assert!(envelope["error"].is_null());
    }

    #[tokio::test]
    async fn test_read_recipe_returns_200() {
        let (server, _backend) = create_test_server();
        let id = seed_recipe(&server).await;

        let response = server.get(&format!("/hrs/recipes/{id}")).await;

        response.assert_status_ok();
        let envelope: Value = response.json();
        assert_eq!(envelope["status"]["code"], 200);
        assert_eq!(envelope["status"]["description"], "Query completed");
    }

    #[tokio::test]
    async fn test_patch_recipe_returns_200_without_payload() {
        let (server, _backend) = create_test_server();
        let id = seed_recipe(&server).await;

        let response = server
            .patch(&format!("/hrs/recipes/{id}"))
            .json(&json!({
                "name": "Tortilla",
                "description": "Classic Spanish omelette",
                "steps": ["peel", "fry", "mix", "flip"]
            }))
            .await;

        response.assert_status_ok();
        let envelope: Value = response.json();
        assert!(envelope["respObj"].is_null());
        assert!(envelope["error"].is_null());
    }

    #[tokio::test]
    async fn test_delete_recipe_returns_204_with_empty_body() {
        let (server, _backend) = create_test_server();
        let id = seed_recipe(&server).await;

        let response = server.delete(&format!("/hrs/recipes/{id}")).await;

        response.assert_status(StatusCode::NO_CONTENT);
        assert!(response.as_bytes().is_empty());
    }

    #[tokio::test]
    async fn test_read_unknown_recipe_returns_409() {
        let (server, _backend) = create_test_server();

        let response = server.get("/hrs/recipes/nonexistent").await;

        response.assert_status(StatusCode::CONFLICT);
        let envelope: Value = response.json();
        assert_eq!(envelope["error"]["kind"], "technical");
    }

    #[tokio::test]
    async fn test_status_returns_literal_body() {
        let (server, _backend) = create_test_server();

        let response = server.get("/hrs/status").await;

        response.assert_status_ok();
        assert_eq!(response.text(), hrs_rest::handlers::STATUS_BODY);
    }
}

mod envelopes {
    use super::*;

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let (server, _backend) = create_test_server();
        let id = seed_recipe(&server).await;

        let response = server.get(&format!("/hrs/recipes/{id}")).await;
        let envelope: Value = response.json();

        assert_eq!(envelope["respObj"]["id"], id.as_str());
        assert_eq!(envelope["respObj"]["name"], "Tortilla");
        assert_eq!(envelope["respObj"]["description"], "Spanish");
        assert_eq!(
            envelope["respObj"]["steps"],
            json!(["peel", "fry", "mix"])
        );
    }

    #[tokio::test]
    async fn test_repeated_creates_assign_unique_ids() {
        let (server, _backend) = create_test_server();

        let first = seed_recipe(&server).await;
        let second = seed_recipe(&server).await;

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_patch_is_visible_on_next_get() {
        let (server, _backend) = create_test_server();
        let id = seed_recipe(&server).await;

        server
            .patch(&format!("/hrs/recipes/{id}"))
            .json(&json!({
                "name": "Tortilla de patatas",
                "description": "Spanish",
                "steps": ["peel", "fry", "mix"]
            }))
            .await
            .assert_status_ok();

        let envelope: Value = server.get(&format!("/hrs/recipes/{id}")).await.json();
        assert_eq!(envelope["respObj"]["name"], "Tortilla de patatas");
        assert_eq!(envelope["respObj"]["id"], id.as_str());
    }

    #[tokio::test]
    async fn test_deleted_recipe_is_gone() {
        let (server, _backend) = create_test_server();
        let id = seed_recipe(&server).await;

        server
            .delete(&format!("/hrs/recipes/{id}"))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let response = server.get(&format!("/hrs/recipes/{id}")).await;
        response.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_ingredient_endpoints_mirror_recipes() {
        let (server, _backend) = create_test_server();

        let response = server.post("/hrs/ingredients").json(&potato()).await;
        response.assert_status(StatusCode::CREATED);
        let envelope: Value = response.json();
        let id = envelope["respObj"]["id"].as_str().unwrap().to_string();
        assert_eq!(envelope["respObj"]["quantity"], 3);

        let envelope: Value = server.get(&format!("/hrs/ingredients/{id}")).await.json();
        assert_eq!(envelope["respObj"]["name"], "Potato");

        server
            .patch(&format!("/hrs/ingredients/{id}"))
            .json(&json!({
                "name": "Potato",
                "description": "Starchy",
                "quantity": 5
            }))
            .await
            .assert_status_ok();

        let envelope: Value = server.get(&format!("/hrs/ingredients/{id}")).await.json();
        assert_eq!(envelope["respObj"]["quantity"], 5);

        server
            .delete(&format!("/hrs/ingredients/{id}"))
            .await
            .assert_status(StatusCode::NO_CONTENT);
    }
}

mod edge_cases {
    use super::*;

    #[tokio::test]
    async fn test_empty_id_delete_is_functional_error() {
        let (server, _backend) = create_test_server();

        let response = server.delete("/hrs/ingredients/").await;

        response.assert_status(StatusCode::CONFLICT);
        let envelope: Value = response.json();
        assert_eq!(envelope["error"]["kind"], "functional");
    }

    #[tokio::test]
    async fn test_empty_id_get_and_patch_are_functional_errors() {
        let (server, _backend) = create_test_server();

        let response = server.get("/hrs/recipes/").await;
        response.assert_status(StatusCode::CONFLICT);
        let envelope: Value = response.json();
        assert_eq!(envelope["error"]["kind"], "functional");

        let response = server.patch("/hrs/recipes/").await;
        response.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let (server, _backend) = create_test_server();

        let response = server
            .post("/hrs/recipes")
            .add_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .text("{not valid json")
            .await;

        response.assert_status(StatusCode::CONFLICT);
        let envelope: Value = response.json();
        assert_eq!(envelope["status"]["description"], "Decode error");
        assert_eq!(envelope["error"]["kind"], "functional");
        assert!(envelope["respObj"].is_null());
    }

    #[tokio::test]
    async fn test_unknown_field_in_body_is_decode_error() {
        let (server, _backend) = create_test_server();

        // An ingredient body on the recipes endpoint
        let response = server.post("/hrs/recipes").json(&potato()).await;

        response.assert_status(StatusCode::CONFLICT);
        let envelope: Value = response.json();
        assert_eq!(envelope["error"]["kind"], "functional");
    }

    #[tokio::test]
    async fn test_decode_error_short_circuits_before_storage() {
        let (server, backend) = create_test_server();

        server
            .post("/hrs/recipes")
            .add_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .text("[1, 2, 3]")
            .await
            .assert_status(StatusCode::CONFLICT);

        assert!(backend.is_empty("recipes"));
    }
}
