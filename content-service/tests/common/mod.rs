use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::Router;
use content_service::inbound::http::router::create_router;
use content_service::inbound::http::router::AppState;
use content_service::outbound::repositories::InMemoryStore;
use serde_json::json;
use serde_json::Value;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over the in-memory store
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Arc<InMemoryStore>,
    pub state: AppState,
    pub authenticator: Arc<Authenticator>,
    pub api_client: reqwest::Client,
}

/// A registered account as seen by the tests
pub struct TestUser {
    pub id: String,
    pub token: String,
}

impl TestApp {
    /// Spawn the full application in a background task
    pub async fn spawn() -> Self {
        Self::spawn_with(create_router).await
    }

    /// Spawn a router built from the application state.
    ///
    /// Lets a test compose its own routes over the same services.
    pub async fn spawn_with(build: impl FnOnce(AppState) -> Router) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let authenticator = Arc::new(Authenticator::new(
            TEST_SECRET,
            chrono::Duration::hours(24),
        ));

        let state = AppState::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            authenticator.clone(),
            Duration::from_secs(2),
        );

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let router = build(state.clone());

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            store,
            state,
            authenticator,
            api_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create reqwest client"),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register an account and return its id and token
    pub async fn register(&self, email: &str, role: &str) -> TestUser {
        let response = self
            .post("/api/v1/auth/register")
            .json(&json!({
                "email": email,
                "password": "Passw0rd",
                "displayName": "Test User",
                "role": role
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = response.json().await.expect("Failed to parse response");
        TestUser {
            id: body["user"]["id"].as_str().unwrap().to_string(),
            token: body["token"].as_str().unwrap().to_string(),
        }
    }

    /// Create a journey owned by `user` and return its JSON
    pub async fn create_journey(&self, user: &TestUser, title: &str) -> Value {
        let response = self
            .post_authenticated("/api/v1/journeys", &user.token)
            .json(&json!({
                "title": title,
                "description": "Everyday phrases",
                "sourceLanguage": "en",
                "targetLanguage": "es"
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Failed to parse response")
    }

    /// Create a scenario under `journey_id` and return its JSON
    pub async fn create_scenario(&self, user: &TestUser, journey_id: &str, order: i32) -> Value {
        let response = self
            .post_authenticated("/api/v1/scenarios", &user.token)
            .json(&json!({
                "journeyId": journey_id,
                "title": format!("Scenario {}", order),
                "displayOrder": order
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Failed to parse response")
    }

    /// Create a word under `scenario_id` and return its JSON
    pub async fn create_word(&self, user: &TestUser, scenario_id: &str, text: &str) -> Value {
        let response = self
            .post_authenticated("/api/v1/words", &user.token)
            .json(&json!({
                "scenarioId": scenario_id,
                "targetText": text,
                "sourceText": "hello"
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Failed to parse response")
    }
}
