#![allow(dead_code)] // Test utilities may not all be used in every test

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt; // for `oneshot`

use super::setup::TestSetup;

// ============================================================================
// Action Helpers
// ============================================================================

impl TestSetup {
    /// Send a request through the router and decode the JSON response
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send("GET", uri, None).await
    }

    pub fn player(&self, index: usize) -> &str {
        &self.players[index]
    }

    // ============================================================================
    // Convenience Action Methods
    // ============================================================================

    /// Start a game with every player in the setup and return its ID
    pub async fn start_game(&self, body: Value) -> String {
        let (status, session) = self.send("POST", "/games", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED, "start failed: {session}");
        session["id"].as_str().unwrap().to_string()
    }

    pub async fn start_base_game(&self) -> String {
        self.start_game(serde_json::json!({ "player_ids": self.players }))
            .await
    }

    /// Apply one category update and return the live session
    pub async fn score(&self, game_id: &str, player_index: usize, update: Value) -> Value {
        let uri = format!("/games/{}/scores/{}", game_id, self.player(player_index));
        let (status, session) = self.send("PUT", &uri, Some(update)).await;
        assert_eq!(status, StatusCode::OK, "score update failed: {session}");
        session
    }

    pub async fn finalize(&self, game_id: &str) -> Value {
        let (status, record) = self
            .send("POST", &format!("/games/{}/finalize", game_id), None)
            .await;
        assert_eq!(status, StatusCode::OK, "finalize failed: {record}");
        record
    }
}
