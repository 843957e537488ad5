use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    service::PlayerService,
    types::{CreatePlayerRequest, ListPlayersQuery, PlayerResponse, UpdatePlayerRequest},
};
use crate::shared::{AppError, AppState};

fn service(state: &AppState) -> PlayerService {
    PlayerService::new(Arc::clone(&state.player_repository))
}

/// POST /players
#[instrument(name = "create_player", skip(state))]
pub async fn create_player(
    State(state): State<AppState>,
    Json(request): Json<CreatePlayerRequest>,
) -> Result<Json<PlayerResponse>, AppError> {
    info!(name = %request.name, "Creating new player");
    let player = service(&state).create_player(request).await?;
    Ok(Json(player))
}

/// GET /players?include_inactive=true
#[instrument(name = "list_players", skip(state))]
pub async fn list_players(
    State(state): State<AppState>,
    Query(query): Query<ListPlayersQuery>,
) -> Result<Json<Vec<PlayerResponse>>, AppError> {
    let players = service(&state)
        .list_players(query.include_inactive)
        .await?;
    info!(player_count = players.len(), "Players listed successfully");
    Ok(Json(players))
}

/// GET /players/:player_id
#[instrument(name = "get_player", skip(state))]
pub async fn get_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<Json<PlayerResponse>, AppError> {
    Ok(Json(service(&state).get_player(&player_id).await?))
}

/// PUT /players/:player_id
#[instrument(name = "update_player", skip(state))]
pub async fn update_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
    Json(request): Json<UpdatePlayerRequest>,
) -> Result<Json<PlayerResponse>, AppError> {
    Ok(Json(
        service(&state).update_player(&player_id, request).await?,
    ))
}

/// DELETE /players/:player_id
///
/// Soft delete; the player's history is kept.
#[instrument(name = "delete_player", skip(state))]
pub async fn delete_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<Json<PlayerResponse>, AppError> {
    Ok(Json(service(&state).deactivate_player(&player_id).await?))
}

/// POST /players/:player_id/restore
#[instrument(name = "restore_player", skip(state))]
pub async fn restore_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<Json<PlayerResponse>, AppError> {
    Ok(Json(service(&state).restore_player(&player_id).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::AppStateBuilder;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::{get, post},
        Router,
    };
    use tower::ServiceExt; // for `oneshot`

    fn app() -> Router {
        Router::new()
            .route("/players", post(create_player).get(list_players))
            .route(
                "/players/:player_id",
                get(get_player).put(update_player).delete(delete_player),
            )
            .with_state(AppStateBuilder::new().build())
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_player(response: axum::response::Response) -> PlayerResponse {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_create_player_handler() {
        let response = app()
            .oneshot(json_request("POST", "/players", r#"{"name": "Robin"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let player = read_player(response).await;
        assert_eq!(player.name, "Robin");
        assert!(!player.id.is_empty());
    }

    #[tokio::test]
    async fn test_create_player_handler_invalid_name() {
        let response = app()
            .oneshot(json_request("POST", "/players", r#"{"name": " "}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_player_handler_missing_field() {
        let response = app()
            .oneshot(json_request("POST", "/players", r#"{"nickname": "Robin"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_soft_delete_hides_player_from_list() {
        let app = app();
        let response = app
            .clone()
            .oneshot(json_request("POST", "/players", r#"{"name": "Robin"}"#))
            .await
            .unwrap();
        let robin = read_player(response).await;

        let response = app
            .clone()
            .oneshot(json_request(
                "DELETE",
                &format!("/players/{}", robin.id),
                "",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(!read_player(response).await.is_active);

        let response = app
            .clone()
            .oneshot(Request::get("/players").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let players: Vec<PlayerResponse> = serde_json::from_slice(&body).unwrap();
        assert!(players.is_empty());

        let response = app
            .oneshot(
                Request::get("/players?include_inactive=true")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let players: Vec<PlayerResponse> = serde_json::from_slice(&body).unwrap();
        assert_eq!(players.len(), 1);
    }

    #[tokio::test]
    async fn test_get_unknown_player_is_404() {
        let response = app()
            .oneshot(Request::get("/players/unknown").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
