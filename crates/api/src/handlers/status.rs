use super::models::AppState;
use super::scale::parse_scale;
use crate::errors::ApiError;
use crate::models::StatusQuery;
use axum::{
    extract::{Path as AxumPath, Query, State},
    http::header,
    response::{IntoResponse, Json, Response},
};
use motdcard_models::StatusResponse;
use motdcard_ping::{query, ServerAddress};
use motdcard_render::CardGeometry;
use std::sync::Arc;

/// `GET /*address`: status JSON, or a PNG card when `img` is present
pub async fn server_status(
    State(state): State<AppState>,
    AxumPath(address): AxumPath<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let params: StatusQuery = pairs.into_iter().collect();
    let address: ServerAddress = address.parse()?;
    tracing::debug!("Status request for {}", address);

    let record = query(state.client.as_ref(), &address).await;

    if params.img.is_none() {
        return Ok(Json(StatusResponse::from(&record)).into_response());
    }

    let scale = parse_scale(params.size.as_deref(), state.render.max_scale);
    let geometry = CardGeometry::layout(scale, state.render.card).with_motd(state.render.motd_enabled());
    tracing::debug!(
        "Rendering {} card for {} at {}x{}",
        state.render.card.as_str(),
        address,
        geometry.width,
        geometry.height
    );

    let fonts = Arc::clone(&state.fonts);
    let render = Arc::clone(&state.render);
    let png = tokio::task::spawn_blocking(move || {
        motdcard_render::render(&record, &geometry, &fonts, &render.labels)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Render task failed: {}", e)))??;

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ErrorResponse;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use motdcard_config::{CardVariant, RenderSettings};
    use motdcard_ping::{PingError, RawStatus, StatusClient};
    use motdcard_render::FontSet;
    use std::time::Duration;
    use tower::ServiceExt;

    struct FakeClient {
        online: bool,
    }

    #[async_trait::async_trait]
    impl StatusClient for FakeClient {
        async fn status(&self, address: &ServerAddress) -> Result<RawStatus, PingError> {
            if !self.online {
                return Err(PingError::Timeout {
                    stage: "connecting",
                    timeout_ms: 5000,
                });
            }
            assert_eq!(address.host, "play.example.com");
            Ok(RawStatus {
                latency: Duration::from_millis(42),
                version_name: "1.20.1".to_string(),
                protocol_version: 763,
                players_online: 5,
                players_max: 20,
                description: "§aWelcome!§r".to_string(),
                favicon: None,
            })
        }
    }

    fn render_settings() -> RenderSettings {
        let config = motdcard_config::Config::from_toml_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 5000
            "#,
        )
        .unwrap();
        config.render
    }

    fn app(online: bool) -> Router {
        let state = AppState::new(
            Arc::new(FakeClient { online }),
            FontSet::builtin(),
            render_settings(),
        );
        Router::new()
            .route("/*address", get(server_status))
            .with_state(state)
    }

    async fn send(app: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, body.to_vec())
    }

    #[tokio::test]
    async fn test_online_json() {
        let (status, content_type, body) = send(app(true), "/play.example.com").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["hostname"], "play.example.com");
        assert_eq!(json["port"], 25565);
        assert_eq!(json["online"], true);
        assert_eq!(json["ping"], 42);
        assert_eq!(json["players"]["online"], 5);
        assert_eq!(json["description"]["html"], "§aWelcome!§r");
        assert_eq!(json["description"]["text"], "Welcome!");
        assert_eq!(json["modinfo"], serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_offline_json() {
        let (status, _, body) = send(app(false), "/down.example.com:25570").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["online"], false);
        assert_eq!(json["port"], 25570);
        assert!(json["error"].as_str().unwrap().contains("5000ms"));
        assert!(json.get("players").is_none());
    }

    #[tokio::test]
    async fn test_invalid_address_is_bad_request() {
        let (status, _, body) = send(app(true), "/host:notanumber").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error.code, "INVALID_ADDRESS");
    }

    #[tokio::test]
    async fn test_png_card() {
        let (status, content_type, body) = send(app(true), "/play.example.com?img").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("image/png"));
        let card = image::load_from_memory(&body).unwrap();
        assert_eq!((card.width(), card.height()), (610, 430));
    }

    #[tokio::test]
    async fn test_png_card_scaled_and_malformed_size() {
        let (_, _, body) = send(app(true), "/play.example.com?img=1&size=50").await;
        let card = image::load_from_memory(&body).unwrap();
        assert_eq!((card.width(), card.height()), (305, 215));

        let (_, _, body) = send(app(false), "/down.example.com?img=1&size=abc").await;
        let card = image::load_from_memory(&body).unwrap();
        assert_eq!((card.width(), card.height()), (610, 430));
    }

    #[tokio::test]
    async fn test_repeated_size_uses_first_value() {
        let (status, content_type, body) =
            send(app(true), "/play.example.com?img&size=50&size=200").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("image/png"));
        let card = image::load_from_memory(&body).unwrap();
        assert_eq!((card.width(), card.height()), (305, 215));

        let (status, content_type, _) = send(app(true), "/play.example.com?size=50&size=200").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
    }

    #[tokio::test]
    async fn test_basic_variant_from_settings() {
        let mut settings = render_settings();
        settings.card = CardVariant::Basic;
        let state = AppState::new(Arc::new(FakeClient { online: true }), FontSet::builtin(), settings);
        let app = Router::new()
            .route("/*address", get(server_status))
            .with_state(state);

        let (_, _, body) = send(app, "/play.example.com?img").await;
        let card = image::load_from_memory(&body).unwrap();
        assert_eq!((card.width(), card.height()), (560, 340));
    }
}
