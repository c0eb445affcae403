use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::info;

use crate::api::{ApiAnalyzeRequest, ApiForecastRequest};
use campaign_analyzer::config::AnalyzerConfig;
use campaign_analyzer::report::{build_forecast, ForecastReport};
use campaign_analyzer::{build_report, AnalysisReport, AnalyzerError};

#[derive(Clone)]
struct AppState {
    config: Arc<AnalyzerConfig>,
}

pub fn router(config: AnalyzerConfig) -> Router {
    let web_root = config.server.web_root.clone();
    let state = AppState {
        config: Arc::new(config),
    };

    let api = Router::new()
        .route("/api/health", get(health))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/forecast", post(forecast_handler))
        .with_state(state);

    let app = match web_root {
        Some(web_root) => {
            let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
            let static_service = ServeDir::new(web_root).not_found_service(ServeFile::new(index_path));
            api.fallback_service(static_service)
        }
        None => api,
    };

    app.layer(TraceLayer::new_for_http())
}

pub async fn serve(config: AnalyzerConfig) -> Result<(), AnalyzerError> {
    let bind = format!("{}:{}", config.server.host, config.server.port);
    let addr: SocketAddr = bind
        .parse()
        .map_err(|_| AnalyzerError::BindAddress(bind.clone()))?;

    let app = router(config);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(AnalyzerError::Server)?;
    info!(%addr, "campaign analyzer listening");

    axum::serve(listener, app).await.map_err(AnalyzerError::Server)?;
    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiAnalyzeRequest>,
) -> Json<AnalysisReport> {
    let options = request.options();
    let report = build_report(
        &request.campaigns,
        &request.insights,
        &options,
        &state.config.weights,
    );
    Json(report)
}

async fn forecast_handler(Json(request): Json<ApiForecastRequest>) -> Json<ForecastReport> {
    let campaign_id = request.campaign_id();
    Json(build_forecast(&request.insights, campaign_id.as_deref()))
}
