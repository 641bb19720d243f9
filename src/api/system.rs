use axum::Json;

use super::types::HealthStatus;

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        message: "MovieLens API operational".to_string(),
    })
}
