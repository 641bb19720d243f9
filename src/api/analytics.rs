use axum::Json;

use super::error::AppError;
use super::types::AnalyticsResponse;
use crate::db::{LinkRepo, MovieRepo, RatingRepo, Session, TagRepo};

/// Row totals of every table, read on one session.
pub async fn get_analytics(mut db: Session) -> Result<Json<AnalyticsResponse>, AppError> {
    let movie_count = db.get_movie_count().await?;
    let rating_count = db.get_rating_count().await?;
    let tag_count = db.get_tag_count().await?;
    let link_count = db.get_link_count().await?;

    Ok(Json(AnalyticsResponse {
        movie_count,
        rating_count,
        tag_count,
        link_count,
    }))
}
