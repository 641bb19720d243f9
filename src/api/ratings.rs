use axum::extract::State;
use axum::Json;

use super::error::AppError;
use super::extract::{ApiPath, ApiQuery};
use super::types::RatingListParams;
use crate::db::{Page, Rating, RatingRepo, Session};
use crate::server::AppState;

pub async fn get_rating(
    ApiPath((user_id, movie_id)): ApiPath<(i64, i64)>,
    mut db: Session,
) -> Result<Json<Rating>, AppError> {
    db.get_rating(user_id, movie_id).await?.map(Json).ok_or_else(|| {
        AppError::NotFound(format!(
            "No rating found for user {} and movie {}",
            user_id, movie_id
        ))
    })
}

pub async fn list_ratings(
    ApiQuery(params): ApiQuery<RatingListParams>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Rating>>, AppError> {
    let page = Page::new(params.skip, params.limit).map_err(AppError::Validation)?;
    let mut db = state.db.session().await?;
    let ratings = db.list_ratings(&params.filter(), page).await?;
    Ok(Json(ratings))
}
