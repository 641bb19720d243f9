use axum::extract::State;
use axum::Json;

use super::error::AppError;
use super::extract::{ApiPath, ApiQuery};
use super::types::MovieListParams;
use crate::db::{Movie, MovieDetail, MovieRepo, Page, Session};
use crate::server::AppState;

pub async fn get_movie(
    ApiPath(movie_id): ApiPath<i64>,
    mut db: Session,
) -> Result<Json<MovieDetail>, AppError> {
    db.get_movie_detail(movie_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Movie with id {} not found", movie_id)))
}

pub async fn list_movies(
    ApiQuery(params): ApiQuery<MovieListParams>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Movie>>, AppError> {
    let page = Page::new(params.skip, params.limit).map_err(AppError::Validation)?;
    // Checked out only once the request is known to be valid.
    let mut db = state.db.session().await?;
    let movies = db.list_movies(&params.filter(), page).await?;
    Ok(Json(movies))
}
