use axum::extract::State;
use axum::Json;

use super::error::AppError;
use super::extract::{ApiPath, ApiQuery};
use super::types::LinkListParams;
use crate::db::{Link, LinkRepo, Page, Session};
use crate::server::AppState;

pub async fn get_link(
    ApiPath(movie_id): ApiPath<i64>,
    mut db: Session,
) -> Result<Json<Link>, AppError> {
    db.get_link(movie_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No link found for movie {}", movie_id)))
}

pub async fn list_links(
    ApiQuery(params): ApiQuery<LinkListParams>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Link>>, AppError> {
    let page = Page::new(params.skip, params.limit).map_err(AppError::Validation)?;
    let mut db = state.db.session().await?;
    let links = db.list_links(page).await?;
    Ok(Json(links))
}
