use axum::extract::State;
use axum::Json;

use super::error::AppError;
use super::extract::{ApiPath, ApiQuery};
use super::types::TagListParams;
use crate::db::{Page, Session, Tag, TagRepo};
use crate::server::AppState;

pub async fn get_tag(
    ApiPath((user_id, movie_id, tag_text)): ApiPath<(i64, i64, String)>,
    mut db: Session,
) -> Result<Json<Tag>, AppError> {
    db.get_tag(user_id, movie_id, &tag_text)
        .await?
        .map(Json)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No tag \"{}\" found for user {} and movie {}",
                tag_text, user_id, movie_id
            ))
        })
}

pub async fn list_tags(
    ApiQuery(params): ApiQuery<TagListParams>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Tag>>, AppError> {
    let page = Page::new(params.skip, params.limit).map_err(AppError::Validation)?;
    let mut db = state.db.session().await?;
    let tags = db.list_tags(&params.filter(), page).await?;
    Ok(Json(tags))
}
