use serde::{Deserialize, Serialize};

use crate::db::{MovieFilter, RatingFilter, TagFilter, DEFAULT_LIMIT};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    pub movie_count: i64,
    pub rating_count: i64,
    pub tag_count: i64,
    pub link_count: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieListParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub title: Option<String>,
    pub genre: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RatingListParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub movie_id: Option<i64>,
    pub user_id: Option<i64>,
    pub min_rating: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagListParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub movie_id: Option<i64>,
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkListParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl MovieListParams {
    pub fn filter(&self) -> MovieFilter {
        MovieFilter {
            title: self.title.clone(),
            genre: self.genre.clone(),
        }
    }
}

impl RatingListParams {
    pub fn filter(&self) -> RatingFilter {
        RatingFilter {
            movie_id: self.movie_id,
            user_id: self.user_id,
            min_rating: self.min_rating,
        }
    }
}

impl TagListParams {
    pub fn filter(&self) -> TagFilter {
        TagFilter {
            movie_id: self.movie_id,
            user_id: self.user_id,
        }
    }
}
