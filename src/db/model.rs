use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: i64 = 100;
pub const MAX_LIMIT: i64 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub movie_id: i64,
    pub title: String,
    pub genres: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub user_id: i64,
    pub movie_id: i64,
    pub rating: f64,
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub user_id: i64,
    pub movie_id: i64,
    pub tag: String,
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub movie_id: i64,
    pub imdb_id: String,
    pub tmdb_id: Option<String>,
}

/// A movie together with everything that references it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Movie,
    pub ratings: Vec<Rating>,
    pub tags: Vec<Tag>,
    pub link: Option<Link>,
}

/// Offset window over a deterministically ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Page {
    pub fn new(skip: i64, limit: i64) -> Result<Self, String> {
        if skip < 0 {
            return Err(format!("skip must be greater than or equal to 0, got {}", skip));
        }
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(format!(
                "limit must be between 1 and {}, got {}",
                MAX_LIMIT, limit
            ));
        }
        Ok(Self { skip, limit })
    }
}

#[derive(Debug, Clone, Default)]
pub struct MovieFilter {
    /// Case-sensitive substring of the title.
    pub title: Option<String>,
    /// Case-sensitive substring of the pipe-delimited genre list.
    pub genre: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RatingFilter {
    pub movie_id: Option<i64>,
    pub user_id: Option<i64>,
    /// Inclusive lower bound.
    pub min_rating: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct TagFilter {
    pub movie_id: Option<i64>,
    pub user_id: Option<i64>,
}

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_bounds() {
        assert_eq!(Page::new(0, 1).unwrap(), Page { skip: 0, limit: 1 });
        assert_eq!(Page::new(5, 1000).unwrap().limit, 1000);
        assert!(Page::new(-1, 10).is_err());
        assert!(Page::new(0, 0).is_err());
        assert!(Page::new(0, 1001).is_err());
        assert_eq!(Page::default(), Page { skip: 0, limit: 100 });
    }

    #[test]
    fn test_movie_detail_json_shape() {
        let detail = MovieDetail {
            movie: Movie {
                movie_id: 1,
                title: "Toy Story (1995)".to_string(),
                genres: "Adventure|Animation".to_string(),
            },
            ratings: vec![],
            tags: vec![],
            link: Some(Link {
                movie_id: 1,
                imdb_id: "0114709".to_string(),
                tmdb_id: None,
            }),
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["movieId"], 1);
        assert_eq!(json["title"], "Toy Story (1995)");
        assert_eq!(json["link"]["imdbId"], "0114709");
        assert!(json["link"]["tmdbId"].is_null());
    }
}
