use std::str::FromStr;

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite};
use tracing::{debug, info};

use super::model::*;
use super::repo::*;

const MOVIE_COLUMNS: &str = "SELECT movieId AS movie_id, title, genres FROM movies";
const RATING_COLUMNS: &str = "SELECT userId AS user_id, movieId AS movie_id, \
     CAST(rating AS REAL) AS rating, timestamp FROM ratings";
const TAG_COLUMNS: &str =
    "SELECT userId AS user_id, movieId AS movie_id, tag, timestamp FROM tags";
// imdbId and tmdbId are sometimes loaded as integers; IMDb ids are
// seven digits with leading zeros.
const LINK_COLUMNS: &str = "SELECT movieId AS movie_id, \
     CASE WHEN typeof(imdbId) = 'integer' THEN printf('%07d', imdbId) \
     ELSE CAST(imdbId AS TEXT) END AS imdb_id, \
     CAST(tmdbId AS TEXT) AS tmdb_id FROM links";

/// Owns the connection pool. Created once at startup and shared through
/// the application state; every request borrows a [`Session`] from it.
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    pub async fn new(db_path: &str, max_connections: u32) -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str(db_path)?.read_only(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        info!("Database opened at {}", db_path);

        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn session(&self) -> DbResult<Session> {
        let conn = self.pool.acquire().await?;
        Ok(Session { conn })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// One pooled connection, used for the lifetime of a single request.
/// The connection goes back to the pool when the session is dropped.
pub struct Session {
    conn: PoolConnection<Sqlite>,
}

impl Session {
    async fn count(&mut self, table: &str) -> DbResult<i64> {
        let (count,) = sqlx::query_as::<_, (i64,)>(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(count)
    }
}

fn push_page(query: &mut QueryBuilder<'_, Sqlite>, order_by: &str, page: Page) {
    query
        .push(" ORDER BY ")
        .push(order_by)
        .push(" LIMIT ")
        .push_bind(page.limit)
        .push(" OFFSET ")
        .push_bind(page.skip);
}

#[async_trait]
impl MovieRepo for Session {
    async fn get_movie(&mut self, movie_id: i64) -> DbResult<Option<Movie>> {
        let movie = sqlx::query_as::<_, Movie>(&format!("{} WHERE movieId = ?", MOVIE_COLUMNS))
            .bind(movie_id)
            .fetch_optional(&mut *self.conn)
            .await?;
        Ok(movie)
    }

    async fn get_movie_detail(&mut self, movie_id: i64) -> DbResult<Option<MovieDetail>> {
        let Some(movie) = self.get_movie(movie_id).await? else {
            return Ok(None);
        };

        let ratings = sqlx::query_as::<_, Rating>(&format!(
            "{} WHERE movieId = ? ORDER BY userId",
            RATING_COLUMNS
        ))
        .bind(movie_id)
        .fetch_all(&mut *self.conn)
        .await?;

        let tags = sqlx::query_as::<_, Tag>(&format!(
            "{} WHERE movieId = ? ORDER BY userId, tag",
            TAG_COLUMNS
        ))
        .bind(movie_id)
        .fetch_all(&mut *self.conn)
        .await?;

        let link = self.get_link(movie_id).await?;

        Ok(Some(MovieDetail {
            movie,
            ratings,
            tags,
            link,
        }))
    }

    async fn list_movies(&mut self, filter: &MovieFilter, page: Page) -> DbResult<Vec<Movie>> {
        debug!(?filter, ?page, "list movies");

        let mut query = QueryBuilder::<Sqlite>::new(MOVIE_COLUMNS);
        query.push(" WHERE 1 = 1");
        // instr() keeps the match case-sensitive, unlike LIKE.
        if let Some(title) = &filter.title {
            query.push(" AND instr(title, ").push_bind(title.clone()).push(") > 0");
        }
        if let Some(genre) = &filter.genre {
            query.push(" AND instr(genres, ").push_bind(genre.clone()).push(") > 0");
        }
        push_page(&mut query, "movieId", page);

        let movies = query
            .build_query_as::<Movie>()
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(movies)
    }

    async fn get_movie_count(&mut self) -> DbResult<i64> {
        self.count("movies").await
    }
}

#[async_trait]
impl RatingRepo for Session {
    async fn get_rating(&mut self, user_id: i64, movie_id: i64) -> DbResult<Option<Rating>> {
        let rating = sqlx::query_as::<_, Rating>(&format!(
            "{} WHERE userId = ? AND movieId = ?",
            RATING_COLUMNS
        ))
        .bind(user_id)
        .bind(movie_id)
        .fetch_optional(&mut *self.conn)
        .await?;
        Ok(rating)
    }

    async fn list_ratings(&mut self, filter: &RatingFilter, page: Page) -> DbResult<Vec<Rating>> {
        debug!(?filter, ?page, "list ratings");

        let mut query = QueryBuilder::<Sqlite>::new(RATING_COLUMNS);
        query.push(" WHERE 1 = 1");
        if let Some(movie_id) = filter.movie_id {
            query.push(" AND movieId = ").push_bind(movie_id);
        }
        if let Some(user_id) = filter.user_id {
            query.push(" AND userId = ").push_bind(user_id);
        }
        if let Some(min_rating) = filter.min_rating {
            query.push(" AND rating >= ").push_bind(min_rating);
        }
        push_page(&mut query, "userId, movieId", page);

        let ratings = query
            .build_query_as::<Rating>()
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(ratings)
    }

    async fn get_rating_count(&mut self) -> DbResult<i64> {
        self.count("ratings").await
    }
}

#[async_trait]
impl TagRepo for Session {
    async fn get_tag(
        &mut self,
        user_id: i64,
        movie_id: i64,
        tag_text: &str,
    ) -> DbResult<Option<Tag>> {
        let tag = sqlx::query_as::<_, Tag>(&format!(
            "{} WHERE userId = ? AND movieId = ? AND tag = ?",
            TAG_COLUMNS
        ))
        .bind(user_id)
        .bind(movie_id)
        .bind(tag_text)
        .fetch_optional(&mut *self.conn)
        .await?;
        Ok(tag)
    }

    async fn list_tags(&mut self, filter: &TagFilter, page: Page) -> DbResult<Vec<Tag>> {
        debug!(?filter, ?page, "list tags");

        let mut query = QueryBuilder::<Sqlite>::new(TAG_COLUMNS);
        query.push(" WHERE 1 = 1");
        if let Some(movie_id) = filter.movie_id {
            query.push(" AND movieId = ").push_bind(movie_id);
        }
        if let Some(user_id) = filter.user_id {
            query.push(" AND userId = ").push_bind(user_id);
        }
        push_page(&mut query, "userId, movieId, tag", page);

        let tags = query
            .build_query_as::<Tag>()
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(tags)
    }

    async fn get_tag_count(&mut self) -> DbResult<i64> {
        self.count("tags").await
    }
}

#[async_trait]
impl LinkRepo for Session {
    async fn get_link(&mut self, movie_id: i64) -> DbResult<Option<Link>> {
        let link = sqlx::query_as::<_, Link>(&format!("{} WHERE movieId = ?", LINK_COLUMNS))
            .bind(movie_id)
            .fetch_optional(&mut *self.conn)
            .await?;
        Ok(link)
    }

    async fn list_links(&mut self, page: Page) -> DbResult<Vec<Link>> {
        debug!(?page, "list links");

        let mut query = QueryBuilder::<Sqlite>::new(LINK_COLUMNS);
        push_page(&mut query, "movieId", page);

        let links = query
            .build_query_as::<Link>()
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(links)
    }

    async fn get_link_count(&mut self) -> DbResult<i64> {
        self.count("links").await
    }
}
