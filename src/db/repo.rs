use async_trait::async_trait;

use super::model::*;

#[async_trait]
pub trait MovieRepo: Send {
    async fn get_movie(&mut self, movie_id: i64) -> DbResult<Option<Movie>>;
    async fn get_movie_detail(&mut self, movie_id: i64) -> DbResult<Option<MovieDetail>>;
    async fn list_movies(&mut self, filter: &MovieFilter, page: Page) -> DbResult<Vec<Movie>>;
    async fn get_movie_count(&mut self) -> DbResult<i64>;
}

#[async_trait]
pub trait RatingRepo: Send {
    async fn get_rating(&mut self, user_id: i64, movie_id: i64) -> DbResult<Option<Rating>>;
    async fn list_ratings(&mut self, filter: &RatingFilter, page: Page) -> DbResult<Vec<Rating>>;
    async fn get_rating_count(&mut self) -> DbResult<i64>;
}

#[async_trait]
pub trait TagRepo: Send {
    async fn get_tag(&mut self, user_id: i64, movie_id: i64, tag_text: &str)
        -> DbResult<Option<Tag>>;
    async fn list_tags(&mut self, filter: &TagFilter, page: Page) -> DbResult<Vec<Tag>>;
    async fn get_tag_count(&mut self) -> DbResult<i64>;
}

#[async_trait]
pub trait LinkRepo: Send {
    async fn get_link(&mut self, movie_id: i64) -> DbResult<Option<Link>>;
    async fn list_links(&mut self, page: Page) -> DbResult<Vec<Link>>;
    async fn get_link_count(&mut self) -> DbResult<i64>;
}
