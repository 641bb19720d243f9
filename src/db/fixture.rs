use sqlx::sqlite::SqlitePoolOptions;

use super::SqliteRepository;

const SCHEMA: &str = "
CREATE TABLE movies (
    movieId INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    genres TEXT NOT NULL
);
CREATE TABLE ratings (
    userId INTEGER NOT NULL,
    movieId INTEGER NOT NULL REFERENCES movies(movieId),
    rating REAL NOT NULL,
    timestamp INTEGER,
    PRIMARY KEY (userId, movieId)
);
CREATE TABLE tags (
    userId INTEGER NOT NULL,
    movieId INTEGER NOT NULL REFERENCES movies(movieId),
    tag TEXT NOT NULL,
    timestamp INTEGER,
    PRIMARY KEY (userId, movieId, tag)
);
CREATE TABLE links (
    movieId INTEGER PRIMARY KEY REFERENCES movies(movieId),
    imdbId TEXT NOT NULL,
    tmdbId INTEGER
);
";

const DATA: &str = "
INSERT INTO movies (movieId, title, genres) VALUES
    (1, 'Toy Story (1995)', 'Adventure|Animation|Children|Comedy|Fantasy'),
    (2, 'Jumanji (1995)', 'Adventure|Children|Fantasy'),
    (3, 'Grumpier Old Men (1995)', 'Comedy|Romance'),
    (6, 'Heat (1995)', 'Action|Crime|Thriller'),
    (3114, 'Toy Story 2 (1999)', 'Adventure|Animation|Children|Comedy|Fantasy'),
    (60756, 'Step Brothers (2008)', 'Comedy');
INSERT INTO ratings (userId, movieId, rating, timestamp) VALUES
    (1, 1, 4.0, 964982703),
    (1, 3, 4.0, 964981247),
    (5, 1, 4.0, 847434962),
    (5, 2, 3.5, 847434963),
    (5, 3, 5.0, 847435000),
    (7, 1, 4.5, 1106635946),
    (7, 6, 2.0, 1106635993),
    (2, 60756, 5.0, 1445714980);
INSERT INTO tags (userId, movieId, tag, timestamp) VALUES
    (2, 60756, 'funny', 1445714994),
    (2, 60756, 'Highly quotable', 1445714996),
    (2, 60756, 'will ferrell', 1445714992),
    (7, 1, 'pixar', 1106635950),
    (18, 1, 'Tom Hanks', 1455209536);
INSERT INTO links (movieId, imdbId, tmdbId) VALUES
    (1, '0114709', 862),
    (2, '0113497', 8844),
    (3, '0113228', 15602),
    (6, '0113277', 949),
    (3114, '0120363', NULL);
";

/// In-memory MovieLens sample. A single long-lived connection keeps the
/// in-memory database alive for the whole test.
pub(crate) async fn fixture_repository() -> SqliteRepository {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::query(SCHEMA).execute(&pool).await.unwrap();
    sqlx::query(DATA).execute(&pool).await.unwrap();

    SqliteRepository::from_pool(pool)
}
