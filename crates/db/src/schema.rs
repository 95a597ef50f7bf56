//! SQL DDL for the catalog tables.
//!
//! `director` and `genre` are created before `movie` so the foreign keys
//! resolve on a fresh database.

/// Table names, in creation order.
pub const TABLES: &[&str] = &["director", "genre", "movie"];

/// Idempotent `CREATE TABLE` statements, in creation order.
pub const STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS director (
        id   INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(255) NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS genre (
        id   INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(255) NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS movie (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        title       VARCHAR(255) NOT NULL,
        description VARCHAR(255) NOT NULL,
        trailer     VARCHAR(255) NOT NULL,
        year        INTEGER NOT NULL,
        rating      REAL NOT NULL,
        genre_id    INTEGER REFERENCES genre (id),
        director_id INTEGER REFERENCES director (id)
    )",
    "CREATE INDEX IF NOT EXISTS idx_movie_director_id ON movie (director_id)",
    "CREATE INDEX IF NOT EXISTS idx_movie_genre_id ON movie (genre_id)",
];
