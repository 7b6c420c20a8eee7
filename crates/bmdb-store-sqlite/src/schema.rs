//! SQL schema for the bmdb SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! schema revision for future migrations.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS actors (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name  TEXT NOT NULL,
    last_name   TEXT NOT NULL,
    gender      TEXT NOT NULL,
    birth_date  TEXT NOT NULL    -- ISO 8601 calendar date, YYYY-MM-DD
);

CREATE TABLE IF NOT EXISTS movies (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    title     TEXT NOT NULL,
    rating    TEXT,
    year      INTEGER,
    director  TEXT
);

-- An actor credited in a movie cannot be deleted while the credit exists.
CREATE TABLE IF NOT EXISTS credits (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    actor_id  INTEGER NOT NULL REFERENCES actors(id),
    movie_id  INTEGER NOT NULL REFERENCES movies(id),
    role      TEXT
);

CREATE INDEX IF NOT EXISTS actors_gender_idx     ON actors(gender);
CREATE INDEX IF NOT EXISTS actors_last_name_idx  ON actors(last_name);
CREATE INDEX IF NOT EXISTS actors_birth_date_idx ON actors(birth_date);
CREATE INDEX IF NOT EXISTS credits_actor_idx     ON credits(actor_id);

PRAGMA user_version = 1;
";
