use crate::model::playlist::InvalidPlaylist;
use common::model::watcher::InvalidSyncInterval;

pub type DbResult<T> = Result<T, DbError>;

#[derive(thiserror::Error, Debug)]
pub enum DbError {
    #[error("{0}")]
    InvalidSyncInterval(#[from] InvalidSyncInterval),

    #[error(transparent)]
    InvalidPlaylist(#[from] InvalidPlaylist),

    #[error(transparent)]
    DateParseError(#[from] chrono::ParseError),

    #[error(transparent)]
    SQLiteError(#[from] rusqlite::Error),

    #[error("row id {0} does not fit a watcher id")]
    IdOutOfRange(i64),

    #[error("database lock poisoned")]
    Poisoned,
}

impl DbError {
    /// Whether the statement broke a UNIQUE or CHECK constraint.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            DbError::SQLiteError(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}
