use crate::Name;

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(thiserror::Error, Debug)]
pub enum CreateError {
    #[error("conflict")]
    Conflict,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(thiserror::Error, Debug)]
pub enum UpdateError {
    #[error("exercise not found: {0}")]
    NotFound(Name),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(thiserror::Error, Debug)]
pub enum DeleteError {
    #[error("exercise not found: {0}")]
    NotFound(Name),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    /// For store backends behind a connection. Not treated as a failure
    /// worth reporting, see `Service`.
    #[error("no connection")]
    NoConnection,
    /// Any other backend failure, e.g. a poisoned lock of the in-memory store.
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_error_display() {
        assert_eq!(
            UpdateError::NotFound(Name::new("Curl").unwrap()).to_string(),
            "exercise not found: Curl"
        );
        assert_eq!(
            UpdateError::from(StorageError::NoConnection).to_string(),
            "no connection"
        );
    }
}
