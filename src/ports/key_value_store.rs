use crate::domain::AppError;

/// Port for the string-keyed document store backing templates, history and session.
pub trait KeyValueStore {
    /// Exclusive lock handle. Dropping it releases the lock.
    type Lock;

    /// Read the raw document stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Replace the document stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Take the lock called `name`, or `None` while another holder has it.
    fn try_lock(&self, name: &str) -> Result<Option<Self::Lock>, AppError>;
}
