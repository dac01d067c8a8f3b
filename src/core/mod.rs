pub mod error;

pub use error::{AppError, PersistenceError, RepoResult, Result};
