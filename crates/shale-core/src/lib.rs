pub mod driver;
pub use driver::{Connection, Dialect};

mod error;
pub use error::{Error, IntoError};

pub mod schema;

/// A Result type alias that uses Shale's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
