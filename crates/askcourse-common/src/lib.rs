pub mod errors;
pub mod id;
pub mod types;

pub use errors::{AskCourseError, ConfigError};
pub use id::{new_correlation_id, SessionId};
pub use types::{StaleReplyPolicy, DEFAULT_GREETING};

pub type Result<T> = std::result::Result<T, AskCourseError>;
