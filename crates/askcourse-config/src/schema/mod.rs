//! Configuration schema types for askcourse.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod api;
mod chat;
mod lectures;
mod logging;

pub use api::*;
pub use chat::*;
pub use lectures::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AskCourseConfig {
    pub api: ApiConfig,
    pub chat: ChatConfig,
    pub lectures: LecturesConfig,
    pub logging: LoggingConfig,
}
