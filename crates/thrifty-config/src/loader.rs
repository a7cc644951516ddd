//! Tree loading settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoaderConfig {
    /// Fail on fields that have no struct, exception or function to
    /// receive them instead of skipping them.
    #[serde(default)]
    pub strict_fields: bool,
}
