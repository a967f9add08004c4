use activitylog_api::{ActivityLogError, ActivityLogResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TABLE_NAME: &str = "activity_logs";
pub const DEFAULT_LOG_NAME: &str = "default";

/// Settings for the activity log table and its default channel
///
/// # Example
/// ```
/// use activitylog_db::options::ActivityLogOptions;
///
/// let options = ActivityLogOptions::default();
/// assert_eq!(options.table_name, "activity_logs");
/// assert_eq!(options.default_log_name, "default");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityLogOptions {
    /// Table the activity log rows live in
    pub table_name: String,
    /// Channel assigned to records that never call `use_log`
    pub default_log_name: String,
}

impl Default for ActivityLogOptions {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            default_log_name: DEFAULT_LOG_NAME.to_string(),
        }
    }
}

impl ActivityLogOptions {
    pub fn new(table_name: impl Into<String>, default_log_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            default_log_name: default_log_name.into(),
        }
    }

    /// Reads `ACTIVITYLOG_TABLE` and `ACTIVITYLOG_DEFAULT_LOG_NAME`, keeping defaults for unset variables
    pub fn from_env() -> ActivityLogResult<Self> {
        let defaults = Self::default();
        let options = Self {
            table_name: std::env::var("ACTIVITYLOG_TABLE").unwrap_or(defaults.table_name),
            default_log_name: std::env::var("ACTIVITYLOG_DEFAULT_LOG_NAME")
                .unwrap_or(defaults.default_log_name),
        };
        options.validate()?;
        Ok(options)
    }

    /// Rejects table names that are not plain identifiers
    pub fn validate(&self) -> ActivityLogResult<()> {
        if is_plain_identifier(&self.table_name) {
            Ok(())
        } else {
            Err(ActivityLogError::InvalidArgument(format!(
                "table name '{}' must match [A-Za-z_][A-Za-z0-9_]* and be at most 63 characters",
                self.table_name
            )))
        }
    }
}

/// True for `[A-Za-z_][A-Za-z0-9_]*` names of at most 63 bytes
pub fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    name.len() <= 63 && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
