//! Document store configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// DynamoDB connection and table settings.
///
/// Credentials are not part of this section; they come from the AWS
/// default provider chain (environment, profile, instance metadata).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// AWS region.
    #[serde(default = "default_region")]
    pub region: String,
    /// Endpoint override (for DynamoDB Local or other compatible services).
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Name of the table holding book items.
    #[serde(default = "default_table_name")]
    pub table_name: String,
    /// Create the table on startup when it does not exist.
    #[serde(default)]
    pub create_table_if_missing: bool,
}

impl StoreConfig {
    /// Reject settings the client cannot be built from.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.region.trim().is_empty() {
            return Err(AppError::configuration("store.region must not be empty"));
        }
        if self.table_name.trim().is_empty() {
            return Err(AppError::configuration(
                "store.table_name must not be empty",
            ));
        }
        if let Some(endpoint) = &self.endpoint {
            if endpoint.trim().is_empty() {
                return Err(AppError::configuration(
                    "store.endpoint must not be empty when set",
                ));
            }
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            endpoint: None,
            table_name: default_table_name(),
            create_table_if_missing: false,
        }
    }
}

fn default_region() -> String {
    "ap-southeast-1".to_string()
}

fn default_table_name() -> String {
    "book".to_string()
}
