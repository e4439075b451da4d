//! DynamoDB client construction and table management.

use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType, TableStatus,
};
use tracing::{info, warn};

use bookshelf_core::config::store::StoreConfig;
use bookshelf_core::error::{AppError, ErrorKind};
use bookshelf_core::result::AppResult;

use crate::codec::ATTR_ID;

/// A configured DynamoDB client bound to one table.
///
/// The SDK client owns its own connection pool and is cheap to clone;
/// repositories take a clone of it at construction.
#[derive(Debug, Clone)]
pub struct StoreClient {
    client: Client,
    table_name: String,
}

impl StoreClient {
    /// Build a client from configuration.
    ///
    /// Credentials are resolved by the AWS default provider chain. The
    /// endpoint override, when set, replaces the regional endpoint.
    pub async fn connect(config: &StoreConfig) -> AppResult<Self> {
        config.validate()?;

        info!(
            region = %config.region,
            endpoint = config.endpoint.as_deref().unwrap_or("default"),
            table = %config.table_name,
            "Configuring DynamoDB client"
        );

        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));
        if let Some(endpoint) = &config.endpoint {
            loader = loader.endpoint_url(endpoint.clone());
        }
        let sdk_config = loader.load().await;

        Ok(Self::from_client(Client::new(&sdk_config), &config.table_name))
    }

    /// Wrap an already configured SDK client.
    pub fn from_client(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Return a reference to the underlying SDK client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Return the configured table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Check that the table exists and is active.
    pub async fn health_check(&self) -> AppResult<bool> {
        let output = self
            .client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Health check failed: {}", DisplayErrorContext(&e)),
                    e,
                )
            })?;

        let status = output.table().and_then(|t| t.table_status());
        Ok(matches!(status, Some(TableStatus::Active)))
    }

    /// Return whether the configured table exists.
    pub async fn table_exists(&self) -> AppResult<bool> {
        match self
            .client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e)
                if e.as_service_error()
                    .is_some_and(|se| se.is_resource_not_found_exception()) =>
            {
                Ok(false)
            }
            Err(e) => Err(AppError::with_source(
                ErrorKind::Database,
                format!("Failed to describe table: {}", DisplayErrorContext(&e)),
                e,
            )),
        }
    }

    /// Create the table keyed by a numeric `id` hash key, with on-demand
    /// billing. Returns `false` when the table already existed.
    pub async fn ensure_table(&self) -> AppResult<bool> {
        if self.table_exists().await? {
            return Ok(false);
        }

        let key_schema = KeySchemaElement::builder()
            .attribute_name(ATTR_ID)
            .key_type(KeyType::Hash)
            .build()
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Invalid key schema", e))?;
        let attribute = AttributeDefinition::builder()
            .attribute_name(ATTR_ID)
            .attribute_type(ScalarAttributeType::N)
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Invalid attribute definition", e)
            })?;

        let result = self
            .client
            .create_table()
            .table_name(&self.table_name)
            .key_schema(key_schema)
            .attribute_definitions(attribute)
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await;

        match result {
            Ok(_) => {
                info!(table = %self.table_name, "Created table");
                Ok(true)
            }
            Err(e)
                if e.as_service_error()
                    .is_some_and(|se| se.is_resource_in_use_exception()) =>
            {
                warn!(table = %self.table_name, "Table was created concurrently");
                Ok(false)
            }
            Err(e) => Err(AppError::with_source(
                ErrorKind::Database,
                format!("Failed to create table: {}", DisplayErrorContext(&e)),
                e,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_rejects_empty_region() {
        let config = StoreConfig {
            region: String::new(),
            ..StoreConfig::default()
        };
        let err = StoreClient::connect(&config).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[tokio::test]
    async fn test_connect_keeps_table_name() {
        let config = StoreConfig {
            endpoint: Some("http://localhost:8000".to_string()),
            table_name: "books_test".to_string(),
            ..StoreConfig::default()
        };
        let store = StoreClient::connect(&config).await.unwrap();
        assert_eq!(store.table_name(), "books_test");
        assert_eq!(
            store.client().config().region().map(|r| r.as_ref()),
            Some("ap-southeast-1")
        );
    }
}
