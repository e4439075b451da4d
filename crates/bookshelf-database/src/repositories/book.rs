//! DynamoDB book repository implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use tracing::{debug, warn};

use bookshelf_core::error::{AppError, ErrorKind};
use bookshelf_core::result::AppResult;
use bookshelf_core::traits::repository::Repository;
use bookshelf_entity::book::{Book, BookId};

use crate::codec::{decode_book, encode_book, encode_key};
use crate::connection::StoreClient;

/// Repository for books stored in a DynamoDB table keyed by `id`.
///
/// Every method issues exactly one request. Writes are unconditional
/// puts, so `create` and `update` behave identically.
#[derive(Debug, Clone)]
pub struct DynamoBookRepository {
    client: Client,
    table_name: String,
}

impl DynamoBookRepository {
    /// Create a new book repository over the given client and table.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Create a repository over a configured store client.
    pub fn from_store(store: &StoreClient) -> Self {
        Self::new(store.client().clone(), store.table_name())
    }

    /// Return the table this repository reads and writes.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    async fn put(&self, book: &Book) -> AppResult<()> {
        let item = encode_book(book);
        debug!(table = %self.table_name, id = %book.id, "PutItem");

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| store_error("put book item", e))?;
        Ok(())
    }
}

#[async_trait]
impl Repository<Book, BookId> for DynamoBookRepository {
    async fn create(&self, book: &Book) -> AppResult<()> {
        self.put(book).await
    }

    async fn get_by_id(&self, id: &BookId) -> AppResult<Option<Book>> {
        debug!(table = %self.table_name, id = %id, "GetItem");

        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(encode_key(*id)))
            .send()
            .await
            .map_err(|e| store_error("get book item", e))?;

        match output.item() {
            Some(item) => Ok(Some(decode_book(item)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, book: &Book) -> AppResult<()> {
        self.put(book).await
    }

    async fn delete(&self, id: &BookId) -> AppResult<()> {
        debug!(table = %self.table_name, id = %id, "DeleteItem");

        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(encode_key(*id)))
            .send()
            .await
            .map_err(|e| store_error("delete book item", e))?;
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Book>> {
        debug!(table = %self.table_name, "Scan");

        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| store_error("scan book table", e))?;

        // Only the first page is returned; continuation is not followed.
        if output.last_evaluated_key().is_some() {
            warn!(
                table = %self.table_name,
                returned = output.items().len(),
                "Scan result truncated by the store"
            );
        }

        output
            .items()
            .iter()
            .map(|item| decode_book(item).map_err(AppError::from))
            .collect()
    }
}

fn store_error<E>(action: &str, err: E) -> AppError
where
    E: std::error::Error + Send + Sync + 'static,
{
    AppError::with_source(
        ErrorKind::Database,
        format!("Failed to {action}: {}", DisplayErrorContext(&err)),
        err,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    use aws_sdk_dynamodb::config::http::HttpResponse;
    use aws_sdk_dynamodb::error::SdkError;
    use aws_sdk_dynamodb::operation::delete_item::DeleteItemOutput;
    use aws_sdk_dynamodb::operation::get_item::GetItemOutput;
    use aws_sdk_dynamodb::operation::put_item::PutItemOutput;
    use aws_sdk_dynamodb::operation::scan::{ScanError, ScanOutput};
    use aws_sdk_dynamodb::types::AttributeValue;
    use aws_sdk_dynamodb::types::error::ResourceNotFoundException;
    use aws_smithy_mocks::{mock, mock_client};
    use bookshelf_core::config::store::StoreConfig;

    use crate::codec::ATTR_ID;

    const TABLE: &str = "book";

    fn dune() -> Book {
        Book::new(1, "Dune", "Herbert")
    }

    #[tokio::test]
    async fn test_from_store_uses_configured_table() {
        let config = StoreConfig {
            endpoint: Some("http://localhost:8000".to_string()),
            ..StoreConfig::default()
        };
        let store = StoreClient::connect(&config).await.unwrap();
        let repo = DynamoBookRepository::from_store(&store);
        assert_eq!(repo.table_name(), "book");
    }

    #[test]
    fn test_store_error_is_database_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let err = store_error("scan book table", io);
        assert_eq!(err.kind, ErrorKind::Database);
        assert!(err.message.starts_with("Failed to scan book table"));
    }

    #[tokio::test]
    async fn test_create_puts_encoded_item() {
        let put = mock!(Client::put_item)
            .match_requests(|req| {
                req.table_name() == Some(TABLE) && req.item() == Some(&encode_book(&dune()))
            })
            .then_output(|| PutItemOutput::builder().build());
        let repo = DynamoBookRepository::new(mock_client!(aws_sdk_dynamodb, [&put]), TABLE);

        repo.create(&dune()).await.unwrap();
        assert_eq!(put.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_update_puts_encoded_item() {
        let emma = Book::new(2, "Emma", "Austen");
        let expected = encode_book(&emma);
        let put = mock!(Client::put_item)
            .match_requests(move |req| req.item() == Some(&expected))
            .then_output(|| PutItemOutput::builder().build());
        let repo = DynamoBookRepository::new(mock_client!(aws_sdk_dynamodb, [&put]), TABLE);

        repo.update(&emma).await.unwrap();
        assert_eq!(put.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_get_sends_key_and_decodes_item() {
        let get = mock!(Client::get_item)
            .match_requests(|req| {
                req.table_name() == Some(TABLE) && req.key() == Some(&encode_key(BookId(1)))
            })
            .then_output(|| {
                GetItemOutput::builder()
                    .set_item(Some(encode_book(&dune())))
                    .build()
            });
        let repo = DynamoBookRepository::new(mock_client!(aws_sdk_dynamodb, [&get]), TABLE);

        assert_eq!(repo.get_by_id(&BookId(1)).await.unwrap(), Some(dune()));
        assert_eq!(get.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_get_without_item_is_none() {
        let get = mock!(Client::get_item).then_output(|| GetItemOutput::builder().build());
        let repo = DynamoBookRepository::new(mock_client!(aws_sdk_dynamodb, [&get]), TABLE);

        assert_eq!(repo.get_by_id(&BookId(404)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_sends_key_only() {
        let delete = mock!(Client::delete_item)
            .match_requests(|req| {
                req.table_name() == Some(TABLE) && req.key() == Some(&encode_key(BookId(1)))
            })
            .then_output(|| DeleteItemOutput::builder().build());
        let repo = DynamoBookRepository::new(mock_client!(aws_sdk_dynamodb, [&delete]), TABLE);

        repo.delete(&BookId(1)).await.unwrap();
        assert_eq!(delete.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_list_returns_first_page_when_truncated() {
        let scan = mock!(Client::scan)
            .match_requests(|req| req.table_name() == Some(TABLE))
            .then_output(|| {
                ScanOutput::builder()
                    .items(encode_book(&dune()))
                    .items(encode_book(&Book::new(2, "Emma", "Austen")))
                    .set_last_evaluated_key(Some(encode_key(BookId(2))))
                    .build()
            });
        let repo = DynamoBookRepository::new(mock_client!(aws_sdk_dynamodb, [&scan]), TABLE);

        let books = repo.list().await.unwrap();
        assert_eq!(books, vec![dune(), Book::new(2, "Emma", "Austen")]);
        assert_eq!(scan.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_list_malformed_item_is_serialization_error() {
        let scan = mock!(Client::scan).then_output(|| {
            let mut bad = encode_book(&dune());
            bad.insert(ATTR_ID.to_string(), AttributeValue::S("one".to_string()));
            ScanOutput::builder().items(bad).build()
        });
        let repo = DynamoBookRepository::new(mock_client!(aws_sdk_dynamodb, [&scan]), TABLE);

        let err = repo.list().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Serialization);
    }

    #[tokio::test]
    async fn test_missing_table_is_database_error_with_source() {
        let scan = mock!(Client::scan).then_error(|| {
            ScanError::ResourceNotFoundException(
                ResourceNotFoundException::builder()
                    .message("Requested resource not found")
                    .build(),
            )
        });
        let repo = DynamoBookRepository::new(mock_client!(aws_sdk_dynamodb, [&scan]), TABLE);

        let err = repo.list().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Database);
        assert!(err.message.starts_with("Failed to scan book table"));

        let source = err
            .source()
            .and_then(|s| s.downcast_ref::<SdkError<ScanError, HttpResponse>>())
            .expect("sdk error kept as source");
        assert!(
            source
                .as_service_error()
                .is_some_and(|e| e.is_resource_not_found_exception())
        );
    }
}
