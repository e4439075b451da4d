//! Explicit mapping between [`Book`] and DynamoDB items.
//!
//! Every write goes through [`encode_book`] and every read through
//! [`decode_book`]. The attribute layout is:
//!
//! | attribute | type |
//! |-----------|------|
//! | `id`      | `N`  |
//! | `name`    | `S`  |
//! | `author`  | `S`  |

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use thiserror::Error;

use bookshelf_core::error::{AppError, ErrorKind};
use bookshelf_entity::book::{Book, BookId};

/// Primary key attribute name.
pub const ATTR_ID: &str = "id";
/// Title attribute name.
pub const ATTR_NAME: &str = "name";
/// Author attribute name.
pub const ATTR_AUTHOR: &str = "author";

/// A DynamoDB item: attribute name to typed value.
pub type Item = HashMap<String, AttributeValue>;

/// Failure to turn an item back into an entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A required attribute is absent from the item.
    #[error("missing attribute `{0}`")]
    MissingAttribute(&'static str),
    /// An attribute is present with the wrong DynamoDB type.
    #[error("attribute `{attribute}` is not of type {expected}")]
    UnexpectedType {
        /// Attribute name.
        attribute: &'static str,
        /// Expected DynamoDB type descriptor.
        expected: &'static str,
    },
    /// A number attribute does not fit an `i64`.
    #[error("attribute `{attribute}` holds invalid number `{value}`")]
    InvalidNumber {
        /// Attribute name.
        attribute: &'static str,
        /// Raw value as stored.
        value: String,
    },
}

impl From<CodecError> for AppError {
    fn from(err: CodecError) -> Self {
        AppError::with_source(
            ErrorKind::Serialization,
            format!("Failed to decode book item: {err}"),
            err,
        )
    }
}

/// Encode a book into a full item.
pub fn encode_book(book: &Book) -> Item {
    HashMap::from([
        (ATTR_ID.to_string(), AttributeValue::N(book.id.to_string())),
        (ATTR_NAME.to_string(), AttributeValue::S(book.name.clone())),
        (ATTR_AUTHOR.to_string(), AttributeValue::S(book.author.clone())),
    ])
}

/// Encode the primary key of a book.
pub fn encode_key(id: BookId) -> Item {
    HashMap::from([(ATTR_ID.to_string(), AttributeValue::N(id.to_string()))])
}

/// Decode an item into a book. Attributes other than the three known ones
/// are ignored.
pub fn decode_book(item: &Item) -> Result<Book, CodecError> {
    Ok(Book {
        id: BookId(number(item, ATTR_ID)?),
        name: string(item, ATTR_NAME)?,
        author: string(item, ATTR_AUTHOR)?,
    })
}

fn attribute<'a>(item: &'a Item, name: &'static str) -> Result<&'a AttributeValue, CodecError> {
    item.get(name).ok_or(CodecError::MissingAttribute(name))
}

fn number(item: &Item, name: &'static str) -> Result<i64, CodecError> {
    let raw = attribute(item, name)?
        .as_n()
        .map_err(|_| CodecError::UnexpectedType {
            attribute: name,
            expected: "N",
        })?;
    raw.trim()
        .parse::<i64>()
        .map_err(|_| CodecError::InvalidNumber {
            attribute: name,
            value: raw.clone(),
        })
}

fn string(item: &Item, name: &'static str) -> Result<String, CodecError> {
    attribute(item, name)?
        .as_s()
        .cloned()
        .map_err(|_| CodecError::UnexpectedType {
            attribute: name,
            expected: "S",
        })
}
