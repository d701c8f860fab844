use serde::Serialize;
use tracing::debug;
use crate::books::domain::model::BookstoreEntity;
use crate::core::bookstore::BookstoreResult;

pub const ROOT_ELEMENT: &str = "bookstore";
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

// decode parses the xml document into the catalog aggregate. Empty input is an
// empty catalog rather than an error so that a freshly created file bootstraps cleanly.
pub(crate) fn decode(bytes: &[u8]) -> BookstoreResult<BookstoreEntity> {
    let text = std::str::from_utf8(bytes)?;
    if text.trim().is_empty() {
        return Ok(BookstoreEntity::default());
    }
    let bookstore: BookstoreEntity = quick_xml::de::from_str(text)?;
    debug!("decoded {} books", bookstore.books.len());
    Ok(bookstore)
}

// encode serializes the catalog into its canonical xml form.
pub(crate) fn encode(bookstore: &BookstoreEntity) -> BookstoreResult<Vec<u8>> {
    let mut buffer = String::new();
    buffer.push_str(XML_DECLARATION);
    buffer.push('\n');
    let mut serializer = quick_xml::se::Serializer::with_root(&mut buffer, Some(ROOT_ELEMENT))?;
    serializer.indent(' ', 2);
    bookstore.serialize(serializer)?;
    buffer.push('\n');
    Ok(buffer.into_bytes())
}
