use serde::{Deserialize, Serialize};

use super::ImageRecord;
use crate::ids::Cursor;

/// One page of the image listing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImagePage {
    #[serde(default)]
    pub data: Vec<ImageRecord>,
    /// Cursor for the next page. `None` (null or absent) ends the listing.
    #[serde(default)]
    pub after: Option<Cursor>,
}

impl ImagePage {
    pub fn new(data: Vec<ImageRecord>, after: Option<Cursor>) -> Self {
        Self { data, after }
    }

    /// Cursor to resume from, if this page is not the last one.
    ///
    /// An empty cursor string is treated the same as a missing one.
    pub fn next_cursor(&self) -> Option<&Cursor> {
        self.after.as_ref().filter(|cursor| !cursor.is_empty())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_with_cursor_has_next() {
        let page: ImagePage = serde_json::from_str(r#"{"data": [], "after": "cursor123"}"#).unwrap();
        assert_eq!(page.next_cursor(), Some(&Cursor::from("cursor123")));
    }

    #[test]
    fn test_page_with_null_or_missing_cursor_is_last() {
        let null_after: ImagePage = serde_json::from_str(r#"{"data": [], "after": null}"#).unwrap();
        let missing_after: ImagePage = serde_json::from_str(r#"{"data": []}"#).unwrap();
        let empty_after: ImagePage = serde_json::from_str(r#"{"data": [], "after": ""}"#).unwrap();

        assert!(null_after.next_cursor().is_none());
        assert!(missing_after.next_cursor().is_none());
        assert!(empty_after.next_cursor().is_none());
    }
}
