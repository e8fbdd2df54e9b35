use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Opaque pagination token returned by a page response.
///
/// The client never inspects a cursor; it only echoes the value back as the
/// `after` parameter of the next request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl_id!(Cursor);

impl Cursor {
    /// An empty token carries no position and is treated like a missing one.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
