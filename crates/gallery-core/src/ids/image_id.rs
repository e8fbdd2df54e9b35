use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Server-assigned image identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(String);

impl_id!(ImageId);
