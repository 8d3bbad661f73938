//! Tariff and contract documents

use serde::{Deserialize, Serialize};
use url::Url;

/// An account document (tariff or contract)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub url: Url,
    pub document: String,
}
