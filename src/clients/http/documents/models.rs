use serde::{Deserialize, Serialize};

use crate::models::Document;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetTariffDocumentResponse {
    pub tariff: Document,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetContractDocumentResponse {
    pub contract: Document,
}
