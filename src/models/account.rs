//! Account models

use serde::{Deserialize, Serialize};

use super::card::Card;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Deposit,
    Savings,
    DebitCard,
    CreditCard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Active,
    PendingClosure,
    Closed,
}

/// A bank account with the cards issued for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Wire order is kept; the first card is the one opened with the account
    pub cards: Vec<Card>,
    pub status: AccountStatus,
    pub balance: f64,
}

impl Account {
    /// The card issued together with the account, if any
    pub fn first_card(&self) -> Option<&Card> {
        self.cards.first()
    }
}
