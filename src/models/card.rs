//! Card models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    Virtual,
    Physical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardStatus {
    Active,
    Frozen,
    Closed,
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentSystem {
    Visa,
    Mastercard,
}

/// A virtual or physical card attached to an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub pin: String,
    pub cvv: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub status: CardStatus,
    pub account_id: String,
    pub card_number: String,
    pub card_holder: String,
    pub expiry_date: NaiveDate,
    pub payment_system: PaymentSystem,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_uses_camel_case_on_the_wire() {
        let raw = r#"{
            "id": "card-1",
            "pin": "1234",
            "cvv": "123",
            "type": "VIRTUAL",
            "status": "ACTIVE",
            "accountId": "acc-1",
            "cardNumber": "4111111111111111",
            "cardHolder": "IVAN PETROV",
            "expiryDate": "2030-01-31",
            "paymentSystem": "MASTERCARD"
        }"#;

        let card: Card = serde_json::from_str(raw).unwrap();
        assert_eq!(card.card_type, CardType::Virtual);
        assert_eq!(card.payment_system, PaymentSystem::Mastercard);
        assert_eq!(card.expiry_date, NaiveDate::from_ymd_opt(2030, 1, 31).unwrap());

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["accountId"], "acc-1");
        assert_eq!(json["type"], "VIRTUAL");
    }
}
