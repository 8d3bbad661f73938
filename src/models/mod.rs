//! Domain models shared by the HTTP and gRPC clients
//!
//! These mirror the gateway contracts and are never mutated locally. The serde
//! attributes describe the HTTP wire format (camelCase fields, SCREAMING_SNAKE
//! enum values); the gRPC clients convert from protobuf messages into the same
//! types.

pub mod account;
pub mod card;
pub mod document;
pub mod operation;
pub mod user;

pub use account::{Account, AccountStatus, AccountType};
pub use card::{Card, CardStatus, CardType, PaymentSystem};
pub use document::Document;
pub use operation::{
    Operation, OperationReceipt, OperationStatus, OperationType, OperationsSummary,
};
pub use user::User;
