use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tonic::transport::Channel;
use tonic::Status;

use super::client::{
    build_gateway_grpc_channel, build_gateway_load_test_grpc_channel, enum_value, required,
    GrpcClient,
};
use crate::config::GrpcClientConfig;
use crate::contracts::cards::cards_gateway_service_client::CardsGatewayServiceClient;
use crate::contracts::cards::{
    self as proto, IssuePhysicalCardRequest, IssuePhysicalCardResponse, IssueVirtualCardRequest,
    IssueVirtualCardResponse,
};
use crate::error::{ClientError, DecodeError, TransportError};
use crate::gateway::CardsGateway;
use crate::load::LoadTestEnvironment;
use crate::models::{Card, CardStatus, CardType, PaymentSystem};

/// RPCs of `CardsGatewayService`
#[async_trait]
pub trait CardsGatewayStub: Send + Sync {
    async fn issue_virtual_card(
        &self,
        request: IssueVirtualCardRequest,
    ) -> Result<IssueVirtualCardResponse, Status>;

    async fn issue_physical_card(
        &self,
        request: IssuePhysicalCardRequest,
    ) -> Result<IssuePhysicalCardResponse, Status>;
}

#[async_trait]
impl CardsGatewayStub for CardsGatewayServiceClient<Channel> {
    async fn issue_virtual_card(
        &self,
        request: IssueVirtualCardRequest,
    ) -> Result<IssueVirtualCardResponse, Status> {
        let mut client = self.clone();
        CardsGatewayServiceClient::issue_virtual_card(&mut client, request)
            .await
            .map(tonic::Response::into_inner)
    }

    async fn issue_physical_card(
        &self,
        request: IssuePhysicalCardRequest,
    ) -> Result<IssuePhysicalCardResponse, Status> {
        let mut client = self.clone();
        CardsGatewayServiceClient::issue_physical_card(&mut client, request)
            .await
            .map(tonic::Response::into_inner)
    }
}

impl TryFrom<proto::Card> for Card {
    type Error = DecodeError;

    fn try_from(message: proto::Card) -> Result<Self, Self::Error> {
        let card_type = match enum_value(message.r#type, "Card", "type")? {
            proto::CardType::Virtual => CardType::Virtual,
            proto::CardType::Physical => CardType::Physical,
            proto::CardType::Unspecified => return Err(unspecified("type")),
        };
        let status = match enum_value(message.status, "Card", "status")? {
            proto::CardStatus::Active => CardStatus::Active,
            proto::CardStatus::Frozen => CardStatus::Frozen,
            proto::CardStatus::Closed => CardStatus::Closed,
            proto::CardStatus::Blocked => CardStatus::Blocked,
            proto::CardStatus::Unspecified => return Err(unspecified("status")),
        };
        let payment_system = match enum_value(message.payment_system, "Card", "payment_system")? {
            proto::CardPaymentSystem::Visa => PaymentSystem::Visa,
            proto::CardPaymentSystem::Mastercard => PaymentSystem::Mastercard,
            proto::CardPaymentSystem::Unspecified => return Err(unspecified("payment_system")),
        };
        let expiry_date = NaiveDate::parse_from_str(&message.expiry_date, "%Y-%m-%d").map_err(
            |_| DecodeError::InvalidDate {
                field: "expiry_date",
                value: message.expiry_date.clone(),
            },
        )?;

        Ok(Card {
            id: message.id,
            pin: message.pin,
            cvv: message.cvv,
            card_type,
            status,
            account_id: message.account_id,
            card_number: message.card_number,
            card_holder: message.card_holder,
            expiry_date,
            payment_system,
        })
    }
}

fn unspecified(field: &'static str) -> DecodeError {
    DecodeError::UnknownEnum {
        message: "Card",
        field,
        value: 0,
    }
}

/// gRPC client for `CardsGatewayService`
pub struct CardsGatewayGrpcClient {
    client: GrpcClient<dyn CardsGatewayStub>,
}

impl CardsGatewayGrpcClient {
    pub fn new(stub: Arc<dyn CardsGatewayStub>) -> Self {
        Self {
            client: GrpcClient::new(stub),
        }
    }

    pub fn with_environment(mut self, environment: &LoadTestEnvironment) -> Self {
        self.client = self.client.with_listener(environment.listener.clone());
        self
    }

    pub async fn issue_virtual_card_api(
        &self,
        request: IssueVirtualCardRequest,
    ) -> Result<IssueVirtualCardResponse, TransportError> {
        self.client
            .observe(
                "IssueVirtualCard",
                self.client.stub().issue_virtual_card(request),
            )
            .await
    }

    pub async fn issue_physical_card_api(
        &self,
        request: IssuePhysicalCardRequest,
    ) -> Result<IssuePhysicalCardResponse, TransportError> {
        self.client
            .observe(
                "IssuePhysicalCard",
                self.client.stub().issue_physical_card(request),
            )
            .await
    }
}

#[async_trait]
impl CardsGateway for CardsGatewayGrpcClient {
    async fn issue_virtual_card(
        &self,
        user_id: &str,
        account_id: &str,
    ) -> Result<Card, ClientError> {
        let request = IssueVirtualCardRequest {
            user_id: user_id.to_string(),
            account_id: account_id.to_string(),
        };
        let response = self.issue_virtual_card_api(request).await?;
        let card = required(response.card, "IssueVirtualCardResponse", "card")?;
        Ok(Card::try_from(card)?)
    }

    async fn issue_physical_card(
        &self,
        user_id: &str,
        account_id: &str,
    ) -> Result<Card, ClientError> {
        let request = IssuePhysicalCardRequest {
            user_id: user_id.to_string(),
            account_id: account_id.to_string(),
        };
        let response = self.issue_physical_card_api(request).await?;
        let card = required(response.card, "IssuePhysicalCardResponse", "card")?;
        Ok(Card::try_from(card)?)
    }
}

pub fn build_cards_gateway_grpc_client(
    config: &GrpcClientConfig,
) -> Result<CardsGatewayGrpcClient, TransportError> {
    let channel = build_gateway_grpc_channel(config)?;
    Ok(CardsGatewayGrpcClient::new(Arc::new(
        CardsGatewayServiceClient::new(channel),
    )))
}

pub fn build_cards_gateway_load_test_grpc_client(
    environment: &LoadTestEnvironment,
) -> Result<CardsGatewayGrpcClient, TransportError> {
    let channel = build_gateway_load_test_grpc_channel(environment)?;
    Ok(
        CardsGatewayGrpcClient::new(Arc::new(CardsGatewayServiceClient::new(channel)))
            .with_environment(environment),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_message() -> proto::Card {
        proto::Card {
            id: "card-1".to_string(),
            pin: "1234".to_string(),
            cvv: "123".to_string(),
            r#type: proto::CardType::Physical as i32,
            status: proto::CardStatus::Active as i32,
            account_id: "acc-1".to_string(),
            card_number: "4111111111111111".to_string(),
            card_holder: "IVAN PETROV".to_string(),
            expiry_date: "2031-12-31".to_string(),
            payment_system: proto::CardPaymentSystem::Visa as i32,
        }
    }

    #[test]
    fn test_card_from_message() {
        let card = Card::try_from(card_message()).unwrap();
        assert_eq!(card.card_type, CardType::Physical);
        assert_eq!(card.status, CardStatus::Active);
        assert_eq!(card.payment_system, PaymentSystem::Visa);
        assert_eq!(card.expiry_date, NaiveDate::from_ymd_opt(2031, 12, 31).unwrap());
    }

    #[test]
    fn test_card_rejects_unspecified_type() {
        let mut message = card_message();
        message.r#type = 0;
        let err = Card::try_from(message).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownEnum { field: "type", .. }));
    }

    #[test]
    fn test_card_rejects_bad_expiry_date() {
        let mut message = card_message();
        message.expiry_date = "12/31".to_string();
        let err = Card::try_from(message).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidDate { field: "expiry_date", .. }));
    }
}
