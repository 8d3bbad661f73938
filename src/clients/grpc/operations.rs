use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;
use tonic::transport::Channel;
use tonic::Status;
use url::Url;

use super::client::{
    build_gateway_grpc_channel, build_gateway_load_test_grpc_channel, enum_value, required,
    GrpcClient,
};
use crate::config::GrpcClientConfig;
use crate::contracts::operations::operations_gateway_service_client::OperationsGatewayServiceClient;
use crate::contracts::operations::{
    self as proto, GetOperationReceiptRequest, GetOperationReceiptResponse, GetOperationRequest,
    GetOperationResponse, GetOperationsRequest, GetOperationsResponse,
    GetOperationsSummaryRequest, GetOperationsSummaryResponse, MakeBillPaymentOperationRequest,
    MakeBillPaymentOperationResponse, MakeCashWithdrawalOperationRequest,
    MakeCashWithdrawalOperationResponse, MakeCashbackOperationRequest,
    MakeCashbackOperationResponse, MakeFeeOperationRequest, MakeFeeOperationResponse,
    MakePurchaseOperationRequest, MakePurchaseOperationResponse, MakeTopUpOperationRequest,
    MakeTopUpOperationResponse, MakeTransferOperationRequest, MakeTransferOperationResponse,
};
use crate::error::{ClientError, DecodeError, TransportError};
use crate::fakers::Faker;
use crate::gateway::{OperationFields, OperationInput, OperationsGateway};
use crate::load::LoadTestEnvironment;
use crate::models::{
    Operation, OperationReceipt, OperationStatus, OperationType, OperationsSummary,
};

/// RPCs of `OperationsGatewayService`
#[async_trait]
pub trait OperationsGatewayStub: Send + Sync {
    async fn get_operation(
        &self,
        request: GetOperationRequest,
    ) -> Result<GetOperationResponse, Status>;

    async fn get_operation_receipt(
        &self,
        request: GetOperationReceiptRequest,
    ) -> Result<GetOperationReceiptResponse, Status>;

    async fn get_operations(
        &self,
        request: GetOperationsRequest,
    ) -> Result<GetOperationsResponse, Status>;

    async fn get_operations_summary(
        &self,
        request: GetOperationsSummaryRequest,
    ) -> Result<GetOperationsSummaryResponse, Status>;

    async fn make_fee_operation(
        &self,
        request: MakeFeeOperationRequest,
    ) -> Result<MakeFeeOperationResponse, Status>;

    async fn make_top_up_operation(
        &self,
        request: MakeTopUpOperationRequest,
    ) -> Result<MakeTopUpOperationResponse, Status>;

    async fn make_cashback_operation(
        &self,
        request: MakeCashbackOperationRequest,
    ) -> Result<MakeCashbackOperationResponse, Status>;

    async fn make_transfer_operation(
        &self,
        request: MakeTransferOperationRequest,
    ) -> Result<MakeTransferOperationResponse, Status>;

    async fn make_purchase_operation(
        &self,
        request: MakePurchaseOperationRequest,
    ) -> Result<MakePurchaseOperationResponse, Status>;

    async fn make_bill_payment_operation(
        &self,
        request: MakeBillPaymentOperationRequest,
    ) -> Result<MakeBillPaymentOperationResponse, Status>;

    async fn make_cash_withdrawal_operation(
        &self,
        request: MakeCashWithdrawalOperationRequest,
    ) -> Result<MakeCashWithdrawalOperationResponse, Status>;
}

#[async_trait]
impl OperationsGatewayStub for OperationsGatewayServiceClient<Channel> {
    async fn get_operation(
        &self,
        request: GetOperationRequest,
    ) -> Result<GetOperationResponse, Status> {
        let mut client = self.clone();
        OperationsGatewayServiceClient::get_operation(&mut client, request)
            .await
            .map(tonic::Response::into_inner)
    }

    async fn get_operation_receipt(
        &self,
        request: GetOperationReceiptRequest,
    ) -> Result<GetOperationReceiptResponse, Status> {
        let mut client = self.clone();
        OperationsGatewayServiceClient::get_operation_receipt(&mut client, request)
            .await
            .map(tonic::Response::into_inner)
    }

    async fn get_operations(
        &self,
        request: GetOperationsRequest,
    ) -> Result<GetOperationsResponse, Status> {
        let mut client = self.clone();
        OperationsGatewayServiceClient::get_operations(&mut client, request)
            .await
            .map(tonic::Response::into_inner)
    }

    async fn get_operations_summary(
        &self,
        request: GetOperationsSummaryRequest,
    ) -> Result<GetOperationsSummaryResponse, Status> {
        let mut client = self.clone();
        OperationsGatewayServiceClient::get_operations_summary(&mut client, request)
            .await
            .map(tonic::Response::into_inner)
    }

    async fn make_fee_operation(
        &self,
        request: MakeFeeOperationRequest,
    ) -> Result<MakeFeeOperationResponse, Status> {
        let mut client = self.clone();
        OperationsGatewayServiceClient::make_fee_operation(&mut client, request)
            .await
            .map(tonic::Response::into_inner)
    }

    async fn make_top_up_operation(
        &self,
        request: MakeTopUpOperationRequest,
    ) -> Result<MakeTopUpOperationResponse, Status> {
        let mut client = self.clone();
        OperationsGatewayServiceClient::make_top_up_operation(&mut client, request)
            .await
            .map(tonic::Response::into_inner)
    }

    async fn make_cashback_operation(
        &self,
        request: MakeCashbackOperationRequest,
    ) -> Result<MakeCashbackOperationResponse, Status> {
        let mut client = self.clone();
        OperationsGatewayServiceClient::make_cashback_operation(&mut client, request)
            .await
            .map(tonic::Response::into_inner)
    }

    async fn make_transfer_operation(
        &self,
        request: MakeTransferOperationRequest,
    ) -> Result<MakeTransferOperationResponse, Status> {
        let mut client = self.clone();
        OperationsGatewayServiceClient::make_transfer_operation(&mut client, request)
            .await
            .map(tonic::Response::into_inner)
    }

    async fn make_purchase_operation(
        &self,
        request: MakePurchaseOperationRequest,
    ) -> Result<MakePurchaseOperationResponse, Status> {
        let mut client = self.clone();
        OperationsGatewayServiceClient::make_purchase_operation(&mut client, request)
            .await
            .map(tonic::Response::into_inner)
    }

    async fn make_bill_payment_operation(
        &self,
        request: MakeBillPaymentOperationRequest,
    ) -> Result<MakeBillPaymentOperationResponse, Status> {
        let mut client = self.clone();
        OperationsGatewayServiceClient::make_bill_payment_operation(&mut client, request)
            .await
            .map(tonic::Response::into_inner)
    }

    async fn make_cash_withdrawal_operation(
        &self,
        request: MakeCashWithdrawalOperationRequest,
    ) -> Result<MakeCashWithdrawalOperationResponse, Status> {
        let mut client = self.clone();
        OperationsGatewayServiceClient::make_cash_withdrawal_operation(&mut client, request)
            .await
            .map(tonic::Response::into_inner)
    }
}

impl TryFrom<proto::Operation> for Operation {
    type Error = DecodeError;

    fn try_from(message: proto::Operation) -> Result<Self, Self::Error> {
        let operation_type = match enum_value(message.r#type, "Operation", "type")? {
            proto::OperationType::Fee => OperationType::Fee,
            proto::OperationType::TopUp => OperationType::TopUp,
            proto::OperationType::Cashback => OperationType::Cashback,
            proto::OperationType::Transfer => OperationType::Transfer,
            proto::OperationType::Purchase => OperationType::Purchase,
            proto::OperationType::BillPayment => OperationType::BillPayment,
            proto::OperationType::CashWithdrawal => OperationType::CashWithdrawal,
            proto::OperationType::Unspecified => {
                return Err(DecodeError::UnknownEnum {
                    message: "Operation",
                    field: "type",
                    value: 0,
                })
            }
        };
        // An unspecified status is a legal read value, unlike an unspecified type
        let status = match enum_value(message.status, "Operation", "status")? {
            proto::OperationStatus::Failed => OperationStatus::Failed,
            proto::OperationStatus::Completed => OperationStatus::Completed,
            proto::OperationStatus::InProgress => OperationStatus::InProgress,
            proto::OperationStatus::Unspecified => OperationStatus::Unspecified,
        };
        let created_at = required(message.created_at, "Operation", "created_at")?;
        let created_at = u32::try_from(created_at.nanos)
            .ok()
            .and_then(|nanos| DateTime::from_timestamp(created_at.seconds, nanos))
            .ok_or(DecodeError::InvalidTimestamp {
                field: "created_at",
            })?;

        Ok(Operation {
            id: message.id,
            operation_type,
            status,
            amount: message.amount,
            card_id: message.card_id,
            category: message.category,
            created_at,
            account_id: message.account_id,
        })
    }
}

impl TryFrom<proto::OperationReceipt> for OperationReceipt {
    type Error = DecodeError;

    fn try_from(message: proto::OperationReceipt) -> Result<Self, Self::Error> {
        let url = Url::parse(&message.url)
            .map_err(|source| DecodeError::InvalidUrl { field: "url", source })?;
        Ok(OperationReceipt {
            url,
            document: message.document,
        })
    }
}

impl From<proto::OperationsSummary> for OperationsSummary {
    fn from(message: proto::OperationsSummary) -> Self {
        OperationsSummary {
            spent_amount: message.spent_amount,
            received_amount: message.received_amount,
            cashback_amount: message.cashback_amount,
        }
    }
}

fn status_value(status: OperationStatus) -> i32 {
    let status = match status {
        OperationStatus::Failed => proto::OperationStatus::Failed,
        OperationStatus::Completed => proto::OperationStatus::Completed,
        OperationStatus::InProgress => proto::OperationStatus::InProgress,
        OperationStatus::Unspecified => proto::OperationStatus::Unspecified,
    };
    status as i32
}

macro_rules! make_operation_request {
    ($request:ident, $fields:expr) => {{
        let fields: OperationFields = $fields;
        $request {
            status: status_value(fields.status),
            amount: fields.amount,
            card_id: fields.card_id,
            account_id: fields.account_id,
        }
    }};
}

/// gRPC client for `OperationsGatewayService`
pub struct OperationsGatewayGrpcClient {
    client: GrpcClient<dyn OperationsGatewayStub>,
    faker: Arc<dyn Faker>,
}

impl OperationsGatewayGrpcClient {
    pub fn new(stub: Arc<dyn OperationsGatewayStub>, faker: Arc<dyn Faker>) -> Self {
        Self {
            client: GrpcClient::new(stub),
            faker,
        }
    }

    pub fn with_environment(mut self, environment: &LoadTestEnvironment) -> Self {
        self.client = self.client.with_listener(environment.listener.clone());
        self
    }

    pub async fn get_operation_api(
        &self,
        request: GetOperationRequest,
    ) -> Result<GetOperationResponse, TransportError> {
        self.client
            .observe("GetOperation", self.client.stub().get_operation(request))
            .await
    }

    pub async fn get_operation_receipt_api(
        &self,
        request: GetOperationReceiptRequest,
    ) -> Result<GetOperationReceiptResponse, TransportError> {
        self.client
            .observe(
                "GetOperationReceipt",
                self.client.stub().get_operation_receipt(request),
            )
            .await
    }

    pub async fn get_operations_api(
        &self,
        request: GetOperationsRequest,
    ) -> Result<GetOperationsResponse, TransportError> {
        self.client
            .observe("GetOperations", self.client.stub().get_operations(request))
            .await
    }

    pub async fn get_operations_summary_api(
        &self,
        request: GetOperationsSummaryRequest,
    ) -> Result<GetOperationsSummaryResponse, TransportError> {
        self.client
            .observe(
                "GetOperationsSummary",
                self.client.stub().get_operations_summary(request),
            )
            .await
    }

    pub async fn make_fee_operation_api(
        &self,
        request: MakeFeeOperationRequest,
    ) -> Result<MakeFeeOperationResponse, TransportError> {
        self.client
            .observe(
                "MakeFeeOperation",
                self.client.stub().make_fee_operation(request),
            )
            .await
    }

    pub async fn make_top_up_operation_api(
        &self,
        request: MakeTopUpOperationRequest,
    ) -> Result<MakeTopUpOperationResponse, TransportError> {
        self.client
            .observe(
                "MakeTopUpOperation",
                self.client.stub().make_top_up_operation(request),
            )
            .await
    }

    pub async fn make_cashback_operation_api(
        &self,
        request: MakeCashbackOperationRequest,
    ) -> Result<MakeCashbackOperationResponse, TransportError> {
        self.client
            .observe(
                "MakeCashbackOperation",
                self.client.stub().make_cashback_operation(request),
            )
            .await
    }

    pub async fn make_transfer_operation_api(
        &self,
        request: MakeTransferOperationRequest,
    ) -> Result<MakeTransferOperationResponse, TransportError> {
        self.client
            .observe(
                "MakeTransferOperation",
                self.client.stub().make_transfer_operation(request),
            )
            .await
    }

    pub async fn make_purchase_operation_api(
        &self,
        request: MakePurchaseOperationRequest,
    ) -> Result<MakePurchaseOperationResponse, TransportError> {
        self.client
            .observe(
                "MakePurchaseOperation",
                self.client.stub().make_purchase_operation(request),
            )
            .await
    }

    pub async fn make_bill_payment_operation_api(
        &self,
        request: MakeBillPaymentOperationRequest,
    ) -> Result<MakeBillPaymentOperationResponse, TransportError> {
        self.client
            .observe(
                "MakeBillPaymentOperation",
                self.client.stub().make_bill_payment_operation(request),
            )
            .await
    }

    pub async fn make_cash_withdrawal_operation_api(
        &self,
        request: MakeCashWithdrawalOperationRequest,
    ) -> Result<MakeCashWithdrawalOperationResponse, TransportError> {
        self.client
            .observe(
                "MakeCashWithdrawalOperation",
                self.client.stub().make_cash_withdrawal_operation(request),
            )
            .await
    }
}

#[async_trait]
impl OperationsGateway for OperationsGatewayGrpcClient {
    async fn get_operation(&self, operation_id: &str) -> Result<Operation, ClientError> {
        let request = GetOperationRequest {
            operation_id: operation_id.to_string(),
        };
        let response = self.get_operation_api(request).await?;
        let operation = required(response.operation, "GetOperationResponse", "operation")?;
        Ok(Operation::try_from(operation)?)
    }

    async fn get_operation_receipt(
        &self,
        operation_id: &str,
    ) -> Result<OperationReceipt, ClientError> {
        let request = GetOperationReceiptRequest {
            operation_id: operation_id.to_string(),
        };
        let response = self.get_operation_receipt_api(request).await?;
        let receipt = required(response.receipt, "GetOperationReceiptResponse", "receipt")?;
        Ok(OperationReceipt::try_from(receipt)?)
    }

    async fn get_operations(&self, account_id: &str) -> Result<Vec<Operation>, ClientError> {
        let request = GetOperationsRequest {
            account_id: account_id.to_string(),
        };
        let response = self.get_operations_api(request).await?;
        let operations = response
            .operations
            .into_iter()
            .map(Operation::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(operations)
    }

    async fn get_operations_summary(
        &self,
        account_id: &str,
    ) -> Result<OperationsSummary, ClientError> {
        let request = GetOperationsSummaryRequest {
            account_id: account_id.to_string(),
        };
        let response = self.get_operations_summary_api(request).await?;
        let summary = required(response.summary, "GetOperationsSummaryResponse", "summary")?;
        Ok(OperationsSummary::from(summary))
    }

    async fn make_operation(
        &self,
        kind: OperationType,
        input: OperationInput,
    ) -> Result<Operation, ClientError> {
        let fields = input.fill(self.faker.as_ref());

        let operation = match kind {
            OperationType::Fee => {
                self.make_fee_operation_api(make_operation_request!(MakeFeeOperationRequest, fields))
                    .await?
                    .operation
            }
            OperationType::TopUp => {
                self.make_top_up_operation_api(make_operation_request!(
                    MakeTopUpOperationRequest,
                    fields
                ))
                .await?
                .operation
            }
            OperationType::Cashback => {
                self.make_cashback_operation_api(make_operation_request!(
                    MakeCashbackOperationRequest,
                    fields
                ))
                .await?
                .operation
            }
            OperationType::Transfer => {
                self.make_transfer_operation_api(make_operation_request!(
                    MakeTransferOperationRequest,
                    fields
                ))
                .await?
                .operation
            }
            OperationType::Purchase => {
                let request = MakePurchaseOperationRequest {
                    status: status_value(fields.status),
                    amount: fields.amount,
                    card_id: fields.card_id,
                    account_id: fields.account_id,
                    category: fields.category,
                };
                self.make_purchase_operation_api(request).await?.operation
            }
            OperationType::BillPayment => {
                self.make_bill_payment_operation_api(make_operation_request!(
                    MakeBillPaymentOperationRequest,
                    fields
                ))
                .await?
                .operation
            }
            OperationType::CashWithdrawal => {
                self.make_cash_withdrawal_operation_api(make_operation_request!(
                    MakeCashWithdrawalOperationRequest,
                    fields
                ))
                .await?
                .operation
            }
        };

        let operation = required(operation, "MakeOperationResponse", "operation")?;
        Ok(Operation::try_from(operation)?)
    }
}

pub fn build_operations_gateway_grpc_client(
    config: &GrpcClientConfig,
    faker: Arc<dyn Faker>,
) -> Result<OperationsGatewayGrpcClient, TransportError> {
    let channel = build_gateway_grpc_channel(config)?;
    Ok(OperationsGatewayGrpcClient::new(
        Arc::new(OperationsGatewayServiceClient::new(channel)),
        faker,
    ))
}

pub fn build_operations_gateway_load_test_grpc_client(
    environment: &LoadTestEnvironment,
    faker: Arc<dyn Faker>,
) -> Result<OperationsGatewayGrpcClient, TransportError> {
    let channel = build_gateway_load_test_grpc_channel(environment)?;
    Ok(OperationsGatewayGrpcClient::new(
        Arc::new(OperationsGatewayServiceClient::new(channel)),
        faker,
    )
    .with_environment(environment))
}
