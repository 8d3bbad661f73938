use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Response;

use super::models::{
    GetOperationReceiptResponse, GetOperationResponse, GetOperationsQuery, GetOperationsResponse,
    GetOperationsSummaryQuery, GetOperationsSummaryResponse, MakeBillPaymentOperationRequest,
    MakeCashWithdrawalOperationRequest, MakeCashbackOperationRequest, MakeFeeOperationRequest,
    MakeOperationRequest, MakeOperationResponse, MakePurchaseOperationRequest,
    MakeTopUpOperationRequest, MakeTransferOperationRequest,
};
use crate::clients::http::client::{
    build_gateway_http_client, build_gateway_load_test_http_client, decode_response, HttpClient,
};
use crate::config::HttpClientConfig;
use crate::error::{ClientError, TransportError};
use crate::fakers::Faker;
use crate::gateway::{OperationInput, OperationsGateway};
use crate::load::LoadTestEnvironment;
use crate::models::{Operation, OperationReceipt, OperationType, OperationsSummary};

/// Client for `/api/v1/operations` of the HTTP gateway
///
/// The `*_api` methods send exactly what they are given. The
/// [`OperationsGateway`] methods generate status, amount and category when
/// the caller leaves them out.
pub struct OperationsGatewayHttpClient {
    client: HttpClient,
    faker: Arc<dyn Faker>,
}

impl OperationsGatewayHttpClient {
    pub fn new(client: HttpClient, faker: Arc<dyn Faker>) -> Self {
        Self { client, faker }
    }

    /// GET /api/v1/operations/{operation_id}
    pub async fn get_operation_api(&self, operation_id: &str) -> Result<Response, TransportError> {
        self.client
            .get_resource("/api/v1/operations", operation_id, "/api/v1/operations/{operation_id}")
            .await
    }

    /// GET /api/v1/operations/operation-receipt/{operation_id}
    pub async fn get_operation_receipt_api(
        &self,
        operation_id: &str,
    ) -> Result<Response, TransportError> {
        self.client
            .get_resource(
                "/api/v1/operations/operation-receipt",
                operation_id,
                "/api/v1/operations/operation-receipt/{operation_id}",
            )
            .await
    }

    /// GET /api/v1/operations?accountId=...
    pub async fn get_operations_api(
        &self,
        query: &GetOperationsQuery,
    ) -> Result<Response, TransportError> {
        self.client.get("/api/v1/operations", Some(query)).await
    }

    /// GET /api/v1/operations/operations-summary?accountId=...
    pub async fn get_operations_summary_api(
        &self,
        query: &GetOperationsSummaryQuery,
    ) -> Result<Response, TransportError> {
        self.client
            .get("/api/v1/operations/operations-summary", Some(query))
            .await
    }

    pub async fn make_fee_operation_api(
        &self,
        request: &MakeFeeOperationRequest,
    ) -> Result<Response, TransportError> {
        self.client
            .post("/api/v1/operations/make-fee-operation", Some(request))
            .await
    }

    pub async fn make_top_up_operation_api(
        &self,
        request: &MakeTopUpOperationRequest,
    ) -> Result<Response, TransportError> {
        self.client
            .post("/api/v1/operations/make-top-up-operation", Some(request))
            .await
    }

    pub async fn make_cashback_operation_api(
        &self,
        request: &MakeCashbackOperationRequest,
    ) -> Result<Response, TransportError> {
        self.client
            .post("/api/v1/operations/make-cashback-operation", Some(request))
            .await
    }

    pub async fn make_transfer_operation_api(
        &self,
        request: &MakeTransferOperationRequest,
    ) -> Result<Response, TransportError> {
        self.client
            .post("/api/v1/operations/make-transfer-operation", Some(request))
            .await
    }

    pub async fn make_purchase_operation_api(
        &self,
        request: &MakePurchaseOperationRequest,
    ) -> Result<Response, TransportError> {
        self.client
            .post("/api/v1/operations/make-purchase-operation", Some(request))
            .await
    }

    pub async fn make_bill_payment_operation_api(
        &self,
        request: &MakeBillPaymentOperationRequest,
    ) -> Result<Response, TransportError> {
        self.client
            .post("/api/v1/operations/make-bill-payment-operation", Some(request))
            .await
    }

    pub async fn make_cash_withdrawal_operation_api(
        &self,
        request: &MakeCashWithdrawalOperationRequest,
    ) -> Result<Response, TransportError> {
        self.client
            .post("/api/v1/operations/make-cash-withdrawal-operation", Some(request))
            .await
    }
}

#[async_trait]
impl OperationsGateway for OperationsGatewayHttpClient {
    async fn get_operation(&self, operation_id: &str) -> Result<Operation, ClientError> {
        let response = self.get_operation_api(operation_id).await?;
        let body: GetOperationResponse = decode_response(response).await?;
        Ok(body.operation)
    }

    async fn get_operation_receipt(
        &self,
        operation_id: &str,
    ) -> Result<OperationReceipt, ClientError> {
        let response = self.get_operation_receipt_api(operation_id).await?;
        let body: GetOperationReceiptResponse = decode_response(response).await?;
        Ok(body.receipt)
    }

    async fn get_operations(&self, account_id: &str) -> Result<Vec<Operation>, ClientError> {
        let query = GetOperationsQuery {
            account_id: account_id.to_string(),
        };
        let response = self.get_operations_api(&query).await?;
        let body: GetOperationsResponse = decode_response(response).await?;
        Ok(body.operations)
    }

    async fn get_operations_summary(
        &self,
        account_id: &str,
    ) -> Result<OperationsSummary, ClientError> {
        let query = GetOperationsSummaryQuery {
            account_id: account_id.to_string(),
        };
        let response = self.get_operations_summary_api(&query).await?;
        let body: GetOperationsSummaryResponse = decode_response(response).await?;
        Ok(body.summary)
    }

    async fn make_operation(
        &self,
        kind: OperationType,
        input: OperationInput,
    ) -> Result<Operation, ClientError> {
        let fields = input.fill(self.faker.as_ref());

        let response = match kind {
            OperationType::Fee => {
                self.make_fee_operation_api(&MakeOperationRequest::from(fields))
                    .await?
            }
            OperationType::TopUp => {
                self.make_top_up_operation_api(&MakeOperationRequest::from(fields))
                    .await?
            }
            OperationType::Cashback => {
                self.make_cashback_operation_api(&MakeOperationRequest::from(fields))
                    .await?
            }
            OperationType::Transfer => {
                self.make_transfer_operation_api(&MakeOperationRequest::from(fields))
                    .await?
            }
            OperationType::Purchase => {
                self.make_purchase_operation_api(&MakePurchaseOperationRequest::from(fields))
                    .await?
            }
            OperationType::BillPayment => {
                self.make_bill_payment_operation_api(&MakeOperationRequest::from(fields))
                    .await?
            }
            OperationType::CashWithdrawal => {
                self.make_cash_withdrawal_operation_api(&MakeOperationRequest::from(fields))
                    .await?
            }
        };

        let body: MakeOperationResponse = decode_response(response).await?;
        Ok(body.operation)
    }
}

pub fn build_operations_gateway_http_client(
    config: &HttpClientConfig,
    faker: Arc<dyn Faker>,
) -> Result<OperationsGatewayHttpClient, TransportError> {
    Ok(OperationsGatewayHttpClient::new(build_gateway_http_client(config)?, faker))
}

pub fn build_operations_gateway_load_test_http_client(
    environment: &LoadTestEnvironment,
    faker: Arc<dyn Faker>,
) -> Result<OperationsGatewayHttpClient, TransportError> {
    Ok(OperationsGatewayHttpClient::new(
        build_gateway_load_test_http_client(environment)?,
        faker,
    ))
}
