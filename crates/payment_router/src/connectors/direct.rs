//! Direct-capture processor capability and its wire types.

use async_trait::async_trait;
use masking::Secret;

use crate::{
    errors::{ConnectorError, CustomResult},
    types::PaymentRequest,
};

/// Submit-direct-sale capability.
#[async_trait]
pub trait DirectSale: Send + Sync {
    /// Submits a sale for immediate capture. One network round trip per call.
    async fn submit_sale(
        &self,
        request: DirectSaleRequest,
    ) -> CustomResult<DirectSaleResponse, ConnectorError>;
}

#[async_trait]
impl<T> DirectSale for std::sync::Arc<T>
where
    T: DirectSale + ?Sized,
{
    async fn submit_sale(
        &self,
        request: DirectSaleRequest,
    ) -> CustomResult<DirectSaleResponse, ConnectorError> {
        (**self).submit_sale(request).await
    }
}

/// Sale request submitted to the direct-capture processor.
#[derive(Clone, Debug)]
pub struct DirectSaleRequest {
    /// Amount in major units, as a decimal string.
    pub amount: String,
    pub payment_method: SaleCard,
    /// Capture immediately instead of authorize-only.
    pub submit_for_settlement: bool,
}

/// Card payment-method details for a direct sale.
#[derive(Clone, Debug)]
pub struct SaleCard {
    pub number: Secret<String>,
    pub expiration_month: Secret<String>,
    pub expiration_year: Secret<String>,
    pub cvv: Secret<String>,
}

/// In-band outcome reported by the direct-capture processor.
#[derive(Clone, Debug)]
pub struct DirectSaleResponse {
    pub success: bool,
    /// Human-readable decline reason; expected when `success` is false.
    pub message: Option<String>,
}

impl From<&PaymentRequest> for DirectSaleRequest {
    fn from(request: &PaymentRequest) -> Self {
        Self {
            amount: request.amount.clone(),
            payment_method: SaleCard {
                number: request.card_number.clone(),
                expiration_month: request.expiration_month.clone(),
                expiration_year: request.expiration_year.clone(),
                cvv: request.cvv.clone(),
            },
            submit_for_settlement: true,
        }
    }
}
