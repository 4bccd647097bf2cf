//! Redirect-based processor capability and its wire types.

use async_trait::async_trait;
use masking::Secret;

use crate::{
    configs::RedirectUrls,
    consts,
    errors::{ConnectorError, CustomResult},
    types::{CardBrand, Currency, PaymentRequest},
};

/// Create-redirect-payment capability.
///
/// One network round trip per call; no retry or timeout handling happens at
/// this seam.
#[async_trait]
pub trait RedirectPayment: Send + Sync {
    /// Submits a payment intent. A well-formed response carries at least one
    /// navigation link for the customer to follow.
    async fn create_payment(
        &self,
        intent: RedirectPaymentIntent,
    ) -> CustomResult<RedirectPaymentResponse, ConnectorError>;
}

#[async_trait]
impl<T> RedirectPayment for std::sync::Arc<T>
where
    T: RedirectPayment + ?Sized,
{
    async fn create_payment(
        &self,
        intent: RedirectPaymentIntent,
    ) -> CustomResult<RedirectPaymentResponse, ConnectorError> {
        (**self).create_payment(intent).await
    }
}

/// Payment intent submitted to the redirect processor.
#[derive(Clone, Debug)]
pub struct RedirectPaymentIntent {
    pub item_name: &'static str,
    /// Amount in major units, as a decimal string.
    pub amount: String,
    pub currency: Currency,
    pub card: FundingCard,
    pub redirect_urls: RedirectUrls,
}

/// Card funding instrument attached to a redirect payment intent.
#[derive(Clone, Debug)]
pub struct FundingCard {
    /// Brand marker, set only for Amex cards.
    pub brand: Option<CardBrand>,
    pub number: Secret<String>,
    pub expiry_month: Secret<String>,
    pub expiry_year: Secret<String>,
    pub cvv: Secret<String>,
}

/// Navigation link returned by the redirect processor.
#[derive(Clone, Debug)]
pub struct PaymentLink {
    pub href: String,
    pub rel: Option<String>,
}

#[derive(Clone, Debug)]
pub struct RedirectPaymentResponse {
    pub links: Vec<PaymentLink>,
}

impl From<(&PaymentRequest, &RedirectUrls)> for RedirectPaymentIntent {
    fn from((request, redirect_urls): (&PaymentRequest, &RedirectUrls)) -> Self {
        let brand = match request.card_brand() {
            CardBrand::Amex => Some(CardBrand::Amex),
            CardBrand::Other => None,
        };
        Self {
            item_name: consts::ORDER_ITEM_NAME,
            amount: request.amount.clone(),
            currency: request.currency,
            card: FundingCard {
                brand,
                number: request.card_number.clone(),
                expiry_month: request.expiration_month.clone(),
                expiry_year: request.expiration_year.clone(),
                cvv: request.cvv.clone(),
            },
            redirect_urls: redirect_urls.clone(),
        }
    }
}
