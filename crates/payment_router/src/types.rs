//! Domain types flowing through the router.

use masking::{PeekInterface, Secret};
use serde::{Deserialize, Serialize};

/// The currency a payment is denominated in.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Currency {
    AED,
    AUD,
    BRL,
    CAD,
    CHF,
    CNY,
    EUR,
    GBP,
    HKD,
    IDR,
    INR,
    JPY,
    KRW,
    MXN,
    MYR,
    NZD,
    PHP,
    SEK,
    SGD,
    THB,
    USD,
    VND,
}

/// Card brand family derived from the leading digit of the card number.
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum CardBrand {
    Amex,
    Other,
}

impl CardBrand {
    /// A card number starting with `3` is classified as Amex; every other
    /// leading digit falls into a different brand family.
    pub fn from_card_number(card_number: &Secret<String>) -> Self {
        if card_number.peek().starts_with('3') {
            Self::Amex
        } else {
            Self::Other
        }
    }
}

/// A payment request already validated at the API boundary. The router does
/// no further schema validation.
///
/// Card data is PII and stays behind [`Secret`] so accidental `Debug` output
/// cannot leak it.
#[derive(Clone, Debug)]
pub struct PaymentRequest {
    /// Amount in major units, as a decimal string.
    pub amount: String,
    pub currency: Currency,
    pub card_number: Secret<String>,
    pub card_holder_name: Secret<String>,
    pub customer_name: String,
    pub expiration_month: Secret<String>,
    pub expiration_year: Secret<String>,
    pub cvv: Secret<String>,
}

impl PaymentRequest {
    pub fn card_brand(&self) -> CardBrand {
        CardBrand::from_card_number(&self.card_number)
    }
}

/// Normalized outcome of a routed payment. Exactly one variant is populated;
/// the router never returns partial states.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentResult {
    Success(PaymentSuccess),
    Failure { error: String },
}

/// The two shapes a successful payment can take, depending on which processor
/// handled it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentSuccess {
    /// The redirect processor accepted the intent; the caller must send the
    /// customer to this URL to complete the payment.
    Redirect { redirect_url: String },
    /// The direct-capture processor settled the sale in-band.
    Settled { message: String },
}

impl PaymentResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
