//! Processor selection rules.

use crate::types::{CardBrand, Currency, PaymentRequest};

/// Where a request goes. Derived per call, never stored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RoutingDecision {
    /// The request fails the eligibility rule; no processor is contacted.
    Reject,
    /// Redirect-based flow.
    RedirectFlow,
    /// Direct-capture flow.
    DirectCapture,
}

/// Applies the eligibility rule, then picks a processor.
///
/// Amex cards outside USD are rejected outright. Eligible requests take the
/// redirect flow when the currency is USD, EUR or AUD, or when the card is
/// Amex; everything else is captured directly. The Amex arm of the selection
/// is redundant once the eligibility rule has run (Amex implies USD at that
/// point) and is kept deliberately so the selection does not depend on check
/// order.
pub fn decide(request: &PaymentRequest) -> RoutingDecision {
    let brand = request.card_brand();
    if request.currency != Currency::USD && brand == CardBrand::Amex {
        return RoutingDecision::Reject;
    }
    if matches!(
        request.currency,
        Currency::USD | Currency::EUR | Currency::AUD
    ) || brand == CardBrand::Amex
    {
        RoutingDecision::RedirectFlow
    } else {
        RoutingDecision::DirectCapture
    }
}
