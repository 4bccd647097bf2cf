//! Payment dispatch: exactly one processor is awaited per request and its
//! response is normalized into a [`PaymentResult`].

use error_stack::report;
use tracing::instrument;

use super::routing::{self, RoutingDecision};
use crate::{
    configs::RedirectUrls,
    connectors::{DirectSale, DirectSaleRequest, RedirectPayment, RedirectPaymentIntent},
    consts,
    errors::{CustomResult, PaymentError},
    types::{PaymentRequest, PaymentResult, PaymentSuccess},
};

/// Routes one payment request per call.
///
/// Holds no per-request state, so a single instance can serve concurrent
/// callers; the collaborators manage their own concurrency.
#[derive(Debug)]
pub struct PaymentRouter<A, B> {
    redirect_processor: A,
    direct_processor: B,
    redirect_urls: RedirectUrls,
}

impl<A, B> PaymentRouter<A, B>
where
    A: RedirectPayment,
    B: DirectSale,
{
    pub fn new(redirect_processor: A, direct_processor: B, redirect_urls: RedirectUrls) -> Self {
        Self {
            redirect_processor,
            direct_processor,
            redirect_urls,
        }
    }

    /// Routes the request to exactly one processor and returns a normalized
    /// result. Never returns an error: policy rejections, in-band declines
    /// and collaborator failures all come back as
    /// [`PaymentResult::Failure`].
    #[instrument(skip_all, fields(currency = %request.currency, brand = %request.card_brand()))]
    pub async fn route(&self, request: PaymentRequest) -> PaymentResult {
        let outcome = match routing::decide(&request) {
            RoutingDecision::Reject => Err(report!(PaymentError::RejectedByPolicy)),
            RoutingDecision::RedirectFlow => self.create_redirect_payment(&request).await,
            RoutingDecision::DirectCapture => self.submit_direct_sale(&request).await,
        };
        match outcome {
            Ok(success) => PaymentResult::Success(success),
            Err(report) => PaymentResult::Failure {
                error: report.current_context().to_string(),
            },
        }
    }

    #[instrument(skip_all)]
    async fn create_redirect_payment(
        &self,
        request: &PaymentRequest,
    ) -> CustomResult<PaymentSuccess, PaymentError> {
        let intent = RedirectPaymentIntent::from((request, &self.redirect_urls));
        let response = match self.redirect_processor.create_payment(intent).await {
            Ok(response) => response,
            Err(error) => {
                tracing::error!(?error, "redirect processor call failed");
                return Err(error.change_context(PaymentError::ProcessorUnavailable));
            }
        };
        let link = response.links.first().ok_or_else(|| {
            tracing::error!("redirect processor response carried no navigation links");
            report!(PaymentError::ProcessorUnavailable)
        })?;
        Ok(PaymentSuccess::Redirect {
            redirect_url: link.href.clone(),
        })
    }

    #[instrument(skip_all)]
    async fn submit_direct_sale(
        &self,
        request: &PaymentRequest,
    ) -> CustomResult<PaymentSuccess, PaymentError> {
        let sale = DirectSaleRequest::from(request);
        let response = match self.direct_processor.submit_sale(sale).await {
            Ok(response) => response,
            Err(error) => {
                tracing::error!(?error, "direct-capture processor call failed");
                return Err(error.change_context(PaymentError::ProcessorUnavailable));
            }
        };
        if response.success {
            Ok(PaymentSuccess::Settled {
                message: consts::SALE_SUCCESS_MESSAGE.to_string(),
            })
        } else {
            match response.message {
                Some(message) => Err(report!(PaymentError::ProcessorDeclined { message })),
                None => {
                    tracing::error!("direct-capture processor declined without a message");
                    Err(report!(PaymentError::ProcessorUnavailable))
                }
            }
        }
    }
}
