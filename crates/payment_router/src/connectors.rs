//! Capability seam between the routing core and the external processors.
//!
//! The router depends on behavior only: one collaborator that creates
//! redirect-based payments and one that captures direct sales. Concrete
//! integrations (and test doubles) implement these traits; the routing core
//! never sees an SDK type.

pub mod direct;
pub mod redirect;

pub use self::{
    direct::{DirectSale, DirectSaleRequest, DirectSaleResponse, SaleCard},
    redirect::{
        FundingCard, PaymentLink, RedirectPayment, RedirectPaymentIntent, RedirectPaymentResponse,
    },
};
