#![warn(missing_debug_implementations)]

//! Routing core for card payments.
//!
//! A [`PaymentRouter`] receives a validated [`PaymentRequest`], applies the
//! brand/currency eligibility rules, dispatches to exactly one of two
//! processor capabilities and normalizes whatever comes back into a single
//! [`PaymentResult`] shape.
//!
//! The two processors stay behind traits ([`RedirectPayment`] and
//! [`DirectSale`]); real integrations, HTTP transport and credential loading
//! live outside this crate.

pub mod configs;
pub mod connectors;
pub mod consts;
pub mod core;
pub mod errors;
pub mod types;

pub use self::{
    configs::RedirectUrls,
    connectors::{DirectSale, RedirectPayment},
    core::payments::PaymentRouter,
    types::{PaymentRequest, PaymentResult},
};
