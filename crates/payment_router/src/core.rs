//! Core orchestration: routing decision and payment dispatch.

pub mod payments;
pub mod routing;
