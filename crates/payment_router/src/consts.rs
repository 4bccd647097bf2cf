//! Fixed labels and messages surfaced by the routing core.

/// Item label attached to every redirect payment intent.
pub const ORDER_ITEM_NAME: &str = "Your Order";

/// Confirmation message returned for a settled direct sale.
pub const SALE_SUCCESS_MESSAGE: &str = "Payment successful!";

/// Generic failure message; every out-of-band processor error collapses to
/// this so processor internals never leak to callers.
pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred.";

/// Policy message for Amex cards used outside USD.
pub const AMEX_USD_ONLY_MESSAGE: &str = "AMEX cards are only supported for USD transactions";
