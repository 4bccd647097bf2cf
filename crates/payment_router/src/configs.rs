//! Settings consumed by the routing core.

use serde::Deserialize;

/// Callback URLs handed to the redirect processor with every payment intent.
///
/// Injected at router construction; the defaults match the development setup.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RedirectUrls {
    /// Where the processor sends the customer after an approved payment.
    pub return_url: String,
    /// Where the processor sends the customer after a cancelled payment.
    pub cancel_url: String,
}

impl Default for RedirectUrls {
    fn default() -> Self {
        Self {
            return_url: String::from("http://localhost:3000/success"),
            cancel_url: String::from("http://localhost:3000/cancel"),
        }
    }
}
