//! Data models for bookfees
//!
//! Fee amounts and the checkout records fees are computed from.

pub mod checkout;
pub mod money;

pub use checkout::{CheckoutColumns, CheckoutRecord, DateFormat};
pub use money::Money;
