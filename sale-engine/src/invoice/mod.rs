//! Invoice validation
//!
//! The trust boundary between the client and persistence: totals are
//! re-derived server-side and compared against the submitted figures
//! under a two-tier tolerance policy before a sale is accepted.

mod validator;

pub use validator::*;
