//! Session model: redacted access token and the staff session record.

pub mod record;
pub mod token;

pub use record::*;
pub use token::*;
