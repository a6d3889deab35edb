//! Request authentication for the Coupang affiliate API.

mod signer;

pub use signer::{CoupangHmacSigner, ALGORITHM, CONTENT_TYPE};
