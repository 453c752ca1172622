/// Authenticator trait and the anonymous implementation
pub mod interface;
/// Token-holding authenticator for embedding applications
pub mod token;

pub use interface::{Anonymous, Authenticator};
pub use token::StaticToken;
