/// Transport trait and raw response shape
pub mod interface;
/// reqwest-backed transport implementation
pub mod http;

pub use http::HttpTransport;
pub use interface::{RawResponse, Transport};
