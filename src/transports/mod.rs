//! Supported transports.

#[cfg(feature = "_http_base")]
pub mod http;
#[cfg(feature = "_http_base")]
pub use self::http::Http;

#[cfg(any(test, feature = "test"))]
pub mod test;
