//! Network side of dejure: the reqwest fetcher and the client facade that
//! puts navigation and search behind one type.

mod client;
mod config;

#[cfg(feature = "http")]
pub mod http;

pub use client::{DejureClient, normalize_paragraph_number};
pub use config::{ClientConfig, DEFAULT_USER_AGENT};

#[cfg(feature = "http")]
pub use http::{FetchError, HttpFetcher};
