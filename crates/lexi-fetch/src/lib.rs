mod client;
pub mod html;

pub use client::HttpFetcher;
pub use html::parse_document;
