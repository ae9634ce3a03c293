// Article fetching: HTTP client and per-source latest-article discovery.

pub mod article;
pub mod client;
