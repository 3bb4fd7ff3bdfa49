//! HTTP request handlers.

pub(crate) mod analytics;
pub(crate) mod config;
pub(crate) mod navigation;
pub(crate) mod redirect;
