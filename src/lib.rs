//! Docroot - minimal static file server
//!
//! Core library for the HTTP/1.0 request handling and connection dispatch.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
