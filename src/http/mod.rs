//! HTTP/1.0 protocol implementation.
//!
//! Just enough HTTP to serve files: one GET per connection, no keep-alive.
//!
//! # Architecture
//!
//! - **`connection`**: Drives one connection through read, respond, write, close
//! - **`parser`**: Reads the request line and discards header lines
//! - **`request`**: The parsed request (method and stripped target)
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Request line + headers
//!        └──────┬──────┘
//!               │ GET <target>          (anything else: drop, no response)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Resolve file, build 200/404
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               ▼
//!            Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use docroot::files::StaticFiles;
//! use docroot::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!     let files = Arc::new(StaticFiles::new("./www"));
//!
//!     loop {
//!         let (socket, peer) = listener.accept().await?;
//!         let conn = Connection::new(socket, peer, files.clone());
//!         tokio::spawn(async move {
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
