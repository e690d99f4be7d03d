//! Synchronous client for the TikTok REST proxy.
//!
//! # Overview
//! Builds authenticated HTTP requests against the remote proxy API, sends
//! them over blocking I/O, and decodes JSON replies without precision loss
//! on large integers. Endpoint methods on [`TikTok`] are thin wrappers over
//! the request layer; [`TikTok::request`] exposes that layer directly for
//! endpoints not enumerated here.
//!
//! # Design
//! - [`Session`] is the only mutable state — requests borrow it and read
//!   its fields at build/send time.
//! - Every request carries `Authorization: Bearer <access key>` from
//!   construction and, unless disabled, the session's `username`/`proxy`
//!   as default query parameters at send time.
//! - [`Transport`] performs exactly one round trip per send and never
//!   interprets HTTP status codes.
//! - [`Decoded`] keeps oversized integer literals as exact strings and
//!   absorbs decode failures instead of raising them.

pub mod client;
pub mod decode;
pub mod error;
pub mod http;
pub mod request;
pub mod session;

pub use client::TikTok;
pub use decode::{decode_body, Decoded};
pub use error::ClientError;
pub use http::{Transport, TransportConfig};
pub use request::{Encoding, ParamValue, Request, API_BASE};
pub use session::Session;
