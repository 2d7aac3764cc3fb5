//! Server crate for the ReelDigest summarisation service.
//!
//! This crate contains the HTTP surface and the adapter that plugs the
//! generation-runtime client into the summarizer's model seam.

pub mod adapter;
pub mod http;

pub use adapter::GrpcGenerator;
pub use http::{AppState, create_router};
