//! Typed views of Freshservice resources.
//!
//! Endpoints return raw `serde_json::Value`s. The structs here are for
//! callers that prefer typed access; every field the tenant may omit is an
//! `Option`, and unknown fields are ignored.

mod asset;
mod common;
mod service_item;

pub use asset::*;
pub use common::*;
pub use service_item::*;
