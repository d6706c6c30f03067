//! # fshelper
//!
//! A blocking client for the Freshservice v2 REST API.
//!
//! It wraps authenticated HTTP calls, walks paginated listings, and cleans
//! outbound payloads for a handful of resources: assets, tickets, service
//! items, ticket form fields, asset types and locations.
//!
//! ## Architecture
//!
//! - [`credential`] - Username/secret pair used for HTTP Basic auth
//! - [`config`] - Configuration loading from environment variables
//! - [`session`] - [`RequestService`], the scoped HTTP session
//! - [`endpoint`] - Generic CRUD [`Endpoint`] and payload sanitization
//! - [`pagination`] - Page-number pagination (`get_all`)
//! - [`resources`] - Per-resource endpoints
//! - [`models`] - Typed views of assets and service items
//! - [`error`] - The [`FsError`] type
//!
//! ## Configuration
//!
//! - `FreshServiceDomain`: tenant name (`acme`) or base URL
//! - `FreshServiceUsername`: API key or agent login
//! - `FreshServicePassword`: optional, defaults to `X`
//! - `ALLOW_FS_CREATE_REQUESTS`: set to `true` to let creation calls through
//!
//! ## Example
//!
//! ```ignore
//! use fshelper::{Config, RequestService};
//! use fshelper::resources::AssetsEndpoint;
//!
//! fn example() -> Result<(), fshelper::FsError> {
//!     let config = Config::from_env()?;
//!     let mut service = RequestService::from_config(&config);
//!
//!     service.scoped(|svc| {
//!         let assets = AssetsEndpoint::new(svc);
//!         for page in assets.get_all(Some("include=type_fields")) {
//!             for asset in page? {
//!                 println!("{}: {}", asset["display_id"], asset["name"]);
//!             }
//!         }
//!         Ok(())
//!     })
//! }
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod credential;
pub mod endpoint;
pub mod error;
pub mod models;
pub mod pagination;
pub mod resources;
pub mod session;

pub use config::Config;
pub use credential::Credential;
pub use endpoint::Endpoint;
pub use error::FsError;
pub use pagination::Pages;
pub use session::RequestService;
