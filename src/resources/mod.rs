//! Per-resource endpoints.
//!
//! Each type wraps an [`Endpoint`](crate::endpoint::Endpoint) configured with
//! the resource's URL path and envelope key, and derefs to it for the
//! generic operations (`get`, `create`, `update`, `delete`, `get_all`).
//! Resource-specific calls live on the wrapper.

mod asset_types;
mod assets;
mod locations;
mod service_items;
mod ticket_form_fields;
mod tickets;

pub use asset_types::AssetTypesEndpoint;
pub use assets::AssetsEndpoint;
pub use locations::LocationsEndpoint;
pub use service_items::ServiceItemsEndpoint;
pub use ticket_form_fields::TicketFormFieldsEndpoint;
pub use tickets::TicketsEndpoint;
