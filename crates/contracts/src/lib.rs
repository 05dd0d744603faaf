//! Wire contracts shared between the report client and the report service.
//!
//! Everything here is plain serde data plus the validation rules the client
//! applies before a request leaves the browser.

pub mod dashboards;
pub mod shared;
pub mod system;
