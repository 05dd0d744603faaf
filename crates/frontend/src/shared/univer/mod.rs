//! Embedded spreadsheet viewer (Univer) integration.

pub mod bridge;
pub mod slot;

pub use bridge::UniverWidget;
pub use slot::{MountTicket, WidgetInstance, WidgetSlot};
