//! Property record and the create/update payload.

mod payload;
mod property;

pub use payload::PropertyPayload;
pub use property::Property;
