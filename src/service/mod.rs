//! PropertyService: listing operations over a `PropertyStore`.

mod property;
pub use property::{parse_id, PropertyService};
