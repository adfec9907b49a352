//! Request extractors whose rejections map onto `AppError`.

mod path;
mod payload;
pub use path::{FilterValue, PropertyId};
pub use payload::PropertyBody;
