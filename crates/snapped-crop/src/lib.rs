pub mod error;
pub mod session;
pub mod transform;

pub use error::{CropError, Result};
pub use session::CropSession;
pub use transform::{begin_drag, clamp_to_viewport, scale_factors, to_source_space, update_drag};
