pub mod geometry;
pub mod loading_state;

pub use geometry::{Point, Rect, Size};
pub use loading_state::{LoadingEvent, LoadingState};
