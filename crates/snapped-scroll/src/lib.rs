//! Scroll-driven layout for the results screen.
//!
//! Each visual quantity is a [`InterpolationChannel`] evaluated from the
//! current scroll offset; see [`ScrollInterpolator::compute_channels`].

pub mod channel;
pub mod interpolator;

pub use channel::{Extrapolate, InterpolationChannel};
pub use interpolator::{Channel, ChannelValues, ScrollInterpolator};
