//! Core data models for scouting analysis.

mod composition;
mod dataset;
mod insight;
mod observation;
mod tendency;

pub use composition::*;
pub use dataset::*;
pub use insight::*;
pub use observation::*;
pub use tendency::*;
