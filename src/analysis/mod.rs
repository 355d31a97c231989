//! Scouting analyses.
//!
//! Pure functions over an immutable [`Dataset`](crate::models::Dataset):
//! - **players**: most-played champion per role and how to answer it
//! - **team**: objective control and early/late win tendency
//! - **compositions**: recurring pick sets and their archetypes
//! - **insights**: the three prioritized how-to-win calls
//!
//! No analysis keeps state between calls, so separate datasets can be
//! analysed on separate threads without coordination.

pub mod compositions;
pub mod insights;
pub mod players;
pub mod team;

pub use compositions::{classify, compositions};
pub use insights::{how_to_win, InsightInputs};
pub use players::role_tendencies;
pub use team::team_tendencies;
