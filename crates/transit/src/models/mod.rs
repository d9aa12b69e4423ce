//! Transit data models, types, and traits.

pub mod entities;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use entities::{Bus, Stop};
pub use traits::TransitProvider;
pub use types::{BusStat, Result, RouteKind, StopStat, TransitError};
