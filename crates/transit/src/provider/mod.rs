//! Transit data stores.

pub mod catalogue;

pub use catalogue::TransportCatalogue;
