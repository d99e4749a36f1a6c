//! Application layer - the two passes and the codec they share.
//!
//! Both passes run against the port traits so they can be exercised with
//! in-memory doubles.

pub mod codec;
pub mod ports;
pub mod revoke_service;
pub mod scan_service;

#[cfg(test)]
pub mod testing;

pub use ports::{FileDirectory, Notify, TabularStore};
pub use revoke_service::RevokeService;
pub use scan_service::ScanService;
