pub mod client;
pub mod error;
pub mod sync;
pub mod types;
pub mod utils;

pub use error::SyncError;
