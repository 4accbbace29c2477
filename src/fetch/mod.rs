//! Ready-made [`StateFetcher`](crate::core::StateFetcher) implementations.

#[cfg(feature = "file")]
mod file;
mod func;

#[cfg(feature = "file")]
pub use file::JsonFileFetcher;
pub use func::FnFetcher;
