pub mod error;
pub mod lockfile;
pub mod store;
