/// Network adapters for registry access
mod crates_io_client;

pub use crates_io_client::CratesIoClient;
