pub mod config;
pub mod forecast;
pub mod ingest;
pub mod models;
pub mod sample;
pub mod server;
#[cfg(test)]
pub mod test_helpers;
pub mod weather;
