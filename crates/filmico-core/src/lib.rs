pub mod config;
pub mod controller;
pub mod error;
pub mod fetch;
pub mod query;
pub mod scroll;
pub mod session;
pub mod trailer;

#[cfg(test)]
mod testing;
