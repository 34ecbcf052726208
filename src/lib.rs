pub mod city;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod output;
pub mod pagination;
pub mod prompt;
pub mod record;
pub mod session;
pub mod stats;

#[cfg(test)]
mod testing;
