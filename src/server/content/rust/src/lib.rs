/* src/server/content/rust/src/lib.rs */

mod client;

#[cfg(test)]
mod tests;

pub use client::{DEFAULT_TIMEOUT, HttpContentSource};
