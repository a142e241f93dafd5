//! Browser adapters for the `namer-core` ports.

pub mod naming;
pub mod storage;
pub mod clipboard;
pub mod timer;
mod js;

#[cfg(test)]
mod tests;
