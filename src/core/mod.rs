//! Core modules: config, signing, transport

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod signer;
