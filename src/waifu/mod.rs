//! waifu.im integration module
//!
//! Provides the client behind the avatar image proxy.

pub mod client;
pub mod models;

pub use client::WaifuClient;
pub use models::*;
