//! Mock infrastructure for testing external services
//!
//! This module provides mock servers and test helpers for external dependencies:
//! - Gemini API (`generateContent`)
//! - waifu.im (avatar image search)
//!
//! All mocks are designed to be reusable across different test files and support
//! various response scenarios (success, errors, edge cases).

#![allow(dead_code, unused_imports)]

pub mod gemini;
pub mod waifu;

pub use gemini::*;
pub use waifu::*;
