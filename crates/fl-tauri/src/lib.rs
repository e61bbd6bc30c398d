//! # fl-tauri
//!
//! Tauri integration layer for FoodLink.
//!
//! This crate provides:
//! - Port adapters backed by Tauri APIs (link opener, selection events)
//! - Runtime wiring for the use-case layer
//!
//! Command handlers live in the root crate's `api` modules so the
//! `generate_handler!` invocation stays in the same crate.

pub mod adapters;
pub mod runtime;

// Re-export commonly used types
pub use runtime::TrackingRuntime;
