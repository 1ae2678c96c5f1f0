//! ZoomKeeper — retain browser zoom level across local-file navigation.
//!
//! Browser zoom is a per-origin/per-tab setting that resets on every full
//! top-level navigation. ZoomKeeper keeps the real document inside an iframe
//! and synchronizes its location, title, and scroll offset with the host
//! page's address bar so the zoom level survives while the user browses.
//! This library crate exposes all modules for use by the binary and
//! integration tests.

pub mod app;
pub mod bridge;
pub mod controllers;
pub mod services;
pub mod types;
