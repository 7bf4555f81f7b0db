//! Personal portfolio site: a single scrolling page plus a resume viewer.
//!
//! `content` and `view` are platform-free and always compiled. The `server`
//! feature adds the axum site; the `hydrate` feature (wasm32) binds the view
//! controllers to the live DOM.

pub mod content;
pub mod view;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod errors;
#[cfg(feature = "server")]
pub mod render;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod state;

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
pub mod browser;
