//! Activity sign-up board: lists activities from the backend, signs people up
//! and lets an organizer unregister participants.
//!
//! Everything except the Yew shell in `main.rs` is target independent, so the
//! board logic runs under plain `cargo test`.

#![allow(async_fn_in_trait)] // single-threaded wasm, futures never cross threads

pub mod api;
pub mod board;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod status;

pub use api::{ActivityApi, HttpActivityApi};
pub use board::{ActivityBoard, BoardHost};
pub use config::BoardConfig;
pub use error::{ApiError, ConfigError};
pub use model::{Activity, ActivityCatalog, Reply};
pub use render::{ActivityCard, ListView, ParticipantRow, ParticipantsView};
pub use status::{Severity, StatusBar, StatusMessage};
