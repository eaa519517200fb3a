//! # Movie Collection API
//!
//! Everything that talks to the remote `/movies` resource.
//!
//! - [`service`]: the `MovieService` trait and `ApiError`
//! - [`client`]: the reqwest-backed implementation
//! - [`effects`]: turns reducer `Effect`s into service calls and result `Action`s
//! - [`types`]: wire types (`Movie`, `MovieDraft`, `MovieId`)

pub mod client;
pub mod effects;
pub mod service;
pub mod types;

pub use client::HttpMovieService;
pub use service::{ApiError, MovieService};
pub use types::{Movie, MovieDraft, MovieId};
