//! `gh-core` — foundational types for the `gold_hunters` encounter engine.
//!
//! This crate is a dependency of every other `gh-*` crate.  It has no `gh-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`resource`]    | `Resource` trait, `GoldVein`, `Unlimited`             |
//! | [`rng`]         | `SimRng` (seeded, deterministic)                      |
//! | [`math`]        | Ceiling division and proportional-share helpers       |
//! | [`error`]       | `GhError`, `GhResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod math;
pub mod resource;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GhError, GhResult};
pub use ids::AgentId;
pub use resource::{GoldVein, Resource, Unlimited};
pub use rng::SimRng;
