//! `gh-encounter` — encounter resolution: how gold moves between agents.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`aggregate`] | Group totals, averages and stable priority orderings           |
//! | [`digging`]   | Priority / collective digging, collaboration, philanthropy, monopoly, competition |
//! | [`conflict`]  | Intimidation, raid, heist, sabotage, combat                     |
//! | [`strategy`]  | `Strategy` enum naming every encounter, `GroupShape`            |
//! | [`config`]    | `EncounterConfig`, `MaxGoldAggregation`                         |
//! | [`engine`]    | `EncounterEngine` dispatcher, `Participants`                    |
//! | [`preview`]   | `PreviewArgs`, `Preview`, `PreviewEntry` (side-effect-free runs) |
//! | [`error`]     | `EncounterError`, `EncounterResult<T>`                          |
//!
//! # Design notes
//!
//! Strategies are plain functions over `&mut [Agent]`.  They keep no state
//! between calls; everything they need arrives as arguments, and the borrow
//! checker guarantees a single writer per agent group for the duration of a
//! call.
//!
//! Every fallible strategy checks its divisors *before* the first mutation,
//! so an `Err` means nothing moved: no agent gold, no resource units.
//!
//! Previews borrow the live agents immutably, run the strategy on clones and
//! hand back `(original, simulated)` pairs in input order.

pub mod aggregate;
pub mod config;
pub mod conflict;
pub mod digging;
pub mod engine;
pub mod error;
pub mod preview;
pub mod strategy;

#[cfg(test)]
mod tests;

pub use config::{EncounterConfig, MaxGoldAggregation};
pub use engine::{EncounterEngine, Participants};
pub use error::{EncounterError, EncounterResult};
pub use preview::{Preview, PreviewArgs, PreviewEntry};
pub use strategy::{GroupShape, Strategy};
