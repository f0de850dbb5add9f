//! `gh-agent` — the agent data model read and mutated by encounters.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`agent`]       | `Agent` (stats, traits, inventory, `dig` / `rob`)         |
//! | [`inventory`]   | `Inventory` (clamp-at-zero quantities), `GOLD` key        |
//! | [`traits`]      | `Trait`, `PowerType`                                      |
//! | [`property`]    | `Property` (free-form per-agent values)                   |
//! | [`builder`]     | `AgentBuilder` (fluent construction)                      |
//! | [`error`]       | `AgentError`, `AgentResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | Inventory and property maps use `FxHashMap`.               |
//! | `serde`   | Derives `Serialize`/`Deserialize` on all public types.     |

pub mod agent;
pub mod builder;
pub mod error;
pub mod inventory;
pub mod property;
pub mod traits;


pub use agent::Agent;
pub use builder::AgentBuilder;
pub use error::{AgentError, AgentResult};
pub use inventory::{Inventory, GOLD};
pub use property::Property;
pub use traits::{PowerType, Trait};

/// String-keyed map used for inventories and property bags.
#[cfg(feature = "fx-hash")]
pub(crate) type KeyMap<V> = rustc_hash::FxHashMap<String, V>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type KeyMap<V> = std::collections::HashMap<String, V>;
