//! # Monster Forge
//!
//! Transforms scraped 5e SRD monster stat blocks into normalized,
//! strongly typed entities.
//!
//! Most fields are parsed deterministically with small string scanners.
//! Attack rolls, whose prose defies cheap parsing, are extracted by a
//! local LLM and guarded by per-element schema validation: elements the
//! model gets wrong are dropped, never repaired, and a failed extraction
//! degrades one field of one record instead of failing the run.
//!
//! ## Core Concepts
//!
//! - **[`RawMonster`]** — a record exactly as scraped, every value a
//!   free-form string. [`filter_valid`] keeps the structurally sound ones.
//! - **[`Monster`]** — the normalized entity, serialized with the
//!   camelCase wire keys the downstream consumer loads.
//! - **[`Extractor`]** — few-shot extraction engine over a generation
//!   backend; returns [`Extraction`], never invents data.
//! - **[`transform_all`]** — batch driver: one generation in flight at a
//!   time, input order preserved, first transport error aborts the batch.
//!
//! ## Quick Start
//!
//! ```no_run
//! use monster_forge::{driver, fetch, output, raw, Extractor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = reqwest::Client::new();
//!     let url = "https://example.com/srd_5e_monsters.json";
//!     let records = fetch::fetch_raw_monsters(&client, url).await?;
//!     let valid = raw::filter_valid(records);
//!
//!     let extractor = Extractor::builder("http://localhost:11434")
//!         .model("gemma3:latest")
//!         .build();
//!     let monsters = driver::transform_all(&extractor, valid).await?;
//!     output::write_monsters("user_data/monsters.json", &monsters)?;
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod config;
pub mod driver;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod monster;
pub mod output;
pub mod parsing;
pub mod prompt;
pub mod raw;
pub mod transform;

pub use backend::{Backend, MockBackend, OllamaBackend};
pub use config::AppConfig;
pub use driver::{transform_all, transform_all_with_progress, BatchProgress};
pub use error::{ForgeError, Result};
pub use extract::{Example, Extraction, Extractor, ExtractorBuilder};
pub use monster::{Actions, AttackRoll, AttackType, Challenge, DamageRoll, DamageType, Monster};
pub use raw::{filter_valid, is_raw_monster, RawMonster};
pub use transform::transform_monster;
