//! Scriptorium Domain Layer
//!
//! This crate contains the core domain model for Scriptorium, a small research
//! corpus builder. It defines the fundamental concepts, value objects, and
//! trait interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Article**: One corpus item, identified by a dense positive id
//! - **Artifact**: A derived text output of a processing stage, stored per article
//! - **Metadata**: The harvested record (author, title, topics, date), later
//!   enriched with part-of-speech frequencies
//! - **Morphological token**: A word with its lemma and two independent tag sets
//! - **Stages**: Lifecycle of an article (harvested → validated → scanned →
//!   text processed → POS counted)
//!
//! ## Architecture
//!
//! - Pure data and pure functions only (no I/O)
//! - File naming rules live here so the validator and the store agree on them
//! - Trait definitions for every external collaborator (analyzers,
//!   visualizer, harvesting sources, progress reporting)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod article;
pub mod meta;
pub mod naming;
pub mod stage;
pub mod token;
pub mod traits;

// Re-exports for convenience
pub use article::{Article, ArticleId, ArtifactKind, ArtifactSet};
pub use meta::{ArticleMeta, PosFrequencies};
pub use stage::PipelineStage;
pub use token::{Analysis, MorphologicalToken};
