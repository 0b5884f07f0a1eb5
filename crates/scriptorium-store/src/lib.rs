//! Scriptorium Storage Layer
//!
//! Owns a corpus directory and the per-article files inside it.
//!
//! # Architecture
//!
//! - One directory per corpus, one file per article artifact
//! - File names are derived from the article id (see `scriptorium_domain::naming`)
//! - Artifacts are replaced atomically (temporary file + rename)
//! - Metadata is updated with an order-preserving read-modify-write
//!
//! # Examples
//!
//! ```no_run
//! use scriptorium_domain::ArtifactKind;
//! use scriptorium_store::ArticleStore;
//!
//! let store = ArticleStore::scan("tmp/articles").unwrap();
//! for article in store.sorted_articles() {
//!     let text = store.read_artifact(&article, ArtifactKind::Cleaned).unwrap();
//!     println!("{}: {} chars", article.id, text.len());
//! }
//! ```

#![warn(missing_docs)]

mod error;
pub mod json;
mod store;

pub use error::StoreError;
pub use store::ArticleStore;
