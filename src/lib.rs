// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # literal-vocab
//!
//! Converts delimited literal values in an RDF graph into a flat, controlled
//! vocabulary.
//!
//! ## Architecture
//!
//! - **Builder** (`vocab`): splits literals, mints terms, emits annotation and
//!   vocabulary graphs
//! - **Slugs** (`slug`): the URI-safe token normalization the builder relies on
//! - **RDF I/O** (`rdf`): oxigraph-backed parsing and serialization
//! - **Run** (`run`): load, build, write for one invocation
//!
//! ## Library usage
//!
//! ```no_run
//! use literal_vocab::rdf;
//! use literal_vocab::vocab::{VocabularyBuilder, VocabularyTargets};
//!
//! let input = rdf::load_graph("items.ttl".as_ref(), rdf::DEFAULT_FORMAT, None).unwrap();
//! let targets = VocabularyTargets::parse(
//!     "http://example.org/hasTags",
//!     "http://example.org/category",
//!     "http://example.org/Category",
//!     "http://example.org/cat/",
//! )
//! .unwrap();
//! let vocab = VocabularyBuilder::new(targets).build(&input).unwrap();
//! println!("{} terms", vocab.stats.terms);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod namespace;
pub mod rdf;
pub mod run;
pub mod slug;
pub mod vocab;
