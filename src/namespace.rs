//! Target namespace and term minting.

use oxigraph::model::NamedNode;

use crate::error::{BuildError, BuildResult};

/// SKOS core namespace.
pub const SKOS_NS: &str = "http://www.w3.org/2004/02/skos/core#";

/// RDF syntax namespace.
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// An IRI prefix under which new vocabulary terms are minted.
///
/// Minting is pure string concatenation, so the same slug always yields the
/// same term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetNamespace {
    iri: String,
}

impl TargetNamespace {
    /// Validate `iri` as an absolute IRI and wrap it.
    pub fn new(iri: impl Into<String>) -> BuildResult<Self> {
        let iri = iri.into();
        NamedNode::new(iri.as_str()).map_err(|e| BuildError::InvalidIri {
            role: "target namespace",
            iri: iri.clone(),
            message: e.to_string(),
        })?;
        Ok(Self { iri })
    }

    /// The namespace IRI as given.
    pub fn as_str(&self) -> &str {
        &self.iri
    }

    /// Mint the term `namespace + slug`.
    ///
    /// An empty slug mints the namespace IRI itself.
    pub fn mint(&self, slug: &str) -> BuildResult<NamedNode> {
        let iri = format!("{}{slug}", self.iri);
        NamedNode::new(iri.as_str()).map_err(|e| BuildError::InvalidTerm {
            iri,
            message: e.to_string(),
        })
    }
}

/// Parse an IRI argument (property or class) into a [`NamedNode`].
pub fn named_node(role: &'static str, iri: &str) -> BuildResult<NamedNode> {
    NamedNode::new(iri).map_err(|e| BuildError::InvalidIri {
        role,
        iri: iri.to_string(),
        message: e.to_string(),
    })
}
