//! Vocabulary builder: literal values to a flat, labelled vocabulary.
//!
//! Every triple whose predicate is the source property has its object split on
//! a delimiter. Each segment is trimmed and lower-cased into a token, the token
//! is slugified, and the slug is appended to the target namespace to mint a
//! term. The builder emits two graphs:
//!
//! - **annotations**: `(subject, target_property, term)` for every segment;
//! - **schema**: `(term, rdf:type, target_class)` and
//!   `(term, skos:prefLabel, "token"@lang)` for every distinct term.
//!
//! Both outputs are [`Graph`]s, so repeated tokens collapse onto a single
//! triple without any bookkeeping. Distinct tokens that slugify identically
//! also collapse onto one term; that is reported but not disambiguated.

use std::collections::{BTreeMap, BTreeSet};

use oxigraph::model::vocab::rdf;
use oxigraph::model::{Graph, Literal, NamedNode, NamedNodeRef, TermRef, TripleRef};

use crate::error::{BuildError, BuildResult};
use crate::namespace::{TargetNamespace, named_node};
use crate::slug::{AsciiSlugifier, Slugifier};

/// `skos:prefLabel`.
pub const SKOS_PREF_LABEL: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#prefLabel");

/// Delimiter used when none is configured.
pub const DEFAULT_DELIMITER: &str = "/";

/// Label language used when none is configured.
pub const DEFAULT_LABEL_LANGUAGE: &str = "fi";

/// What to read and where to write.
#[derive(Debug, Clone)]
pub struct VocabularyTargets {
    /// Predicate whose literal objects are split into tokens.
    pub source_property: NamedNode,
    /// Predicate linking original subjects to minted terms.
    pub target_property: NamedNode,
    /// Class every minted term is declared an instance of.
    pub target_class: NamedNode,
    /// Prefix for minted terms.
    pub namespace: TargetNamespace,
}

impl VocabularyTargets {
    /// Validate the four IRI arguments.
    pub fn parse(
        source_property: &str,
        target_property: &str,
        target_class: &str,
        namespace: &str,
    ) -> BuildResult<Self> {
        Ok(Self {
            source_property: named_node("source property", source_property)?,
            target_property: named_node("target property", target_property)?,
            target_class: named_node("target class", target_class)?,
            namespace: TargetNamespace::new(namespace)?,
        })
    }
}

/// Tunables for token extraction and labelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Literal separator between tokens.
    pub delimiter: String,
    /// Language tag put on `skos:prefLabel` literals.
    pub label_language: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.into(),
            label_language: DEFAULT_LABEL_LANGUAGE.into(),
        }
    }
}

/// Counters describing one build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Input triples whose predicate matched the source property.
    pub matched_triples: usize,
    /// Segments produced by splitting, before any deduplication.
    pub segments: usize,
    /// Distinct minted terms.
    pub terms: usize,
    /// Distinct tokens that landed on a term already minted from another token.
    pub collisions: usize,
}

/// The two output graphs of a build.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// `(subject, target_property, term)` links.
    pub annotations: Graph,
    /// Class membership and labels for every minted term.
    pub schema: Graph,
    /// Counters for this build.
    pub stats: BuildStats,
}

/// Builds a [`Vocabulary`] from an input graph.
///
/// Stateless between calls: every [`build`](Self::build) starts from empty
/// output graphs.
#[derive(Debug, Clone)]
pub struct VocabularyBuilder<S = AsciiSlugifier> {
    targets: VocabularyTargets,
    options: BuildOptions,
    slugifier: S,
}

impl VocabularyBuilder<AsciiSlugifier> {
    /// Create a builder with default options and the default slugifier.
    pub fn new(targets: VocabularyTargets) -> Self {
        Self {
            targets,
            options: BuildOptions::default(),
            slugifier: AsciiSlugifier,
        }
    }
}

impl<S: Slugifier> VocabularyBuilder<S> {
    /// Replace the build options.
    ///
    /// Fails on an empty delimiter or a malformed language tag.
    pub fn with_options(mut self, options: BuildOptions) -> BuildResult<Self> {
        if options.delimiter.is_empty() {
            return Err(BuildError::EmptyDelimiter);
        }
        label_literal("", &options.label_language)?;
        self.options = options;
        Ok(self)
    }

    /// Swap in another slugification strategy.
    pub fn with_slugifier<T: Slugifier>(self, slugifier: T) -> VocabularyBuilder<T> {
        VocabularyBuilder {
            targets: self.targets,
            options: self.options,
            slugifier,
        }
    }

    pub fn targets(&self) -> &VocabularyTargets {
        &self.targets
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Run the transformation over `input`.
    ///
    /// The first object that cannot be read as text aborts the whole build;
    /// no partial vocabulary is returned.
    pub fn build(&self, input: &Graph) -> BuildResult<Vocabulary> {
        let _span = tracing::debug_span!(
            "build_vocabulary",
            source = %self.targets.source_property,
            namespace = self.targets.namespace.as_str(),
        )
        .entered();
        tracing::debug!(input_triples = input.len(), "starting vocabulary creation");

        let mut annotations = Graph::new();
        let mut stats = BuildStats::default();
        // slug -> (term, every token that slugified to it). The smallest token
        // is the label; BTreeMap keeps the schema emission order stable.
        let mut terms: BTreeMap<String, (NamedNode, BTreeSet<String>)> = BTreeMap::new();

        for triple in input.triples_for_predicate(self.targets.source_property.as_ref()) {
            stats.matched_triples += 1;
            let value = object_text(triple)?;

            for token in tokenize(value, &self.options.delimiter) {
                stats.segments += 1;
                let slug = self.slugifier.slugify(&token);

                let term = match terms.get_mut(&slug) {
                    Some((term, tokens)) => {
                        if !tokens.contains(&token) {
                            stats.collisions += 1;
                            tracing::warn!(
                                slug = %slug,
                                token = %token,
                                existing = ?tokens,
                                "distinct tokens share one slug; collapsing onto one term"
                            );
                            tokens.insert(token);
                        }
                        term.clone()
                    }
                    None => {
                        let term = self.targets.namespace.mint(&slug)?;
                        terms.insert(slug, (term.clone(), BTreeSet::from([token])));
                        term
                    }
                };

                annotations.insert(TripleRef::new(
                    triple.subject,
                    self.targets.target_property.as_ref(),
                    term.as_ref(),
                ));
            }
        }

        let mut schema = Graph::new();
        for (term, tokens) in terms.values() {
            let label = tokens.first().map(String::as_str).unwrap_or_default();
            let label = label_literal(label, &self.options.label_language)?;
            schema.insert(TripleRef::new(
                term.as_ref(),
                rdf::TYPE,
                self.targets.target_class.as_ref(),
            ));
            schema.insert(TripleRef::new(term.as_ref(), SKOS_PREF_LABEL, label.as_ref()));
        }
        stats.terms = terms.len();

        tracing::debug!(
            matched = stats.matched_triples,
            segments = stats.segments,
            terms = stats.terms,
            collisions = stats.collisions,
            annotations = annotations.len(),
            "vocabulary creation finished"
        );

        Ok(Vocabulary {
            annotations,
            schema,
            stats,
        })
    }
}

/// Build with default options and the default slugifier.
pub fn build(input: &Graph, targets: &VocabularyTargets) -> BuildResult<Vocabulary> {
    VocabularyBuilder::new(targets.clone()).build(input)
}

/// Split `value` on `delimiter` and normalize each segment into a token
/// (trimmed, lower-cased). A value without the delimiter yields itself.
pub fn tokenize<'a>(value: &'a str, delimiter: &'a str) -> impl Iterator<Item = String> + 'a {
    value.split(delimiter).map(|segment| segment.trim().to_lowercase())
}

/// Textual form of a triple's object: a literal's lexical value or an IRI.
fn object_text<'a>(triple: TripleRef<'a>) -> BuildResult<&'a str> {
    match triple.object {
        TermRef::Literal(literal) => Ok(literal.value()),
        TermRef::NamedNode(node) => Ok(node.as_str()),
        other => Err(BuildError::UntextualObject {
            subject: triple.subject.to_string(),
            predicate: triple.predicate.as_str().to_string(),
            object: other.to_string(),
        }),
    }
}

fn label_literal(token: &str, language: &str) -> BuildResult<Literal> {
    Literal::new_language_tagged_literal(token, language).map_err(|_| {
        BuildError::InvalidLanguage {
            language: language.to_string(),
        }
    })
}
