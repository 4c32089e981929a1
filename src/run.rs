//! One end-to-end invocation: parse the input file, build the vocabulary,
//! write both outputs.

use std::path::PathBuf;

use oxigraph::io::RdfFormat;

use crate::config::VocabConfig;
use crate::error::VocabResult;
use crate::rdf::{self, DEFAULT_FORMAT};
use crate::vocab::{BuildStats, VocabularyBuilder, VocabularyTargets};

/// Everything a run needs, already resolved from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRequest {
    /// Input graph file.
    pub input: PathBuf,
    /// Destination of the annotations graph.
    pub output: PathBuf,
    /// Destination of the vocabulary graph.
    pub output_schema: PathBuf,
    pub source_property: String,
    pub target_property: String,
    pub target_class: String,
    pub target_namespace: String,
    /// Shared by the input and both outputs.
    pub format: RdfFormat,
    /// Accepted for compatibility; has no effect.
    pub remove: bool,
    /// Accepted for compatibility; has no effect.
    pub mapping: Option<PathBuf>,
    pub config: VocabConfig,
}

impl RunRequest {
    /// A request with the default format and config.
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        output_schema: impl Into<PathBuf>,
        source_property: impl Into<String>,
        target_property: impl Into<String>,
        target_class: impl Into<String>,
        target_namespace: impl Into<String>,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            output_schema: output_schema.into(),
            source_property: source_property.into(),
            target_property: target_property.into(),
            target_class: target_class.into(),
            target_namespace: target_namespace.into(),
            format: DEFAULT_FORMAT,
            remove: false,
            mapping: None,
            config: VocabConfig::default(),
        }
    }
}

/// Execute `request`.
///
/// Arguments are validated before the input is read. The annotations file is
/// written before the vocabulary file; if the second write fails the first
/// stays on disk.
pub fn run(request: &RunRequest) -> VocabResult<BuildStats> {
    let targets = VocabularyTargets::parse(
        &request.source_property,
        &request.target_property,
        &request.target_class,
        &request.target_namespace,
    )?;
    let builder = VocabularyBuilder::new(targets).with_options(request.config.build_options())?;

    if request.remove {
        tracing::warn!("--remove has no effect: source triples are never copied to the output");
    }
    if let Some(mapping) = &request.mapping {
        tracing::warn!(path = %mapping.display(), "--mapping is not implemented; ignoring");
    }

    let input = rdf::load_graph(
        &request.input,
        request.format,
        request.config.base_iri.as_deref(),
    )?;

    let vocabulary = builder.build(&input)?;

    let prefixes = rdf::standard_prefixes(Some(builder.targets().namespace.as_str()));
    rdf::write_graph(&request.output, &vocabulary.annotations, request.format, &prefixes)?;
    rdf::write_graph(&request.output_schema, &vocabulary.schema, request.format, &prefixes)?;
    tracing::debug!("serialized output files");

    Ok(vocabulary.stats)
}
