//! literal-vocab CLI: build a flat RDF vocabulary from literal values.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use miette::Result;

use literal_vocab::config::VocabConfig;
use literal_vocab::error::{ArgsError, ArgsResult, VocabResult};
use literal_vocab::logging;
use literal_vocab::rdf;
use literal_vocab::run::{RunRequest, run};

#[derive(Parser)]
#[command(
    name = "literal-vocab",
    version,
    about = "Create flat ontology based on input file and property"
)]
struct Cli {
    /// Input RDF data file.
    input: PathBuf,

    /// Output RDF data file.
    output: PathBuf,

    /// Output RDF schema file.
    output_schema: PathBuf,

    /// Property used in input file.
    #[arg(value_name = "SOURCE_PROPERTY")]
    source_property: String,

    /// Target property for output file.
    #[arg(value_name = "TARGET_PROPERTY")]
    target_property: String,

    /// Target class for target property values.
    #[arg(value_name = "TARGET_CLASS")]
    target_class: String,

    /// Namespace for target values.
    #[arg(value_name = "TARGET_NAMESPACE")]
    target_namespace: String,

    /// Remove original property triples (no effect: they are never copied).
    #[arg(long)]
    remove: bool,

    /// Format of RDF files.
    #[arg(long, default_value = "turtle")]
    format: String,

    /// File containing value mappings (not implemented).
    #[arg(long, value_name = "FILE")]
    mapping: Option<PathBuf>,

    /// TOML config file (delimiter, label language, log file, base IRI).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Replace every `@file` argument with the lines of that file.
fn expand_args(args: impl Iterator<Item = OsString>) -> ArgsResult<Vec<OsString>> {
    argfile::expand_args_from(args, argfile::parse_fromfile, argfile::PREFIX)
        .map_err(|source| ArgsError::ArgFile { source })
}

impl Cli {
    fn into_request(self, config: VocabConfig) -> VocabResult<RunRequest> {
        let format = rdf::parse_format(&self.format)?;

        let mut request = RunRequest::new(
            self.input,
            self.output,
            self.output_schema,
            self.source_property,
            self.target_property,
            self.target_class,
            self.target_namespace,
        );
        request.format = format;
        request.remove = self.remove;
        request.mapping = self.mapping;
        request.config = config;
        Ok(request)
    }
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set

    let cli = Cli::parse_from(expand_args(std::env::args_os())?);

    let config = VocabConfig::load_or_default(cli.config.as_deref())?;
    logging::init_file_logging(&config.log_file)?;

    let request = cli.into_request(config)?;

    let stats = run(&request)?;
    println!(
        "{} terms from {} values ({} segments, {} slug collisions)",
        stats.terms, stats.matched_triples, stats.segments, stats.collisions
    );
    println!("  Written: {}", request.output.display());
    println!("  Written: {}", request.output_schema.display());
    Ok(())
}
