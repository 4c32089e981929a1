//! Rich diagnostic error types for literal-vocab.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text so a failed run says what went wrong and
//! how to fix it.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for literal-vocab.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum VocabError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Rdf(#[from] RdfError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Logging(#[from] LoggingError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Args(#[from] ArgsError),
}

// ---------------------------------------------------------------------------
// Build errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum BuildError {
    #[error("invalid {role} IRI: \"{iri}\"")]
    #[diagnostic(
        code(literal_vocab::build::invalid_iri),
        help(
            "Properties, classes and the target namespace must be absolute IRIs, \
             e.g. `http://example.org/ns/hasTag` or `http://example.org/tags/`."
        )
    )]
    InvalidIri {
        role: &'static str,
        iri: String,
        message: String,
    },

    #[error("minted term is not a valid IRI: \"{iri}\"")]
    #[diagnostic(
        code(literal_vocab::build::invalid_term),
        help(
            "The target namespace concatenated with a slug did not form a valid IRI. \
             Check that the namespace ends with `/` or `#`."
        )
    )]
    InvalidTerm { iri: String, message: String },

    #[error("invalid label language tag: \"{language}\"")]
    #[diagnostic(
        code(literal_vocab::build::invalid_language),
        help("Use a BCP47 language tag such as `fi`, `en` or `sv-FI`.")
    )]
    InvalidLanguage { language: String },

    #[error("the value delimiter must not be empty")]
    #[diagnostic(
        code(literal_vocab::build::empty_delimiter),
        help("Set `delimiter` in the config file to a non-empty string such as \"/\".")
    )]
    EmptyDelimiter,

    #[error("object of <{subject}> <{predicate}> cannot be read as text: {object}")]
    #[diagnostic(
        code(literal_vocab::build::untextual_object),
        help(
            "Only literals and IRIs can be split into vocabulary tokens. \
             Blank-node objects under the source property indicate a data-quality \
             problem in the input graph; fix the source data or choose another property."
        )
    )]
    UntextualObject {
        subject: String,
        predicate: String,
        object: String,
    },
}

pub type BuildResult<T> = std::result::Result<T, BuildError>;

// ---------------------------------------------------------------------------
// RDF I/O errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum RdfError {
    #[error("unknown RDF format: \"{name}\"")]
    #[diagnostic(
        code(literal_vocab::rdf::unknown_format),
        help(
            "Supported formats: turtle (ttl), nt (ntriples), nquads (nq), trig, n3, \
             xml (rdfxml). File extensions and media types are accepted too."
        )
    )]
    UnknownFormat { name: String },

    #[error("failed to read {path}")]
    #[diagnostic(
        code(literal_vocab::rdf::read),
        help("Check that the input file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path} as {format}: {message}")]
    #[diagnostic(
        code(literal_vocab::rdf::parse),
        help(
            "The input is not valid {format}. Pass the right serialization with \
             --format, or fix the syntax error reported above."
        )
    )]
    Parse {
        path: String,
        format: String,
        message: String,
    },

    #[error("invalid base IRI: \"{iri}\"")]
    #[diagnostic(
        code(literal_vocab::rdf::base_iri),
        help("`base_iri` in the config file must be an absolute IRI.")
    )]
    BaseIri { iri: String, message: String },

    #[error("failed to write {path}")]
    #[diagnostic(
        code(literal_vocab::rdf::write),
        help(
            "Check that the destination directory exists and is writable. \
             An output written before this failure is left on disk."
        )
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize graph as {format}: {message}")]
    #[diagnostic(
        code(literal_vocab::rdf::serialize),
        help("The graph could not be encoded in the requested format.")
    )]
    Serialize { format: String, message: String },
}

pub type RdfResult<T> = std::result::Result<T, RdfError>;

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config: {path}")]
    #[diagnostic(
        code(literal_vocab::config::read),
        help("Ensure the config file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {path}: {message}")]
    #[diagnostic(
        code(literal_vocab::config::parse),
        help("Check the TOML syntax in the config file.")
    )]
    Parse { path: String, message: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Logging errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum LoggingError {
    #[error("failed to open log file: {path}")]
    #[diagnostic(
        code(literal_vocab::logging::open),
        help("Set `log_file` in the config file to a writable location.")
    )]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("a global tracing subscriber is already installed")]
    #[diagnostic(code(literal_vocab::logging::already_set))]
    AlreadySet,
}

pub type LoggingResult<T> = std::result::Result<T, LoggingError>;

// ---------------------------------------------------------------------------
// Command-line errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ArgsError {
    #[error("failed to expand @file arguments")]
    #[diagnostic(
        code(literal_vocab::args::argfile),
        help(
            "An argument starting with `@` names a file holding one argument per line. \
             Check that the file exists and is readable."
        )
    )]
    ArgFile {
        #[source]
        source: std::io::Error,
    },
}

pub type ArgsResult<T> = std::result::Result<T, ArgsError>;

/// Convenience result alias for top-level operations.
pub type VocabResult<T> = std::result::Result<T, VocabError>;
