//! RDF graph I/O backed by oxigraph.
//!
//! Resolves user-facing format names, parses files into an in-memory [`Graph`]
//! and serializes graphs back out. Dataset formats (N-Quads, TriG) are flattened
//! into the default graph on read.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use oxigraph::io::{RdfFormat, RdfParser, RdfSerializer};
use oxigraph::model::{Graph, Triple};

use crate::error::{RdfError, RdfResult};
use crate::namespace::{RDF_NS, SKOS_NS};

/// Format used when `--format` is not given.
pub const DEFAULT_FORMAT: RdfFormat = RdfFormat::Turtle;

/// Resolve a format name.
///
/// Accepts the common short names (`turtle`, `nt`, `xml`, ...), file extensions
/// and media types.
pub fn parse_format(name: &str) -> RdfResult<RdfFormat> {
    let lowered = name.trim().to_ascii_lowercase();
    let format = match lowered.as_str() {
        "turtle" | "ttl" => Some(RdfFormat::Turtle),
        "nt" | "ntriples" | "n-triples" | "nt11" => Some(RdfFormat::NTriples),
        "nquads" | "n-quads" | "nq" => Some(RdfFormat::NQuads),
        "trig" => Some(RdfFormat::TriG),
        "n3" => Some(RdfFormat::N3),
        "xml" | "rdfxml" | "rdf/xml" | "rdf+xml" | "pretty-xml" => Some(RdfFormat::RdfXml),
        other => RdfFormat::from_extension(other).or_else(|| RdfFormat::from_media_type(other)),
    };
    format.ok_or_else(|| RdfError::UnknownFormat {
        name: name.to_string(),
    })
}

/// Parse a serialized graph from `reader`.
///
/// `source` names the input in error messages.
pub fn parse_graph(
    reader: impl Read,
    format: RdfFormat,
    base_iri: Option<&str>,
    source: &str,
) -> RdfResult<Graph> {
    let mut parser = RdfParser::from_format(format);
    if let Some(base) = base_iri {
        parser = parser.with_base_iri(base).map_err(|e| RdfError::BaseIri {
            iri: base.to_string(),
            message: e.to_string(),
        })?;
    }

    let mut graph = Graph::new();
    for quad in parser.for_reader(reader) {
        let quad = quad.map_err(|e| RdfError::Parse {
            path: source.to_string(),
            format: format.name().to_string(),
            message: e.to_string(),
        })?;
        graph.insert(&Triple::from(quad));
    }
    Ok(graph)
}

/// Read and parse the graph stored at `path`.
pub fn load_graph(path: &Path, format: RdfFormat, base_iri: Option<&str>) -> RdfResult<Graph> {
    tracing::debug!(path = %path.display(), format = format.name(), "parsing input file");
    let file = File::open(path).map_err(|e| RdfError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    let graph = parse_graph(
        BufReader::new(file),
        format,
        base_iri,
        &path.display().to_string(),
    )?;
    tracing::debug!(triples = graph.len(), "parsed input file");
    Ok(graph)
}

/// Prefix declarations emitted by formats that support them.
pub fn standard_prefixes(namespace: Option<&str>) -> Vec<(&'static str, String)> {
    let mut prefixes = vec![("rdf", RDF_NS.to_string()), ("skos", SKOS_NS.to_string())];
    if let Some(ns) = namespace {
        prefixes.push(("vocab", ns.to_string()));
    }
    prefixes
}

/// Serialize `graph` into `writer`, returning the writer once flushed.
///
/// Prefixes that are not valid IRIs surface as [`std::io::ErrorKind::InvalidInput`].
pub fn serialize_graph<W: Write>(
    graph: &Graph,
    writer: W,
    format: RdfFormat,
    prefixes: &[(&str, String)],
) -> std::io::Result<W> {
    let mut serializer = RdfSerializer::from_format(format);
    for (name, iri) in prefixes {
        serializer = serializer
            .with_prefix(*name, iri.as_str())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    }
    let mut writer = serializer.for_writer(writer);
    for triple in graph.iter() {
        writer.serialize_triple(triple)?;
    }
    writer.finish()
}

/// Serialize `graph` to an in-memory buffer.
pub fn graph_to_bytes(
    graph: &Graph,
    format: RdfFormat,
    prefixes: &[(&str, String)],
) -> RdfResult<Vec<u8>> {
    serialize_graph(graph, Vec::new(), format, prefixes).map_err(|e| RdfError::Serialize {
        format: format.name().to_string(),
        message: e.to_string(),
    })
}

/// Serialize `graph` to the file at `path`, creating or truncating it.
pub fn write_graph(
    path: &Path,
    graph: &Graph,
    format: RdfFormat,
    prefixes: &[(&str, String)],
) -> RdfResult<()> {
    let write_err = |e| RdfError::Write {
        path: path.display().to_string(),
        source: e,
    };
    let file = File::create(path).map_err(write_err)?;
    let mut writer = serialize_graph(graph, BufWriter::new(file), format, prefixes)
        .map_err(write_err)?;
    writer.flush().map_err(write_err)?;
    tracing::debug!(path = %path.display(), triples = graph.len(), "serialized graph");
    Ok(())
}

#[cfg(test)]
mod tests {
    use oxigraph::model::{Literal, NamedNode};

    use super::*;

    const TTL: &str = r#"
        @prefix ex: <http://example.org/> .
        ex:Item1 ex:hasTags "Music/Art" .
        ex:Item2 ex:hasTags "Kansanmusiikki"@fi ;
                 ex:title "Second" .
    "#;

    #[test]
    fn format_names_resolve() {
        assert_eq!(parse_format("turtle").unwrap(), RdfFormat::Turtle);
        assert_eq!(parse_format("TTL").unwrap(), RdfFormat::Turtle);
        assert_eq!(parse_format("nt").unwrap(), RdfFormat::NTriples);
        assert_eq!(parse_format("n-triples").unwrap(), RdfFormat::NTriples);
        assert_eq!(parse_format("xml").unwrap(), RdfFormat::RdfXml);
        assert_eq!(parse_format("trig").unwrap(), RdfFormat::TriG);
        assert_eq!(parse_format("nq").unwrap(), RdfFormat::NQuads);
        assert_eq!(parse_format("text/turtle").unwrap(), RdfFormat::Turtle);
    }

    #[test]
    fn unknown_format_rejected() {
        let err = parse_format("yaml-ld-ish").unwrap_err();
        assert!(matches!(err, RdfError::UnknownFormat { .. }));
    }

    #[test]
    fn parse_turtle_into_graph() {
        let graph = parse_graph(TTL.as_bytes(), RdfFormat::Turtle, None, "inline").unwrap();
        assert_eq!(graph.len(), 3);
        let expected = Triple::new(
            NamedNode::new("http://example.org/Item1").unwrap(),
            NamedNode::new("http://example.org/hasTags").unwrap(),
            Literal::new_simple_literal("Music/Art"),
        );
        assert!(graph.contains(&expected));
    }

    #[test]
    fn parse_error_names_source() {
        let err = parse_graph("<broken".as_bytes(), RdfFormat::Turtle, None, "bad.ttl").unwrap_err();
        match err {
            RdfError::Parse { path, format, .. } => {
                assert_eq!(path, "bad.ttl");
                assert_eq!(format, "Turtle");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn relative_iris_resolve_against_base() {
        let ttl = r#"<item> <http://example.org/hasTags> "a" ."#;
        let graph = parse_graph(
            ttl.as_bytes(),
            RdfFormat::Turtle,
            Some("http://example.org/data/"),
            "inline",
        )
        .unwrap();
        let subject = NamedNode::new("http://example.org/data/item").unwrap();
        assert_eq!(graph.triples_for_subject(subject.as_ref()).count(), 1);
    }

    #[test]
    fn quads_flatten_into_default_graph() {
        let nq = "<http://e.org/s> <http://e.org/p> \"o\" <http://e.org/g> .\n";
        let graph = parse_graph(nq.as_bytes(), RdfFormat::NQuads, None, "inline").unwrap();
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn serialized_turtle_uses_prefixes_and_reparses() {
        let graph = parse_graph(TTL.as_bytes(), RdfFormat::Turtle, None, "inline").unwrap();
        let prefixes = standard_prefixes(Some("http://example.org/"));
        let bytes = graph_to_bytes(&graph, RdfFormat::Turtle, &prefixes).unwrap();

        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.contains("vocab:"));

        let reparsed = parse_graph(bytes.as_slice(), RdfFormat::Turtle, None, "inline").unwrap();
        assert_eq!(reparsed, graph);
    }

    #[test]
    fn invalid_prefix_iri_is_a_serialize_error() {
        let prefixes = vec![("bad", "not an iri".to_string())];
        let err = graph_to_bytes(&Graph::new(), RdfFormat::Turtle, &prefixes).unwrap_err();
        assert!(matches!(err, RdfError::Serialize { .. }));
    }
}
