//! Edge-list loading.
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use boruvka_core::{Graph, GraphBuilder};
use tracing::{debug, instrument, warn};

use crate::errors::EdgeListError;

/// Graph loaded from a `source,destination,weight` edge list.
///
/// Vertex ids follow first appearance of each label. Blank lines are skipped;
/// a line with fewer than three fields ends the input and the edges read so
/// far are kept.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use boruvka_providers_edgelist::EdgeListProvider;
///
/// let provider = EdgeListProvider::try_from_reader("demo", Cursor::new("A,B,1\nB,C,2\n"))?;
/// assert_eq!(provider.name(), "demo");
/// assert_eq!(provider.graph().vertex_count(), 3);
/// assert_eq!(provider.records_read(), 2);
/// # Ok::<(), boruvka_providers_edgelist::EdgeListError>(())
/// ```
#[derive(Debug)]
pub struct EdgeListProvider {
    name: String,
    graph: Graph,
    records_read: usize,
}

impl EdgeListProvider {
    /// Parses an edge list from `reader`.
    ///
    /// # Errors
    /// Returns [`EdgeListError::EmptyInput`] when no edge is read, a
    /// line-numbered variant for malformed lines and graph-model violations,
    /// and [`EdgeListError::Io`] when reading fails.
    #[instrument(
        name = "loader.read",
        err,
        skip(reader),
        fields(records = tracing::field::Empty, vertices = tracing::field::Empty),
    )]
    pub fn try_from_reader<R: BufRead>(name: &str, reader: R) -> Result<Self, EdgeListError> {
        let mut builder = Graph::builder();
        let mut records_read = 0;

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            match fields.as_slice() {
                [source, target, weight] => {
                    add_record(&mut builder, line_number, source, target, weight)?;
                    records_read += 1;
                }
                [_, _, _, ..] => {
                    return Err(EdgeListError::TooManyFields {
                        line: line_number,
                        found: fields.len(),
                    });
                }
                _ => {
                    warn!(
                        line = line_number,
                        fields = fields.len(),
                        "short line ends the edge list"
                    );
                    break;
                }
            }
        }

        if records_read == 0 {
            return Err(EdgeListError::EmptyInput);
        }
        let graph = builder.build();
        let span = tracing::Span::current();
        span.record("records", records_read);
        span.record("vertices", graph.vertex_count());
        debug!(edges = graph.edge_count(), "edge list loaded");

        Ok(Self {
            name: name.to_owned(),
            graph,
            records_read,
        })
    }

    /// Opens and parses the edge list at `path`.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Open`] when the file cannot be opened, plus
    /// every error of [`Self::try_from_reader`].
    pub fn try_from_path(name: &str, path: impl AsRef<Path>) -> Result<Self, EdgeListError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| EdgeListError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::try_from_reader(name, BufReader::new(file))
    }

    #[rustfmt::skip]
    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    #[rustfmt::skip]
    #[must_use]
    pub fn graph(&self) -> &Graph { &self.graph }

    /// Number of edge lines accepted.
    #[rustfmt::skip]
    #[must_use]
    pub fn records_read(&self) -> usize { self.records_read }

    /// Consumes the provider and returns the graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

/// Loads the edge list at `path`, naming the source after the path.
///
/// # Errors
/// See [`EdgeListProvider::try_from_path`].
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph, EdgeListError> {
    let path = path.as_ref();
    let name = path.display().to_string();
    EdgeListProvider::try_from_path(&name, path).map(EdgeListProvider::into_graph)
}

fn add_record(
    builder: &mut GraphBuilder,
    line: usize,
    source: &str,
    target: &str,
    weight: &str,
) -> Result<(), EdgeListError> {
    if source.is_empty() || target.is_empty() {
        return Err(EdgeListError::EmptyLabel { line });
    }
    let weight = weight.parse::<f64>().map_err(|_| EdgeListError::InvalidWeight {
        line,
        raw: weight.to_owned(),
    })?;
    builder
        .add_edge(source, target, weight)
        .map_err(|source| EdgeListError::Graph { line, source })
}
