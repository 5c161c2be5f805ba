//! Raw edge records and the on-disk line format.

use std::io::{self, Write};

/// One `source,destination,weight` line.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeRecord {
    source: String,
    target: String,
    weight: f64,
}

impl EdgeRecord {
    /// Creates a record from its labels and weight.
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    #[rustfmt::skip]
    #[must_use]
    pub fn source(&self) -> &str { &self.source }

    #[rustfmt::skip]
    #[must_use]
    pub fn target(&self) -> &str { &self.target }

    #[rustfmt::skip]
    #[must_use]
    pub fn weight(&self) -> f64 { self.weight }
}

/// Writes `records` in the format read by [`crate::EdgeListProvider`].
///
/// # Errors
/// Propagates failures from `writer`.
///
/// # Examples
/// ```
/// use boruvka_providers_edgelist::{EdgeRecord, write_edge_list};
///
/// let mut out = Vec::new();
/// write_edge_list(&mut out, &[EdgeRecord::new("A", "B", 7.0)])?;
/// assert_eq!(out, b"A,B,7\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_edge_list<W: Write>(mut writer: W, records: &[EdgeRecord]) -> io::Result<()> {
    for record in records {
        writeln!(writer, "{},{},{}", record.source, record.target, record.weight)?;
    }
    writer.flush()
}
