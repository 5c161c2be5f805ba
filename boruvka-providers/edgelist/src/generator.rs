//! Random edge-list generation.
//!
//! Every unordered vertex pair is joined independently with a fixed chance,
//! giving an Erdős–Rényi `G(n, p)` graph with integer weights in `1..=100`.

use rand::Rng;

use crate::{errors::GeneratorError, record::EdgeRecord};

const MIN_WEIGHT: u32 = 1;
const MAX_WEIGHT: u32 = 100;

/// Label of vertex `index`: `A`..`Z`, then `AA`..`ZZ`, then `AAA`, and so on.
///
/// # Examples
/// ```
/// use boruvka_providers_edgelist::vertex_label;
///
/// assert_eq!(vertex_label(0), "A");
/// assert_eq!(vertex_label(25), "Z");
/// assert_eq!(vertex_label(27), "BB");
/// ```
#[must_use]
pub fn vertex_label(index: usize) -> String {
    let letter = char::from(b'A' + (index % 26) as u8);
    std::iter::repeat_n(letter, index / 26 + 1).collect()
}

/// Configured random graph generator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphGenerator {
    vertex_count: usize,
    connection_chance: f64,
}

impl GraphGenerator {
    /// Validates the generator parameters.
    ///
    /// # Errors
    /// Returns [`GeneratorError::TooFewVertices`] for fewer than two vertices
    /// and [`GeneratorError::InvalidConnectionChance`] when the chance is not
    /// a probability.
    pub fn new(vertex_count: usize, connection_chance: f64) -> Result<Self, GeneratorError> {
        if vertex_count < 2 {
            return Err(GeneratorError::TooFewVertices { got: vertex_count });
        }
        if !(0.0..=1.0).contains(&connection_chance) {
            return Err(GeneratorError::InvalidConnectionChance {
                got: connection_chance,
            });
        }
        Ok(Self {
            vertex_count,
            connection_chance,
        })
    }

    #[rustfmt::skip]
    #[must_use]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    #[rustfmt::skip]
    #[must_use]
    pub fn connection_chance(&self) -> f64 { self.connection_chance }

    /// Draws one graph. Pairs are emitted in `(i, j)` order with `i < j`.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<EdgeRecord> {
        let labels: Vec<String> = (0..self.vertex_count).map(vertex_label).collect();
        let mut records = Vec::new();
        for (i, left) in labels.iter().enumerate() {
            for right in &labels[i + 1..] {
                if rng.gen_bool(self.connection_chance) {
                    let weight = rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT);
                    records.push(EdgeRecord::new(left, right, f64::from(weight)));
                }
            }
        }
        records
    }
}
