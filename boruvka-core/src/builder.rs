//! Builder utilities for configuring Borůvka runs.
//!
//! Validates the requested parallelism before constructing [`Boruvka`]
//! instances.

use crate::{Result, boruvka::Boruvka, mst::SearchStrategy};

/// Configures and constructs [`Boruvka`] instances.
///
/// # Examples
/// ```
/// use boruvka_core::BoruvkaBuilder;
///
/// let boruvka = BoruvkaBuilder::new()
///     .with_parallelism(4)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(boruvka.parallelism().get(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct BoruvkaBuilder {
    parallelism: usize,
}

impl Default for BoruvkaBuilder {
    fn default() -> Self {
        Self { parallelism: 1 }
    }
}

impl BoruvkaBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::BoruvkaBuilder;
    ///
    /// let builder = BoruvkaBuilder::new();
    /// assert_eq!(builder.parallelism(), 1);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of search workers. `1` selects the sequential
    /// search.
    #[must_use]
    pub fn with_parallelism(mut self, parallelism: usize) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Returns the configured number of search workers.
    #[must_use]
    pub fn parallelism(&self) -> usize {
        self.parallelism
    }

    /// Validates the configuration and constructs a [`Boruvka`] instance.
    ///
    /// # Errors
    /// Returns [`crate::MstError::InvalidParallelism`] when the parallelism is
    /// zero.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::{BoruvkaBuilder, MstError};
    ///
    /// let err = BoruvkaBuilder::new().with_parallelism(0).build().unwrap_err();
    /// assert_eq!(err, MstError::InvalidParallelism { got: 0 });
    /// ```
    pub fn build(self) -> Result<Boruvka> {
        let strategy = SearchStrategy::from_parallelism(self.parallelism)?;
        Ok(Boruvka::new(strategy))
    }
}
