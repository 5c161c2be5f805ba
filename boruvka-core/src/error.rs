//! Error types for the Borůvka core library.
//!
//! Defines the error enums exposed by the public API together with stable,
//! machine-readable codes for logging surfaces.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Code string written to logs, e.g. `MST_EMPTY_GRAPH`.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Maps this error to its [`",
                stringify!($CodeTy),
                "`]."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while assembling a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// Both endpoints of an edge named the same vertex.
    #[error("edge on vertex `{vertex}` is a self-loop")]
    SelfLoop {
        /// Label of the vertex the loop was declared on.
        vertex: Arc<str>,
    },
    /// An edge weight was NaN or infinite and cannot be totally ordered.
    #[error("edge ({left}, {right}) has non-finite weight")]
    NonFiniteWeight {
        /// Label of the first endpoint as provided.
        left: Arc<str>,
        /// Label of the second endpoint as provided.
        right: Arc<str>,
    },
    /// A numeric edge referenced a vertex id outside the graph.
    #[error("edge references vertex {vertex}, but vertex_count is {vertex_count}")]
    InvalidVertex {
        /// The offending vertex id.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// Both endpoints of an edge named the same vertex.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// An edge weight was NaN or infinite.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
        /// A numeric edge referenced a vertex id outside the graph.
        InvalidVertex => InvalidVertex { .. } => "GRAPH_INVALID_VERTEX",
    }
}

/// Errors returned while computing a minimum spanning tree/forest.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// The caller requested an MST for a graph without vertices.
    #[error("cannot compute an MST for an empty graph")]
    EmptyGraph,
    /// Parallelism must be at least one worker.
    #[error("parallelism must be at least 1 (got {got})")]
    InvalidParallelism {
        /// The invalid parallelism supplied by the caller.
        got: usize,
    },
    /// The worker pool for the concurrent search could not be created.
    #[error("failed to build search worker pool: {message}")]
    ThreadPool {
        /// Message reported by the pool builder.
        message: Arc<str>,
    },
    /// An internal invariant of the component forest was violated, indicating
    /// a logic error in the forest or the driver.
    #[error("MST invariant violated: {invariant} (component {component})")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
        /// Component or vertex id that exposed the violation.
        component: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The caller requested an MST for a graph without vertices.
        EmptyGraph => EmptyGraph => "MST_EMPTY_GRAPH",
        /// Parallelism must be at least one worker.
        InvalidParallelism => InvalidParallelism { .. } => "MST_INVALID_PARALLELISM",
        /// The worker pool for the concurrent search could not be created.
        ThreadPool => ThreadPool { .. } => "MST_THREAD_POOL",
        /// An internal invariant of the component forest was violated.
        InvariantViolation => InvariantViolation { .. } => "MST_INVARIANT_VIOLATION",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, MstError>;
