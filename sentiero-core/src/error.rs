//! Error types for the Sentiero core library.
//!
//! Structural problems in a scenario are rejected while the graph is built and
//! surface as [`GraphError`]. An unreachable destination is not an error: it is
//! reported through [`crate::Route::Unreachable`].

use std::fmt;

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
            /// Return the stable machine-readable representation of this error code.
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
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
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

/// Why an edge was rejected during graph construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvalidEdgeReason {
    /// An endpoint lies outside `0..node_count`.
    OutOfRange {
        /// Number of nodes in the scenario.
        node_count: usize,
    },
    /// Both endpoints name the same node.
    SelfLoop,
}

impl fmt::Display for InvalidEdgeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { node_count } => {
                write!(f, "references a node outside 0..{node_count}")
            }
            Self::SelfLoop => f.write_str("is a self-loop"),
        }
    }
}

/// Error type produced while building or querying a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// An edge referenced a missing node or connected a node to itself.
    ///
    /// Endpoints are reported as signed values because scenario files may
    /// carry negative indices.
    #[error("edge #{position} ({left}, {right}) {reason}")]
    InvalidEdge {
        /// Position of the edge in the caller-supplied list.
        position: usize,
        /// First endpoint as supplied.
        left: i64,
        /// Second endpoint as supplied.
        right: i64,
        /// Classification of the defect.
        reason: InvalidEdgeReason,
    },
    /// The same unordered pair was supplied twice.
    #[error("edge #{position} ({left}, {right}) duplicates edge #{first}")]
    DuplicateEdge {
        /// Position of the repeated edge.
        position: usize,
        /// Position of the edge first introducing the pair.
        first: usize,
        /// First endpoint as supplied.
        left: usize,
        /// Second endpoint as supplied.
        right: usize,
    },
    /// Fewer than two nodes exist, so no source/destination pair can be chosen.
    #[error("at least 2 nodes are required to choose endpoints (got {nodes})")]
    InsufficientNodes {
        /// Number of nodes available.
        nodes: usize,
    },
    /// A node position contained NaN or an infinite coordinate.
    #[error("node {index} has a non-finite position ({x}, {y})")]
    NonFinitePosition {
        /// Index of the offending node.
        index: usize,
        /// Horizontal coordinate as supplied.
        x: f64,
        /// Vertical coordinate as supplied.
        y: f64,
    },
    /// An edge length, or the running total of edge lengths, overflowed.
    ///
    /// Every path cost is bounded by the total, so rejecting the overflow
    /// keeps all reachable costs finite.
    #[error("edge #{position} ({left}, {right}) pushes the total edge length past f64::MAX")]
    WeightOverflow {
        /// Position of the edge at which the total stopped being finite.
        position: usize,
        /// First endpoint as supplied.
        left: usize,
        /// Second endpoint as supplied.
        right: usize,
    },
    /// A caller named a node index that is not part of the graph.
    #[error("node {index} is out of range for a graph of {node_count} nodes")]
    NodeOutOfRange {
        /// Requested node index.
        index: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// Following predecessors never reached the source.
    #[error("predecessor chain starting at node {start} does not terminate")]
    PredecessorCycle {
        /// Node at which the walk began.
        start: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge referenced a missing node or connected a node to itself.
        InvalidEdge => InvalidEdge { .. } => "GRAPH_INVALID_EDGE",
        /// The same unordered pair was supplied twice.
        DuplicateEdge => DuplicateEdge { .. } => "GRAPH_DUPLICATE_EDGE",
        /// Fewer than two nodes exist.
        InsufficientNodes => InsufficientNodes { .. } => "GRAPH_INSUFFICIENT_NODES",
        /// A node position contained NaN or an infinite coordinate.
        NonFinitePosition => NonFinitePosition { .. } => "GRAPH_NON_FINITE_POSITION",
        /// An edge length, or the running total of edge lengths, overflowed.
        WeightOverflow => WeightOverflow { .. } => "GRAPH_WEIGHT_OVERFLOW",
        /// A caller named a node index that is not part of the graph.
        NodeOutOfRange => NodeOutOfRange { .. } => "GRAPH_NODE_OUT_OF_RANGE",
        /// Following predecessors never reached the source.
        PredecessorCycle => PredecessorCycle { .. } => "GRAPH_PREDECESSOR_CYCLE",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;

/// Widens a node index for reporting inside [`GraphError::InvalidEdge`].
pub(crate) fn signed_index(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}
