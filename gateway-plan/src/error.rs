use apollo_compiler::Name;
use apollo_compiler::validation::DiagnosticList;
use apollo_compiler::validation::WithErrors;
use displaydoc::Display;
use thiserror::Error;

/// Any failure that aborts plan generation.
///
/// Generation is all-or-nothing: when one of these is returned, no registry or plan was produced.
#[derive(Debug, Error, Display)]
#[non_exhaustive]
pub enum PlanError {
    /// invalid supergraph schema: {0}
    InvalidSchema(DiagnosticList),
    /// {0}
    Validation(#[from] ValidationError),
    /// {0}
    Generation(#[from] GenerationError),
}

impl<T> From<WithErrors<T>> for PlanError {
    fn from(WithErrors { errors, .. }: WithErrors<T>) -> Self {
        PlanError::InvalidSchema(errors)
    }
}

impl PlanError {
    /// Whether the failure was caused by the input schema rather than by a schema shape the
    /// planner does not support.
    pub fn is_bad_input(&self) -> bool {
        matches!(self, PlanError::InvalidSchema(_) | PlanError::Validation(_))
    }
}

/// The supergraph violates a join spec convention.
#[derive(Debug, Clone, PartialEq, Eq, Error, Display)]
#[non_exhaustive]
pub enum ValidationError {
    /// `join__Graph` must be an enum type
    JoinGraphNotEnum,
    /// enum value `join__Graph.{value}` has no @join__graph directive
    MissingGraphDirective { value: Name },
    /// @join__graph on `join__Graph.{value}` is missing the `{argument}` argument
    MissingGraphArgument { value: Name, argument: Name },
    /// subgraph "{name}" has an empty URL
    EmptySubgraphUrl { name: String },
    /// subgraph "{name}" has an invalid URL "{url}": {reason}
    InvalidSubgraphUrl {
        name: String,
        url: String,
        reason: String,
    },
    /// must not have several subgraphs with same name "{name}"
    DuplicateSubgraphName { name: String },
    /// @join__type on `{type_name}` is missing the `graph` argument
    MissingTypeGraph { type_name: Name },
    /// `{coordinate}` references graph `{graph}` which is not a value of `join__Graph`
    UnknownGraph { coordinate: String, graph: Name },
    /// no subgraph owns field `{type_name}.{field_name}`
    UnresolvedFieldOwnership { type_name: Name, field_name: Name },
}

/// The supergraph is valid but uses a shape the planner cannot represent.
#[derive(Debug, Clone, PartialEq, Eq, Error, Display)]
#[non_exhaustive]
pub enum GenerationError {
    /// cannot plan `{coordinate}`: {source}
    UnsupportedType {
        coordinate: String,
        source: UnsupportedTypeError,
    },
    /// no key: type `{type_name}` is claimed by subgraph `{graph}` but declares no key and has no ID field
    NoKey { type_name: Name, graph: Name },
    /// root field `{coordinate}` cannot be routed to any subgraph
    UnroutableRootField { coordinate: String },
}

/// unsupported type `{ty}`: {reason}
#[derive(Debug, Clone, PartialEq, Eq, Error, Display)]
pub struct UnsupportedTypeError {
    pub ty: String,
    pub reason: &'static str,
}
