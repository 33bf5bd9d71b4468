//! Compiles a federation supergraph into the static data a gateway needs to route requests.
//!
//! A supergraph is a GraphQL schema composed from several subgraphs and annotated with the join
//! spec: a `join__Graph` enum listing the subgraphs, `@join__type` on the object types each
//! subgraph contributes, and `@join__field` where a single field comes from somewhere else.
//! From it this crate derives:
//!
//! - the [`SubgraphRegistry`]: name and URL of every subgraph,
//! - the [`QueryPlan`]: for each entity, its key field in every subgraph claiming it and the
//!   subgraph owning each of its other fields,
//! - the [`RootOperations`]: the subgraph each root `Query` and `Mutation` field is sent to.
//!
//! ```
//! use gateway_plan::PlannerConfig;
//! use gateway_plan::Supergraph;
//!
//! let sdl = r#"
//! # directive @join__graph(name: String!, url: String!) on ENUM_VALUE
//! # directive @join__type(graph: join__Graph!, key: join__FieldSet) repeatable on OBJECT
//! # directive @join__field(graph: join__Graph, external: Boolean) repeatable on FIELD_DEFINITION
//! # scalar join__FieldSet
//!   enum join__Graph {
//!     ASTRONAUTS @join__graph(name: "astronauts", url: "http://localhost:4001/graphql")
//!   }
//!   type Query @join__type(graph: ASTRONAUTS) {
//!     astronaut(id: ID!): Astronaut
//!   }
//!   type Astronaut @join__type(graph: ASTRONAUTS) {
//!     id: ID!
//!     name: String!
//!   }
//! "#;
//!
//! let supergraph = Supergraph::new(sdl)?;
//! let compiled = supergraph.compile(PlannerConfig::default())?;
//! let astronaut = compiled.query_plan.get("Astronaut").unwrap();
//! assert_eq!(astronaut.key("ASTRONAUTS"), Some("id"));
//! assert_eq!(astronaut.field("name").unwrap().owning_subgraph.as_str(), "ASTRONAUTS");
//! # Ok::<(), gateway_plan::error::PlanError>(())
//! ```

#![warn(
    rustdoc::broken_intra_doc_links,
    unreachable_pub,
    unreachable_patterns,
    unused,
    unused_qualifications,
    dead_code,
    while_true,
    unconditional_panic,
    clippy::all
)]

pub mod config;
mod context;
pub mod diagnostics;
mod directives;
mod display_helpers;
pub mod entities;
pub mod error;
mod join_spec;
mod keys;
pub mod operations;
mod ownership;
pub mod query_plan;
pub mod subgraph;
#[cfg(test)]
mod test_support;
pub mod types;

use apollo_compiler::Schema;
use apollo_compiler::validation::Valid;
use serde::Serialize;
use serde::ser::SerializeStruct;

pub use crate::config::PlannerConfig;
use crate::context::Context;
pub use crate::diagnostics::PlanWarning;
pub use crate::entities::EntityCatalog;
use crate::error::PlanError;
pub use crate::operations::RootOperations;
use crate::operations::route_root_operations;
pub use crate::query_plan::QueryPlan;
use crate::query_plan::builder::build_query_plan;
pub use crate::subgraph::Subgraph;
pub use crate::subgraph::SubgraphRegistry;

/// A validated supergraph schema.
#[derive(Debug)]
pub struct Supergraph {
    pub schema: Valid<Schema>,
}

impl Supergraph {
    pub fn new(schema_str: &str) -> Result<Self, PlanError> {
        let schema = Schema::parse_and_validate(schema_str, "schema.graphql")?;
        Ok(Self::from_schema(schema))
    }

    pub fn from_schema(schema: Valid<Schema>) -> Self {
        Self { schema }
    }

    /// The subgraphs declared by the `join__Graph` enum. Empty when there is no such enum.
    pub fn subgraphs(&self) -> Result<SubgraphRegistry, PlanError> {
        Ok(self.context(PlannerConfig::default())?.subgraphs)
    }

    /// The object types that get an entry in the query plan.
    pub fn entities(&self) -> EntityCatalog {
        EntityCatalog::new(&self.schema)
    }

    /// Builds the subgraph registry and the query plan.
    ///
    /// Nothing is returned unless the whole supergraph could be planned.
    pub fn compile(&self, config: PlannerConfig) -> Result<CompiledSupergraph, PlanError> {
        let context = self.context(config)?;
        let query_plan = build_query_plan(&context)?;
        Ok(CompiledSupergraph {
            subgraphs: context.subgraphs,
            query_plan,
        })
    }

    /// Routes every root `Query` and `Mutation` field to a subgraph.
    ///
    /// Unlike [`Supergraph::compile`], this fails on a supergraph without join spec annotations,
    /// since its root fields cannot be sent anywhere.
    pub fn root_operations(&self) -> Result<RootOperations, PlanError> {
        route_root_operations(&self.context(PlannerConfig::default())?)
    }

    fn context(&self, config: PlannerConfig) -> Result<Context<'_>, PlanError> {
        Ok(Context::new(&self.schema, config)?)
    }
}

/// The output of [`Supergraph::compile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledSupergraph {
    pub subgraphs: SubgraphRegistry,
    pub query_plan: QueryPlan,
}

impl CompiledSupergraph {
    pub fn warnings(&self) -> &[PlanWarning] {
        self.query_plan.warnings()
    }
}

impl Serialize for CompiledSupergraph {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut compiled = serializer.serialize_struct("CompiledSupergraph", 3)?;
        compiled.serialize_field("subgraphs", &self.subgraphs)?;
        compiled.serialize_field("queryPlan", &self.query_plan)?;
        compiled.serialize_field("warnings", self.warnings())?;
        compiled.end()
    }
}

const _: () = {
    const fn assert_thread_safe<T: Sync + Send>() {}

    assert_thread_safe::<Supergraph>();
    assert_thread_safe::<CompiledSupergraph>();
};
