use apollo_compiler::Name;
use apollo_compiler::Schema;

use crate::config::PlannerConfig;
use crate::directives::read_subgraph_registry;
use crate::entities::EntityCatalog;
use crate::error::ValidationError;
use crate::subgraph::SubgraphRegistry;

/// Everything derived from a supergraph schema that the resolvers need.
///
/// Built once per compilation and only ever borrowed afterwards.
#[derive(Debug)]
pub(crate) struct Context<'schema> {
    pub(crate) schema: &'schema Schema,
    pub(crate) subgraphs: SubgraphRegistry,
    pub(crate) entities: EntityCatalog,
    pub(crate) config: PlannerConfig,
}

impl<'schema> Context<'schema> {
    pub(crate) fn new(
        schema: &'schema Schema,
        config: PlannerConfig,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            schema,
            subgraphs: read_subgraph_registry(schema)?,
            entities: EntityCatalog::new(schema),
            config,
        })
    }

    /// Fails unless `graph` is a value of the `join__Graph` enum.
    ///
    /// `coordinate` names the schema element that references the graph.
    pub(crate) fn check_graph<'graph>(
        &self,
        graph: &'graph Name,
        coordinate: impl FnOnce() -> String,
    ) -> Result<&'graph Name, ValidationError> {
        if self.subgraphs.contains(graph) {
            Ok(graph)
        } else {
            Err(ValidationError::UnknownGraph {
                coordinate: coordinate(),
                graph: graph.clone(),
            })
        }
    }
}
