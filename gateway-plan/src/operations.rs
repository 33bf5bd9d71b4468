//! Routes every root `Query` and `Mutation` field to the subgraph that resolves it.

use apollo_compiler::Name;
use apollo_compiler::ast::FieldDefinition;
use apollo_compiler::schema::ObjectType;
use serde::Serialize;

use crate::context::Context;
use crate::directives::join_field_directives;
use crate::directives::join_type_directives;
use crate::error::GenerationError;
use crate::error::PlanError;
use crate::join_spec::DEFAULT_DEPRECATION_REASON;
use crate::join_spec::DEPRECATED_DIRECTIVE_NAME;
use crate::join_spec::DEPRECATED_REASON_ARGUMENT_NAME;
use crate::join_spec::MUTATION_TYPE_NAME;
use crate::join_spec::QUERY_TYPE_NAME;
use crate::types::TypeDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationKind {
    Query,
    Mutation,
}

/// The routes of all root fields, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RootOperations {
    pub queries: Vec<RootFieldRoute>,
    pub mutations: Vec<RootFieldRoute>,
}

impl RootOperations {
    pub fn iter(&self) -> impl Iterator<Item = &RootFieldRoute> {
        self.queries.iter().chain(&self.mutations)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootFieldRoute {
    pub operation: OperationKind,
    pub name: Name,
    #[serde(rename = "renderedType")]
    pub ty: TypeDescriptor,
    pub arguments: Vec<RootFieldArgument>,
    /// The `join__Graph` enum value of the subgraph the field is forwarded to.
    pub subgraph: Name,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootFieldArgument {
    pub name: Name,
    /// The argument type as written in SDL, e.g. `[ID!]!`.
    #[serde(rename = "type")]
    pub ty: String,
    /// The default value as written in SDL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

#[tracing::instrument(level = "trace", skip_all)]
pub(crate) fn route_root_operations(context: &Context<'_>) -> Result<RootOperations, PlanError> {
    let mut operations = RootOperations::default();
    if let Some(query) = context.schema.get_object(&QUERY_TYPE_NAME) {
        operations.queries = route_root_type(context, OperationKind::Query, query)?;
    }
    if let Some(mutation) = context.schema.get_object(&MUTATION_TYPE_NAME) {
        operations.mutations = route_root_type(context, OperationKind::Mutation, mutation)?;
    }
    tracing::debug!(
        queries = operations.queries.len(),
        mutations = operations.mutations.len(),
        "routed root operations"
    );
    Ok(operations)
}

fn route_root_type(
    context: &Context<'_>,
    operation: OperationKind,
    root: &ObjectType,
) -> Result<Vec<RootFieldRoute>, PlanError> {
    // Fields without their own annotation go to the first subgraph contributing the root type.
    let type_graph = join_type_directives(root)?
        .first()
        .map(|directive| directive.graph.clone());

    root.fields
        .values()
        .map(|field| -> Result<RootFieldRoute, PlanError> {
            let coordinate = || format!("{}.{}", root.name, field.name);
            let field_graph = join_field_directives(field)
                .into_iter()
                .filter(|application| !application.external && !application.used_overridden)
                .find_map(|application| application.graph);
            let subgraph = field_graph
                .or(type_graph.as_ref())
                .ok_or_else(|| GenerationError::UnroutableRootField {
                    coordinate: coordinate(),
                })?;
            let subgraph = context.check_graph(subgraph, coordinate)?.clone();
            let ty = TypeDescriptor::resolve(context.schema, &field.ty).map_err(|source| {
                GenerationError::UnsupportedType {
                    coordinate: coordinate(),
                    source,
                }
            })?;
            tracing::trace!(field = %field.name, %subgraph, "routed root field");
            Ok(RootFieldRoute {
                operation,
                name: field.name.clone(),
                ty,
                arguments: arguments(field),
                subgraph,
                deprecation_reason: deprecation_reason(field),
            })
        })
        .collect()
}

fn arguments(field: &FieldDefinition) -> Vec<RootFieldArgument> {
    field
        .arguments
        .iter()
        .map(|argument| RootFieldArgument {
            name: argument.name.clone(),
            ty: argument.ty.to_string(),
            default_value: argument.default_value.as_ref().map(|value| value.to_string()),
        })
        .collect()
}

fn deprecation_reason(field: &FieldDefinition) -> Option<String> {
    let deprecated = field.directives.get(&DEPRECATED_DIRECTIVE_NAME)?;
    let reason = deprecated
        .specified_argument_by_name(&DEPRECATED_REASON_ARGUMENT_NAME)
        .and_then(|reason| reason.as_str())
        .unwrap_or(DEFAULT_DEPRECATION_REASON);
    Some(reason.to_owned())
}
