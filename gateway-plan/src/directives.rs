//! Reads join spec directive applications off the typed schema.
//!
//! Only the directives applied directly on a node are read: a field never inherits the
//! `@join__field` applications of another field, nor the `@join__type` of its parent type.

use std::collections::HashSet;

use apollo_compiler::Name;
use apollo_compiler::Schema;
use apollo_compiler::ast::Directive;
use apollo_compiler::ast::FieldDefinition;
use apollo_compiler::schema::ExtendedType;
use apollo_compiler::schema::ObjectType;
use indexmap::IndexMap;

use crate::error::ValidationError;
use crate::join_spec::JOIN_EXTERNAL_ARGUMENT_NAME;
use crate::join_spec::JOIN_FIELD_DIRECTIVE_NAME;
use crate::join_spec::JOIN_GRAPH_ARGUMENT_NAME;
use crate::join_spec::JOIN_GRAPH_DIRECTIVE_NAME;
use crate::join_spec::JOIN_GRAPH_ENUM_NAME;
use crate::join_spec::JOIN_KEY_ARGUMENT_NAME;
use crate::join_spec::JOIN_NAME_ARGUMENT_NAME;
use crate::join_spec::JOIN_TYPE_DIRECTIVE_NAME;
use crate::join_spec::JOIN_URL_ARGUMENT_NAME;
use crate::join_spec::JOIN_USEROVERRIDDEN_ARGUMENT_NAME;
use crate::subgraph::Subgraph;
use crate::subgraph::SubgraphRegistry;

/// Arguments of one `@join__type` application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TypeDirectiveArguments<'doc> {
    pub(crate) graph: &'doc Name,
    pub(crate) key: Option<&'doc str>,
}

/// Arguments of one `@join__field` application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldDirectiveArguments<'doc> {
    pub(crate) graph: Option<&'doc Name>,
    pub(crate) external: bool,
    pub(crate) used_overridden: bool,
}

/// Builds the subgraph registry from the `join__Graph` enum, one entry per enum value.
pub(crate) fn read_subgraph_registry(schema: &Schema) -> Result<SubgraphRegistry, ValidationError> {
    let Some(graph_type) = schema.types.get(&JOIN_GRAPH_ENUM_NAME) else {
        tracing::debug!("no join__Graph enum, the subgraph registry is empty");
        return Ok(SubgraphRegistry::default());
    };
    let ExtendedType::Enum(graph_enum) = graph_type else {
        return Err(ValidationError::JoinGraphNotEnum);
    };

    let mut subgraphs = IndexMap::with_capacity(graph_enum.values.len());
    let mut names = HashSet::new();
    for (value, definition) in &graph_enum.values {
        let application = definition
            .directives
            .get(&JOIN_GRAPH_DIRECTIVE_NAME)
            .ok_or_else(|| ValidationError::MissingGraphDirective {
                value: value.clone(),
            })?;
        let name = graph_directive_string_argument(value, application, &JOIN_NAME_ARGUMENT_NAME)?;
        let url = graph_directive_string_argument(value, application, &JOIN_URL_ARGUMENT_NAME)?;

        if url.is_empty() {
            return Err(ValidationError::EmptySubgraphUrl {
                name: name.to_owned(),
            });
        }
        url::Url::parse(url).map_err(|err| ValidationError::InvalidSubgraphUrl {
            name: name.to_owned(),
            url: url.to_owned(),
            reason: err.to_string(),
        })?;
        if !names.insert(name) {
            return Err(ValidationError::DuplicateSubgraphName {
                name: name.to_owned(),
            });
        }

        tracing::trace!(graph = %value, name, url, "registered subgraph");
        subgraphs.insert(
            value.clone(),
            Subgraph {
                enum_key: value.clone(),
                name: name.to_owned(),
                url: url.to_owned(),
            },
        );
    }
    Ok(SubgraphRegistry::new(subgraphs))
}

fn graph_directive_string_argument<'doc>(
    value: &Name,
    application: &'doc Directive,
    argument: &Name,
) -> Result<&'doc str, ValidationError> {
    application
        .specified_argument_by_name(argument)
        .and_then(|arg| arg.as_str())
        .ok_or_else(|| ValidationError::MissingGraphArgument {
            value: value.clone(),
            argument: argument.clone(),
        })
}

/// Every `@join__type` applied on `object`, in application order.
///
/// A type owned by several subgraphs carries one application per subgraph.
pub(crate) fn join_type_directives(
    object: &ObjectType,
) -> Result<Vec<TypeDirectiveArguments<'_>>, ValidationError> {
    object
        .directives
        .get_all(&JOIN_TYPE_DIRECTIVE_NAME)
        .map(|application| -> Result<_, ValidationError> {
            let graph = application
                .specified_argument_by_name(&JOIN_GRAPH_ARGUMENT_NAME)
                .and_then(|arg| arg.as_enum())
                .ok_or_else(|| ValidationError::MissingTypeGraph {
                    type_name: object.name.clone(),
                })?;
            let key = application
                .specified_argument_by_name(&JOIN_KEY_ARGUMENT_NAME)
                .and_then(|arg| arg.as_str());
            Ok(TypeDirectiveArguments { graph, key })
        })
        .collect()
}

/// Every `@join__field` applied on `field`, in application order.
pub(crate) fn join_field_directives(field: &FieldDefinition) -> Vec<FieldDirectiveArguments<'_>> {
    field
        .directives
        .get_all(&JOIN_FIELD_DIRECTIVE_NAME)
        .map(|application| {
            let flag = |argument: &Name| {
                application
                    .specified_argument_by_name(argument)
                    .and_then(|arg| arg.to_bool())
                    .unwrap_or(false)
            };
            FieldDirectiveArguments {
                graph: application
                    .specified_argument_by_name(&JOIN_GRAPH_ARGUMENT_NAME)
                    .and_then(|arg| arg.as_enum()),
                external: flag(&JOIN_EXTERNAL_ARGUMENT_NAME),
                used_overridden: flag(&JOIN_USEROVERRIDDEN_ARGUMENT_NAME),
            }
        })
        .collect()
}
