//! Decides which subgraph owns each field of an entity.
//!
//! A field annotated with `@join__field(graph:)` is owned by that graph, unless the annotation
//! only marks the field as external to it (or as overridden away from it). An unannotated field
//! belongs to its type's owner when the type has exactly one. Anything else is unresolved.

use apollo_compiler::Name;
use apollo_compiler::ast::FieldDefinition;

use crate::context::Context;
use crate::directives::TypeDirectiveArguments;
use crate::directives::join_field_directives;
use crate::error::ValidationError;

/// The outcome of ownership resolution for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Ownership<'doc> {
    /// Named by a `@join__field` on the field itself.
    Field(&'doc Name),
    /// Inherited from the only `@join__type` of the parent type.
    Type(&'doc Name),
    Unresolved,
}

impl<'doc> Ownership<'doc> {
    pub(crate) fn graph(self) -> Option<&'doc Name> {
        match self {
            Self::Field(graph) | Self::Type(graph) => Some(graph),
            Self::Unresolved => None,
        }
    }
}

pub(crate) fn resolve_ownership<'doc>(
    context: &Context<'_>,
    type_name: &Name,
    field: &'doc FieldDefinition,
    type_directives: &[TypeDirectiveArguments<'doc>],
) -> Result<Ownership<'doc>, ValidationError> {
    let field_graph = join_field_directives(field)
        .into_iter()
        .filter(|application| !application.external && !application.used_overridden)
        .find_map(|application| application.graph);
    if let Some(graph) = field_graph {
        let graph = context.check_graph(graph, || format!("{type_name}.{}", field.name))?;
        return Ok(Ownership::Field(graph));
    }

    if let [single_owner] = type_directives {
        let graph = context.check_graph(single_owner.graph, || type_name.to_string())?;
        return Ok(Ownership::Type(graph));
    }

    Ok(Ownership::Unresolved)
}
