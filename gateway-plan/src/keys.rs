use apollo_compiler::Name;
use apollo_compiler::schema::ObjectType;
use indexmap::IndexMap;

use crate::context::Context;
use crate::directives::TypeDirectiveArguments;
use crate::error::GenerationError;
use crate::error::PlanError;
use crate::join_spec::ID_SCALAR_NAME;

/// Picks the key field `object` is identified by in the subgraph of `directive`.
///
/// An explicit `key` argument is used verbatim, even when it names a field set. Otherwise the
/// first field typed with the `ID` scalar (at any wrapping) is the key.
pub(crate) fn resolve_key<'doc>(
    context: &Context<'_>,
    object: &'doc ObjectType,
    directive: &TypeDirectiveArguments<'doc>,
) -> Result<&'doc str, GenerationError> {
    if let Some(key) = directive.key {
        return Ok(key);
    }
    // Fields of unsupported shapes are left to the builder to reject or warn about.
    let id_field = object.fields.iter().find(|(_, field)| {
        let base = field.ty.inner_named_type();
        *base == ID_SCALAR_NAME && context.schema.get_scalar(base).is_some()
    });
    if let Some((field_name, _)) = id_field {
        tracing::trace!(type_name = %object.name, key = %field_name, "inferred key from ID field");
        return Ok(field_name.as_str());
    }
    Err(GenerationError::NoKey {
        type_name: object.name.clone(),
        graph: directive.graph.clone(),
    })
}

/// One key per subgraph that claims `object`, in `@join__type` order.
///
/// When a subgraph claims the type more than once, its first key is kept.
pub(crate) fn keys_by_subgraph(
    context: &Context<'_>,
    object: &ObjectType,
    type_directives: &[TypeDirectiveArguments<'_>],
) -> Result<IndexMap<Name, String>, PlanError> {
    let mut keys = IndexMap::with_capacity(type_directives.len());
    for directive in type_directives {
        let graph = context.check_graph(directive.graph, || object.name.to_string())?;
        if let Some(kept) = keys.get(graph) {
            tracing::debug!(
                type_name = %object.name,
                %graph,
                kept = %kept,
                ignored = ?directive.key,
                "subgraph declares several keys, keeping the first"
            );
            continue;
        }
        let key = resolve_key(context, object, directive)?;
        keys.insert(graph.clone(), key.to_owned());
    }
    Ok(keys)
}
