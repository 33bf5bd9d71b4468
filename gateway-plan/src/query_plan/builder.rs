use apollo_compiler::Name;
use apollo_compiler::schema::ObjectType;
use indexmap::IndexMap;

use super::FieldPlan;
use super::QueryPlan;
use super::TypePlanEntry;
use crate::context::Context;
use crate::diagnostics::PlanWarning;
use crate::directives::join_type_directives;
use crate::error::GenerationError;
use crate::error::PlanError;
use crate::error::ValidationError;
use crate::keys::keys_by_subgraph;
use crate::ownership::resolve_ownership;
use crate::types::TypeDescriptor;

/// Builds the plan entry of every entity, in catalog order.
#[tracing::instrument(level = "trace", skip_all)]
pub(crate) fn build_query_plan(context: &Context<'_>) -> Result<QueryPlan, PlanError> {
    let mut builder = QueryPlanBuilder {
        context,
        entries: IndexMap::with_capacity(context.entities.len()),
        warnings: Vec::new(),
    };
    for type_name in context.entities.iter() {
        let Some(object) = context.schema.get_object(type_name) else {
            continue;
        };
        builder.add_entity(object)?;
    }
    tracing::debug!(
        entities = builder.entries.len(),
        warnings = builder.warnings.len(),
        "built query plan"
    );
    Ok(QueryPlan {
        entries: builder.entries,
        warnings: builder.warnings,
    })
}

struct QueryPlanBuilder<'ctx, 'schema> {
    context: &'ctx Context<'schema>,
    entries: IndexMap<Name, TypePlanEntry>,
    warnings: Vec<PlanWarning>,
}

impl QueryPlanBuilder<'_, '_> {
    fn add_entity(&mut self, object: &ObjectType) -> Result<(), PlanError> {
        let type_directives = join_type_directives(object)?;
        let keys = keys_by_subgraph(self.context, object, &type_directives)?;

        let mut fields = Vec::with_capacity(object.fields.len());
        for (field_name, field) in &object.fields {
            let ownership =
                resolve_ownership(self.context, &object.name, field, &type_directives)?;
            let Some(owner) = ownership.graph() else {
                if keys.values().any(|key| key == field_name.as_str()) {
                    tracing::trace!(type_name = %object.name, %field_name, "skipping shared key field");
                } else {
                    self.unresolved(&object.name, field_name)?;
                }
                continue;
            };
            if keys.get(owner).is_some_and(|key| key == field_name.as_str()) {
                tracing::trace!(type_name = %object.name, %field_name, %owner, "skipping key field");
                continue;
            }
            let ty = TypeDescriptor::resolve(self.context.schema, &field.ty).map_err(|source| {
                GenerationError::UnsupportedType {
                    coordinate: format!("{}.{field_name}", object.name),
                    source,
                }
            })?;
            tracing::trace!(type_name = %object.name, %field_name, %owner, ?ownership, "planned field");
            fields.push(FieldPlan {
                name: field_name.clone(),
                ty,
                owning_subgraph: owner.clone(),
            });
        }

        self.entries.insert(
            object.name.clone(),
            TypePlanEntry {
                type_name: object.name.clone(),
                keys_by_subgraph: keys,
                fields,
            },
        );
        Ok(())
    }

    fn unresolved(&mut self, type_name: &Name, field_name: &Name) -> Result<(), ValidationError> {
        if self.context.config.strict_ownership {
            return Err(ValidationError::UnresolvedFieldOwnership {
                type_name: type_name.clone(),
                field_name: field_name.clone(),
            });
        }
        tracing::warn!(
            %type_name,
            %field_name,
            "no subgraph owns this field, leaving it out of the plan"
        );
        self.warnings.push(PlanWarning::UnresolvedFieldOwnership {
            type_name: type_name.clone(),
            field_name: field_name.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use apollo_compiler::Schema;
    use apollo_compiler::name;
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    use super::*;
    use crate::config::PlannerConfig;
    use crate::test_support::parse_with_graphs;

    const MULTI_OWNER: &str = r#"
        type Query @join__type(graph: ASTRONAUTS) @join__type(graph: MISSIONS) {
          missions: [Mission] @join__field(graph: MISSIONS)
        }

        type Mission
          @join__type(graph: ASTRONAUTS, key: "id")
          @join__type(graph: MISSIONS, key: "id")
        {
          id: Int!
          designation: String! @join__field(graph: MISSIONS)
          crew: [Astronaut!] @join__field(graph: ASTRONAUTS)
          notes: String
        }

        type Astronaut @join__type(graph: ASTRONAUTS) {
          id: ID!
          name: String!
        }
    "#;

    fn plan(schema: &Schema, config: PlannerConfig) -> Result<QueryPlan, PlanError> {
        let context = Context::new(schema, config).unwrap();
        build_query_plan(&context)
    }

    fn field_names(entry: &TypePlanEntry) -> Vec<&str> {
        entry.fields.iter().map(|field| field.name.as_str()).collect()
    }

    #[test]
    fn one_entry_per_entity_in_declaration_order() {
        let schema = parse_with_graphs(MULTI_OWNER);
        let plan = plan(&schema, PlannerConfig::default()).unwrap();
        let names: Vec<&str> = plan.iter().map(|entry| entry.type_name.as_str()).collect();
        assert_eq!(names, ["Mission", "Astronaut"]);
        assert!(plan.get("Query").is_none());
    }

    #[traced_test]
    #[test]
    fn unowned_field_is_dropped_with_a_warning() {
        let schema = parse_with_graphs(MULTI_OWNER);
        let plan = plan(&schema, PlannerConfig::default()).unwrap();

        let mission = plan.get("Mission").unwrap();
        assert_eq!(field_names(mission), ["designation", "crew"]);
        assert_eq!(mission.field("crew").unwrap().owning_subgraph, name!("ASTRONAUTS"));
        assert_eq!(
            plan.warnings(),
            [PlanWarning::UnresolvedFieldOwnership {
                type_name: name!("Mission"),
                field_name: name!("notes"),
            }]
        );
        assert!(logs_contain("no subgraph owns this field"));
        assert!(logs_contain("field_name=notes"));
    }

    #[test]
    fn strict_ownership_rejects_unowned_fields() {
        let schema = parse_with_graphs(MULTI_OWNER);
        let error = plan(
            &schema,
            PlannerConfig {
                strict_ownership: true,
            },
        )
        .unwrap_err();
        assert!(matches!(
            error,
            PlanError::Validation(ValidationError::UnresolvedFieldOwnership { .. })
        ));
        assert_eq!(error.to_string(), "no subgraph owns field `Mission.notes`");
        assert!(error.is_bad_input());
    }

    #[test]
    fn key_fields_are_not_repeated() {
        let schema = parse_with_graphs(MULTI_OWNER);
        let plan = plan(&schema, PlannerConfig::default()).unwrap();

        // Single owner: `id` resolves to ASTRONAUTS, whose key it is.
        let astronaut = plan.get("Astronaut").unwrap();
        assert_eq!(astronaut.key("ASTRONAUTS"), Some("id"));
        assert_eq!(field_names(astronaut), ["name"]);

        // Multi owner: `id` is unowned but is the key of both subgraphs, so it raises no warning.
        let mission = plan.get("Mission").unwrap();
        assert!(mission.field("id").is_none());
        assert_eq!(plan.warnings().len(), 1);
    }

    #[test]
    fn field_named_like_another_subgraph_key_is_kept() {
        let schema = parse_with_graphs(
            r#"
            type Query { ping: String }
            type Mission
              @join__type(graph: MISSIONS, key: "id")
              @join__type(graph: ASTRONAUTS, key: "designation")
            {
              id: Int! @join__field(graph: MISSIONS)
              designation: String! @join__field(graph: MISSIONS)
            }
            "#,
        );
        let plan = plan(&schema, PlannerConfig::default()).unwrap();
        let mission = plan.get("Mission").unwrap();
        assert_eq!(field_names(mission), ["designation"]);
        assert_eq!(mission.field("designation").unwrap().owning_subgraph, name!("MISSIONS"));
    }

    #[test]
    fn unsupported_field_type_aborts() {
        let schema = parse_with_graphs(
            r#"
            type Query { ping: String }
            type Mission @join__type(graph: MISSIONS, key: "id") {
              id: Int!
              checkpoints: [[String]]
            }
            "#,
        );
        let error = plan(&schema, PlannerConfig::default()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "cannot plan `Mission.checkpoints`: unsupported type `[[String]]`: nested lists are not supported"
        );
        assert!(!error.is_bad_input());
    }
}
