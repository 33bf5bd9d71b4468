use apollo_compiler::Schema;
use apollo_compiler::validation::Valid;

/// The join and link definitions every composed supergraph carries, without a `join__Graph` enum.
pub(crate) const SUPERGRAPH_DEFINITIONS: &str = r#"
schema
  @link(url: "https://specs.apollo.dev/link/v1.0")
  @link(url: "https://specs.apollo.dev/join/v0.3", for: EXECUTION)
{
  query: Query
}

directive @join__enumValue(graph: join__Graph!) repeatable on ENUM_VALUE
directive @join__field(graph: join__Graph, requires: join__FieldSet, provides: join__FieldSet, type: String, external: Boolean, override: String, usedOverridden: Boolean) repeatable on FIELD_DEFINITION | INPUT_FIELD_DEFINITION
directive @join__graph(name: String!, url: String!) on ENUM_VALUE
directive @join__implements(graph: join__Graph!, interface: String!) repeatable on OBJECT | INTERFACE
directive @join__type(graph: join__Graph!, key: join__FieldSet, extension: Boolean! = false, resolvable: Boolean! = true, isInterfaceObject: Boolean! = false) repeatable on OBJECT | INTERFACE | UNION | ENUM | INPUT_OBJECT | SCALAR
directive @join__unionMember(graph: join__Graph!, member: String!) repeatable on UNION
directive @link(url: String, as: String, for: link__Purpose, import: [link__Import]) repeatable on SCHEMA

scalar join__FieldSet
scalar link__Import

enum link__Purpose {
  SECURITY
  EXECUTION
}
"#;

/// Two subgraphs, declared in this order.
pub(crate) const ASTRONAUTS_AND_MISSIONS: &str = r#"
enum join__Graph {
  ASTRONAUTS @join__graph(name: "astronauts", url: "http://localhost:4001/graphql")
  MISSIONS @join__graph(name: "missions", url: "http://localhost:4002/graphql")
}
"#;

pub(crate) fn with_supergraph_boilerplate(content: &str) -> String {
    format!("{SUPERGRAPH_DEFINITIONS}\n{ASTRONAUTS_AND_MISSIONS}\n{content}")
}

/// Parses the join definitions plus `content`, which must declare its own `join__Graph` enum.
pub(crate) fn parse_supergraph(content: &str) -> Valid<Schema> {
    Schema::parse_and_validate(format!("{SUPERGRAPH_DEFINITIONS}\n{content}"), "schema.graphql")
        .unwrap()
}

/// Parses `content` with the `ASTRONAUTS` and `MISSIONS` subgraphs declared.
pub(crate) fn parse_with_graphs(content: &str) -> Valid<Schema> {
    Schema::parse_and_validate(with_supergraph_boilerplate(content), "schema.graphql").unwrap()
}
