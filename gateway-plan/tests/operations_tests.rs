use gateway_plan::Supergraph;
use gateway_plan::error::GenerationError;
use gateway_plan::error::PlanError;
use gateway_plan::operations::OperationKind;

use crate::NO_JOIN_GRAPH;
use crate::SPACE_AGENCY;

#[test]
fn routes_queries_and_mutations() {
    let operations = Supergraph::new(SPACE_AGENCY)
        .unwrap()
        .root_operations()
        .unwrap();
    insta::assert_json_snapshot!(operations, @r###"
    {
      "queries": [
        {
          "operation": "query",
          "name": "astronaut",
          "renderedType": "Option<Astronaut>",
          "arguments": [
            {
              "name": "id",
              "type": "ID!"
            }
          ],
          "subgraph": "ASTRONAUTS"
        },
        {
          "operation": "query",
          "name": "missions",
          "renderedType": "Vec<Mission>",
          "arguments": [
            {
              "name": "status",
              "type": "MissionStatus"
            },
            {
              "name": "first",
              "type": "Int",
              "defaultValue": "20"
            }
          ],
          "subgraph": "MISSIONS"
        },
        {
          "operation": "query",
          "name": "legacyMissions",
          "renderedType": "Option<Vec<Option<Mission>>>",
          "arguments": [],
          "subgraph": "MISSIONS",
          "deprecationReason": "Use `missions`"
        }
      ],
      "mutations": [
        {
          "operation": "mutation",
          "name": "scheduleMission",
          "renderedType": "Mission",
          "arguments": [
            {
              "name": "designation",
              "type": "String!"
            },
            {
              "name": "status",
              "type": "MissionStatus",
              "defaultValue": "PLANNED"
            }
          ],
          "subgraph": "MISSIONS"
        },
        {
          "operation": "mutation",
          "name": "scrubMission",
          "renderedType": "Option<bool>",
          "arguments": [
            {
              "name": "code",
              "type": "ID!"
            }
          ],
          "subgraph": "MISSIONS",
          "deprecationReason": "No longer supported"
        },
        {
          "operation": "mutation",
          "name": "hireAstronaut",
          "renderedType": "Astronaut",
          "arguments": [
            {
              "name": "name",
              "type": "String!"
            }
          ],
          "subgraph": "ASTRONAUTS"
        }
      ]
    }
    "###);
}

#[test]
fn every_route_keeps_its_operation_kind() {
    let operations = Supergraph::new(SPACE_AGENCY)
        .unwrap()
        .root_operations()
        .unwrap();
    let kinds: Vec<OperationKind> = operations.iter().map(|route| route.operation).collect();
    assert_eq!(
        kinds,
        [
            OperationKind::Query,
            OperationKind::Query,
            OperationKind::Query,
            OperationKind::Mutation,
            OperationKind::Mutation,
            OperationKind::Mutation,
        ]
    );
}

#[test]
fn root_fields_of_a_schema_without_join_spec_are_unroutable() {
    let error = Supergraph::new(NO_JOIN_GRAPH)
        .unwrap()
        .root_operations()
        .unwrap_err();
    assert!(matches!(
        error,
        PlanError::Generation(GenerationError::UnroutableRootField { .. })
    ));
    insta::assert_snapshot!(error, @"root field `Query.astronaut` cannot be routed to any subgraph");
}
