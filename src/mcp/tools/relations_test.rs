use crate::client::models::RelationKind;
use crate::mcp::tools::relations::*;
use crate::testing::{MockVikunja, call_tool, result_text};
use axum::http::Method;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::ErrorCode;
use serde_json::json;

#[tokio::test]
async fn test_list_relations_empty() {
    let mock = MockVikunja::start().await;
    mock.on(Method::GET, "/tasks/1", 200, json!({"id": 1, "title": "Solo"}));

    let result = mock
        .server()
        .list_relations(Parameters(ListRelationsParams { task_id: 1 }))
        .await
        .unwrap();

    assert_eq!(result_text(&result), "No relations on this task.");
}

#[tokio::test]
async fn test_list_relations_from_related_tasks() {
    let mock = MockVikunja::start().await;
    mock.on(
        Method::GET,
        "/tasks/1",
        200,
        json!({
            "id": 1,
            "title": "Release",
            "related_tasks": {
                "blocked": [{"id": 2, "title": "Tests"}],
                "subtask": [{"id": 3, "title": "Changelog"}]
            }
        }),
    );

    let result = mock
        .server()
        .list_relations(Parameters(ListRelationsParams { task_id: 1 }))
        .await
        .unwrap();

    assert_eq!(
        result_text(&result),
        "2 relation(s) on task #1:\n\
         task #1 -[blocked]-> task #2\n\
         task #1 -[subtask]-> task #3"
    );
}

#[tokio::test]
async fn test_create_relation() {
    let mock = MockVikunja::start().await;
    mock.on(
        Method::PUT,
        "/tasks/1/relations",
        201,
        json!({"task_id": 1, "other_task_id": 2, "relation_kind": "blocking"}),
    );

    let result = mock
        .server()
        .create_relation(Parameters(RelationParams {
            task_id: 1,
            other_task_id: 2,
            relation_kind: RelationKind::Blocking,
        }))
        .await
        .unwrap();

    assert_eq!(
        result_text(&result),
        "Created relation: task #1 -[blocking]-> task #2"
    );
    assert_eq!(
        mock.single_request().json(),
        json!({"task_id": 1, "other_task_id": 2, "relation_kind": "blocking"})
    );
}

#[tokio::test]
async fn test_create_relation_unknown_kind_never_reaches_server() {
    let mock = MockVikunja::start().await;
    mock.on(
        Method::PUT,
        "/tasks/1/relations",
        201,
        json!({"task_id": 1, "other_task_id": 2, "relation_kind": "blocking"}),
    );

    let response = call_tool(
        mock.server(),
        "vikunja_create_relation",
        json!({"task_id": 1, "other_task_id": 2, "relation_kind": "enables"}),
    )
    .await;

    assert_eq!(response["error"]["code"], json!(ErrorCode::INVALID_PARAMS.0));
    assert!(response.get("result").is_none());
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn test_create_relation_dispatched_over_mcp() {
    let mock = MockVikunja::start().await;
    mock.on(
        Method::PUT,
        "/tasks/1/relations",
        201,
        json!({"task_id": 1, "other_task_id": 2, "relation_kind": "blocking"}),
    );

    let response = call_tool(
        mock.server(),
        "vikunja_create_relation",
        json!({"task_id": 1, "other_task_id": 2, "relation_kind": "blocking"}),
    )
    .await;

    assert_eq!(
        response["result"]["content"][0]["text"],
        "Created relation: task #1 -[blocking]-> task #2"
    );
    assert_eq!(mock.request_count(), 1);
}

#[tokio::test]
async fn test_update_relation_deletes_then_creates() {
    let mock = MockVikunja::start().await;
    mock.on(Method::DELETE, "/tasks/1/relations/related/2", 204, json!(null));
    mock.on(
        Method::PUT,
        "/tasks/1/relations",
        201,
        json!({"task_id": 1, "other_task_id": 2, "relation_kind": "precedes"}),
    );

    let result = mock
        .server()
        .update_relation(Parameters(UpdateRelationParams {
            task_id: 1,
            other_task_id: 2,
            relation_kind: RelationKind::Related,
            new_relation_kind: RelationKind::Precedes,
        }))
        .await
        .unwrap();

    assert_eq!(
        result_text(&result),
        "Updated relation: task #1 -[precedes]-> task #2"
    );
    let methods: Vec<Method> = mock.requests().into_iter().map(|r| r.method).collect();
    assert_eq!(methods, vec![Method::DELETE, Method::PUT]);
}

#[tokio::test]
async fn test_update_relation_same_kind_is_noop() {
    let mock = MockVikunja::start().await;

    let result = mock
        .server()
        .update_relation(Parameters(UpdateRelationParams {
            task_id: 1,
            other_task_id: 2,
            relation_kind: RelationKind::Related,
            new_relation_kind: RelationKind::Related,
        }))
        .await
        .unwrap();

    assert!(result_text(&result).starts_with("Relation unchanged"));
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn test_delete_relation() {
    let mock = MockVikunja::start().await;
    mock.on(
        Method::DELETE,
        "/tasks/1/relations/copiedfrom/4",
        200,
        json!({"message": "Successfully deleted."}),
    );

    let result = mock
        .server()
        .delete_relation(Parameters(RelationParams {
            task_id: 1,
            other_task_id: 4,
            relation_kind: RelationKind::CopiedFrom,
        }))
        .await
        .unwrap();

    assert_eq!(
        result_text(&result),
        "Deleted relation: task #1 -[copiedfrom]-> task #4"
    );
}
