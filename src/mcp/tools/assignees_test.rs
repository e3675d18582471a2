use crate::mcp::tools::assignees::*;
use crate::testing::{MockVikunja, result_text};
use axum::http::Method;
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

#[tokio::test]
async fn test_list_assignees_empty() {
    let mock = MockVikunja::start().await;
    mock.on(Method::GET, "/tasks/5/assignees", 200, json!(null));

    let result = mock
        .server()
        .list_assignees(Parameters(ListAssigneesParams { task_id: 5 }))
        .await
        .unwrap();

    assert_eq!(result_text(&result), "No assignees on this task.");
}

#[tokio::test]
async fn test_list_assignees() {
    let mock = MockVikunja::start().await;
    mock.on(
        Method::GET,
        "/tasks/5/assignees",
        200,
        json!([
            {"id": 1, "username": "ada", "name": "Ada Lovelace"},
            {"id": 2, "username": "bob"}
        ]),
    );

    let result = mock
        .server()
        .list_assignees(Parameters(ListAssigneesParams { task_id: 5 }))
        .await
        .unwrap();

    assert_eq!(
        result_text(&result),
        "2 assignee(s) on task #5:\n[1] ada (Ada Lovelace)\n[2] bob"
    );
}

#[tokio::test]
async fn test_assign_user() {
    let mock = MockVikunja::start().await;
    mock.on(
        Method::PUT,
        "/tasks/5/assignees",
        201,
        json!({"user_id": 2, "created": "2030-01-01T00:00:00Z"}),
    );

    let result = mock
        .server()
        .assign_user(Parameters(AssigneeParams {
            task_id: 5,
            user_id: 2,
        }))
        .await
        .unwrap();

    assert_eq!(result_text(&result), "Assigned user #2 to task #5");
    assert_eq!(mock.single_request().json(), json!({"user_id": 2}));
}

#[tokio::test]
async fn test_unassign_user() {
    let mock = MockVikunja::start().await;
    mock.on(Method::DELETE, "/tasks/5/assignees/2", 204, json!(null));

    let result = mock
        .server()
        .unassign_user(Parameters(AssigneeParams {
            task_id: 5,
            user_id: 2,
        }))
        .await
        .unwrap();

    assert_eq!(result_text(&result), "Unassigned user #2 from task #5");
}
