//! Tests for project MCP tools

use crate::mcp::tools::projects::*;
use crate::testing::{MockVikunja, result_text};
use axum::http::Method;
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

#[tokio::test]
async fn test_list_projects_empty() {
    let mock = MockVikunja::start().await;
    mock.on(Method::GET, "/projects", 200, json!([]));

    let result = mock
        .server()
        .list_projects(Parameters(ListProjectsParams::default()))
        .await
        .unwrap();

    assert_eq!(result_text(&result), "No projects found.");
}

#[tokio::test]
async fn test_list_projects_formats_lines() {
    let mock = MockVikunja::start().await;
    mock.on(
        Method::GET,
        "/projects",
        200,
        json!([
            {"id": 1, "title": "Inbox"},
            {"id": 2, "title": "Old", "is_archived": true},
            {"id": 3, "title": "Child", "parent_project_id": 1}
        ]),
    );

    let result = mock
        .server()
        .list_projects(Parameters(ListProjectsParams {
            is_archived: Some(true),
            ..Default::default()
        }))
        .await
        .unwrap();

    assert_eq!(
        result_text(&result),
        "3 project(s):\n[1] Inbox\n[2] Old [ARCHIVED]\n[3] Child (child of #1)"
    );
    assert_eq!(
        mock.single_request().query.as_deref(),
        Some("is_archived=true")
    );
}

#[tokio::test]
async fn test_get_project_lists_views() {
    let mock = MockVikunja::start().await;
    mock.on(
        Method::GET,
        "/projects/1",
        200,
        json!({
            "id": 1,
            "title": "Inbox",
            "description": "Everything lands here",
            "views": [{"id": 10, "title": "List", "view_kind": "list"}]
        }),
    );

    let result = mock
        .server()
        .get_project(Parameters(GetProjectParams { id: 1 }))
        .await
        .unwrap();

    let text = result_text(&result);
    assert!(text.starts_with("[1] Inbox\nEverything lands here"));
    assert!(text.contains("[10] \"List\" (list)"));
}

#[tokio::test]
async fn test_create_project() {
    let mock = MockVikunja::start().await;
    mock.on(
        Method::PUT,
        "/projects",
        201,
        json!({"id": 5, "title": "Garden"}),
    );

    let result = mock
        .server()
        .create_project(Parameters(CreateProjectParams {
            title: "Garden".to_string(),
            description: None,
            parent_project_id: Some(1),
            hex_color: None,
        }))
        .await
        .unwrap();

    assert_eq!(result_text(&result), "Created project [5] \"Garden\"");
    assert_eq!(
        mock.single_request().json(),
        json!({"title": "Garden", "parent_project_id": 1})
    );
}

#[tokio::test]
async fn test_create_project_rejects_blank_title_without_request() {
    let mock = MockVikunja::start().await;

    let err = mock
        .server()
        .create_project(Parameters(CreateProjectParams {
            title: "  ".to_string(),
            description: None,
            parent_project_id: None,
            hex_color: None,
        }))
        .await
        .unwrap_err();

    assert!(err.message.contains("title"));
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn test_update_project_only_sends_supplied_fields() {
    let mock = MockVikunja::start().await;
    mock.on(
        Method::POST,
        "/projects/5",
        200,
        json!({"id": 5, "title": "Garden 2"}),
    );

    let result = mock
        .server()
        .update_project(Parameters(UpdateProjectParams {
            id: 5,
            title: Some("Garden 2".to_string()),
            ..Default::default()
        }))
        .await
        .unwrap();

    assert_eq!(result_text(&result), "Updated project [5] \"Garden 2\"");
    assert_eq!(mock.single_request().json(), json!({"title": "Garden 2"}));
}

#[tokio::test]
async fn test_delete_project() {
    let mock = MockVikunja::start().await;
    mock.on(
        Method::DELETE,
        "/projects/5",
        200,
        json!({"message": "Successfully deleted."}),
    );

    let result = mock
        .server()
        .delete_project(Parameters(DeleteProjectParams { id: 5 }))
        .await
        .unwrap();

    assert_eq!(result_text(&result), "Deleted project #5");
}

#[tokio::test]
async fn test_delete_project_surfaces_api_error() {
    let mock = MockVikunja::start().await;
    mock.on_raw(Method::DELETE, "/projects/5", 403, "forbidden");

    let err = mock
        .server()
        .delete_project(Parameters(DeleteProjectParams { id: 5 }))
        .await
        .unwrap_err();

    assert!(err.message.contains("403"));
    assert!(err.message.contains("forbidden"));
}
