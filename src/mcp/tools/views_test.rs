use crate::mcp::tools::views::*;
use crate::client::models::ViewKind;
use crate::testing::{MockVikunja, call_tool, result_text};
use axum::http::Method;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::ErrorCode;
use serde_json::json;

#[tokio::test]
async fn test_list_views_empty() {
    let mock = MockVikunja::start().await;
    mock.on(Method::GET, "/projects/1/views", 200, json!([]));

    let result = mock
        .server()
        .list_views(Parameters(ListViewsParams { project_id: 1 }))
        .await
        .unwrap();

    assert_eq!(result_text(&result), "No views found for this project.");
}

#[tokio::test]
async fn test_list_views() {
    let mock = MockVikunja::start().await;
    mock.on(
        Method::GET,
        "/projects/1/views",
        200,
        json!([
            {"id": 1, "title": "List", "view_kind": "list"},
            {"id": 4, "title": "Board", "view_kind": "kanban", "default_bucket_id": 7}
        ]),
    );

    let result = mock
        .server()
        .list_views(Parameters(ListViewsParams { project_id: 1 }))
        .await
        .unwrap();

    assert_eq!(
        result_text(&result),
        "2 view(s) in project #1:\n[1] \"List\" (list)\n[4] \"Board\" (kanban) default_bucket:#7"
    );
}

#[tokio::test]
async fn test_get_view_includes_filter() {
    let mock = MockVikunja::start().await;
    mock.on(
        Method::GET,
        "/projects/1/views/2",
        200,
        json!({"id": 2, "title": "Open", "view_kind": "table", "filter": "done = false"}),
    );

    let result = mock
        .server()
        .get_view(Parameters(ViewRefParams {
            project_id: 1,
            view_id: 2,
        }))
        .await
        .unwrap();

    assert_eq!(
        result_text(&result),
        "[2] \"Open\" (table)\nFilter: done = false"
    );
}

#[tokio::test]
async fn test_create_view_sends_kind_name() {
    let mock = MockVikunja::start().await;
    mock.on(
        Method::PUT,
        "/projects/1/views",
        200,
        json!({"id": 9, "title": "Board", "view_kind": "kanban"}),
    );

    let result = mock
        .server()
        .create_view(Parameters(CreateViewParams {
            project_id: 1,
            title: "Board".to_string(),
            view_kind: ViewKind::Kanban,
            filter: None,
            bucket_configuration_mode: None,
        }))
        .await
        .unwrap();

    assert_eq!(result_text(&result), "Created view [9] \"Board\" (kanban) in project #1");
    assert_eq!(
        mock.single_request().json(),
        json!({"title": "Board", "view_kind": "kanban"})
    );
}

#[tokio::test]
async fn test_create_view_rejects_unknown_kind() {
    let mock = MockVikunja::start().await;
    mock.on(
        Method::PUT,
        "/projects/1/views",
        200,
        json!({"id": 9, "title": "Board", "view_kind": "kanban"}),
    );

    let response = call_tool(
        mock.server(),
        "vikunja_create_view",
        json!({"project_id": 1, "title": "Board", "view_kind": "calendar"}),
    )
    .await;

    assert_eq!(response["error"]["code"], json!(ErrorCode::INVALID_PARAMS.0));
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn test_update_view_partial() {
    let mock = MockVikunja::start().await;
    mock.on(
        Method::POST,
        "/projects/1/views/4",
        200,
        json!({"id": 4, "title": "Board", "view_kind": "kanban", "done_bucket_id": 12}),
    );

    let result = mock
        .server()
        .update_view(Parameters(UpdateViewParams {
            project_id: 1,
            view_id: 4,
            done_bucket_id: Some(12),
            ..Default::default()
        }))
        .await
        .unwrap();

    assert_eq!(result_text(&result), "Updated view [4] \"Board\"");
    assert_eq!(mock.single_request().json(), json!({"done_bucket_id": 12}));
}

#[tokio::test]
async fn test_delete_view() {
    let mock = MockVikunja::start().await;
    mock.on(Method::DELETE, "/projects/1/views/4", 204, json!(null));

    let result = mock
        .server()
        .delete_view(Parameters(ViewRefParams {
            project_id: 1,
            view_id: 4,
        }))
        .await
        .unwrap();

    assert_eq!(result_text(&result), "Deleted view #4 from project #1");
}
