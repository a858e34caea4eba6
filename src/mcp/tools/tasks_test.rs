//! Tests for Task MCP tools

use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::mcp::tools::tasks::{
    AddTaskDependenciesParams, CreateTaskParams, DeleteTaskParams, GetTaskParams,
    ListTasksParams, MoveTaskToPhaseParams, TaskMembersParams, UpdateTaskParams,
};
use crate::test_upstream::{MockUpstream, text_of};

#[tokio::test]
async fn test_create_task_sends_minimal_body() {
    let upstream = MockUpstream::json(
        201,
        json!({"taskId": 55, "taskName": "Kickoff", "status": {"label": "Not Started"}}),
    )
    .await;
    let server = upstream.server();

    let result = server
        .create_task(Parameters(CreateTaskParams {
            project_id: "100".to_string(),
            task_name: "Kickoff".to_string(),
            ..Default::default()
        }))
        .await
        .expect("create_task should not fail at the protocol level");
    let text = text_of(result);

    let request = upstream.only_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/tasks");
    assert_eq!(
        request.body,
        Some(json!({"project": {"projectId": 100}, "taskName": "Kickoff"}))
    );
    assert_eq!(request.api_key.as_deref(), Some("test-key"));

    assert!(text.starts_with("Task created:\n"));
    assert!(text.contains("Task: Kickoff"));
    assert!(text.contains("  ID: 55"));
    assert!(text.contains("  Status: Not Started"));
}

#[tokio::test]
async fn test_create_task_full_body() {
    let upstream = MockUpstream::json(200, json!({"data": {"taskId": 9}})).await;

    let text = text_of(
        upstream
            .server()
            .create_task(Parameters(CreateTaskParams {
                project_id: "100".to_string(),
                task_name: " Build ".to_string(),
                description: "Do it".to_string(),
                start_date: "2025-01-01".to_string(),
                due_date: "2025-01-31".to_string(),
                effort_minutes: "90".to_string(),
                task_type: "milestone".to_string(),
                phase_id: "7".to_string(),
                parent_task_id: "3".to_string(),
            }))
            .await
            .unwrap(),
    );

    assert_eq!(
        upstream.only_request().body,
        Some(json!({
            "project": {"projectId": 100},
            "taskName": "Build",
            "taskDescription": "Do it",
            "startDate": "2025-01-01",
            "dueDate": "2025-01-31",
            "effortInMinutes": 90,
            "type": "MILESTONE",
            "phase": {"phaseId": 7},
            "parent": {"taskId": 3}
        }))
    );
    assert!(text.contains("  ID: 9"));
}

#[tokio::test]
async fn test_create_task_rejects_unknown_type() {
    let upstream = MockUpstream::json(200, json!({})).await;

    let text = text_of(
        upstream
            .server()
            .create_task(Parameters(CreateTaskParams {
                project_id: "1".to_string(),
                task_name: "x".to_string(),
                task_type: "subtask".to_string(),
                ..Default::default()
            }))
            .await
            .unwrap(),
    );

    assert_eq!(
        text,
        "Error: Invalid task_type 'subtask'. Valid types are: TASK, MILESTONE (use parent_task_id for subtasks)"
    );
    assert_eq!(upstream.hits(), 0);
}

#[tokio::test]
async fn test_create_task_requires_fields_before_credential() {
    let upstream = MockUpstream::json(200, json!({})).await;
    let server = upstream.server_without_key();

    let text = text_of(
        server
            .create_task(Parameters(CreateTaskParams {
                project_id: "1".to_string(),
                ..Default::default()
            }))
            .await
            .unwrap(),
    );
    assert_eq!(text, "Error: task_name is required");

    let text = text_of(
        server
            .create_task(Parameters(CreateTaskParams {
                project_id: "1".to_string(),
                task_name: "x".to_string(),
                ..Default::default()
            }))
            .await
            .unwrap(),
    );
    assert_eq!(text, "Error: ROCKETLANE_API_KEY not configured");
    assert_eq!(upstream.hits(), 0);
}

#[tokio::test]
async fn test_get_task_blank_id_makes_no_call() {
    let upstream = MockUpstream::json(200, json!({})).await;

    let text = text_of(
        upstream
            .server()
            .get_task(Parameters(GetTaskParams {
                task_id: "   ".to_string(),
            }))
            .await
            .unwrap(),
    );

    assert!(text.starts_with("Error:"));
    assert_eq!(text, "Error: task_id is required");
    assert_eq!(upstream.hits(), 0);
}

#[tokio::test]
async fn test_get_task_renders_record() {
    let upstream = MockUpstream::json(
        200,
        json!({
            "taskId": 12,
            "taskName": "Review",
            "progress": 40,
            "assignees": [{"firstName": "Ada", "lastName": "Lovelace"}]
        }),
    )
    .await;

    let text = text_of(
        upstream
            .server()
            .get_task(Parameters(GetTaskParams {
                task_id: "12".to_string(),
            }))
            .await
            .unwrap(),
    );

    let request = upstream.only_request();
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/tasks/12");
    assert!(text.starts_with("Task retrieved:\nTask: Review"));
    assert!(text.contains("  Progress: 40%"));
    assert!(text.contains("  Assignees: Ada Lovelace"));
}

#[tokio::test]
async fn test_get_task_non_numeric_id() {
    let upstream = MockUpstream::json(200, json!({})).await;

    let text = text_of(
        upstream
            .server()
            .get_task(Parameters(GetTaskParams {
                task_id: "abc".to_string(),
            }))
            .await
            .unwrap(),
    );

    assert!(text.starts_with("Error: invalid literal"));
    assert_eq!(upstream.hits(), 0);
}

#[tokio::test]
async fn test_get_task_upstream_error_is_verbatim() {
    let upstream = MockUpstream::start(404, r#"{"message":"Task not found"}"#).await;

    let text = text_of(
        upstream
            .server()
            .get_task(Parameters(GetTaskParams {
                task_id: "404".to_string(),
            }))
            .await
            .unwrap(),
    );

    assert_eq!(text, r#"API Error: 404 - {"message":"Task not found"}"#);
}

#[tokio::test]
async fn test_get_task_logical_error_on_200() {
    let upstream =
        MockUpstream::json(200, json!({"errors": [{"errorMessage": "Task is archived"}]})).await;

    let text = text_of(
        upstream
            .server()
            .get_task(Parameters(GetTaskParams {
                task_id: "1".to_string(),
            }))
            .await
            .unwrap(),
    );

    assert_eq!(text, "API Error: Task is archived");
}

#[tokio::test]
async fn test_update_task_rejects_bad_progress() {
    let upstream = MockUpstream::json(200, json!({})).await;

    let text = text_of(
        upstream
            .server()
            .update_task(Parameters(UpdateTaskParams {
                task_id: "5".to_string(),
                progress: "abc".to_string(),
                ..Default::default()
            }))
            .await
            .unwrap(),
    );

    assert!(text.starts_with("Error: invalid literal"));
    assert!(text.contains("progress"));
    assert_eq!(upstream.hits(), 0);
}

#[tokio::test]
async fn test_update_task_requires_a_change() {
    let upstream = MockUpstream::json(200, json!({})).await;

    let text = text_of(
        upstream
            .server()
            .update_task(Parameters(UpdateTaskParams {
                task_id: "5".to_string(),
                ..Default::default()
            }))
            .await
            .unwrap(),
    );

    assert_eq!(text, "Error: At least one field to update is required");
    assert_eq!(upstream.hits(), 0);
}

#[tokio::test]
async fn test_update_task_body() {
    let upstream = MockUpstream::json(200, json!({"taskId": 5, "taskName": "Renamed"})).await;

    let text = text_of(
        upstream
            .server()
            .update_task(Parameters(UpdateTaskParams {
                task_id: "5".to_string(),
                task_name: "Renamed".to_string(),
                progress: "80".to_string(),
                status_value: "3".to_string(),
                ..Default::default()
            }))
            .await
            .unwrap(),
    );

    let request = upstream.only_request();
    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, "/tasks/5");
    assert_eq!(
        request.body,
        Some(json!({"taskName": "Renamed", "progress": 80, "status": {"value": 3}}))
    );
    assert!(text.starts_with("Task updated:\nTask: Renamed"));
}

#[tokio::test]
async fn test_delete_task_no_content() {
    let upstream = MockUpstream::start(204, "").await;

    let text = text_of(
        upstream
            .server()
            .delete_task(Parameters(DeleteTaskParams {
                task_id: "77".to_string(),
            }))
            .await
            .unwrap(),
    );

    assert_eq!(upstream.only_request().method, "DELETE");
    assert_eq!(text, "Task 77 deleted successfully");
}

#[tokio::test]
async fn test_delete_task_with_body() {
    let upstream = MockUpstream::json(200, json!({"taskId": 77})).await;

    let text = text_of(
        upstream
            .server()
            .delete_task(Parameters(DeleteTaskParams {
                task_id: "77".to_string(),
            }))
            .await
            .unwrap(),
    );

    assert_eq!(text, "Task 77 deleted");
}

#[tokio::test]
async fn test_list_tasks_empty() {
    let upstream = MockUpstream::json(200, json!({"data": []})).await;

    let text = text_of(
        upstream
            .server()
            .list_tasks(Parameters(ListTasksParams::default()))
            .await
            .unwrap(),
    );

    assert_eq!(text, "No tasks found");
    assert_eq!(upstream.only_request().query.as_deref(), Some("pageSize=50"));
}

#[tokio::test]
async fn test_list_tasks_filters_and_render() {
    let upstream = MockUpstream::json(
        200,
        json!({"data": [
            {"taskId": 1, "taskName": "A"},
            "garbage",
            {"taskId": 2, "taskName": "B"}
        ]}),
    )
    .await;

    let text = text_of(
        upstream
            .server()
            .list_tasks(Parameters(ListTasksParams {
                project_id: "100".to_string(),
                phase_id: "7".to_string(),
                status: "Completed".to_string(),
                limit: "10".to_string(),
            }))
            .await
            .unwrap(),
    );

    assert_eq!(
        upstream.only_request().query.as_deref(),
        Some("pageSize=10&projectId.eq=100&phaseId.eq=7&status.eq=Completed")
    );
    assert!(text.starts_with("Found 2 task(s):\n"));
    assert!(text.contains("Task: A"));
    assert!(text.contains("Task: B"));
}

#[tokio::test]
async fn test_list_tasks_logical_error() {
    let upstream = MockUpstream::json(200, json!({"errors": [{"errorMessage": "X"}]})).await;

    let text = text_of(
        upstream
            .server()
            .list_tasks(Parameters(ListTasksParams::default()))
            .await
            .unwrap(),
    );

    assert_eq!(text, "API Error: X");
}

#[tokio::test]
async fn test_list_tasks_without_key() {
    let upstream = MockUpstream::json(200, json!({"data": []})).await;

    let text = text_of(
        upstream
            .server_without_key()
            .list_tasks(Parameters(ListTasksParams::default()))
            .await
            .unwrap(),
    );

    assert_eq!(text, "Error: ROCKETLANE_API_KEY not configured");
    assert_eq!(upstream.hits(), 0);
}

#[tokio::test]
async fn test_add_task_assignees() {
    let upstream = MockUpstream::json(200, json!({})).await;

    let text = text_of(
        upstream
            .server()
            .add_task_assignees(Parameters(TaskMembersParams {
                task_id: "4".to_string(),
                user_emails: "a@x.com, b@x.com".to_string(),
            }))
            .await
            .unwrap(),
    );

    let request = upstream.only_request();
    assert_eq!(request.path, "/tasks/4/assignees");
    assert_eq!(
        request.body,
        Some(json!({"assignees": [{"emailId": "a@x.com"}, {"emailId": "b@x.com"}]}))
    );
    assert_eq!(text, "Assignees added to task 4: a@x.com, b@x.com");
}

#[tokio::test]
async fn test_add_task_assignees_requires_emails() {
    let upstream = MockUpstream::json(200, json!({})).await;

    let text = text_of(
        upstream
            .server()
            .add_task_assignees(Parameters(TaskMembersParams {
                task_id: "4".to_string(),
                user_emails: " , ".to_string(),
            }))
            .await
            .unwrap(),
    );

    assert_eq!(text, "Error: user_emails is required (comma-separated)");
    assert_eq!(upstream.hits(), 0);
}

#[tokio::test]
async fn test_remove_task_assignees() {
    let upstream = MockUpstream::start(204, "").await;

    let text = text_of(
        upstream
            .server()
            .remove_task_assignees(Parameters(TaskMembersParams {
                task_id: "4".to_string(),
                user_emails: "a@x.com".to_string(),
            }))
            .await
            .unwrap(),
    );

    let request = upstream.only_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/tasks/4/assignees/remove");
    assert_eq!(text, "Assignees removed from task 4: a@x.com");
}

#[tokio::test]
async fn test_add_task_followers() {
    let upstream = MockUpstream::json(200, json!({})).await;

    let text = text_of(
        upstream
            .server()
            .add_task_followers(Parameters(TaskMembersParams {
                task_id: "4".to_string(),
                user_emails: "c@x.com".to_string(),
            }))
            .await
            .unwrap(),
    );

    let request = upstream.only_request();
    assert_eq!(request.path, "/tasks/4/followers");
    assert_eq!(
        request.body,
        Some(json!({"followers": [{"emailId": "c@x.com"}]}))
    );
    assert_eq!(text, "Followers added to task 4: c@x.com");
}

#[tokio::test]
async fn test_add_task_dependencies() {
    let upstream = MockUpstream::json(200, json!({})).await;

    let text = text_of(
        upstream
            .server()
            .add_task_dependencies(Parameters(AddTaskDependenciesParams {
                task_id: "4".to_string(),
                dependency_task_ids: "1, 2".to_string(),
            }))
            .await
            .unwrap(),
    );

    let request = upstream.only_request();
    assert_eq!(request.path, "/tasks/4/dependencies");
    assert_eq!(
        request.body,
        Some(json!({"dependencies": [{"taskId": 1}, {"taskId": 2}]}))
    );
    assert_eq!(text, "Dependencies added to task 4: 1, 2");
}

#[tokio::test]
async fn test_add_task_dependencies_rejects_non_numeric_id() {
    let upstream = MockUpstream::json(200, json!({})).await;

    let text = text_of(
        upstream
            .server()
            .add_task_dependencies(Parameters(AddTaskDependenciesParams {
                task_id: "4".to_string(),
                dependency_task_ids: "1, two".to_string(),
            }))
            .await
            .unwrap(),
    );

    assert!(text.starts_with("Error: invalid literal"));
    assert_eq!(upstream.hits(), 0);
}

#[tokio::test]
async fn test_move_task_to_phase() {
    let upstream = MockUpstream::json(200, json!({"taskId": 4})).await;

    let text = text_of(
        upstream
            .server()
            .move_task_to_phase(Parameters(MoveTaskToPhaseParams {
                task_id: "4".to_string(),
                phase_id: "9".to_string(),
            }))
            .await
            .unwrap(),
    );

    let request = upstream.only_request();
    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, "/tasks/4");
    assert_eq!(request.body, Some(json!({"phase": {"phaseId": 9}})));
    assert_eq!(text, "Task 4 moved to phase 9");
}

#[tokio::test]
async fn test_action_logical_error_on_200() {
    let upstream =
        MockUpstream::json(200, json!({"errors": [{"errorMessage": "Phase is locked"}]})).await;

    let text = text_of(
        upstream
            .server()
            .move_task_to_phase(Parameters(MoveTaskToPhaseParams {
                task_id: "4".to_string(),
                phase_id: "9".to_string(),
            }))
            .await
            .unwrap(),
    );

    assert_eq!(text, "API Error: Phase is locked");
}
