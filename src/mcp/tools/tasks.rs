//! MCP tools for Rocketlane tasks.

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ToolError, ToolResult};
use crate::format::TASK;
use crate::gateway::ApiRequest;
use crate::mcp::RocketlaneServer;
use crate::mcp::args::{
    optional, optional_int, page_size, required, required_int, required_with_hint, split_list,
};
use crate::mcp::tools::refs::{EmailRef, PhaseRef, ProjectRef, StatusValue, TaskRef, render_single};
use crate::mcp::tools::{respond, with_body};

const TASK_TYPES: [&str; 2] = ["TASK", "MILESTONE"];

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetTaskParams {
    #[schemars(description = "Task ID")]
    #[serde(default)]
    pub task_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct CreateTaskParams {
    #[schemars(description = "Project ID the task belongs to (required)")]
    #[serde(default)]
    pub project_id: String,
    #[schemars(description = "Task name (required)")]
    #[serde(default)]
    pub task_name: String,
    #[schemars(description = "Task description")]
    #[serde(default)]
    pub description: String,
    #[schemars(description = "Start date (YYYY-MM-DD)")]
    #[serde(default)]
    pub start_date: String,
    #[schemars(description = "Due date (YYYY-MM-DD)")]
    #[serde(default)]
    pub due_date: String,
    #[schemars(description = "Planned effort in minutes")]
    #[serde(default)]
    pub effort_minutes: String,
    #[schemars(description = "Task type: TASK or MILESTONE. Use parent_task_id for subtasks.")]
    #[serde(default)]
    pub task_type: String,
    #[schemars(description = "Phase ID to place the task in")]
    #[serde(default)]
    pub phase_id: String,
    #[schemars(description = "Parent task ID, making this a subtask")]
    #[serde(default)]
    pub parent_task_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTaskParams {
    #[schemars(description = "Task ID to update (required)")]
    #[serde(default)]
    pub task_id: String,
    #[schemars(description = "New task name")]
    #[serde(default)]
    pub task_name: String,
    #[schemars(description = "New description")]
    #[serde(default)]
    pub description: String,
    #[schemars(description = "New start date (YYYY-MM-DD)")]
    #[serde(default)]
    pub start_date: String,
    #[schemars(description = "New due date (YYYY-MM-DD)")]
    #[serde(default)]
    pub due_date: String,
    #[schemars(description = "Progress percentage (0-100)")]
    #[serde(default)]
    pub progress: String,
    #[schemars(description = "Numeric status value")]
    #[serde(default)]
    pub status_value: String,
    #[schemars(description = "Phase ID to move the task to")]
    #[serde(default)]
    pub phase_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct DeleteTaskParams {
    #[schemars(description = "Task ID to delete")]
    #[serde(default)]
    pub task_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListTasksParams {
    #[schemars(description = "Filter by project ID")]
    #[serde(default)]
    pub project_id: String,
    #[schemars(description = "Filter by phase ID")]
    #[serde(default)]
    pub phase_id: String,
    #[schemars(description = "Filter by status")]
    #[serde(default)]
    pub status: String,
    #[schemars(description = "Maximum number of tasks to return (default: 50)")]
    #[serde(default)]
    pub limit: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct TaskMembersParams {
    #[schemars(description = "Task ID")]
    #[serde(default)]
    pub task_id: String,
    #[schemars(description = "Comma-separated user email addresses")]
    #[serde(default)]
    pub user_emails: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct AddTaskDependenciesParams {
    #[schemars(description = "Task ID that depends on the others")]
    #[serde(default)]
    pub task_id: String,
    #[schemars(description = "Comma-separated IDs of tasks that must complete first")]
    #[serde(default)]
    pub dependency_task_ids: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct MoveTaskToPhaseParams {
    #[schemars(description = "Task ID to move")]
    #[serde(default)]
    pub task_id: String,
    #[schemars(description = "Destination phase ID")]
    #[serde(default)]
    pub phase_id: String,
}

// =============================================================================
// Request Bodies
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateTaskRequest {
    pub(crate) project: ProjectRef,
    pub(crate) task_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) task_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) effort_in_minutes: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub(crate) task_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) phase: Option<PhaseRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) parent: Option<TaskRef>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) task_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) task_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) progress: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) status: Option<StatusValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) phase: Option<PhaseRef>,
}

impl UpdateTaskRequest {
    fn is_empty(&self) -> bool {
        self.task_name.is_none()
            && self.task_description.is_none()
            && self.start_date.is_none()
            && self.due_date.is_none()
            && self.progress.is_none()
            && self.status.is_none()
            && self.phase.is_none()
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AssigneesRequest {
    pub(crate) assignees: Vec<EmailRef>,
}

#[derive(Debug, Serialize)]
pub(crate) struct FollowersRequest {
    pub(crate) followers: Vec<EmailRef>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DependenciesRequest {
    pub(crate) dependencies: Vec<TaskRef>,
}

fn task_type(value: &str) -> ToolResult<Option<String>> {
    let Some(raw) = optional(value) else {
        return Ok(None);
    };
    let upper = raw.to_uppercase();
    if TASK_TYPES.contains(&upper.as_str()) {
        Ok(Some(upper))
    } else {
        Err(ToolError::InvalidChoice {
            message: format!(
                "Invalid task_type '{}'. Valid types are: TASK, MILESTONE (use parent_task_id for subtasks)",
                raw
            ),
        })
    }
}

fn emails(value: &str) -> ToolResult<Vec<EmailRef>> {
    let hint = " (comma-separated)";
    let list = split_list(required_with_hint(value, "user_emails", hint)?);
    if list.is_empty() {
        return Err(ToolError::MissingArgument {
            name: "user_emails",
            hint,
        });
    }
    Ok(list.into_iter().map(EmailRef::new).collect())
}

fn joined_emails(emails: &[EmailRef]) -> String {
    emails
        .iter()
        .map(|e| e.email_id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Task Tools
// =============================================================================

#[tool_router(router = task_tool_router, vis = "pub(crate)")]
impl RocketlaneServer {
    #[tool(description = "Get a task by its unique ID from Rocketlane.")]
    pub async fn get_task(
        &self,
        params: Parameters<GetTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("getting task", self.run_get_task(params.0).await)
    }

    #[tool(
        description = "Create a new task or subtask in a Rocketlane project with name, dates, phase, and optional parent."
    )]
    pub async fn create_task(
        &self,
        params: Parameters<CreateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("creating task", self.run_create_task(params.0).await)
    }

    #[tool(
        description = "Update an existing task by ID with new name, dates, phase, progress, or status."
    )]
    pub async fn update_task(
        &self,
        params: Parameters<UpdateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("updating task", self.run_update_task(params.0).await)
    }

    #[tool(description = "Delete a task by its unique ID - this action cannot be undone.")]
    pub async fn delete_task(
        &self,
        params: Parameters<DeleteTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("deleting task", self.run_delete_task(params.0).await)
    }

    #[tool(description = "List all tasks with optional filters for project, phase, or status.")]
    pub async fn list_tasks(
        &self,
        params: Parameters<ListTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("listing tasks", self.run_list_tasks(params.0).await)
    }

    #[tool(description = "Add assignees to a task by providing comma-separated email addresses.")]
    pub async fn add_task_assignees(
        &self,
        params: Parameters<TaskMembersParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("adding assignees", self.run_add_task_assignees(params.0).await)
    }

    #[tool(
        description = "Remove assignees from a task by providing comma-separated email addresses."
    )]
    pub async fn remove_task_assignees(
        &self,
        params: Parameters<TaskMembersParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "removing assignees",
            self.run_remove_task_assignees(params.0).await,
        )
    }

    #[tool(description = "Add followers to a task by providing comma-separated email addresses.")]
    pub async fn add_task_followers(
        &self,
        params: Parameters<TaskMembersParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("adding followers", self.run_add_task_followers(params.0).await)
    }

    #[tool(
        description = "Add dependencies to a task by providing comma-separated task IDs that must complete first."
    )]
    pub async fn add_task_dependencies(
        &self,
        params: Parameters<AddTaskDependenciesParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "adding dependencies",
            self.run_add_task_dependencies(params.0).await,
        )
    }

    #[tool(description = "Move a task to a different phase by updating its phase assignment.")]
    pub async fn move_task_to_phase(
        &self,
        params: Parameters<MoveTaskToPhaseParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("moving task", self.run_move_task_to_phase(params.0).await)
    }
}

impl RocketlaneServer {
    async fn run_get_task(&self, p: GetTaskParams) -> ToolResult<String> {
        required(&p.task_id, "task_id")?;
        self.ensure_configured()?;
        let task_id = required_int(&p.task_id, "task_id")?;

        info!("Getting task {}", task_id);
        let task = self
            .fetch_record(ApiRequest::get(format!("/tasks/{}", task_id)))
            .await?;
        Ok(render_single(&TASK, "retrieved", task))
    }

    async fn run_create_task(&self, p: CreateTaskParams) -> ToolResult<String> {
        required(&p.project_id, "project_id")?;
        let task_name = required(&p.task_name, "task_name")?;
        self.ensure_configured()?;

        let body = CreateTaskRequest {
            project: ProjectRef {
                project_id: required_int(&p.project_id, "project_id")?,
            },
            task_name: task_name.to_string(),
            task_description: optional(&p.description).map(str::to_string),
            start_date: optional(&p.start_date).map(str::to_string),
            due_date: optional(&p.due_date).map(str::to_string),
            effort_in_minutes: optional_int(&p.effort_minutes, "effort_minutes")?,
            task_type: task_type(&p.task_type)?,
            phase: optional_int(&p.phase_id, "phase_id")?.map(|phase_id| PhaseRef { phase_id }),
            parent: optional_int(&p.parent_task_id, "parent_task_id")?
                .map(|task_id| TaskRef { task_id }),
        };

        info!(
            "Creating task '{}' in project {}",
            body.task_name, body.project.project_id
        );
        let request = with_body(ApiRequest::post("/tasks"), &body)?;
        let task = self.fetch_record(request).await?;
        Ok(render_single(&TASK, "created", task))
    }

    async fn run_update_task(&self, p: UpdateTaskParams) -> ToolResult<String> {
        required(&p.task_id, "task_id")?;
        self.ensure_configured()?;
        let task_id = required_int(&p.task_id, "task_id")?;

        let body = UpdateTaskRequest {
            task_name: optional(&p.task_name).map(str::to_string),
            task_description: optional(&p.description).map(str::to_string),
            start_date: optional(&p.start_date).map(str::to_string),
            due_date: optional(&p.due_date).map(str::to_string),
            progress: optional_int(&p.progress, "progress")?,
            status: optional_int(&p.status_value, "status_value")?.map(|value| StatusValue { value }),
            phase: optional_int(&p.phase_id, "phase_id")?.map(|phase_id| PhaseRef { phase_id }),
        };
        if body.is_empty() {
            return Err(ToolError::NothingToUpdate);
        }

        info!("Updating task {}", task_id);
        let request = with_body(ApiRequest::put(format!("/tasks/{}", task_id)), &body)?;
        let task = self.fetch_record(request).await?;
        Ok(render_single(&TASK, "updated", task))
    }

    async fn run_delete_task(&self, p: DeleteTaskParams) -> ToolResult<String> {
        required(&p.task_id, "task_id")?;
        self.ensure_configured()?;
        let task_id = required_int(&p.task_id, "task_id")?;

        info!("Deleting task {}", task_id);
        let status = self
            .perform(ApiRequest::delete(format!("/tasks/{}", task_id)))
            .await?;
        if status == 204 {
            Ok(format!("Task {} deleted successfully", task_id))
        } else {
            Ok(format!("Task {} deleted", task_id))
        }
    }

    async fn run_list_tasks(&self, p: ListTasksParams) -> ToolResult<String> {
        self.ensure_configured()?;

        let request = ApiRequest::get("/tasks")
            .query("pageSize", page_size(&p.limit)?)
            .query_opt("projectId.eq", optional_int(&p.project_id, "project_id")?)
            .query_opt("phaseId.eq", optional_int(&p.phase_id, "phase_id")?)
            .query_opt("status.eq", optional(&p.status));

        info!("Listing tasks");
        let tasks = self.fetch_records(request).await?;
        Ok(TASK.render_list(&tasks))
    }

    async fn run_add_task_assignees(&self, p: TaskMembersParams) -> ToolResult<String> {
        required(&p.task_id, "task_id")?;
        let assignees = emails(&p.user_emails)?;
        self.ensure_configured()?;
        let task_id = required_int(&p.task_id, "task_id")?;

        info!("Adding assignees to task {}", task_id);
        let added = joined_emails(&assignees);
        let request = with_body(
            ApiRequest::post(format!("/tasks/{}/assignees", task_id)),
            &AssigneesRequest { assignees },
        )?;
        self.perform(request).await?;
        Ok(format!("Assignees added to task {}: {}", task_id, added))
    }

    async fn run_remove_task_assignees(&self, p: TaskMembersParams) -> ToolResult<String> {
        required(&p.task_id, "task_id")?;
        let assignees = emails(&p.user_emails)?;
        self.ensure_configured()?;
        let task_id = required_int(&p.task_id, "task_id")?;

        info!("Removing assignees from task {}", task_id);
        let removed = joined_emails(&assignees);
        let request = with_body(
            ApiRequest::post(format!("/tasks/{}/assignees/remove", task_id)),
            &AssigneesRequest { assignees },
        )?;
        self.perform(request).await?;
        Ok(format!("Assignees removed from task {}: {}", task_id, removed))
    }

    async fn run_add_task_followers(&self, p: TaskMembersParams) -> ToolResult<String> {
        required(&p.task_id, "task_id")?;
        let followers = emails(&p.user_emails)?;
        self.ensure_configured()?;
        let task_id = required_int(&p.task_id, "task_id")?;

        info!("Adding followers to task {}", task_id);
        let added = joined_emails(&followers);
        let request = with_body(
            ApiRequest::post(format!("/tasks/{}/followers", task_id)),
            &FollowersRequest { followers },
        )?;
        self.perform(request).await?;
        Ok(format!("Followers added to task {}: {}", task_id, added))
    }

    async fn run_add_task_dependencies(&self, p: AddTaskDependenciesParams) -> ToolResult<String> {
        required(&p.task_id, "task_id")?;
        let hint = " (comma-separated)";
        let raw_ids = split_list(required_with_hint(
            &p.dependency_task_ids,
            "dependency_task_ids",
            hint,
        )?);
        if raw_ids.is_empty() {
            return Err(ToolError::MissingArgument {
                name: "dependency_task_ids",
                hint,
            });
        }
        self.ensure_configured()?;
        let task_id = required_int(&p.task_id, "task_id")?;
        let dependencies = raw_ids
            .iter()
            .map(|id| required_int(id, "dependency_task_ids").map(|task_id| TaskRef { task_id }))
            .collect::<ToolResult<Vec<_>>>()?;

        info!("Adding dependencies to task {}", task_id);
        let listed = dependencies
            .iter()
            .map(|d| d.task_id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let request = with_body(
            ApiRequest::post(format!("/tasks/{}/dependencies", task_id)),
            &DependenciesRequest { dependencies },
        )?;
        self.perform(request).await?;
        Ok(format!("Dependencies added to task {}: {}", task_id, listed))
    }

    async fn run_move_task_to_phase(&self, p: MoveTaskToPhaseParams) -> ToolResult<String> {
        required(&p.task_id, "task_id")?;
        required(&p.phase_id, "phase_id")?;
        self.ensure_configured()?;
        let task_id = required_int(&p.task_id, "task_id")?;
        let phase_id = required_int(&p.phase_id, "phase_id")?;

        info!("Moving task {} to phase {}", task_id, phase_id);
        let body = UpdateTaskRequest {
            phase: Some(PhaseRef { phase_id }),
            ..Default::default()
        };
        let request = with_body(ApiRequest::put(format!("/tasks/{}", task_id)), &body)?;
        self.perform(request).await?;
        Ok(format!("Task {} moved to phase {}", task_id, phase_id))
    }
}
