//! Display descriptors for each Rocketlane entity.

use super::{EntityFormat, Field, Render, Title};

const DESCRIPTION_MAX: usize = 100;

pub const TASK: EntityFormat = EntityFormat {
    label: "Task",
    plural: "tasks",
    counted: "task(s)",
    title: Title::Key("taskName"),
    fields: &[
        Field::new("ID", "taskId"),
        Field::new("Description", "taskDescription")
            .render(Render::Truncated(DESCRIPTION_MAX))
            .optional(),
        Field::new("Status", "status").render(Render::Nested("label")),
        Field::new("Start Date", "startDate"),
        Field::new("Due Date", "dueDate"),
        Field::new("Progress", "progress")
            .render(Render::Percent)
            .default("0"),
        Field::new("Assignees", "assignees")
            .render(Render::People)
            .optional(),
    ],
};

pub const PROJECT: EntityFormat = EntityFormat {
    label: "Project",
    plural: "projects",
    counted: "project(s)",
    title: Title::Key("projectName"),
    fields: &[
        Field::new("ID", "projectId"),
        Field::new("Status", "status").render(Render::Nested("label")),
        Field::new("Start Date", "startDate"),
        Field::new("Due Date", "dueDate"),
        Field::new("Customer", "customer")
            .render(Render::Nested("companyName"))
            .optional(),
        Field::new("Progress", "progress")
            .render(Render::Percent)
            .default("0"),
    ],
};

pub const PHASE: EntityFormat = EntityFormat {
    label: "Phase",
    plural: "phases",
    counted: "phase(s)",
    title: Title::Key("phaseName"),
    fields: &[
        Field::new("ID", "phaseId"),
        Field::new("Status", "status").render(Render::Nested("label")),
        Field::new("Start Date", "startDate"),
        Field::new("Due Date", "dueDate"),
    ],
};

pub const USER: EntityFormat = EntityFormat {
    label: "User",
    plural: "users",
    counted: "user(s)",
    title: Title::FullName,
    fields: &[
        Field::new("ID", "userId"),
        Field::new("Email", "email"),
        Field::new("Type", "type"),
        Field::new("Status", "status"),
    ],
};

pub const SPACE: EntityFormat = EntityFormat {
    label: "Space",
    plural: "spaces",
    counted: "space(s)",
    title: Title::Key("spaceName"),
    fields: &[
        Field::new("ID", "spaceId"),
        Field::new("Private", "private").default("false"),
    ],
};

pub const FIELD: EntityFormat = EntityFormat {
    label: "Field",
    plural: "fields",
    counted: "field(s)",
    title: Title::Key("label"),
    fields: &[
        Field::new("ID", "fieldId"),
        Field::new("Type", "type"),
        Field::new("Description", "description").optional(),
    ],
};

pub const TIME_ENTRY: EntityFormat = EntityFormat {
    label: "Time Entry",
    plural: "time entries",
    counted: "time entry(ies)",
    title: Title::Key("timeEntryId"),
    fields: &[
        Field::new("Date", "date"),
        Field::new("Minutes", "minutes").default("0"),
        Field::new("Billable", "billable").default("false"),
        Field::new("Notes", "notes")
            .render(Render::Truncated(DESCRIPTION_MAX))
            .optional(),
    ],
};

pub const SPACE_DOCUMENT: EntityFormat = EntityFormat {
    label: "Space Document",
    plural: "space documents",
    counted: "space document(s)",
    title: Title::Key("documentName"),
    fields: &[
        Field::new("ID", "spaceDocumentId"),
        Field::new("Space ID", "spaceId"),
    ],
};
