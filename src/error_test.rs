use crate::error::ToolError;

#[test]
fn test_local_errors_use_error_prefix() {
    let cases = [
        ToolError::missing("task_id"),
        ToolError::MissingArgument {
            name: "user_emails",
            hint: " (comma-separated)",
        },
        ToolError::InvalidInteger {
            field: "progress",
            value: "abc".to_string(),
        },
        ToolError::InvalidBoolean {
            field: "is_private",
            value: "maybe".to_string(),
        },
        ToolError::NothingToUpdate,
        ToolError::NotConfigured,
        ToolError::Transport {
            message: "connection refused".to_string(),
        },
    ];

    for err in cases {
        assert!(err.to_string().starts_with("Error: "), "{}", err);
    }
}

#[test]
fn test_missing_argument_message() {
    assert_eq!(
        ToolError::missing("task_id").to_string(),
        "Error: task_id is required"
    );
    assert_eq!(
        ToolError::MissingArgument {
            name: "start_date",
            hint: " (YYYY-MM-DD)"
        }
        .to_string(),
        "Error: start_date is required (YYYY-MM-DD)"
    );
}

#[test]
fn test_invalid_integer_message() {
    let err = ToolError::InvalidInteger {
        field: "progress",
        value: "abc".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Error: invalid literal for integer field progress: 'abc'"
    );
}

#[test]
fn test_upstream_errors_use_api_error_prefix() {
    let http = ToolError::Upstream {
        status: 404,
        body: "{\"errors\":[{\"errorMessage\":\"Task not found\"}]}".to_string(),
    };
    assert_eq!(
        http.to_string(),
        "API Error: 404 - {\"errors\":[{\"errorMessage\":\"Task not found\"}]}"
    );

    let logical = ToolError::UpstreamLogical {
        message: "Invalid pageSize".to_string(),
    };
    assert_eq!(logical.to_string(), "API Error: Invalid pageSize");
}

#[test]
fn test_is_local() {
    assert!(ToolError::NotConfigured.is_local());
    assert!(ToolError::NothingToUpdate.is_local());
    assert!(
        !ToolError::Upstream {
            status: 500,
            body: String::new()
        }
        .is_local()
    );
    assert!(
        !ToolError::Transport {
            message: "timeout".to_string()
        }
        .is_local()
    );
}
