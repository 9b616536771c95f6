#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

pub fn github_actions_annotation(
    level: AnnotationLevel,
    message: &str,
    file: Option<&str>,
    title: Option<&str>,
) -> String {
    let level_str = match level {
        AnnotationLevel::Warning => "warning",
        AnnotationLevel::Error => "error",
    };

    let mut props = Vec::new();
    if let Some(file) = file {
        props.push(format!("file={}", escape_workflow_command_value(file)));
    }
    if let Some(title) = title {
        props.push(format!("title={}", escape_workflow_command_value(title)));
    }

    let prop_str = if props.is_empty() {
        String::new()
    } else {
        format!(" {}", props.join(","))
    };

    format!(
        "::{}{}::{}",
        level_str,
        prop_str,
        escape_workflow_command_message(message)
    )
}

fn escape_workflow_command_value(s: &str) -> String {
    escape_workflow_command_message(s)
        .replace(':', "%3A")
        .replace(',', "%2C")
}

fn escape_workflow_command_message(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}
