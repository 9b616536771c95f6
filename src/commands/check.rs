use anyhow::Result;
use keel::application::{CheckOptions, CheckResult, CheckUseCase};

use super::Session;
use crate::cli::AnswerArgs;

pub fn cmd_check(session: &Session, args: &AnswerArgs, resolve_only: bool) -> Result<()> {
    let raw = session.collect_answers(args)?;
    let options = CheckOptions::default()
        .with_resolve_only(resolve_only)
        .with_validation(session.validate_syntax(args));

    let result = CheckUseCase::new().execute(&raw, &options)?;

    if session.json {
        crate::ui::json::emit(check_json(&result))?;
        return Ok(());
    }

    if !session.is_quiet() {
        for (name, value) in result.flags.iter() {
            let marker = if result.defaulted.iter().any(|d| *d == name) {
                "  (default)"
            } else {
                ""
            };
            println!("  {:<22} {}{}", name, value, marker);
        }
        println!();
    }

    match &result.render {
        Some(render) => println!(
            "OK: {} flags valid, {} files rendered, {} syntax-checked [{}]",
            result.flags.len(),
            render.file_count,
            render.validated,
            render.digest.short()
        ),
        None => println!("OK: {} flags valid", result.flags.len()),
    }
    Ok(())
}

fn check_json(result: &CheckResult) -> serde_json::Value {
    let mut output = serde_json::json!({
        "event": "check",
        "valid": true,
        "flags": result.flags.to_json_map(),
        "defaulted": result.defaulted,
    });
    if let Some(render) = &result.render {
        output["files"] = render.file_count.into();
        output["dirs"] = render.dir_count.into();
        output["validated"] = render.validated.into();
        output["digest"] = render.digest.to_string().into();
    }
    output
}
