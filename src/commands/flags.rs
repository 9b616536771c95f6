use anyhow::Result;
use keel::blueprint::{FLAGS, RULES};
use keel::domain::entities::{FlagDefault, FlagSpec};

use super::Session;

fn default_text(spec: &FlagSpec) -> String {
    match spec.default {
        FlagDefault::Bool(b) => b.to_string(),
        FlagDefault::Text(s) => s.to_string(),
        FlagDefault::List(items) if items.is_empty() => "[]".to_string(),
        FlagDefault::List(items) => items.join(","),
        FlagDefault::SlugOf(source) => format!("derived from {}", source),
    }
}

pub fn cmd_flags(session: &Session, rules_only: bool) -> Result<()> {
    if session.json {
        let flags: Vec<_> = FLAGS
            .iter()
            .map(|spec| {
                serde_json::json!({
                    "name": spec.name,
                    "expected": spec.expected(),
                    "values": spec.domain(),
                    "default": default_text(spec),
                    "help": spec.help,
                })
            })
            .collect();
        let rules: Vec<_> = RULES
            .iter()
            .map(|rule| {
                serde_json::json!({
                    "id": rule.id,
                    "flags": rule.flags(),
                    "message": rule.message,
                })
            })
            .collect();

        let mut output = serde_json::json!({ "event": "flags", "rules": rules });
        if !rules_only {
            output["flags"] = serde_json::Value::Array(flags);
        }
        crate::ui::json::emit(output)?;
        return Ok(());
    }

    if !rules_only {
        println!("FLAGS:");
        for spec in FLAGS {
            println!("  {:<22} {}", spec.name, spec.help);
            println!(
                "  {:<22} accepts {}; default {}",
                "",
                spec.expected(),
                default_text(spec)
            );
        }
        println!();
    }

    println!("COMPATIBILITY RULES:");
    for rule in RULES {
        println!("  {:<28} {}", rule.id, rule.message);
    }
    Ok(())
}
