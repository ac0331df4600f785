// src/cli/handlers.rs
use anyhow::Result;
use console::style;

use crate::generator;
use crate::models::{PasswordOptions, StrengthColor, StrengthReport};
use crate::strength;

pub fn handle_generate(options: &PasswordOptions, json: bool) -> Result<()> {
    let password = generator::generate(options)?;
    let report = strength::score_password(&password);

    if json {
        let output = serde_json::json!({
            "password": password,
            "strength": report,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", password);
    print_report(&report);
    Ok(())
}

pub fn handle_check(password: &str, json: bool) -> Result<()> {
    let report = strength::score_password(password);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &StrengthReport) {
    let level = match report.color {
        StrengthColor::Danger => style(report.level.to_string()).red(),
        StrengthColor::Warning => style(report.level.to_string()).yellow(),
        StrengthColor::Success => style(report.level.to_string()).green(),
    };

    println!("Strength: {} ({}/100)", level, report.score);
    for line in &report.feedback {
        println!("  - {}", line);
    }
}
