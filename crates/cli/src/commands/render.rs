//! `promptsmith render` and `promptsmith status`.

use promptsmith_core::{MIN_OBJECTIVE_CHARS, render};

use super::Workspace;

pub async fn run(force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::open().await?;

    if ws.config.render.enforce_gate && !force && !ws.session.can_generate() {
        eprintln!();
        eprintln!("  Write a clear objective (at least {MIN_OBJECTIVE_CHARS} characters) first:");
        eprintln!("    promptsmith set objective \"...\"");
        eprintln!("  Or render anyway with --force.");
        eprintln!();
        return Err("Objective too short to generate a prompt".into());
    }

    println!("{}", ws.session.render());
    Ok(())
}

pub async fn status() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::open().await?;
    let answers = ws.session.answers();

    println!("🧩 PromptSmith Status");
    println!("=====================");
    match ws.session.current_step() {
        Some(step) => println!(
            "  Step:        {}/{} — {} ({}%)",
            ws.session.step() + 1,
            promptsmith_core::questionnaire::total(),
            step.label,
            ws.session.progress()
        ),
        None => println!("  Step:        —"),
    }
    println!(
        "  Objective:   {} characters ({})",
        answers.objective.trim().chars().count(),
        if ws.session.can_generate() { "ready" } else { "too short" }
    );
    println!("  Tone:        {}", answers.tone);
    println!("  Length:      {}", answers.length);
    println!("  Language:    {}", answers.language);
    println!("  Rules:       {}", render::rules(answers).len());

    let sections: Vec<&str> = render::sections(answers)
        .iter()
        .map(|s| s.kind.as_str())
        .collect();
    println!("  Sections:    {}", sections.join(", "));
    println!("  Store:       {}", ws.config.store.backend);

    Ok(())
}
