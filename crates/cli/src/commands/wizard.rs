//! `promptsmith wizard` — Walk the questionnaire one step at a time.
//!
//! Reads answers from stdin. Enter keeps the current value, `<` goes back
//! a step and `:q` stops early. List steps take one entry per line until an
//! empty line; `-` drops the last entry. The session is saved after every
//! step so an interrupted wizard resumes where it stopped.

use std::io::Write;

use promptsmith_core::questionnaire::{self, InputKind, Step};
use promptsmith_core::{MIN_OBJECTIVE_CHARS, Session};
use tokio::io::{self, AsyncBufReadExt, BufReader, Lines, Stdin};

use super::Workspace;

/// What a line of input asked the wizard to do.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Keep,
    Back,
    Quit,
    Answer(String),
}

pub fn classify(line: &str) -> Action {
    match line.trim() {
        "" => Action::Keep,
        "<" => Action::Back,
        ":q" | "quit" | "exit" => Action::Quit,
        other => Action::Answer(other.to_string()),
    }
}

/// Apply one line to a list step.
///
/// Entries and `-` keep the step open and return `None`. An empty line
/// finishes the list with [`Action::Keep`]; `<` and `:q` are passed through
/// untouched so they never land in the list.
pub fn apply_list_line(session: &mut Session, step: &Step, line: &str) -> Option<Action> {
    let Some(list) = step.field.as_list() else {
        return Some(Action::Keep);
    };
    match classify(line) {
        Action::Answer(entry) if entry == "-" => {
            let answers = session.answers_mut();
            if let Some(last) = answers.list(list).len().checked_sub(1) {
                answers.remove(list, last);
            }
            None
        }
        Action::Answer(entry) => {
            session.answers_mut().push(list, entry);
            None
        }
        control => Some(control),
    }
}

pub async fn run(start: Option<usize>) -> Result<(), Box<dyn std::error::Error>> {
    let mut ws = Workspace::open().await?;
    if let Some(step) = start {
        ws.session.go_to(step.saturating_sub(1));
    }

    println!();
    println!("  🧩 PromptSmith — Questionnaire");
    println!("  Enter keeps the current value, '<' goes back, ':q' stops.");
    println!();

    let mut lines = BufReader::new(io::stdin()).lines();

    loop {
        let Some(step) = ws.session.current_step() else {
            break;
        };
        print_step(&ws.session, step);

        let action = if step.kind == InputKind::List {
            collect_list(&mut ws.session, step, &mut lines).await?
        } else {
            prompt("  > ")?;
            match lines.next_line().await? {
                Some(line) => classify(&line),
                None => Action::Quit,
            }
        };

        match action {
            Action::Keep => {}
            Action::Back => {
                ws.session.prev_step();
                ws.persist().await?;
                continue;
            }
            Action::Quit => break,
            Action::Answer(value) => {
                if let Err(e) = ws.session.answers_mut().set_field(step.field, &value) {
                    println!("  ⚠️  {e}");
                    continue;
                }
            }
        }

        if ws.session.step() + 1 == questionnaire::total() {
            break;
        }
        ws.session.next_step();
        ws.persist().await?;
    }

    ws.persist().await?;
    println!();
    if ws.session.can_generate() {
        println!("  ✅ Ready. Run `promptsmith render` to print the prompt.");
    } else {
        println!(
            "  ⚠️  The objective needs at least {MIN_OBJECTIVE_CHARS} characters before rendering."
        );
    }
    println!();
    Ok(())
}

/// Read entries until the list step is finished. EOF counts as `:q`.
async fn collect_list(
    session: &mut Session,
    step: &Step,
    lines: &mut Lines<BufReader<Stdin>>,
) -> Result<Action, Box<dyn std::error::Error>> {
    println!("  One entry per line, empty line to continue, '-' removes the last.");
    loop {
        prompt("  + ")?;
        let Some(line) = lines.next_line().await? else {
            return Ok(Action::Quit);
        };
        if let Some(action) = apply_list_line(session, step, &line) {
            return Ok(action);
        }
        if let Some(list) = step.field.as_list() {
            let entries = session.answers().list(list);
            println!("    [{}]", entries.join(", "));
        }
    }
}

fn print_step(session: &Session, step: &Step) {
    println!(
        "  Step {}/{} ({}%) — {}",
        session.step() + 1,
        questionnaire::total(),
        session.progress(),
        step.label
    );
    println!("  {}", step.help);
    if let InputKind::Choice(options) = step.kind {
        println!("  Options: {}", options.join(", "));
    }
    let current = session.answers().display_value(step.field);
    if !current.is_empty() {
        println!("  Current: {current}");
    }
}

fn prompt(text: &str) -> std::io::Result<()> {
    print!("{text}");
    std::io::stdout().flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptsmith_core::Field;

    fn step_for(field: Field) -> &'static Step {
        questionnaire::STEPS
            .iter()
            .find(|s| s.field == field)
            .unwrap()
    }

    #[test]
    fn classify_lines() {
        assert_eq!(classify("   "), Action::Keep);
        assert_eq!(classify("<"), Action::Back);
        assert_eq!(classify(":q"), Action::Quit);
        assert_eq!(classify("  hello "), Action::Answer("hello".into()));
    }

    #[test]
    fn list_lines_push_and_pop() {
        let mut session = Session::new();
        let step = step_for(Field::Inputs);

        assert_eq!(apply_list_line(&mut session, step, "client_id"), None);
        assert_eq!(apply_list_line(&mut session, step, "period"), None);
        assert_eq!(apply_list_line(&mut session, step, "-"), None);
        assert_eq!(apply_list_line(&mut session, step, ""), Some(Action::Keep));

        assert_eq!(session.answers().inputs, vec!["client_id".to_string()]);
    }

    #[test]
    fn control_words_on_list_step_are_not_entries() {
        let mut session = Session::new();
        let step = step_for(Field::Inputs);

        assert_eq!(apply_list_line(&mut session, step, ":q"), Some(Action::Quit));
        assert_eq!(apply_list_line(&mut session, step, " < "), Some(Action::Back));
        assert_eq!(apply_list_line(&mut session, step, "exit"), Some(Action::Quit));
        assert!(session.answers().inputs.is_empty());
    }

    #[test]
    fn pop_on_empty_list_is_noop() {
        let mut session = Session::new();
        let step = step_for(Field::Tools);
        assert_eq!(apply_list_line(&mut session, step, "-"), None);
        assert!(session.answers().tools.is_empty());
    }

    #[test]
    fn non_list_step_never_collects() {
        let mut session = Session::new();
        assert_eq!(
            apply_list_line(&mut session, step_for(Field::Objective), "x"),
            Some(Action::Keep)
        );
        assert_eq!(session, Session::new());
    }
}
