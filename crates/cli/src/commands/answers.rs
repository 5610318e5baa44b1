//! `promptsmith set|add|remove|show|reset` — Direct answer edits.

use promptsmith_core::{Field, ListField};

use super::Workspace;

pub async fn set(field: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
    let field: Field = field.parse()?;
    let mut ws = Workspace::open().await?;
    ws.session.answers_mut().set_field(field, value)?;
    ws.persist().await?;
    println!("✅ {field} = {}", ws.session.answers().display_value(field));
    Ok(())
}

pub async fn add(field: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
    let list: ListField = field.parse()?;
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("Refusing to add an empty entry to {list}").into());
    }

    let mut ws = Workspace::open().await?;
    ws.session.answers_mut().push(list, value);
    ws.persist().await?;

    let len = ws.session.answers().list(list).len();
    println!("✅ Added to {list} [{}]: {value}", len - 1);
    Ok(())
}

pub async fn remove(field: &str, index: usize) -> Result<(), Box<dyn std::error::Error>> {
    let list: ListField = field.parse()?;
    let mut ws = Workspace::open().await?;

    match ws.session.answers_mut().remove(list, index) {
        Some(removed) => {
            ws.persist().await?;
            println!("🗑️  Removed from {list} [{index}]: {removed}");
        }
        None => {
            println!("   Nothing at {list} [{index}], answers unchanged.");
        }
    }
    Ok(())
}

pub async fn show() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::open().await?;
    println!("{}", serde_json::to_string_pretty(ws.session.answers())?);
    Ok(())
}

pub async fn reset(confirm: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !confirm {
        println!("⚠️  This will discard ALL answers.");
        println!("   Run with --confirm to proceed:");
        println!("   promptsmith reset --confirm");
        return Ok(());
    }

    let mut ws = Workspace::open().await?;
    ws.session.reset();
    ws.forget().await?;
    ws.persist().await?;
    println!("✅ Answers restored to defaults.");
    Ok(())
}
