//! `promptsmith export` and `promptsmith import` — Document files.

use std::path::{Path, PathBuf};

use promptsmith_config::AppConfig;
use promptsmith_core::DocumentFormat;

use super::Workspace;

/// Pick the format for `path`: the extension when it names one, otherwise
/// the configured default.
pub fn format_for(path: &Path, config: &AppConfig) -> DocumentFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some(_) => DocumentFormat::from_path(path),
        None => config.export_format(),
    }
}

pub async fn export(path: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::open().await?;
    let path = path
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&ws.config.export.file_name));
    let format = format_for(&path, &ws.config);

    let text = ws.session.export(format)?;
    tokio::fs::write(&path, text).await?;

    tracing::info!(path = %path.display(), format = format.as_str(), "Exported answers");
    println!("✅ Exported to {}", path.display());
    Ok(())
}

pub async fn import(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(path);
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;

    let mut ws = Workspace::open().await?;
    let format = format_for(path, &ws.config);

    match ws.session.import(&text, format) {
        Ok(touched) => {
            ws.persist().await?;
            if touched.is_empty() {
                println!("   Nothing to merge from {}.", path.display());
            } else {
                let names: Vec<&str> = touched.iter().map(|f| f.as_str()).collect();
                println!("✅ Merged {} field(s): {}", names.len(), names.join(", "));
            }
            Ok(())
        }
        Err(e) => {
            println!("❌ Invalid document, answers unchanged.");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptsmith_config::ExportConfig;

    #[test]
    fn extension_wins_over_config() {
        let config = AppConfig {
            export: ExportConfig {
                format: "toml".into(),
                ..ExportConfig::default()
            },
            ..AppConfig::default()
        };
        assert_eq!(format_for(Path::new("a.json"), &config), DocumentFormat::Json);
        assert_eq!(format_for(Path::new("a.toml"), &AppConfig::default()), DocumentFormat::Toml);
        assert_eq!(format_for(Path::new("answers"), &config), DocumentFormat::Toml);
    }
}
