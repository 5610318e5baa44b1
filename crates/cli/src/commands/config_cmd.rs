//! `promptsmith config` — Configuration management commands.

use promptsmith_config::AppConfig;

pub async fn validate() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Validating configuration...");

    match AppConfig::load() {
        Ok(config) => {
            println!("   ✅ Config parsed successfully");

            let mut warnings = Vec::new();

            if config.store.backend == "memory" {
                warnings.push("Memory store selected: answers are lost when the command exits");
            }

            if !config.store.autosave {
                warnings.push("Autosave is off: edits are not written to the store");
            }

            if !config.render.enforce_gate {
                warnings.push("Objective gate disabled: prompts may render without an objective");
            }

            if warnings.is_empty() {
                println!("   ✅ All checks passed");
            } else {
                println!();
                for w in &warnings {
                    println!("   ⚠️  {w}");
                }
            }

            println!();
            println!("   Store:     {} ({})", config.store.backend, config.store_path().display());
            println!("   Export:    {} → {}", config.export.format, config.export.file_name);
            println!(
                "   Share URL: {}",
                config.share.base_url.as_deref().unwrap_or("(token only)")
            );
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

pub async fn show() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

pub async fn path() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = AppConfig::config_dir().join("config.toml");
    println!("{}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn config_path_is_valid() {
        let path = promptsmith_config::AppConfig::config_dir().join("config.toml");
        assert!(path.to_str().unwrap().contains("config.toml"));
    }
}
