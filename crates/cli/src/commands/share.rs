//! `promptsmith share` and `promptsmith load` — Transport tokens.

use promptsmith_core::codec;

use super::Workspace;

pub async fn share(base_url: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::open().await?;
    let base_url = base_url.or_else(|| ws.config.share.base_url.clone());

    let out = match base_url {
        Some(base) => codec::share_link(&base, ws.session.answers())?,
        None => ws.session.share_token()?,
    };
    println!("{out}");
    Ok(())
}

/// Replace the answers with a shared token. A bad token leaves the saved
/// session untouched and is reported, not raised.
pub async fn load(token: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut ws = Workspace::open().await?;

    match ws.session.load_token(token) {
        Ok(()) => {
            ws.persist().await?;
            println!("✅ Answers loaded from shared token.");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring invalid shared token");
            println!("⚠️  Could not read that token ({e}); answers unchanged.");
        }
    }
    Ok(())
}
