use std::fs;
use std::path::Path;

use crate::error::AppResult;
use crate::models::StoredToken;

/// Read the persisted token, `None` when the file does not exist yet
pub fn load_token(path: &Path) -> AppResult<Option<StoredToken>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let token: StoredToken = serde_json::from_str(&content)?;

    if token.access_token.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(token))
}

/// Write the token through a sibling temp file so readers never see a partial file
pub fn save_token(path: &Path, token: &StoredToken) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, serde_json::to_string_pretty(token)?)?;
    fs::rename(&tmp_path, path)?;

    tracing::info!("Saved refreshed token to {:?}", path);
    Ok(())
}
