//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

/// Ensure the directory holding the given data file exists.
pub async fn ensure_data_dir(data_file: &str) -> anyhow::Result<()> {
    if let Some(parent) = std::path::Path::new(data_file).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
