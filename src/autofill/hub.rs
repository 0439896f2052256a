//! Fetches autofill weights from a model hub into a local cache.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::AutofillSettings;

/// `{endpoint}/{repo_id}/resolve/{revision}/{filename}`
pub fn weights_url(settings: &AutofillSettings) -> String {
    format!(
        "{}/{}/resolve/{}/{}",
        settings.hub_endpoint.trim_end_matches('/'),
        settings.repo_id.trim_matches('/'),
        settings.revision,
        settings.filename
    )
}

/// Where a downloaded file lives inside the cache directory.
pub fn cache_path(settings: &AutofillSettings) -> PathBuf {
    settings
        .cache_dir
        .join(settings.repo_id.replace('/', "--"))
        .join(&settings.revision)
        .join(&settings.filename)
}

/// Resolve the weights file, downloading it only when it is not configured
/// locally and not already cached.
pub async fn fetch_weights(
    client: &reqwest::Client,
    settings: &AutofillSettings,
) -> Result<PathBuf> {
    if let Some(path) = &settings.weights_path {
        tracing::info!("Using local autofill weights at {}", path.display());
        return Ok(path.clone());
    }

    let path = cache_path(settings);
    if path.exists() {
        tracing::info!("Using cached autofill weights at {}", path.display());
        return Ok(path);
    }

    let url = weights_url(settings);
    tracing::info!("Downloading autofill weights from {url}");

    let resp = client
        .get(&url)
        .send()
        .await
        .context("Failed to reach model hub")?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!("Model hub returned {status}: {body}");
    }

    let bytes = resp
        .bytes()
        .await
        .context("Failed to read weights download")?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create cache dir {}", parent.display()))?;
    }
    // Write to a temp file first so an interrupted download never looks cached.
    let tmp_path = path.with_extension("part");
    std::fs::write(&tmp_path, &bytes)
        .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
    std::fs::rename(&tmp_path, &path)
        .with_context(|| format!("Failed to move weights into {}", path.display()))?;

    tracing::info!("Saved {} bytes of weights to {}", bytes.len(), path.display());
    Ok(path)
}
