use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// Where the worker snapshot comes from
    pub dataset: DatasetSource,
    /// RNG seed for the generated dataset
    pub seed: u64,
    /// Workers generated for every (job type, location) pair
    pub workers_per_pair: usize,
    /// Bounds for the `limit` query parameter
    pub limits: LimitConfig,
    /// Settings for the standalone autofill binary
    pub autofill: AutofillSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetSource {
    /// Procedurally generated from the job-type catalog and location list
    Generated,
    /// Small hand-written dataset
    Static,
}

impl DatasetSource {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "generated" => Some(Self::Generated),
            "static" => Some(Self::Static),
            _ => None,
        }
    }
}

impl std::fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generated => f.write_str("generated"),
            Self::Static => f.write_str("static"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LimitConfig {
    pub recommended_default: usize,
    pub recommended_max: usize,
    /// Default for the by-location and by-job-type listings
    pub listing_default: usize,
    pub listing_max: usize,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            recommended_default: 3,
            recommended_max: 10,
            listing_default: 10,
            listing_max: 20,
        }
    }
}

/// Where the autofill binary finds its weights.
///
/// The default `filename` names a JSON export of the weights. The hub repo
/// itself only publishes `best_wakafix_model.pth`, a PyTorch pickle this
/// loader cannot read, so point `AUTOFILL_WEIGHTS_PATH` or
/// `AUTOFILL_FILENAME` at an exported JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutofillSettings {
    /// Local weights file. When set, nothing is downloaded.
    pub weights_path: Option<PathBuf>,
    pub repo_id: String,
    pub filename: String,
    pub revision: String,
    pub hub_endpoint: String,
    pub cache_dir: PathBuf,
}

impl Default for AutofillSettings {
    fn default() -> Self {
        Self {
            weights_path: None,
            repo_id: "desysofly/wakafix-autofill".to_string(),
            filename: "wakafix_autofill.json".to_string(),
            revision: "main".to_string(),
            hub_endpoint: "https://huggingface.co".to_string(),
            cache_dir: PathBuf::from("./data/autofill"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".to_string(),
            dataset: DatasetSource::Generated,
            seed: 42,
            workers_per_pair: 1,
            limits: LimitConfig::default(),
            autofill: AutofillSettings::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, falling back to defaults
    /// for missing or unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT").and_then(|v| v.parse::<u16>().ok()) {
            config.bind_addr = format!("0.0.0.0:{port}");
        }
        if let Some(addr) = lookup("WAKAFIX_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Some(val) = lookup("WAKAFIX_DATASET") {
            match DatasetSource::parse(&val) {
                Some(source) => config.dataset = source,
                None => tracing::warn!("Ignoring unknown WAKAFIX_DATASET value '{val}'"),
            }
        }
        if let Some(v) = lookup("WAKAFIX_SEED").and_then(|v| v.parse().ok()) {
            config.seed = v;
        }
        if let Some(v) = lookup("WAKAFIX_WORKERS_PER_PAIR").and_then(|v| v.parse().ok()) {
            config.workers_per_pair = v;
        }
        if let Some(v) = lookup("WAKAFIX_RECOMMENDED_MAX").and_then(|v| v.parse::<usize>().ok()) {
            config.limits.recommended_max = v.max(1);
        }
        if let Some(v) = lookup("WAKAFIX_LISTING_MAX").and_then(|v| v.parse::<usize>().ok()) {
            config.limits.listing_max = v.max(1);
        }
        config.limits.recommended_default = config
            .limits
            .recommended_default
            .min(config.limits.recommended_max);
        config.limits.listing_default = config
            .limits
            .listing_default
            .min(config.limits.listing_max);

        // Autofill
        if let Some(path) = lookup("AUTOFILL_WEIGHTS_PATH") {
            config.autofill.weights_path = Some(PathBuf::from(path));
        }
        if let Some(repo) = lookup("AUTOFILL_REPO_ID") {
            config.autofill.repo_id = repo;
        }
        if let Some(name) = lookup("AUTOFILL_FILENAME") {
            config.autofill.filename = name;
        }
        if let Some(rev) = lookup("AUTOFILL_REVISION") {
            config.autofill.revision = rev;
        }
        if let Some(url) = lookup("AUTOFILL_HUB_ENDPOINT") {
            config.autofill.hub_endpoint = url;
        }
        if let Some(dir) = lookup("AUTOFILL_CACHE_DIR") {
            config.autofill.cache_dir = PathBuf::from(dir);
        }

        config
    }
}
