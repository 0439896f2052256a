//! `wakafix-autofill <service> <location> <time>`
//!
//! Loads the autofill weights (downloading them on first use) and prints
//! the score vector for one input as JSON.
//!
//! Weights must be the JSON document described by `AutofillWeights`. The
//! default hub filename `wakafix_autofill.json` is not published in
//! `desysofly/wakafix-autofill`; that repo ships `best_wakafix_model.pth`,
//! a PyTorch pickle this binary cannot load. Export the state dict to JSON
//! and set `AUTOFILL_WEIGHTS_PATH` (local file) or `AUTOFILL_FILENAME`
//! (file uploaded to the hub repo).

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use wakafix::autofill::{best_class, hub, AutofillModel, Predictor};
use wakafix::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [service, location, time] = args.as_slice() else {
        anyhow::bail!(
            "usage: wakafix-autofill <service> <location> <time>\n\
             weights: JSON export via AUTOFILL_WEIGHTS_PATH or AUTOFILL_FILENAME \
             (the hub's best_wakafix_model.pth cannot be loaded)"
        );
    };
    let service: usize = service.parse().context("service must be a non-negative integer")?;
    let location: usize = location.parse().context("location must be a non-negative integer")?;
    let time: usize = time.parse().context("time must be a non-negative integer")?;

    let config = Config::from_env();
    let client = reqwest::Client::builder()
        .connect_timeout(std::time::Duration::from_secs(10))
        .timeout(std::time::Duration::from_secs(120))
        .build()?;

    let path = hub::fetch_weights(&client, &config.autofill).await?;
    let model = AutofillModel::load(&path)
        .with_context(|| format!("Failed to load autofill model from {}", path.display()))?;
    tracing::info!(dims = ?model.dims(), "Autofill model loaded");

    let scores = model.predict(service, location, time)?;
    let output = serde_json::json!({
        "service": service,
        "location": location,
        "time": time,
        "scores": scores,
        "best": best_class(&scores),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
