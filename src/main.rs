//! Standalone CLI for validating a ball spec sheet
//!
//! Runs the same load pipeline as the chart page against the filesystem:
//! parse the CSV, resolve every icon reference, log one line per ball.
//!
//! Run with: BALLS_CSV=bowling_balls.csv cargo run --bin ball-cli --features cli

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::fs;
    use std::path::Path;

    use tracing::{info, warn};
    use tracing_subscriber::{fmt, EnvFilter};

    use ball_matrix::core::{default_icon, parse_records, resolve_icon};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ball_matrix=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let path = std::env::var("BALLS_CSV").unwrap_or_else(|_| "bowling_balls.csv".to_string());

    info!(path = %path, "Loading spec sheet");
    let text = fs::read_to_string(&path)?;
    let outcome = parse_records(&text)?;

    if outcome.skipped > 0 {
        warn!(skipped = outcome.skipped, "rows without numeric RG/Diff were dropped");
    }

    // Icon paths resolve relative to the spec sheet, as they do on the
    // served page.
    let base = Path::new(&path).parent().unwrap_or_else(|| Path::new("."));
    let mut fallbacks = 0usize;
    for record in &outcome.records {
        let icon = match record.icon_path.as_deref() {
            Some(reference) => match fs::read(base.join(reference)) {
                Ok(bytes) => resolve_icon(reference, &bytes),
                Err(e) => {
                    warn!(icon = reference, error = %e, "icon not readable, using default");
                    default_icon().clone()
                }
            },
            None => default_icon().clone(),
        };
        let is_default = &icon == default_icon();
        if is_default && record.icon_path.is_some() {
            fallbacks += 1;
        }

        let quadrant = record.quadrant();
        info!(
            name = %record.name,
            rg = record.rg,
            diff = record.differential,
            int_diff = ?record.mass_bias_differential,
            quadrant = quadrant.label(),
            default_icon = is_default,
            "ball"
        );
    }

    info!(
        balls = outcome.records.len(),
        skipped = outcome.skipped,
        icon_fallbacks = fallbacks,
        "spec sheet ok"
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
