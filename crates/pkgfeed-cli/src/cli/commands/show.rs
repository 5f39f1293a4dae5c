//! `pkgfeed show` – print the effective configuration.

use anyhow::Result;
use pkgfeed_core::config::FeedConfig;

/// Render the configuration as aligned text or pretty JSON.
pub(crate) fn render_show(cfg: &FeedConfig, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(cfg)?);
    }
    let source = if cfg.is_default() { "built-in" } else { "config file" };
    Ok(format!(
        "{:<16} {}\n{:<16} {}\n{:<16} {}",
        "repository_url",
        cfg.repository_url,
        "output_dir",
        cfg.output_dir,
        "source",
        source
    ))
}

pub fn run_show(cfg: &FeedConfig, json: bool) -> Result<()> {
    println!("{}", render_show(cfg, json)?);
    Ok(())
}
