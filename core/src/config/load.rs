use std::path::Path;

use super::types::AppConfig;

/// Load order: explicit override path, then `./config.toml`, then built-in
/// defaults. Environment overrides are applied last.
pub fn load_default(path_override: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut cfg: AppConfig = match path_override {
        Some(p) => {
            let s = std::fs::read_to_string(p)?;
            toml::from_str(&s)?
        }
        None => {
            let local = Path::new("config.toml");
            if local.exists() {
                let s = std::fs::read_to_string(local)?;
                toml::from_str(&s)?
            } else {
                AppConfig::default()
            }
        }
    };

    if let Ok(v) = std::env::var("SURVEYRUN_COMMAND") {
        if !v.trim().is_empty() {
            cfg.runner.command = v;
        }
    }
    if let Ok(v) = std::env::var("SURVEYRUN_WORKERS") {
        if let Ok(n) = v.trim().parse::<usize>() {
            if n > 0 {
                cfg.runner.workers = n;
            }
        }
    }

    Ok(cfg)
}
