use std::{collections::HashMap, fs, io, path::Path};

pub const SETTINGS_FILE: &str = "dashboard.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Debug,
    Production,
}

impl RunMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "debug" | "development" | "dev" => Some(Self::Debug),
            "production" | "prod" | "release" => Some(Self::Production),
            _ => None,
        }
    }

    pub fn log_filter(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Production => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub run_mode: RunMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8050".into(),
            run_mode: RunMode::Debug,
        }
    }
}

/// Settings plus anything worth a warning once logging is up.
pub fn load_settings() -> (Settings, Vec<String>) {
    load_settings_from(Path::new(SETTINGS_FILE))
}

pub fn load_settings_from(path: &Path) -> (Settings, Vec<String>) {
    let mut settings = Settings::default();
    let mut warnings = Vec::new();

    match fs::read_to_string(path) {
        Ok(raw) => apply_file_settings(&raw, &mut settings, &mut warnings, path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => warnings.push(format!("cannot read {}: {e}", path.display())),
    }

    (settings, warnings)
}

fn apply_file_settings(raw: &str, settings: &mut Settings, warnings: &mut Vec<String>, path: &Path) {
    let file_cfg = match toml::from_str::<HashMap<String, String>>(raw) {
        Ok(cfg) => cfg,
        Err(e) => {
            warnings.push(format!("ignoring {}: {e}", path.display()));
            return;
        }
    };

    if let Some(v) = file_cfg.get("bind_addr") {
        settings.server_bind = v.clone();
    }
    if let Some(v) = file_cfg.get("run_mode") {
        match RunMode::parse(v) {
            Some(mode) => settings.run_mode = mode,
            None => warnings.push(format!(
                "unknown run_mode '{v}' in {}; keeping {:?}",
                path.display(),
                settings.run_mode
            )),
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
