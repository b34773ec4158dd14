use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use secrecy::ExposeSecret;
use toml::Value;
use tripdesk_core::config::{AppConfig, LoadOptions};

struct ConfigSources {
    path: Option<PathBuf>,
    doc: Option<Value>,
}

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let path = detect_config_path();
    let doc = load_config_file_doc(path.as_deref());
    let sources = ConfigSources { path, doc };

    let auth_token = match &config.server.auth_token {
        Some(token) => redact_token(token.expose_secret()),
        None => "<unset>".to_string(),
    };
    let disabled = if config.actions.disabled.is_empty() {
        "<none>".to_string()
    } else {
        config.actions.disabled.join(",")
    };

    let fields: [(&str, String, &[&str]); 7] = [
        (
            "server.bind_address",
            config.server.bind_address.clone(),
            &["TRIPDESK_SERVER_BIND_ADDRESS"],
        ),
        ("server.port", config.server.port.to_string(), &["TRIPDESK_SERVER_PORT"]),
        (
            "server.graceful_shutdown_secs",
            config.server.graceful_shutdown_secs.to_string(),
            &["TRIPDESK_SERVER_GRACEFUL_SHUTDOWN_SECS"],
        ),
        ("server.auth_token", auth_token, &["TRIPDESK_SERVER_AUTH_TOKEN"]),
        ("actions.disabled", disabled, &["TRIPDESK_ACTIONS_DISABLED"]),
        (
            "logging.level",
            config.logging.level.clone(),
            &["TRIPDESK_LOGGING_LEVEL", "TRIPDESK_LOG_LEVEL"],
        ),
        (
            "logging.format",
            format!("{:?}", config.logging.format).to_ascii_lowercase(),
            &["TRIPDESK_LOGGING_FORMAT", "TRIPDESK_LOG_FORMAT"],
        ),
    ];

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];
    for (key, value, env_keys) in fields {
        let source = field_source(key, env_keys, &sources);
        lines.push(render_line(key, &value, source));
    }

    lines.join("\n")
}

fn detect_config_path() -> Option<PathBuf> {
    [PathBuf::from("tripdesk.toml"), PathBuf::from("config/tripdesk.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(key_path: &str, env_keys: &[&str], sources: &ConfigSources) -> String {
    if let Some(env_key) = env_keys.iter().find(|key| env::var_os(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = &sources.doc {
        if contains_path(doc, key_path) {
            let file_path = sources
                .path
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}

fn redact_token(token: &str) -> String {
    if token.trim().is_empty() {
        return "<empty>".to_string();
    }
    "<redacted>".to_string()
}
