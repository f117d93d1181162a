use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Default port — the port the bundled web client targets.
pub const DEFAULT_PORT: u16 = 9595;
pub const DEFAULT_BIND: &str = "127.0.0.1";

/// Top-level config (aiui.toml + AIUI_* env overrides).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiuiConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub templates: TemplatesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

/// Template store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// Directory holding template override files. When unset the embedded
    /// assets are served.
    pub dir: Option<String>,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

impl AiuiConfig {
    /// Load config from a TOML file with AIUI_* env var overrides.
    ///
    /// Checks in order:
    ///   1. Explicit path argument
    ///   2. ~/.aiui/aiui.toml
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);

        let config: AiuiConfig = Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed("AIUI_").split("_"))
            .extract()
            .map_err(|e| crate::error::AiuiError::Config(e.to_string()))?;

        Ok(config)
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.aiui/aiui.toml", home)
}
