use std::io::ErrorKind;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_WORKER_THREADS: usize = 4;
const DEFAULT_QUOTES_PATH: &str = "data/quotes.json";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.into(), port: DEFAULT_PORT, worker_threads: Some(DEFAULT_WORKER_THREADS) }
    }
}

/// Where the quote collection lives and how write failures are treated.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_quotes_path")]
    pub quotes_path: String,
    /// When true, a failed file write fails the mutation instead of only being logged.
    #[serde(default)]
    pub strict_persistence: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { quotes_path: default_quotes_path(), strict_persistence: false }
    }
}

fn default_quotes_path() -> String { DEFAULT_QUOTES_PATH.to_string() }

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Config file first; only when it does not exist, build from env vars.
    /// A file that exists but fails to read, parse or validate is an error.
    pub fn load_or_env() -> Result<Self> {
        Self::load_or_lookup(&config_path(), |k| std::env::var(k).ok())
    }

    pub fn load_or_lookup<F>(path: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = match std::fs::read_to_string(path) {
            Ok(content) => parse(&content).with_context(|| format!("配置文件 {path} 解析失败"))?,
            Err(e) if e.kind() == ErrorKind::NotFound => Self::from_lookup(lookup),
            Err(e) => return Err(anyhow!("无法读取配置文件 {path}: {e}")),
        };
        cfg.normalize_and_validate()
            .with_context(|| format!("配置校验失败 ({path})"))?;
        Ok(cfg)
    }

    /// Build a config from `SERVER_HOST`, `SERVER_PORT`, `TOKIO_WORKER_THREADS`,
    /// `QUOTES_PATH` and `STRICT_PERSISTENCE`, as resolved by `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("SERVER_PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let worker_threads = lookup("TOKIO_WORKER_THREADS").and_then(|v| v.parse::<usize>().ok());
        let quotes_path = lookup("QUOTES_PATH").unwrap_or_else(default_quotes_path);
        let strict_persistence = lookup("STRICT_PERSISTENCE")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);
        Self {
            server: ServerConfig { host, port, worker_threads },
            storage: StorageConfig { quotes_path, strict_persistence },
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        // 归一化 server
        self.server.normalize()?;
        // 校验 storage
        self.storage.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = DEFAULT_HOST.to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port 必须在 1..=65535 范围内"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(DEFAULT_WORKER_THREADS),
        }
        Ok(())
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<()> {
        if self.quotes_path.trim().is_empty() {
            return Err(anyhow!("storage.quotes_path 为空；请在 config.toml 或环境变量 QUOTES_PATH 中提供"));
        }
        Ok(())
    }
}
