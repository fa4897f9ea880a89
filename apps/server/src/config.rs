//! Configuration management for the item server

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub workload: WorkloadConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins. Empty disables CORS entirely.
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Maximum request body size in bytes.
    /// Default: 1 MB
    #[serde(default = "default_max_request_body_size")]
    pub max_request_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            max_request_body_size: default_max_request_body_size(),
        }
    }
}

/// Largest accepted `workload.memory_block_mb`. Keeps the byte count within a
/// 32-bit `usize`.
pub const MAX_MEMORY_BLOCK_MB: usize = 1024;

/// Largest accepted `workload.cpu_iterations`. Beyond this the checksum no
/// longer fits in a `u64`.
pub const MAX_CPU_ITERATIONS: u64 = 1 << 32;

/// Knobs for the diagnostic workload endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkloadConfig {
    /// Number of threads in the blocking worker pool used by `/thread-tasks`.
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
    /// Number of simulated tasks dispatched per request.
    #[serde(default = "default_task_count")]
    pub task_count: usize,
    /// How long each simulated task blocks, in milliseconds.
    #[serde(default = "default_task_duration_ms")]
    pub task_duration_ms: u64,
    /// Size of each block appended by `/memory-leak`, in MiB.
    #[serde(default = "default_memory_block_mb")]
    pub memory_block_mb: usize,
    /// Upper bound (exclusive) of the `/cpu-intensive` loop.
    #[serde(default = "default_cpu_iterations")]
    pub cpu_iterations: u64,
}

impl WorkloadConfig {
    pub fn task_duration(&self) -> Duration {
        Duration::from_millis(self.task_duration_ms)
    }

    pub fn memory_block_bytes(&self) -> usize {
        self.memory_block_mb.saturating_mul(1024 * 1024)
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            pool_size: default_pool_size(),
            task_count: default_task_count(),
            task_duration_ms: default_task_duration_ms(),
            memory_block_mb: default_memory_block_mb(),
            cpu_iterations: default_cpu_iterations(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Use JSON formatting for logs (recommended for production)
    #[serde(default)]
    pub json: bool,

    /// Enable file logging in addition to console
    #[serde(default)]
    pub file_enabled: bool,

    /// Directory for log files (default: ./logs)
    #[serde(default = "default_log_directory")]
    pub file_directory: String,

    /// Log file prefix (default: item-server)
    #[serde(default = "default_log_file_prefix")]
    pub file_prefix: String,

    /// Log rotation: daily, hourly, minutely, never (default: daily)
    #[serde(default = "default_log_rotation")]
    pub file_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            file_enabled: false,
            file_directory: default_log_directory(),
            file_prefix: default_log_file_prefix(),
            file_rotation: default_log_rotation(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_request_body_size() -> usize {
    1024 * 1024
}

fn default_pool_size() -> usize {
    5
}

fn default_task_count() -> usize {
    5
}

fn default_task_duration_ms() -> u64 {
    1000
}

fn default_memory_block_mb() -> usize {
    100
}

fn default_cpu_iterations() -> u64 {
    1_000_000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_directory() -> String {
    "./logs".to_string()
}

fn default_log_file_prefix() -> String {
    "item-server".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Config {
    /// Load configuration from environment and config files
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            // Start with defaults
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port())?
            .set_default(
                "server.max_request_body_size",
                default_max_request_body_size() as i64,
            )?
            .set_default("workload.pool_size", default_pool_size() as i64)?
            .set_default("workload.task_count", default_task_count() as i64)?
            .set_default("workload.task_duration_ms", default_task_duration_ms() as i64)?
            .set_default("workload.memory_block_mb", default_memory_block_mb() as i64)?
            .set_default("workload.cpu_iterations", default_cpu_iterations() as i64)?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.json", false)?
            .set_default("logging.file_enabled", false)?
            .set_default("logging.file_directory", default_log_directory())?
            .set_default("logging.file_prefix", default_log_file_prefix())?
            .set_default("logging.file_rotation", default_log_rotation())?
            // Add config file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables
            // Example: ITEMS__SERVER__PORT=9000 → config.server.port
            // Arrays use comma separator: ITEMS__SERVER__CORS_ORIGINS=https://a.com,https://b.com
            .add_source(
                config::Environment::with_prefix("ITEMS")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        Ok(addr.parse()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.workload.pool_size == 0 {
            return Err("workload.pool_size must be > 0".to_string());
        }
        if self.workload.task_count == 0 {
            return Err("workload.task_count must be > 0".to_string());
        }
        if self.workload.memory_block_mb == 0 {
            return Err("workload.memory_block_mb must be > 0".to_string());
        }
        if self.workload.memory_block_mb > MAX_MEMORY_BLOCK_MB {
            return Err(format!(
                "workload.memory_block_mb must be <= {MAX_MEMORY_BLOCK_MB} (got {})",
                self.workload.memory_block_mb
            ));
        }
        if self.workload.cpu_iterations > MAX_CPU_ITERATIONS {
            return Err(format!(
                "workload.cpu_iterations must be <= {MAX_CPU_ITERATIONS} (got {})",
                self.workload.cpu_iterations
            ));
        }

        match self.logging.file_rotation.as_str() {
            "daily" | "hourly" | "minutely" | "never" => {}
            other => {
                return Err(format!(
                    "logging.file_rotation must be one of daily, hourly, minutely, never (got '{other}')"
                ))
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.workload.pool_size, 5);
        assert_eq!(config.workload.task_count, 5);
        assert_eq!(config.workload.task_duration(), Duration::from_secs(1));
        assert_eq!(config.workload.memory_block_bytes(), 100 * 1024 * 1024);
        assert_eq!(config.workload.cpu_iterations, 1_000_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_pool() {
        let mut config = Config::default();
        config.workload.pool_size = 0;
        let err = config.validate().unwrap_err();
        assert!(err.contains("pool_size"), "unexpected error: {err}");
    }

    #[test]
    fn validate_rejects_unknown_rotation() {
        let mut config = Config::default();
        config.logging.file_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_bounds_workload_sizes() {
        let mut config = Config::default();
        config.workload.memory_block_mb = MAX_MEMORY_BLOCK_MB;
        config.workload.cpu_iterations = MAX_CPU_ITERATIONS;
        assert!(config.validate().is_ok());

        config.workload.memory_block_mb = usize::MAX / 1024;
        let err = config.validate().unwrap_err();
        assert!(err.contains("memory_block_mb"), "unexpected error: {err}");
        assert_eq!(config.workload.memory_block_bytes(), usize::MAX);

        config.workload.memory_block_mb = 1;
        config.workload.cpu_iterations = MAX_CPU_ITERATIONS + 1;
        let err = config.validate().unwrap_err();
        assert!(err.contains("cpu_iterations"), "unexpected error: {err}");
    }

    #[test]
    fn socket_addr_parses_host_and_port() {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9100;
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:9100");
    }
}
