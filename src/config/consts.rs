/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default listen port
pub const DEFAULT_PORT: u16 = 3001;
/// Default allowed browser origin for CORS
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
/// Default relayer endpoint (Sepolia testnet relayer)
pub const DEFAULT_RELAYER_ENDPOINT: &str = "https://relayer.sepolia.zama.ai";
/// Default per-call relayer timeout in milliseconds
pub const DEFAULT_RELAYER_TIMEOUT_MS: u64 = 10_000;

/// Environment variable naming a YAML config file
pub const ENV_CONFIG_PATH: &str = "FHE_ANALYTICS_CONFIG";
pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_CORS_ORIGIN: &str = "CORS_ORIGIN";
pub const ENV_RELAYER_ENDPOINT: &str = "RELAYER_ENDPOINT";
pub const ENV_RELAYER_ENABLED: &str = "RELAYER_ENABLED";
pub const ENV_RELAYER_TIMEOUT_MS: &str = "RELAYER_TIMEOUT_MS";
