// Runtime configuration handed from infrastructure to the application

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub default_list_limit: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3240".to_string(),
            api_token: None,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
            default_list_limit: 100,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Snapshot file; `None` keeps every record in memory only.
    pub data_path: Option<String>,
}
