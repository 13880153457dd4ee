/// Listener settings. Compiled in; nothing is read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub service_host: String,
    pub service_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            service_host: "0.0.0.0".to_string(),
            service_port: 8181,
        }
    }
}

impl Config {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}", self.socket_addr());
    }
}
