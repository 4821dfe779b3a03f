use anyhow::anyhow;
use std::net::SocketAddr;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    pub max_http_content_len: usize,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("AIRLINE_TICKET_SALE_API_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("AIRLINE_TICKET_SALE_API_LOG_FILENAME")?;
        let bind_address = Self::env_var("AIRLINE_TICKET_SALE_API_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("AIRLINE_TICKET_SALE_API_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("AIRLINE_TICKET_SALE_API_DB_NAME")?;
        let max_http_content_len =
            Self::env_var("AIRLINE_TICKET_SALE_API_MAX_HTTP_CONTENT_LEN")?.parse()?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            max_http_content_len,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
