use clap::Parser;
use std::net::SocketAddr;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Message board HTTP API", long_about = None)]
pub struct Config {
    /// Database holding the messages table
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://.data/messages.db")]
    pub database_url: String,

    /// Size of the database connection pool
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value = "5")]
    pub max_connections: u32,

    /// Address the HTTP server listens on
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:3000")]
    pub addr: SocketAddr,

    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: tracing::Level,
}
