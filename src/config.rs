use clap::Parser;
use std::net::SocketAddr;

/// Startup configuration. Every flag can also come from the environment.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Question search over gRPC and REST")]
pub struct Config {
    /// Question store connection string: mongodb://, mongodb+srv:// or file://<path.json>.
    #[arg(long, env = "MONGO_URI", hide_env_values = true)]
    pub mongo_uri: String,

    /// Database to read from when the URI does not name one.
    #[arg(long, env = "MONGO_DB", default_value = "test")]
    pub mongo_database: String,

    #[arg(long, env = "MONGO_COLLECTION", default_value = "questions")]
    pub mongo_collection: String,

    #[arg(long, env = "GRPC_ADDR", default_value = "0.0.0.0:50051")]
    pub grpc_addr: SocketAddr,

    #[arg(long, env = "REST_ADDR", default_value = "0.0.0.0:5001")]
    pub rest_addr: SocketAddr,
}

impl Config {
    /// Parses the process arguments and environment. A missing store URI
    /// terminates the process with a usage error.
    pub fn load() -> Self {
        Self::parse()
    }
}
