use clap::Parser;
use orderdesk_core::domain::common::{
    DatabaseConfig, DefaultsConfig, ObjectStorageConfig, OrderdeskConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "orderdesk-api", about = "Orderdesk administrative backend")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub object_storage: ObjectStorageArgs,

    #[command(flatten)]
    pub defaults: DefaultsArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix under which every API route is mounted.
    #[arg(long, env = "ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_URL", default_value = "mongodb://localhost:27017")]
    pub database_url: String,

    #[arg(long, env = "DATABASE_NAME", default_value = "orderdesk")]
    pub database_name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ObjectStorageArgs {
    #[arg(long, env = "MINIO_ENDPOINT", default_value = "http://localhost:9000")]
    pub minio_endpoint: String,

    #[arg(long, env = "MINIO_REGION", default_value = "us-east-1")]
    pub minio_region: String,

    #[arg(long, env = "MINIO_ACCESS_KEY", default_value = "minioadmin")]
    pub minio_access_key: String,

    #[arg(long, env = "MINIO_SECRET_KEY", default_value = "minioadmin")]
    pub minio_secret_key: String,

    #[arg(long, env = "MINIO_BUCKET", default_value = "orderdesk-media")]
    pub minio_bucket: String,

    #[arg(long, env = "MINIO_USE_SSL", default_value_t = false)]
    pub minio_use_ssl: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DefaultsArgs {
    /// Default and maximum page size for list endpoints.
    #[arg(long, env = "DEFAULT_PAGE_SIZE", default_value_t = 10)]
    pub default_page_size: u64,

    /// Region used to interpret phone numbers without a country prefix.
    #[arg(long, env = "DEFAULT_PHONE_REGION", default_value = "US")]
    pub default_phone_region: String,
}

impl From<Args> for OrderdeskConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                url: args.database.database_url,
                name: args.database.database_name,
            },
            object_storage: ObjectStorageConfig {
                endpoint: args.object_storage.minio_endpoint,
                region: args.object_storage.minio_region,
                access_key: args.object_storage.minio_access_key,
                secret_key: args.object_storage.minio_secret_key,
                bucket: args.object_storage.minio_bucket,
                use_ssl: args.object_storage.minio_use_ssl,
            },
            defaults: DefaultsConfig {
                default_page_size: args.defaults.default_page_size,
                default_phone_region: args.defaults.default_phone_region,
            },
        }
    }
}
