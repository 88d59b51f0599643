//! Binding a service config where secrets arrive as mounted files.
//!
//! Run with:
//!
//! ```bash
//! echo -n hunter2 > /tmp/db_password
//! SVC_DATABASE_USER=app \
//! SVC_DATABASE_PASSWORD_FILE=/tmp/db_password \
//! SVC_CACHE_HOST=redis.internal \
//!     cargo run --example secrets
//! ```
//!
//! Unset `SVC_DATABASE_USER` to see the miette diagnostic for a missing
//! required variable.

use pathenv::EnvBind;

#[derive(EnvBind, Debug, Default)]
struct Database {
    #[env(required)]
    user: String,

    #[env(required)]
    password: String,

    #[env(default = "localhost")]
    host: String,

    #[env(default = 5432)]
    port: u16,
}

#[derive(EnvBind, Debug, Default)]
struct Cache {
    host: String,

    // A default here would allocate the cache on every run
    port: Option<u16>,
}

#[derive(EnvBind, Debug, Default)]
struct ServiceConfig {
    #[env(default = "info")]
    log_level: String,

    database: Database,

    // Only present when at least one SVC_CACHE_* variable is set
    cache: Option<Cache>,
}

fn main() -> miette::Result<()> {
    let config: ServiceConfig = pathenv::load("SVC")?;

    println!("log level: {}", config.log_level);
    println!(
        "database:  {}@{}:{} (password: {} bytes)",
        config.database.user,
        config.database.host,
        config.database.port,
        config.database.password.len()
    );

    match &config.cache {
        Some(cache) => println!("cache:     {}:{}", cache.host, cache.port.unwrap_or(6379)),
        None => println!("cache:     disabled"),
    }

    Ok(())
}
