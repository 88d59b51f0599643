//! Test: Embedded and optional nested structs compile

use pathenv::{EnvBind, MapEnv};

#[derive(EnvBind, Default)]
struct Database {
    user: String,
    password: String,
}

#[derive(EnvBind, Default)]
struct Config {
    db: Database,
    replica: Option<Database>,

    #[env(skip)]
    handle: Vec<u8>,
}

fn main() {
    let env = MapEnv::new().with("APP_DB_USER", "app");
    let mut config = Config::default();
    let _ = pathenv::bind_from(&env, "APP", &mut config);
    let _ = config.handle;
}
