//! Test: Basic required field compiles

use pathenv::EnvBind;

#[derive(EnvBind, Default)]
struct Config {
    #[env(required)]
    database_url: String,
}

fn main() {
    let mut config = Config::default();
    let _ = pathenv::bind("APP", &mut config);
    let _ = config.database_url;
}
