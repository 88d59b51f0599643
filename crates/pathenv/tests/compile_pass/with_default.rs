//! Test: Defaults accept string, integer, float and bool literals

use pathenv::EnvBind;

#[derive(EnvBind, Default)]
struct Config {
    #[env(default = "localhost")]
    host: String,

    #[env(default = 8080)]
    port: u16,

    #[env(default = 0.5)]
    ratio: f64,

    #[env(default = true, required)]
    enabled: bool,
}

fn main() {
    let _: Result<Config, pathenv::Error> = pathenv::load("APP");
}
