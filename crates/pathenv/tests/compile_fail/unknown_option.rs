//! Test: Unknown options in #[env(...)] are rejected
#![allow(dead_code)]

use pathenv::EnvBind;

#[derive(EnvBind)]
struct Config {
    #[env(rename = "PORT")]
    port: u16,
}

fn main() {}
