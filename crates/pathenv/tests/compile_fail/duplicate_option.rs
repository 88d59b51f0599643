//! Test: Duplicate options in #[env(...)] are rejected
#![allow(dead_code)]

use pathenv::EnvBind;

#[derive(EnvBind)]
struct Config {
    #[env(default = 1, default = 2)]
    port: u16,
}

fn main() {}
