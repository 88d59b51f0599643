//! Test: A skipped field cannot also be required or defaulted
#![allow(dead_code)]

use pathenv::EnvBind;

#[derive(EnvBind)]
struct Config {
    #[env(skip, required)]
    token: String,
}

fn main() {}
