//! Test: EnvBind cannot be derived on enums
#![allow(dead_code)]

use pathenv::EnvBind;

#[derive(EnvBind)]
enum Config {
    Development,
    Production,
}

fn main() {}
