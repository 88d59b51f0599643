//! Test: EnvBind cannot be derived on unions
#![allow(dead_code)]

use pathenv::EnvBind;

#[derive(EnvBind)]
union Config {
    int_val: u32,
    float_val: f32,
}

fn main() {}
