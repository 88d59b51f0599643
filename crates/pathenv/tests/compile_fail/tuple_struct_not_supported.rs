//! Test: tuple structs have no field names to derive variables from
#![allow(dead_code)]

use pathenv::EnvBind;

#[derive(EnvBind)]
struct Config(String, u16);

fn main() {}
