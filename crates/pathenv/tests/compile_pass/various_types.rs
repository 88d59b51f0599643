//! Test: Every supported scalar type compiles, plain and optional

use std::path::PathBuf;

use pathenv::EnvBind;

#[derive(EnvBind, Default)]
struct Config {
    s: String,
    path: PathBuf,
    flag: bool,
    letter: char,
    a: i8,
    b: i16,
    c: i32,
    d: i64,
    e: i128,
    f: isize,
    g: u8,
    h: u16,
    i: u32,
    j: u64,
    k: u128,
    l: usize,
    m: f32,
    n: f64,
    maybe_port: Option<u16>,
    maybe_path: Option<PathBuf>,
}

fn main() {
    let _: Result<Config, pathenv::Error> = pathenv::load("");
}
