//! Test: Generic structs and unit structs compile

use pathenv::{EnvBind, EnvField};

#[derive(EnvBind, Default)]
struct Marker;

#[derive(EnvBind, Default)]
struct Wrapper<T: EnvField + Default> {
    inner: T,
    marker: Marker,
    r#type: String,
}

fn main() {
    let _: Result<Wrapper<u32>, pathenv::Error> = pathenv::load("APP");
}
