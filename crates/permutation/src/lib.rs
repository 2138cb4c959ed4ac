#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

mod print;
mod test_logger;
mod validate;

pub use print::*;
pub use random_test::*;
pub use test_logger::*;
pub use validate::*;
