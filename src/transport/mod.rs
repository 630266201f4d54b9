//! Transport layer: wire-format details (argument encoding, response decoding).

pub mod args;
mod forms;
mod response;

pub use args::{Args, BodyShape, normalize};
pub use forms::*;
pub use response::{ApiFailure, Expect, interpret};
