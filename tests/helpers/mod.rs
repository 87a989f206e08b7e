#![allow(dead_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod api;
mod git;

pub use api::*;
pub use git::*;
