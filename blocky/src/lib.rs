// lints
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::items_after_statements,
    clippy::module_name_repetitions,
    clippy::manual_range_contains,
    clippy::len_without_is_empty,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod color;
mod config;
mod game;
mod node;
mod pos;
mod quad;
mod tree;
mod ops {
    mod build;
    mod locate;
    mod rotate;
    mod test_format;

    pub use build::*;
}

pub use crate::node::*;
pub use color::*;
pub use config::*;
pub use game::*;
pub use ops::*;
pub use pos::*;
pub use quad::*;
pub use tree::*;
