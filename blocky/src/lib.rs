//! A recursive puzzle board.
//!
//! The board is a square quadtree of [`Block`]s: leaves carry a [`Color`],
//! internal blocks own exactly four children. Blocks can be smashed into
//! quadrants and rotated; the [`Board`] owns the root and adds breadth-first
//! lookup, same-depth subtree swaps, flattening into a [`Grid`] and perimeter
//! scoring.
//!
//! Invalid structural requests never change the tree, they come back as a
//! [`Rejection`].

// lints
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::items_after_statements,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod block;
mod board;
mod color;
mod error;
mod pos;
mod quad;
mod rect;
mod ops {
    mod flatten;
    mod get;
    mod rotate;
    mod score;
    mod smash;
    mod swap;
    mod test_format;

    pub use flatten::*;
}

pub use block::*;
pub use board::*;
pub use color::*;
pub use error::*;
pub use ops::*;
pub use pos::*;
pub use quad::*;
pub use rect::*;
