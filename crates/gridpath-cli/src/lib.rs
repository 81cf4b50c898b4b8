//! Terminal front end for the gridpath solver and generator.
//!
//! The `gridpath` binary parses its arguments with `clap` and prints boards
//! and paths with [`render`].

pub mod render;
