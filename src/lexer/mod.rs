//! Functionality for converting source text into a [`Token`] stream.
mod cursor;
mod scanner;

pub mod tokens;

pub use scanner::*;

#[allow(unused_imports)]
use tokens::Token;
