//! Evaluates a parsed program.
//!
//! Not implemented yet; running a program is currently a no-op.
use log::debug;

use crate::parser::Ast;

pub fn run(_program: &Ast) {
    debug!("interpreter not implemented, nothing to run");
}
