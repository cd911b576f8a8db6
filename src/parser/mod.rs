//! Converts a token stream into an abstract syntax tree.
//!
//! Not implemented yet. The entry point exists so the driver can hand the
//! token sequence off in the shape the eventual parser will take.
use crate::lexer::tokens::Token;

/// Placeholder for the syntax tree the parser will eventually produce.
#[derive(Debug, Default)]
pub struct Ast;

/// Consumes the token sequence and builds nothing.
pub fn parse(_tokens: &[Token]) -> Ast {
    Ast
}
