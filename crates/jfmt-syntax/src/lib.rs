//! Shared vocabulary of the jfmt pipeline: the class grammar model, the token
//! set, and the error type every stage reports through.

pub mod ast;
pub mod error;
pub mod token;

pub use ast::*;
pub use error::*;
pub use token::*;
