//! Lexer, parser, and AST for the **Horologe surface markup** (`.hml`).
//!
//! This crate is intentionally dependency-free so it can be consumed by
//! linters and editors without pulling in the rasterizer or timer runtime.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `HmlDocument`, `Node`, `Prop`, `Value`, `Import` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token`, `TokenWithPos` |
//! | [`parser`] | `parse_str` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use horologe_markup::parse_str;
//!
//! let src = r#"
//!     Page {
//!         Canvas "lobby" { class: clockClass  width: 200  height: 200  numerals: roman }
//!     }
//! "#;
//!
//! let doc = parse_str(src).unwrap();
//! assert_eq!(doc.root.element, "Page");
//! assert_eq!(doc.root.children[0].prop_str("numerals"), Some("roman"));
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{HmlDocument, Import, Node, Prop, Value};
pub use error::ParseError;
pub use parser::parse_str;
