//! docblock-filter: Doxygen input filter for languages Doxygen does not support
//!
//! Keeps the DocBlocks of a source file at their original line numbers and
//! follows each one with a PHP-like declaration stub taken from its
//! `@class`, `@fn` or `@var` tag.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod extract;
pub mod render;
