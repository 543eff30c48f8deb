//! bindent: indent, deindent and indentation guessing for the teddy editor
//!
//! `+`/`-` shift every line of stdin by one indentation unit; `guess`
//! inspects a buffer's body and records its likely unit for later shifts.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
