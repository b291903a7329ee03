#![allow(clippy::doc_markdown)]

pub mod core;
pub mod error;
pub mod io;
pub mod prelude;
pub mod quantity;
pub mod tables;
