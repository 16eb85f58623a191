// src/lib.rs

//! Converts a tab-separated listing of named colors into C source: a color
//! table plus a nearest-color lookup using squared RGB distance.

pub mod codegen;
pub mod color;
pub mod config;
pub mod driver;
pub mod import;

pub use codegen::emit_c;
pub use color::ColorRecord;
pub use config::{CodegenConfig, Config};
pub use driver::{generate, run, Summary};
pub use import::{import, ImportError, InputFormat};
