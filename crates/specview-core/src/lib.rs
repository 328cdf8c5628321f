pub mod error;
pub mod index;
pub mod parse;
pub mod resolve;
pub mod synth;

pub use parse::Document;
