//! Safe SQL builder: identifiers from compile-time listings and allow-listed sort keys only, values as parameters.

mod builder;
pub use builder::*;
