//! Feature-Handler für mutierende Commands.

pub mod curve;
pub mod editing;
pub mod view;
