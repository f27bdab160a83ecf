//! Runtime configuration utilities

pub mod generator;

pub use generator::GeneratorCommand;
