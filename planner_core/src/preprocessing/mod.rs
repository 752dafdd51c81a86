//! Scenario preprocessing: normalization and validation.
//!
//! Runs between the wire-format parser and the simulator so the core loop
//! never has to repair or second-guess its inputs.

pub mod normalizer;
pub mod validator;
pub mod pipeline;

pub use normalizer::ScenarioNormalizer;
pub use pipeline::{PreprocessConfig, PreprocessPipeline, PreprocessResult};
pub use validator::{ScenarioValidator, ValidationResult};
