pub mod loaders;


pub use loaders::{ScenarioLoadResult, ScenarioLoader};
