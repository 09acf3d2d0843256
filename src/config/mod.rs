pub mod scenario;

pub use scenario::{EnsembleConfig, ForceModel, ScenarioConfig, StepCheck, PRESET_NAMES};
