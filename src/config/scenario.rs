//! Scenario description for a tracing run.
//!
//! Scenarios are loaded from YAML or picked from the built-in presets, which
//! reproduce the classic experiments: gyration in a uniform field, E x B
//! drift, the Lorenz and Rössler attractors, and the Poincaré map of
//! particles crossing a thin current sheet.

use crate::constants::{
    CURRENT_SHEET_KAPPA, DEFAULT_ENSEMBLE_SIZE, DEFAULT_MAX_GYRO_PHASE, SPEED_OF_LIGHT,
};
use crate::errors::{TracerError, TracerResult};
use crate::models::{Particle, Scheme};
use crate::numerics::Vector3;
use crate::physics::attractors::{Lorenz, Rossler};
use crate::physics::fields::{LorentzForce, MagneticModel, UniformField, VectorField};
use crate::physics::force::ForceLaw;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const PRESET_NAMES: [&str; 5] = ["cyclotron", "drift", "lorenz", "rossler", "poincare"];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ForceModel {
    Electromagnetic {
        #[serde(default)]
        electric: Vector3,
        magnetic: MagneticModel,
    },
    Lorenz(Lorenz),
    Rossler(Rossler),
}

impl ForceModel {
    /// Magnetic field at `r`, for models that have one.
    pub fn magnetic_field(&self, r: &Vector3, t: f64) -> Option<Vector3> {
        match self {
            ForceModel::Electromagnetic { magnetic, .. } => Some(magnetic.at(r, t)),
            _ => None,
        }
    }

    /// Velocity consistent with the flow at `r`, for attractor models.
    pub fn flow_velocity(&self, r: &Vector3) -> Option<Vector3> {
        match self {
            ForceModel::Lorenz(lorenz) => Some(lorenz.vector_field(r)),
            ForceModel::Rossler(rossler) => Some(rossler.vector_field(r)),
            ForceModel::Electromagnetic { .. } => None,
        }
    }
}

impl ForceLaw for ForceModel {
    fn force(&self, r: &Vector3, v: &Vector3, t: f64, q: f64) -> Vector3 {
        match self {
            ForceModel::Electromagnetic { electric, magnetic } => {
                LorentzForce::new(UniformField(*electric), *magnetic).force(r, v, t, q)
            }
            ForceModel::Lorenz(lorenz) => lorenz.force(r, v, t, q),
            ForceModel::Rossler(rossler) => rossler.force(r, v, t, q),
        }
    }
}

/// Random isotropic initial velocities, each particle placed so that its
/// gyro-orbit is centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnsembleConfig {
    pub particles: usize,
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_speed")]
    pub speed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepCheck {
    #[serde(default = "default_max_phase")]
    pub max_phase: f64,
}

impl Default for StepCheck {
    fn default() -> Self {
        StepCheck {
            max_phase: DEFAULT_MAX_GYRO_PHASE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub name: String,
    pub force: ForceModel,
    pub scheme: Scheme,
    pub step: f64,
    pub t_end: f64,
    #[serde(default)]
    pub t_start: f64,
    #[serde(default)]
    pub rewind_to: Option<f64>,
    #[serde(default = "default_output_every")]
    pub output_every: usize,
    #[serde(default = "default_mass")]
    pub mass: f64,
    #[serde(default)]
    pub charge: f64,
    #[serde(default)]
    pub position: Vector3,
    /// Ordinary velocity; taken from the flow for attractor models when omitted.
    #[serde(default)]
    pub velocity: Option<Vector3>,
    #[serde(default)]
    pub ensemble: Option<EnsembleConfig>,
    #[serde(default)]
    pub step_check: Option<StepCheck>,
}

fn default_speed() -> f64 {
    1.0
}

fn default_max_phase() -> f64 {
    DEFAULT_MAX_GYRO_PHASE
}

fn default_output_every() -> usize {
    1
}

fn default_mass() -> f64 {
    1.0
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> TracerResult<Self> {
        let config: ScenarioConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> TracerResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn preset(name: &str) -> TracerResult<Self> {
        let config = match name {
            "cyclotron" => Self::cyclotron(),
            "drift" => Self::drift(),
            "lorenz" => Self::lorenz(),
            "rossler" => Self::rossler(),
            "poincare" => Self::poincare(),
            other => return Err(TracerError::UnknownPreset(other.to_string())),
        };
        Ok(config)
    }

    /// Gyration of a unit charge in `B = (0, 0, 1)`: a helix at constant speed.
    pub fn cyclotron() -> Self {
        ScenarioConfig {
            name: "cyclotron".to_string(),
            force: ForceModel::Electromagnetic {
                electric: Vector3::zeros(),
                magnetic: MagneticModel::Uniform {
                    field: Vector3::new(0.0, 0.0, 1.0),
                },
            },
            scheme: Scheme::Rk4,
            step: 0.2,
            t_end: 50.0,
            t_start: 0.0,
            rewind_to: None,
            output_every: 1,
            mass: 1.0,
            charge: 1.0,
            position: Vector3::zeros(),
            velocity: Some(Vector3::new(0.3, 0.0, 0.1)),
            ensemble: None,
            step_check: None,
        }
    }

    /// E x B drift with `E = (0, 0.5, 0)`, first rewound to `t = -10`.
    pub fn drift() -> Self {
        ScenarioConfig {
            name: "drift".to_string(),
            force: ForceModel::Electromagnetic {
                electric: Vector3::new(0.0, 0.5, 0.0),
                magnetic: MagneticModel::Uniform {
                    field: Vector3::new(0.0, 0.0, 1.0),
                },
            },
            rewind_to: Some(-10.0),
            ..Self::cyclotron()
        }
    }

    /// The attractor presets end just past a round time so that the sample
    /// at `t = t_end` itself is written.
    pub fn lorenz() -> Self {
        ScenarioConfig {
            name: "lorenz".to_string(),
            force: ForceModel::Lorenz(Lorenz::default()),
            scheme: Scheme::Rk6,
            step: 0.01,
            t_end: 60.001,
            t_start: 0.0,
            rewind_to: None,
            output_every: 1,
            mass: 1.0,
            charge: 1.0,
            position: Vector3::new(0.0, 1.0, 0.0),
            velocity: None,
            ensemble: None,
            step_check: None,
        }
    }

    pub fn rossler() -> Self {
        ScenarioConfig {
            name: "rossler".to_string(),
            force: ForceModel::Rossler(Rossler::default()),
            step: 0.02,
            t_end: 200.001,
            position: Vector3::new(0.0, -6.78, 0.0),
            ..Self::lorenz()
        }
    }

    /// Mid-plane crossings of particles in a thin current sheet with a normal field.
    pub fn poincare() -> Self {
        ScenarioConfig {
            name: "poincare".to_string(),
            force: ForceModel::Electromagnetic {
                electric: Vector3::zeros(),
                magnetic: MagneticModel::CurrentSheet {
                    kappa: CURRENT_SHEET_KAPPA,
                },
            },
            scheme: Scheme::Rk4,
            step: 0.01,
            t_end: 1000.0,
            t_start: 0.0,
            rewind_to: None,
            output_every: 1,
            mass: 1.0,
            charge: 1.0,
            position: Vector3::zeros(),
            velocity: None,
            ensemble: Some(EnsembleConfig {
                particles: DEFAULT_ENSEMBLE_SIZE,
                seed: 0,
                speed: 1.0,
            }),
            step_check: Some(StepCheck::default()),
        }
    }

    pub fn validate(&self) -> TracerResult<()> {
        let invalid = |message: &str| Err(TracerError::InvalidConfig(message.to_string()));

        if !self.step.is_finite() || self.step == 0.0 {
            return invalid("step must be finite and non-zero");
        }
        if !self.t_start.is_finite() || !self.t_end.is_finite() {
            return invalid("t_start and t_end must be finite");
        }
        if (self.t_end - self.t_start) * self.step <= 0.0 {
            return invalid("t_end is not reachable from t_start with the sign of step");
        }
        if self.output_every == 0 {
            return invalid("output_every must be at least 1");
        }
        if !self.mass.is_finite() || self.mass == 0.0 {
            return invalid("mass must be finite and non-zero");
        }
        if let Some(rewind_to) = self.rewind_to {
            if !rewind_to.is_finite() || rewind_to >= self.t_start {
                return invalid("rewind_to must lie before t_start");
            }
            if self.ensemble.is_some() {
                return invalid("rewind_to is not supported for ensembles");
            }
        }
        if let Some(check) = &self.step_check {
            if !(check.max_phase > 0.0) {
                return invalid("step_check.max_phase must be positive");
            }
        }
        if let Some(ensemble) = &self.ensemble {
            if ensemble.particles == 0 {
                return invalid("ensemble needs at least one particle");
            }
            if !(ensemble.speed > 0.0) {
                return invalid("ensemble speed must be positive");
            }
            if self.charge == 0.0 {
                return invalid("ensemble particles must be charged");
            }
            match self.force.magnetic_field(&Vector3::zeros(), self.t_start) {
                Some(b) if b.abs2() > 0.0 => {}
                _ => return invalid("ensemble needs a magnetic field at the origin"),
            }
            if self.scheme.is_relativistic() && ensemble.speed >= SPEED_OF_LIGHT {
                return invalid("relativistic ensemble speed must be below 1");
            }
        }
        if self.scheme.is_relativistic() && self.initial_velocity().abs() >= SPEED_OF_LIGHT {
            return invalid("relativistic initial speed must be below 1");
        }
        Ok(())
    }

    /// Ordinary initial velocity of the single-particle run.
    pub fn initial_velocity(&self) -> Vector3 {
        self.velocity
            .or_else(|| self.force.flow_velocity(&self.position))
            .unwrap_or_default()
    }

    /// Initial particle of the single-particle run, with the velocity state
    /// already mapped to proper velocity for relativistic schemes.
    pub fn initial_particle(&self) -> Particle {
        let velocity = self.initial_velocity();
        let state = if self.scheme.is_relativistic() {
            velocity.v2uv()
        } else {
            velocity
        };
        Particle::new(self.mass, self.charge)
            .with_time(self.t_start)
            .with_position(self.position)
            .with_velocity(state)
    }
}
