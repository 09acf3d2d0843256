use super::output::ColumnWriter;
use super::poincare::midplane_crossing;
use super::sampling::isotropic_velocity;
use crate::config::{EnsembleConfig, ScenarioConfig};
use crate::errors::{TracerError, TracerResult};
use crate::models::Particle;
use crate::numerics::Vector3;
use crate::physics::energy::{relative_drift, speed_squared};
use crate::physics::fields::gyrocenter_offset;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub steps: usize,
    pub rows: usize,
    /// Largest relative change of `|v|^2` seen along any trajectory.
    pub max_speed_drift: f64,
    /// State of the last particle traced.
    pub final_state: Particle,
}

/// Drives the integration loop of a scenario and streams samples to a writer.
pub struct Tracer<'a> {
    config: &'a ScenarioConfig,
}

impl<'a> Tracer<'a> {
    pub fn new(config: &'a ScenarioConfig) -> TracerResult<Self> {
        config.validate()?;
        Ok(Tracer { config })
    }

    pub fn run<W: Write>(&self, out: W) -> TracerResult<RunSummary> {
        let config = self.config;
        info!(
            "tracing `{}` with {} (h = {}, t_end = {})",
            config.name, config.scheme, config.step, config.t_end
        );
        let mut writer = ColumnWriter::new(out);
        let summary = match &config.ensemble {
            Some(ensemble) => self.trace_ensemble(ensemble, &mut writer)?,
            None => self.trace_single(&mut writer)?,
        };
        writer.flush()?;
        info!(
            "finished after {} steps, {} rows written, max |v|^2 drift {:.3e}",
            summary.steps, summary.rows, summary.max_speed_drift
        );
        Ok(summary)
    }

    fn trace_single<W: Write>(&self, writer: &mut ColumnWriter<W>) -> TracerResult<RunSummary> {
        let config = self.config;
        let mut particle = config.initial_particle();
        let mut steps = 0;

        if let Some(rewind_to) = config.rewind_to {
            let h = -config.step.abs();
            while particle.time() > rewind_to {
                self.advance(&mut particle, h)?;
                steps += 1;
            }
            debug!("rewound to t = {} in {} steps", particle.time(), steps);
        }

        let initial = speed_squared(&particle);
        let mut max_speed_drift: f64 = 0.0;
        let mut i = 0;
        while self.before_end(particle.time()) {
            if i % config.output_every == 0 {
                writer.write_state(&particle.position(), &self.ordinary_velocity(&particle))?;
            }
            self.advance(&mut particle, config.step)?;
            max_speed_drift = max_speed_drift.max(relative_drift(initial, speed_squared(&particle)));
            steps += 1;
            i += 1;
        }

        Ok(RunSummary {
            steps,
            rows: writer.rows(),
            max_speed_drift,
            final_state: particle,
        })
    }

    fn trace_ensemble<W: Write>(
        &self,
        ensemble: &EnsembleConfig,
        writer: &mut ColumnWriter<W>,
    ) -> TracerResult<RunSummary> {
        let config = self.config;
        let mut rng = StdRng::seed_from_u64(ensemble.seed);
        let b0 = config
            .force
            .magnetic_field(&Vector3::zeros(), config.t_start)
            .ok_or_else(|| TracerError::InvalidConfig("ensemble needs a magnetic field".into()))?;

        let mut steps = 0;
        let mut max_speed_drift: f64 = 0.0;
        let mut particle = Particle::new(config.mass, config.charge);

        for index in 1..=ensemble.particles {
            info!("running particle {}/{}", index, ensemble.particles);

            let v = isotropic_velocity(&mut rng, ensemble.speed);
            let r = gyrocenter_offset(&v, &b0, config.mass, config.charge);
            let state = if config.scheme.is_relativistic() {
                v.v2uv()
            } else {
                v
            };
            particle = Particle::new(config.mass, config.charge)
                .with_time(config.t_start)
                .with_position(r)
                .with_velocity(state);

            let initial = speed_squared(&particle);
            let mut prev = particle;
            while self.before_end(particle.time()) {
                self.advance(&mut particle, config.step)?;
                steps += 1;
                if let Some(crossing) = midplane_crossing(&prev, &particle) {
                    let velocity = if config.scheme.is_relativistic() {
                        crossing.velocity.uv2v()
                    } else {
                        crossing.velocity
                    };
                    writer.write_crossing(&crossing.position, &velocity, index)?;
                }
                prev = particle;
            }
            max_speed_drift = max_speed_drift.max(relative_drift(initial, speed_squared(&particle)));
        }

        Ok(RunSummary {
            steps,
            rows: writer.rows(),
            max_speed_drift,
            final_state: particle,
        })
    }

    fn before_end(&self, t: f64) -> bool {
        if self.config.step > 0.0 {
            t < self.config.t_end
        } else {
            t > self.config.t_end
        }
    }

    fn ordinary_velocity(&self, particle: &Particle) -> Vector3 {
        if self.config.scheme.is_relativistic() {
            particle.velocity().uv2v()
        } else {
            particle.velocity()
        }
    }

    /// One step followed by the divergence checks.
    fn advance(&self, particle: &mut Particle, h: f64) -> TracerResult<()> {
        let config = self.config;
        config.scheme.advance(particle, h, &config.force);

        if !particle.is_finite() {
            warn!("non-finite state at t = {}", particle.time());
            return Err(TracerError::NonFinite {
                time: particle.time(),
            });
        }

        if let Some(check) = &config.step_check {
            if let Some(b) = config.force.magnetic_field(&particle.position(), particle.time()) {
                let phase = b.abs() * h.abs();
                if phase > check.max_phase {
                    warn!("exiting at t = {}: |B| dt = {}", particle.time(), phase);
                    return Err(TracerError::StepTooLarge {
                        time: particle.time(),
                        phase,
                        limit: check.max_phase,
                    });
                }
            }
        }
        Ok(())
    }
}
