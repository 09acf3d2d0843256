// Natural units throughout: c = 1, time in inverse cyclotron frequency
pub const SPEED_OF_LIGHT: f64 = 1.0;

// Largest gyro-phase |B| * |h| advanced per step before a run is aborted
pub const DEFAULT_MAX_GYRO_PHASE: f64 = 0.3;

// Current sheet (Poincaré map) experiment
pub const CURRENT_SHEET_KAPPA: f64 = 0.36178;
pub const DEFAULT_ENSEMBLE_SIZE: usize = 256;

// Math
pub const PI: f64 = std::f64::consts::PI;
pub const TWO_PI: f64 = 2.0 * PI;
