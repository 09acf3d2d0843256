pub mod output;
pub mod poincare;
pub mod sampling;
pub mod tracer;

pub use output::ColumnWriter;
pub use poincare::{midplane_crossing, Crossing};
pub use sampling::isotropic_velocity;
pub use tracer::{RunSummary, Tracer};
