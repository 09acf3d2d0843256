pub mod runge_kutta;
pub mod tableau;

pub use runge_kutta::{rk4, rk6, OdeState, RungeKutta, RK4, RK6};
pub use tableau::{ButcherTableau, ST44, ST76};
