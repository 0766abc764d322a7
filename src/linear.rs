pub mod equation;
pub mod line;

pub use equation::AxisEquation;
pub use line::{Line, VectorLine};
