//! Vector arithmetic and line-intersection queries over
//! arbitrary-dimensional and dimension-specialized vectors.

pub mod intersection;
pub mod linear;
pub mod vector;

pub use intersection::{intersect, Intersection, PointIntersection, ShapeRef};
pub use linear::{AxisEquation, Line, VectorLine};
pub use vector::{dot, Point2D, Point3D, Vector, VectorLike};
