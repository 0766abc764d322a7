use core::fmt;
use std::ops::{Add, Div, Mul, Sub};

use itertools::Itertools;

use crate::intersection::{self, PointIntersection, ShapeRef};

pub mod point2;
pub mod point3;

pub use point2::Point2D;
pub use point3::Point3D;

/// Marks a value as usable in vector arithmetic. Only the vector family
/// implements it, so scalars and foreign numeric types never take part.
pub trait VectorLike {
    fn components(&self) -> &[f64];

    fn len(&self) -> usize {
        self.components().len()
    }

    fn is_empty(&self) -> bool {
        self.components().is_empty()
    }

    fn magnitude(&self) -> f64 {
        self.components().iter().map(|i| i * i).sum::<f64>().sqrt()
    }

    fn unit_vector(&self) -> Vector {
        let magnitude = self.magnitude();
        Vector::new(self.components().iter().map(|i| i / magnitude))
    }
}

/// The base vector type, dimension-specialized at construction.
///
/// [`Vector::new`] returns the `Point2` variant for two components and the
/// `Point3` variant for three, so named accessors (and the cross product in
/// 3D) are available whenever the dimension allows them.
#[derive(Clone, Debug)]
pub enum Vector {
    Generic(Vec<f64>),
    Point2(Point2D),
    Point3(Point3D),
}

impl Vector {
    pub fn new(components: impl IntoIterator<Item = f64>) -> Self {
        let components: Vec<f64> = components.into_iter().collect();
        match components.len() {
            2 => Self::Point2(Point2D::new(components[0], components[1])),
            3 => Self::Point3(Point3D::new(components[0], components[1], components[2])),
            _ => Self::Generic(components),
        }
    }

    pub fn as_point2(&self) -> Option<&Point2D> {
        match self {
            Self::Point2(point) => Some(point),
            _ => None,
        }
    }

    pub fn as_point3(&self) -> Option<&Point3D> {
        match self {
            Self::Point3(point) => Some(point),
            _ => None,
        }
    }

    /// Intersects this vector, taken as a point, with another shape.
    ///
    /// `Ok(None)` means the shapes do not intersect; an unsupported shape
    /// pair is an error.
    pub fn intersect<'a>(
        &'a self,
        other: impl Into<ShapeRef<'a>>,
    ) -> anyhow::Result<Option<PointIntersection<'a>>> {
        intersection::intersect(ShapeRef::Point(self), other.into())
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Generic(_) => "Vector",
            Self::Point2(_) => "Point2D",
            Self::Point3(_) => "Point3D",
        }
    }
}

impl VectorLike for Vector {
    fn components(&self) -> &[f64] {
        match self {
            Self::Generic(components) => components,
            Self::Point2(point) => point.components(),
            Self::Point3(point) => point.components(),
        }
    }
}

/// Dot product over zero-padded component pairs.
pub fn dot(a: &impl VectorLike, b: &impl VectorLike) -> f64 {
    zip_padded(a.components(), b.components(), |a, b| a * b).sum()
}

fn zip_padded<'a>(
    a: &'a [f64],
    b: &'a [f64],
    op: impl Fn(f64, f64) -> f64 + 'a,
) -> impl Iterator<Item = f64> + 'a {
    a.iter()
        .copied()
        .zip_longest(b.iter().copied())
        .map(move |pair| {
            let (a, b) = pair.or(0.0, 0.0);
            op(a, b)
        })
}

impl Add for &Vector {
    type Output = Vector;

    fn add(self, rhs: &Vector) -> Vector {
        Vector::new(zip_padded(self.components(), rhs.components(), |a, b| a + b))
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        &self + &rhs
    }
}

impl Sub for &Vector {
    type Output = Vector;

    fn sub(self, rhs: &Vector) -> Vector {
        Vector::new(zip_padded(self.components(), rhs.components(), |a, b| a - b))
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        &self - &rhs
    }
}

impl Mul for &Vector {
    type Output = f64;

    fn mul(self, rhs: &Vector) -> f64 {
        dot(self, rhs)
    }
}

impl Mul for Vector {
    type Output = f64;

    fn mul(self, rhs: Vector) -> f64 {
        dot(&self, &rhs)
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.components().iter().map(|i| i * rhs))
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        &self * rhs
    }
}

impl Mul<&Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: &Vector) -> Vector {
        rhs * self
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        &rhs * self
    }
}

impl Div<f64> for &Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        Vector::new(self.components().iter().map(|i| i / rhs))
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        &self / rhs
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.components() == other.components()
    }
}

impl PartialEq<Point2D> for Vector {
    fn eq(&self, other: &Point2D) -> bool {
        self.components() == other.components()
    }
}

impl PartialEq<Vector> for Point2D {
    fn eq(&self, other: &Vector) -> bool {
        self.components() == other.components()
    }
}

impl PartialEq<Point3D> for Vector {
    fn eq(&self, other: &Point3D) -> bool {
        self.components() == other.components()
    }
}

impl PartialEq<Vector> for Point3D {
    fn eq(&self, other: &Vector) -> bool {
        self.components() == other.components()
    }
}

impl From<Point2D> for Vector {
    fn from(point: Point2D) -> Self {
        Self::Point2(point)
    }
}

impl From<Point3D> for Vector {
    fn from(point: Point3D) -> Self {
        Self::Point3(point)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(components: [f64; N]) -> Self {
        Self::new(components)
    }
}

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Self {
        Self::new(components)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic(components) => {
                write!(f, "Vector({})", components.iter().join(", "))
            }
            Self::Point2(point) => point.fmt(f),
            Self::Point3(point) => point.fmt(f),
        }
    }
}
