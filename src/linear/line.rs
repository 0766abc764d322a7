use core::fmt;

use anyhow::anyhow;
use itertools::Itertools;

use crate::{
    intersection::{self, PointIntersection, ShapeRef},
    linear::equation::AxisEquation,
    vector::{Vector, VectorLike},
};

/// A parametric line anchored at `origin` with direction `dir`.
#[derive(Clone, Debug)]
pub struct Line {
    pub origin: Vector,
    pub dir: Vector,
    equations: Vec<AxisEquation>,
}

impl Line {
    pub(crate) fn new(a: Vector, b: Vector) -> Self {
        let dir = &b - &a;
        let equations = a
            .components()
            .iter()
            .zip(dir.components())
            .map(|(&offset, &slope)| AxisEquation::new(offset, slope))
            .collect();
        Self {
            origin: a,
            dir,
            equations,
        }
    }

    /// The point `origin + dir * t`.
    pub fn at(&self, t: f64) -> Vector {
        &self.origin + &(&self.dir * t)
    }

    pub fn dim(&self) -> usize {
        self.origin.len()
    }

    pub fn equations(&self) -> &[AxisEquation] {
        &self.equations
    }
}

/// A line between two vectors, dimension-specialized at construction the
/// same way [`Vector`] is.
#[derive(Clone, Debug)]
pub enum VectorLine {
    Generic(Line),
    Line2(Line),
    Line3(Line),
}

impl VectorLine {
    /// Builds the line through `a` and `b`, anchored at `a`.
    ///
    /// Fails when the two vectors differ in dimension.
    pub fn new(a: Vector, b: Vector) -> anyhow::Result<Self> {
        if a.len() != b.len() {
            return Err(anyhow!(
                "vector dimensions are different: {} != {}",
                a.len(),
                b.len()
            ));
        }
        let line = Line::new(a, b);
        Ok(match line.dim() {
            2 => Self::Line2(line),
            3 => Self::Line3(line),
            _ => Self::Generic(line),
        })
    }

    pub fn line(&self) -> &Line {
        match self {
            Self::Generic(line) | Self::Line2(line) | Self::Line3(line) => line,
        }
    }

    pub fn at(&self, t: f64) -> Vector {
        self.line().at(t)
    }

    pub fn dim(&self) -> usize {
        self.line().dim()
    }

    pub fn equations(&self) -> &[AxisEquation] {
        self.line().equations()
    }

    /// Intersects this line with another shape.
    ///
    /// `Ok(None)` means the shapes do not intersect; an unsupported shape
    /// pair is an error.
    pub fn intersect<'a>(
        &'a self,
        other: impl Into<ShapeRef<'a>>,
    ) -> anyhow::Result<Option<PointIntersection<'a>>> {
        intersection::intersect(ShapeRef::Line(self), other.into())
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Generic(_) => "VectorLine",
            Self::Line2(_) => "VectorLine2D",
            Self::Line3(_) => "VectorLine3D",
        }
    }
}

impl fmt::Display for VectorLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line2(line) => write!(
                f,
                "VectorLine(x={}, y={})",
                line.equations[0], line.equations[1]
            ),
            Self::Line3(line) => write!(
                f,
                "VectorLine(x={}, y={}, z={})",
                line.equations[0], line.equations[1], line.equations[2]
            ),
            Self::Generic(line) => {
                write!(f, "VectorLine({})", line.equations.iter().join(", "))
            }
        }
    }
}
