use anyhow::anyhow;

use crate::{linear::line::VectorLine, vector::Vector};

mod linear_linear;
mod linear_point;

/// The closed set of shapes intersection dispatch is keyed on.
#[derive(Clone, Copy, Debug)]
pub enum ShapeRef<'a> {
    Point(&'a Vector),
    Line(&'a VectorLine),
}

impl<'a> ShapeRef<'a> {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Point(point) => point.kind(),
            Self::Line(line) => line.kind(),
        }
    }
}

impl<'a> From<&'a Vector> for ShapeRef<'a> {
    fn from(point: &'a Vector) -> Self {
        Self::Point(point)
    }
}

impl<'a> From<&'a VectorLine> for ShapeRef<'a> {
    fn from(line: &'a VectorLine) -> Self {
        Self::Line(line)
    }
}

/// The point where two shapes meet, together with both shapes.
#[derive(Clone, Debug)]
pub struct PointIntersection<'a> {
    pub a: ShapeRef<'a>,
    pub b: ShapeRef<'a>,
    pub point: Vector,
}

/// Outcome of a single dispatch direction. `NotSupported` is distinct from
/// `Empty`: it hands the pair to the other operand before anything fails.
#[derive(Clone, Debug)]
pub enum Intersection<'a> {
    Found(PointIntersection<'a>),
    Empty,
    NotSupported,
}

fn try_intersect<'a>(a: ShapeRef<'a>, b: ShapeRef<'a>) -> Intersection<'a> {
    match (a, b) {
        (ShapeRef::Line(line), ShapeRef::Point(point)) => linear_point::relate(line, point),
        (ShapeRef::Line(first), ShapeRef::Line(second)) => linear_linear::relate(first, second),
        _ => Intersection::NotSupported,
    }
}

/// Intersects two shapes, symmetric in operand order.
///
/// The pair is first tried as given; when that direction reports
/// `NotSupported` the roles are reversed, and only when both directions
/// decline does the call fail, naming both operand kinds.
pub fn intersect<'a>(
    a: ShapeRef<'a>,
    b: ShapeRef<'a>,
) -> anyhow::Result<Option<PointIntersection<'a>>> {
    match try_intersect(a, b) {
        Intersection::Found(intersection) => Ok(Some(intersection)),
        Intersection::Empty => Ok(None),
        Intersection::NotSupported => match try_intersect(b, a) {
            Intersection::Found(intersection) => Ok(Some(intersection)),
            Intersection::Empty => Ok(None),
            Intersection::NotSupported => Err(anyhow!(
                "unsupported types for intersect: '{}' and '{}'",
                a.kind(),
                b.kind()
            )),
        },
    }
}
