use nalgebra::Matrix2;
use num_traits::Zero;

use crate::{
    linear::line::VectorLine,
    vector::{Vector, VectorLike},
};

use super::{Intersection, PointIntersection, ShapeRef};

/// Closed-form solver for two 2D lines, `p + u*t = q + v*s`.
///
/// Any other line pair is handed back as unsupported; in particular 3D
/// line-line intersection stays unimplemented.
pub(super) fn relate<'a>(first: &'a VectorLine, second: &'a VectorLine) -> Intersection<'a> {
    let (VectorLine::Line2(self_line), VectorLine::Line2(other_line)) = (first, second) else {
        return Intersection::NotSupported;
    };

    let u = self_line.dir.components();
    let v = other_line.dir.components();

    let determinant = Matrix2::new(u[0], -v[0], u[1], -v[1]).determinant();
    if determinant.is_zero() {
        // parallel, coincident lines included
        return Intersection::Empty;
    }

    let difference = &other_line.origin - &self_line.origin;
    let d = difference.components();
    let determinant_a = Matrix2::new(d[0], -v[0], d[1], -v[1]).determinant();
    let determinant_b = Matrix2::new(u[0], d[0], u[1], d[1]).determinant();
    let a = determinant_a / determinant;
    let b = determinant_b / determinant;

    let x1 = self_line.equations()[0].evaluate(a);
    let x2 = other_line.equations()[0].evaluate(b);
    let y1 = self_line.equations()[1].evaluate(a);
    let y2 = other_line.equations()[1].evaluate(b);
    assert_eq!(x1, x2);
    assert_eq!(y1, y2);

    Intersection::Found(PointIntersection {
        a: ShapeRef::Line(first),
        b: ShapeRef::Line(second),
        point: Vector::new([x1, y1]),
    })
}
