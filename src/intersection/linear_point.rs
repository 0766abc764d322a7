use num_traits::Zero;

use crate::{
    linear::line::VectorLine,
    vector::{Vector, VectorLike},
};

use super::{Intersection, PointIntersection, ShapeRef};

/// Point-membership test, valid for any dimension.
///
/// Solves `t` on the first axis whose direction component is non-zero, then
/// verifies the evaluated point against the query point on every axis.
pub(super) fn relate<'a>(line: &'a VectorLine, point: &'a Vector) -> Intersection<'a> {
    let inner = line.line();
    if point.len() != inner.dim() {
        return Intersection::NotSupported;
    }

    let t = inner
        .dir
        .components()
        .iter()
        .copied()
        .enumerate()
        .find(|(_, dir)| !dir.is_zero())
        .map(|(i, dir)| (point.components()[i] - inner.origin.components()[i]) / dir)
        .unwrap_or(0.0);

    let candidate = Vector::new(inner.equations().iter().map(|equation| equation.evaluate(t)));
    if candidate == *point {
        Intersection::Found(PointIntersection {
            a: ShapeRef::Line(line),
            b: ShapeRef::Point(point),
            point: candidate,
        })
    } else {
        Intersection::Empty
    }
}

#[cfg(test)]
mod tests {
    use crate::{linear::line::VectorLine, vector::Vector};

    #[test]
    fn point_on_line() {
        let line = VectorLine::new(Vector::new([1.0, 1.0]), Vector::new([2.0, 0.0])).unwrap();
        let point = Vector::new([3.0, -1.0]);

        let intersection = line.intersect(&point).unwrap().unwrap();
        assert_eq!(intersection.point, point);

        let reversed = point.intersect(&line).unwrap().unwrap();
        assert_eq!(reversed.point, point);
    }

    #[test]
    fn point_off_line() {
        let line = VectorLine::new(Vector::new([0.0, 0.0]), Vector::new([2.0, -2.0])).unwrap();
        let point = Vector::new([3.0, -1.0]);

        assert!(line.intersect(&point).unwrap().is_none());
        assert!(point.intersect(&line).unwrap().is_none());
    }

    #[test]
    fn point_on_3d_line() {
        let line =
            VectorLine::new(Vector::new([2.0, 7.0, 4.0]), Vector::new([5.0, 8.0, 2.0])).unwrap();
        let point = line.at(2.0);

        let intersection = line.intersect(&point).unwrap().unwrap();
        assert_eq!(intersection.point, Vector::new([8.0, 9.0, 0.0]));
    }

    #[test]
    fn point_on_generic_dimension_line() {
        let line = VectorLine::new(
            Vector::new([1.0, 2.0, 3.0, 4.0]),
            Vector::new([2.0, 2.0, 2.0, 2.0]),
        )
        .unwrap();
        let point = line.at(2.0);

        let intersection = line.intersect(&point).unwrap().unwrap();
        assert_eq!(intersection.point, Vector::new([3.0, 2.0, 1.0, 0.0]));
    }

    #[test]
    fn degenerate_line_is_a_single_point() {
        let line = VectorLine::new(Vector::new([1.0, 1.0]), Vector::new([1.0, 1.0])).unwrap();

        let origin = Vector::new([1.0, 1.0]);
        assert_eq!(line.intersect(&origin).unwrap().unwrap().point, origin);

        let elsewhere = Vector::new([2.0, 2.0]);
        assert!(line.intersect(&elsewhere).unwrap().is_none());
    }

    #[test]
    fn skips_leading_zero_direction_components() {
        let line =
            VectorLine::new(Vector::new([1.0, 1.0, 0.0]), Vector::new([1.0, 1.0, 4.0])).unwrap();
        let point = Vector::new([1.0, 1.0, 2.0]);
        assert_eq!(line.intersect(&point).unwrap().unwrap().point, point);
    }

    #[test]
    fn mismatched_dimensions_are_unsupported() {
        let line =
            VectorLine::new(Vector::new([2.0, 7.0, 4.0]), Vector::new([5.0, 8.0, 2.0])).unwrap();
        let point = Vector::new([1.0, 2.0]);

        let err = line.intersect(&point).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported types for intersect: 'VectorLine3D' and 'Point2D'"
        );
    }
}
