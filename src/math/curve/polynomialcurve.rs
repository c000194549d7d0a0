use std::fmt;

use nalgebra::{
    Matrix3,
    Vector3
};
use log::warn;
use rand::Rng;

use crate::math::curve::curve::Curve;
use crate::math::curve::point2d::Point2D;
use crate::math::curve::polynomialdegree::PolynomialDegree;
use crate::math::interval::Interval;

// ─────────────────────────────────────────────
// PolynomialCurve
// ─────────────────────────────────────────────
//
// Low-degree polynomial in monomial form:
//   Constant:  y = k
//   Linear:    y = slope·x + intercept
//   Quadratic: y = a·x² + b·x + c
//
// Random curves are never drawn by coefficient: y-values are drawn at fixed
// anchor abscissas of the domain and the polynomial through them is solved
// for. Every anchor value lies in the output range.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PolynomialCurve {
    Constant { k: f64 },
    Linear { slope: f64, intercept: f64 },
    Quadratic { a: f64, b: f64, c: f64 }
}

impl PolynomialCurve {
    pub fn constant(k: f64) -> PolynomialCurve {
        PolynomialCurve::Constant { k }
    }

    /// Line through two points. A vertical pair yields the flat line `y = y1`.
    pub fn linear_through(lhs_pt: &Point2D, rhs_pt: &Point2D) -> PolynomialCurve {
        let slope = Point2D::slope(lhs_pt, rhs_pt);
        let intercept = lhs_pt.y() - slope * lhs_pt.x();
        PolynomialCurve::Linear { slope, intercept }
    }

    /// Unique quadratic through three points with distinct abscissas.
    ///
    /// Solves the Vandermonde system
    ///   | x_i²  x_i  1 | · (a, b, c)ᵀ = y_i
    /// by LU decomposition. Returns `None` when the system is singular or
    /// the solution is not finite.
    pub fn quadratic_through(points: &[Point2D; 3]) -> Option<PolynomialCurve> {
        let vandermonde = Matrix3::from_fn(|i, j| points[i].x().powi(2 - j as i32));
        let rhs = Vector3::new(points[0].y(), points[1].y(), points[2].y());

        let coefs = vandermonde.lu().solve(&rhs)?;
        if coefs.iter().all(|coef| coef.is_finite()) {
            Some(PolynomialCurve::Quadratic { a: coefs[0], b: coefs[1], c: coefs[2] })
        } else {
            None
        }
    }

    /// Anchor abscissas used by `random` for the given degree.
    pub fn anchor_xs(degree: PolynomialDegree, x_range: &Interval) -> Vec<f64> {
        match degree {
            PolynomialDegree::Constant => vec![],
            PolynomialDegree::Linear => vec![x_range.min(), x_range.max()],
            PolynomialDegree::Quadratic => vec![x_range.min(), x_range.mid(), x_range.max()]
        }
    }

    /// Draws a random curve of the given degree.
    ///
    /// Every anchor from `anchor_xs` receives an independent uniform y in
    /// `y_range`; degree 0 draws the constant itself. A degenerate
    /// `x_range` turns degree 2 into the flat quadratic `y = y1`, the same
    /// rule `linear_through` applies to degree 1.
    pub fn random<R: Rng + ?Sized>(degree: PolynomialDegree,
                                   x_range: &Interval,
                                   y_range: &Interval,
                                   rng: &mut R) -> PolynomialCurve {
        let anchors: Vec<Point2D> = PolynomialCurve::anchor_xs(degree, x_range)
            .into_iter()
            .map(|x| Point2D::new(x, y_range.sample(rng)))
            .collect();

        match (degree, anchors.as_slice()) {
            (PolynomialDegree::Linear, [lhs_pt, rhs_pt]) => {
                PolynomialCurve::linear_through(lhs_pt, rhs_pt)
            }
            (PolynomialDegree::Quadratic, [lhs_pt, mid_pt, rhs_pt]) => {
                if x_range.is_degenerate() {
                    return PolynomialCurve::Quadratic { a: 0.0, b: 0.0, c: lhs_pt.y() };
                }
                PolynomialCurve::quadratic_through(&[*lhs_pt, *mid_pt, *rhs_pt])
                    .unwrap_or_else(|| {
                        // Only reachable when the mid abscissa rounds onto an endpoint.
                        warn!("no quadratic through {}, {}, {}; using the line through the endpoints",
                              lhs_pt, mid_pt, rhs_pt);
                        let slope = Point2D::slope(lhs_pt, rhs_pt);
                        PolynomialCurve::Quadratic { a: 0.0, b: slope, c: lhs_pt.y() - slope * lhs_pt.x() }
                    })
            }
            _ => PolynomialCurve::constant(y_range.sample(rng))
        }
    }

    pub fn degree(&self) -> PolynomialDegree {
        match self {
            PolynomialCurve::Constant { .. } => PolynomialDegree::Constant,
            PolynomialCurve::Linear { .. } => PolynomialDegree::Linear,
            PolynomialCurve::Quadratic { .. } => PolynomialDegree::Quadratic
        }
    }
}

impl Curve for PolynomialCurve {
    fn value(&self, x: f64) -> f64 {
        match *self {
            PolynomialCurve::Constant { k } => k,
            PolynomialCurve::Linear { slope, intercept } => f64::mul_add(slope, x, intercept),
            PolynomialCurve::Quadratic { a, b, c } => f64::mul_add(f64::mul_add(a, x, b), x, c)
        }
    }

    fn derivative(&self, x: f64) -> f64 {
        match *self {
            PolynomialCurve::Constant { .. } => 0.0,
            PolynomialCurve::Linear { slope, .. } => slope,
            PolynomialCurve::Quadratic { a, b, .. } => 2.0 * a * x + b
        }
    }

    fn second_derivative(&self, _x: f64) -> f64 {
        match *self {
            PolynomialCurve::Quadratic { a, .. } => 2.0 * a,
            _ => 0.0
        }
    }
}

impl fmt::Display for PolynomialCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolynomialCurve::Constant { k } => write!(f, "y = {:.3}", k),
            PolynomialCurve::Linear { slope, intercept } => {
                write!(f, "y = {:.3}x + {:.3}", slope, intercept)
            }
            PolynomialCurve::Quadratic { a, b, c } => {
                write!(f, "y = {:.3}x² + {:.3}x + {:.3}", a, b, c)
            }
        }
    }
}
