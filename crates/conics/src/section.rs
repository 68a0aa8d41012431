//! Result types of a cone slice and their equation text.

use std::fmt;

/// Curve family of a cone/plane intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConicKind {
    Circle,
    Ellipse,
    Parabola,
    Hyperbola,
    /// The plane touches the cone only at its apex.
    Point,
    /// The plane misses the cone, or the coefficients degenerate.
    None,
}

impl ConicKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConicKind::Circle => "circle",
            ConicKind::Ellipse => "ellipse",
            ConicKind::Parabola => "parabola",
            ConicKind::Hyperbola => "hyperbola",
            ConicKind::Point => "point",
            ConicKind::None => "none",
        }
    }
}

impl fmt::Display for ConicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of the curve in the plane's own coordinates. Which fields are set depends
/// on the kind: `a`/`b` for circles, ellipses and hyperbolas, `p`/`v_offset` for
/// parabolas, `vertical` for hyperbolas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConicParams {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub p: Option<f64>,
    pub v_offset: Option<f64>,
    pub vertical: Option<bool>,
}

/// Classified intersection of a plane with the cone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConicSection {
    pub kind: ConicKind,
    pub params: ConicParams,
}

impl ConicSection {
    pub fn none() -> Self {
        Self {
            kind: ConicKind::None,
            params: ConicParams::default(),
        }
    }

    pub fn point() -> Self {
        Self {
            kind: ConicKind::Point,
            params: ConicParams::default(),
        }
    }

    pub fn circle(radius: f64) -> Self {
        Self {
            kind: ConicKind::Circle,
            params: ConicParams {
                a: Some(radius),
                b: Some(radius),
                ..ConicParams::default()
            },
        }
    }

    pub fn ellipse(a: f64, b: f64) -> Self {
        Self {
            kind: ConicKind::Ellipse,
            params: ConicParams {
                a: Some(a),
                b: Some(b),
                ..ConicParams::default()
            },
        }
    }

    pub fn parabola(p: f64, v_offset: f64) -> Self {
        Self {
            kind: ConicKind::Parabola,
            params: ConicParams {
                p: Some(p),
                v_offset: Some(v_offset),
                ..ConicParams::default()
            },
        }
    }

    pub fn hyperbola(a: f64, b: f64, vertical: bool) -> Self {
        Self {
            kind: ConicKind::Hyperbola,
            params: ConicParams {
                a: Some(a),
                b: Some(b),
                vertical: Some(vertical),
                ..ConicParams::default()
            },
        }
    }

    /// Whether the plane cuts an actual curve (not a point, not a miss).
    pub fn is_curve(&self) -> bool {
        !matches!(self.kind, ConicKind::Point | ConicKind::None)
    }
}

impl fmt::Display for ConicSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.params.a.unwrap_or_default();
        let b = self.params.b.unwrap_or_default();
        match self.kind {
            ConicKind::Circle => write!(f, "x² + y² = {a:.2}²"),
            ConicKind::Ellipse => write!(f, "x²/{a:.2}² + y²/{b:.2}² = 1"),
            ConicKind::Parabola => {
                let p = self.params.p.unwrap_or_default();
                let v_offset = self.params.v_offset.unwrap_or_default();
                let lead = if p == 0.0 { 0.0 } else { 1.0 / p };
                let sign = if v_offset < 0.0 { '-' } else { '+' };
                write!(f, "y = {lead:.2}x² {sign} {:.2}", v_offset.abs())
            }
            ConicKind::Hyperbola if self.params.vertical == Some(true) => {
                write!(f, "y²/{a:.2}² - x²/{b:.2}² = 1")
            }
            ConicKind::Hyperbola => write!(f, "x²/{a:.2}² - y²/{b:.2}² = 1"),
            ConicKind::Point => f.write_str("single point"),
            ConicKind::None => f.write_str("no intersection"),
        }
    }
}
