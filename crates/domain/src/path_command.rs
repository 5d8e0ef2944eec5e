//! Vector path commands in the host's compact array encoding.
//!
//! On the wire every command is a flat array: the verb number followed by its
//! arguments, e.g. `[1, 10.0, 20.0]` for a line to `(10, 20)`.

use serde::de::{self, Deserializer, Error as _};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    Move(Point),
    Line(Point),
    Quad {
        control: Point,
        to: Point,
    },
    /// Weighted quadratic curve.
    Conic {
        control: Point,
        to: Point,
        weight: f64,
    },
    Cubic {
        control1: Point,
        control2: Point,
        to: Point,
    },
    Close,
}

impl PathCommand {
    pub const MOVE: u8 = 0;
    pub const LINE: u8 = 1;
    pub const QUAD: u8 = 2;
    pub const CONIC: u8 = 3;
    pub const CUBIC: u8 = 4;
    pub const CLOSE: u8 = 5;

    pub fn verb(&self) -> u8 {
        match self {
            Self::Move(_) => Self::MOVE,
            Self::Line(_) => Self::LINE,
            Self::Quad { .. } => Self::QUAD,
            Self::Conic { .. } => Self::CONIC,
            Self::Cubic { .. } => Self::CUBIC,
            Self::Close => Self::CLOSE,
        }
    }

    /// Pen position after this command, if it moves the pen.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            Self::Move(p) | Self::Line(p) => Some(p),
            Self::Quad { to, .. } | Self::Conic { to, .. } | Self::Cubic { to, .. } => Some(to),
            Self::Close => None,
        }
    }

    fn args(&self) -> Vec<f64> {
        match *self {
            Self::Move(p) | Self::Line(p) => vec![p.x, p.y],
            Self::Quad { control, to } => vec![control.x, control.y, to.x, to.y],
            Self::Conic {
                control,
                to,
                weight,
            } => vec![control.x, control.y, to.x, to.y, weight],
            Self::Cubic {
                control1,
                control2,
                to,
            } => vec![
                control1.x, control1.y, control2.x, control2.y, to.x, to.y,
            ],
            Self::Close => Vec::new(),
        }
    }
}

impl Serialize for PathCommand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let args = self.args();
        let mut seq = serializer.serialize_seq(Some(args.len() + 1))?;
        seq.serialize_element(&self.verb())?;
        for arg in &args {
            seq.serialize_element(arg)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for PathCommand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<f64>::deserialize(deserializer)?;
        let (verb, args) = raw
            .split_first()
            .ok_or_else(|| D::Error::custom("empty path command"))?;

        // Only whole verbs 0..=5.
        if verb.fract() != 0.0 || !(0.0..=f64::from(Self::CLOSE)).contains(verb) {
            return Err(D::Error::custom(format!("unknown path verb {verb}")));
        }

        let expect = |n: usize| -> Result<(), D::Error> {
            if args.len() == n {
                Ok(())
            } else {
                Err(de::Error::custom(format!(
                    "path verb {verb} takes {n} arguments, got {}",
                    args.len()
                )))
            }
        };
        let pt = |i: usize| Point::new(args[i], args[i + 1]);

        match *verb as u8 {
            Self::MOVE => expect(2).map(|_| Self::Move(pt(0))),
            Self::LINE => expect(2).map(|_| Self::Line(pt(0))),
            Self::QUAD => expect(4).map(|_| Self::Quad {
                control: pt(0),
                to: pt(2),
            }),
            Self::CONIC => expect(5).map(|_| Self::Conic {
                control: pt(0),
                to: pt(2),
                weight: args[4],
            }),
            Self::CUBIC => expect(6).map(|_| Self::Cubic {
                control1: pt(0),
                control2: pt(2),
                to: pt(4),
            }),
            Self::CLOSE => expect(0).map(|_| Self::Close),
            other => Err(de::Error::custom(format!("unknown path verb {other}"))),
        }
    }
}
