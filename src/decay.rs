use crate::error::Error;

/// An implementation of a time-decaying value
///
/// Each variant of the exploration-decay family is a standalone strategy
/// selected when the agent is constructed. Laws are evaluated at the trial
/// counter `t`, which starts at 1.
pub trait Decay {
    /// Calculate value at time `t`
    fn evaluate(&self, t: f32) -> f32;
}

fn validate(rate: f32, vi: f32, vf: f32) -> Result<(), Error> {
    ((rate >= 0.0 && vi > vf) || (rate < 0.0 && vi < vf))
        .then_some(())
        .ok_or(Error::Decay("`vi - vf` must have same sign as `rate`"))
}

/// A constant value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constant {
    value: f32,
}

impl Constant {
    pub fn new(value: f32) -> Self {
        Self { value }
    }
}

impl Decay for Constant {
    fn evaluate(&self, _t: f32) -> f32 {
        self.value
    }
}

/// v(t) = max(v<sub>i</sub> - rt, v<sub>f</sub>)
#[derive(Debug, Clone, PartialEq)]
pub struct Linear {
    rate: f32,
    vi: f32,
    vf: f32,
}

impl Linear {
    pub fn new(rate: f32, vi: f32, vf: f32) -> Result<Self, Error> {
        validate(rate, vi, vf)?;
        Ok(Self { rate, vi, vf })
    }
}

impl Default for Linear {
    /// Step an exploration rate down from 1 by 0.05 per trial, flooring at 0
    fn default() -> Self {
        Self {
            rate: 0.05,
            vi: 1.0,
            vf: 0.0,
        }
    }
}

impl Decay for Linear {
    fn evaluate(&self, t: f32) -> f32 {
        let &Self { rate, vi, vf } = self;
        (vi - rate * t).max(vf)
    }
}

/// v(t) = a<sup>t</sup>
#[derive(Debug, Clone, PartialEq)]
pub struct Power {
    base: f32,
}

impl Power {
    pub fn new(base: f32) -> Result<Self, Error> {
        (base > 0.0 && base < 1.0)
            .then_some(Self { base })
            .ok_or(Error::Decay("`base` must be in the open interval (0, 1)"))
    }
}

impl Default for Power {
    fn default() -> Self {
        Self { base: 0.99 }
    }
}

impl Decay for Power {
    fn evaluate(&self, t: f32) -> f32 {
        self.base.powf(t)
    }
}

/// v(t) = t<sup>-2</sup>
///
/// Fast early decay. Only meaningful for `t >= 1`, which the trial counter
/// guarantees by starting there.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InverseSquare;

impl Decay for InverseSquare {
    fn evaluate(&self, t: f32) -> f32 {
        1.0 / (t * t)
    }
}

/// v(t) = v<sub>f</sub> + (v<sub>i</sub> - v<sub>f</sub>) * e<sup>-rt</sup>
#[derive(Debug, Clone, PartialEq)]
pub struct Exponential {
    rate: f32,
    vi: f32,
    vf: f32,
}

impl Exponential {
    pub fn new(rate: f32, vi: f32, vf: f32) -> Result<Self, Error> {
        validate(rate, vi, vf)?;
        Ok(Self { rate, vi, vf })
    }
}

impl Default for Exponential {
    /// e<sup>-0.01t</sup>, decaying from 1 toward 0
    fn default() -> Self {
        Self {
            rate: 0.01,
            vi: 1.0,
            vf: 0.0,
        }
    }
}

impl Decay for Exponential {
    fn evaluate(&self, t: f32) -> f32 {
        let &Self { rate, vi, vf } = self;
        vf + (vi - vf) * (-rate * t).exp()
    }
}

/// v(t) = cos(rt)
///
/// Non-monotonic, and the raw law goes negative once `rt` passes a quarter
/// turn. [`Schedule`](crate::schedule::Schedule) clamps the evaluated value
/// into `[0,1]` before it is ever used as a probability.
#[derive(Debug, Clone, PartialEq)]
pub struct Cosine {
    rate: f32,
}

impl Cosine {
    pub fn new(rate: f32) -> Result<Self, Error> {
        (rate > 0.0)
            .then_some(Self { rate })
            .ok_or(Error::Decay("`rate` must be positive"))
    }
}

impl Default for Cosine {
    fn default() -> Self {
        Self { rate: 0.005 }
    }
}

impl Decay for Cosine {
    fn evaluate(&self, t: f32) -> f32 {
        (self.rate * t).cos()
    }
}

/// v(t) = 1 - 1 / (1 + e<sup>-r(t - t<sub>0</sub>)</sup>)
///
/// Holds near 1 until the midpoint trial `t0`, then drops off sharply.
#[derive(Debug, Clone, PartialEq)]
pub struct Sigmoid {
    rate: f32,
    midpoint: f32,
}

impl Sigmoid {
    pub fn new(rate: f32, midpoint: f32) -> Result<Self, Error> {
        (rate > 0.0)
            .then_some(Self { rate, midpoint })
            .ok_or(Error::Decay("`rate` must be positive"))
    }
}

impl Default for Sigmoid {
    fn default() -> Self {
        Self {
            rate: 0.1,
            midpoint: 150.0,
        }
    }
}

impl Decay for Sigmoid {
    fn evaluate(&self, t: f32) -> f32 {
        let &Self { rate, midpoint } = self;
        1.0 - 1.0 / (1.0 + (-rate * (t - midpoint)).exp())
    }
}
