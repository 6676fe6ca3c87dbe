//! Linear scales and tick generation.
//!
//! Tick helpers follow the d3 conventions the chart was designed around:
//! `ticks` picks "nice" 1/2/5 multiples, `range` walks a fixed step and
//! excludes the stop value.

/// Upper bound on ticks produced by a fixed-step range.
pub const MAX_RANGE_TICKS: usize = 1_000;

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Maps a data interval onto a pixel interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Data value to pixel. A zero-width domain maps everything to the middle of the range.
    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (v - d0) / span };
        r0 + t * (r1 - r0)
    }

    /// Pixel back to data value.
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        let t = if span == 0.0 { 0.5 } else { (px - r0) / span };
        d0 + t * (d1 - d0)
    }

    /// Roughly `count` nice tick values covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }
}

/// Signed tick increment: positive means a step of that size, negative means
/// a step of `1 / -inc`, which keeps sub-unit steps exact.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Nice, evenly spaced values in `[start, stop]`, ascending for ascending input.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };

    let inc = tick_increment(lo, hi, count);
    if inc == 0.0 || !inc.is_finite() {
        return Vec::new();
    }

    let mut out = if inc > 0.0 {
        let first = (lo / inc).ceil();
        let last = (hi / inc).floor();
        steps(first, last).map(|i| i * inc).collect::<Vec<_>>()
    } else {
        let inv = -inc;
        let first = (lo * inv).ceil();
        let last = (hi * inv).floor();
        steps(first, last).map(|i| i / inv).collect::<Vec<_>>()
    };
    if reverse {
        out.reverse();
    }
    out
}

fn steps(first: f64, last: f64) -> impl Iterator<Item = f64> {
    let n = (last - first + 1.0).ceil().max(0.0) as usize;
    (0..n).map(move |i| first + i as f64)
}

/// `start, start + step, ...` while below `stop`. Empty for a non-positive or non-finite step.
///
/// A step that would need more than [`MAX_RANGE_TICKS`] values also yields nothing.
pub fn range(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let n = ((stop - start) / step).ceil();
    if !n.is_finite() || n <= 0.0 {
        return Vec::new();
    }
    if n > MAX_RANGE_TICKS as f64 {
        log::warn!("step {step} over [{start}, {stop}] would need {n} ticks; drawing none");
        return Vec::new();
    }
    (0..n as usize).map(|i| start + i as f64 * step).collect()
}

/// Step between value gridlines for a value extent.
pub fn value_tick_step(min: f64, max: f64) -> f64 {
    (max - min) / 2.0 - 1.0
}

/// Gridline and y-axis tick values for a value extent.
///
/// A degenerate or narrow extent yields no ticks.
pub fn value_ticks(min: f64, max: f64) -> Vec<f64> {
    let step = value_tick_step(min, max);
    if step.is_nan() || step <= 0.0 {
        return Vec::new();
    }
    range(min, max, step)
}
