use crate::coverage::Bp;
use crate::geometry::ChartGeometry;

/// An affine map from a value domain to a pixel range.
///
/// A zero-width domain maps every input to the start of the range,
/// i.e. onto the margin the axis starts at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    pub fn is_degenerate(&self) -> bool {
        let [d0, d1] = self.domain;
        d1 - d0 == 0.0
    }

    #[inline]
    pub fn map(&self, value: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;

        let len = d1 - d0;
        if len == 0.0 {
            return r0;
        }

        r0 + (value - d0) * (r1 - r0) / len
    }

    #[inline]
    pub fn map_bp(&self, bp: Bp) -> f64 {
        self.map(bp.0 as f64)
    }

    /// Evenly spaced round values covering the domain, roughly `count`
    /// of them, with steps of 1, 2 or 5 times a power of ten.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let [d0, d1] = self.domain;
        let (lo, hi) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };

        let mut ticks = nice_ticks(lo, hi, count);
        if d0 > d1 {
            ticks.reverse();
        }
        ticks
    }
}

fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }

    if start == stop {
        return vec![start];
    }

    let step = (stop - start) / count as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);

    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    // for sub-unit steps, divide by the inverse step so that e.g. 0.6
    // comes out as 3/5 instead of 3*0.2
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        let mut i0 = (start * inv).round();
        let mut i1 = (stop * inv).round();
        if i0 / inv < start {
            i0 += 1.0;
        }
        if i1 / inv > stop {
            i1 -= 1.0;
        }
        if i1 < i0 {
            return Vec::new();
        }
        let n = (i1 - i0) as usize;
        (0..=n).map(|i| (i0 + i as f64) / inv).collect()
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i0 = (start / inc).round();
        let mut i1 = (stop / inc).round();
        if i0 * inc < start {
            i0 += 1.0;
        }
        if i1 * inc > stop {
            i1 -= 1.0;
        }
        if i1 < i0 {
            return Vec::new();
        }
        let n = (i1 - i0) as usize;
        (0..=n).map(|i| (i0 + i as f64) * inc).collect()
    }
}

/// Genome position to pixel x, spanning the plot region horizontally.
pub fn x_scale(geometry: &ChartGeometry, genome_length: Bp) -> LinearScale {
    LinearScale::new(
        [0.0, genome_length.0 as f64],
        [geometry.plot_left(), geometry.plot_right()],
    )
}

/// Depth or fraction to pixel y. Inverted, since pixel y grows
/// downwards.
pub fn y_scale(geometry: &ChartGeometry, ceiling: f64) -> LinearScale {
    LinearScale::new(
        [0.0, ceiling],
        [geometry.plot_bottom(), geometry.plot_top()],
    )
}

/// Smallest multiple of `step` strictly above `max_depth`, so a track
/// whose peak lands on a multiple still gets headroom.
pub fn depth_ceiling(max_depth: f64, step: f64) -> f64 {
    ((max_depth / step).floor() + 1.0) * step
}
