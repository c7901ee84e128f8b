//! # Design Response Spectrum
//!
//! Four-branch design spectrum per ASCE 7-10 Section 11.4.5:
//!
//! ```text
//!          Sa
//!   SDS ─ ─ ┌───────┐
//!          /│       │\
//! 0.4SDS  / │       │ \  SD1/T
//!        │  │       │   ‾‾‾‾‾‾‾‾‾‾‾‾ SD1·TL/T²
//!        └──┴───────┴──────────────┴──────── T
//!        0  T0      Ts             TL
//! ```
//!
//! | Range          | Sa                     |
//! |----------------|------------------------|
//! | T ≤ T0         | SDS·(0.4 + 0.6·T/T0)   |
//! | T0 < T ≤ Ts    | SDS                    |
//! | Ts < T ≤ TL    | SD1/T                  |
//! | T > TL         | SD1·TL/T²              |
//!
//! The curve is sampled every [`PERIOD_STEP`] seconds from 0 to
//! [`MAX_PERIOD`] inclusive. Iteration is restartable: every call to
//! [`ResponseSpectrum::iter`] regenerates the identical sequence.

use serde::{Deserialize, Serialize};

use super::parameters::SiteDesignValues;

/// Sampling interval (s)
pub const PERIOD_STEP: f64 = 0.05;

/// Last sampled period (s)
pub const MAX_PERIOD: f64 = 4.0;

/// Number of samples from T = 0 to T = MAX_PERIOD inclusive
pub const SAMPLE_COUNT: usize = 81;

/// One point on the spectrum curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponseSpectrumPoint {
    /// Period T (s)
    pub period: f64,
    /// Spectral acceleration Sa (g)
    pub acceleration: f64,
}

/// Design response spectrum defined by its design accelerations and corner periods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponseSpectrum {
    pub sds: f64,
    pub sd1: f64,
    pub t0: f64,
    pub ts: f64,
    pub tl: f64,
}

impl ResponseSpectrum {
    pub fn new(sds: f64, sd1: f64, t0: f64, ts: f64, tl: f64) -> Self {
        Self { sds, sd1, t0, ts, tl }
    }

    pub fn from_values(values: &SiteDesignValues) -> Self {
        Self::new(values.sds, values.sd1, values.t0, values.ts, values.tl)
    }

    /// Spectral acceleration Sa at `period`.
    pub fn acceleration_at(&self, period: f64) -> f64 {
        if period <= self.t0 {
            if self.t0 > 0.0 {
                self.sds * (0.4 + 0.6 * period / self.t0)
            } else {
                // Degenerate T0 = 0: the ramp's starting value
                0.4 * self.sds
            }
        } else if period <= self.ts {
            self.sds
        } else if period <= self.tl {
            self.sd1 / period
        } else {
            self.sd1 * self.tl / (period * period)
        }
    }

    /// Lazily sample the curve from 0 to [`MAX_PERIOD`].
    pub fn iter(&self) -> SpectrumIter {
        SpectrumIter {
            spectrum: *self,
            index: 0,
        }
    }

    /// Collect all samples.
    pub fn points(&self) -> Vec<ResponseSpectrumPoint> {
        self.iter().collect()
    }

    /// Sample with the largest acceleration (first one on ties).
    pub fn peak(&self) -> ResponseSpectrumPoint {
        self.iter()
            .fold(None, |best: Option<ResponseSpectrumPoint>, p| match best {
                Some(b) if b.acceleration >= p.acceleration => Some(b),
                _ => Some(p),
            })
            .unwrap_or(ResponseSpectrumPoint {
                period: 0.0,
                acceleration: self.acceleration_at(0.0),
            })
    }
}

impl<'a> IntoIterator for &'a ResponseSpectrum {
    type Item = ResponseSpectrumPoint;
    type IntoIter = SpectrumIter;

    fn into_iter(self) -> SpectrumIter {
        self.iter()
    }
}

/// Iterator over sampled spectrum points.
#[derive(Debug, Clone)]
pub struct SpectrumIter {
    spectrum: ResponseSpectrum,
    index: usize,
}

impl Iterator for SpectrumIter {
    type Item = ResponseSpectrumPoint;

    fn next(&mut self) -> Option<ResponseSpectrumPoint> {
        if self.index >= SAMPLE_COUNT {
            return None;
        }
        // Multiply rather than accumulate so samples land on exact grid values
        let period = self.index as f64 * PERIOD_STEP;
        self.index += 1;
        Some(ResponseSpectrumPoint {
            period,
            acceleration: self.spectrum.acceleration_at(period),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = SAMPLE_COUNT.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SpectrumIter {}
