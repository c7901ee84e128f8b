//! # Seismic Design Parameters
//!
//! Derives the design spectral accelerations and spectrum corner periods
//! from mapped accelerations and site class (ASCE 7-10 Section 11.4).
//!
//! ```text
//! SMS = Fa·Ss        SM1 = Fv·S1
//! SDS = ⅔·SMS        SD1 = ⅔·SM1
//! T0  = 0.2·SD1/SDS  Ts  = SD1/SDS   TL = 12 s
//! ```
//!
//! ## Example
//!
//! ```rust
//! use seismic_core::calculations::parameters::{SeismicInput, SeismicParameters};
//! use seismic_core::site::SiteClass;
//!
//! let input = SeismicInput::new(0.8, 0.3, SiteClass::SD);
//! let params = SeismicParameters::compute(&input).unwrap();
//! assert!(params.sds > 0.0 && params.sd1 > 0.0);
//! assert!(params.t0 <= params.ts);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_non_negative, require_positive, CalcResult};
use crate::site::{site_coefficient_fa, site_coefficient_fv, SiteClass};

/// Long-period transition period TL (s) for this code family
pub const LONG_PERIOD_TRANSITION: f64 = 12.0;

/// MCE-to-design reduction: SDS = ⅔·SMS
pub const DESIGN_FRACTION: f64 = 2.0 / 3.0;

fn default_r() -> f64 {
    8.0
}

fn default_importance() -> f64 {
    1.0
}

/// Caller-supplied seismic hazard and system inputs.
///
/// ## JSON Example
///
/// ```json
/// { "ss": 0.8, "s1": 0.3, "site_class": "SD", "r": 8.0, "importance": 1.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeismicInput {
    /// Mapped short-period spectral acceleration Ss (g)
    pub ss: f64,

    /// Mapped 1-second spectral acceleration S1 (g)
    pub s1: f64,

    /// Soil site class
    #[serde(default)]
    pub site_class: SiteClass,

    /// Response modification coefficient R
    #[serde(default = "default_r")]
    pub r: f64,

    /// Seismic importance factor Ie
    #[serde(default = "default_importance")]
    pub importance: f64,
}

impl SeismicInput {
    /// Create an input with the default R = 8 (special moment frame) and Ie = 1.0
    pub fn new(ss: f64, s1: f64, site_class: SiteClass) -> Self {
        Self {
            ss,
            s1,
            site_class,
            r: default_r(),
            importance: default_importance(),
        }
    }

    /// Builder: set the response modification coefficient
    pub fn with_r(mut self, r: f64) -> Self {
        self.r = r;
        self
    }

    /// Builder: set the importance factor
    pub fn with_importance(mut self, importance: f64) -> Self {
        self.importance = importance;
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("ss", self.ss)?;
        require_non_negative("s1", self.s1)?;
        require_positive("r", self.r)?;
        require_positive("importance", self.importance)?;
        Ok(())
    }
}

/// Site coefficients, design accelerations, and spectrum corner periods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteDesignValues {
    pub fa: f64,
    pub fv: f64,
    pub sms: f64,
    pub sm1: f64,
    pub sds: f64,
    pub sd1: f64,
    pub t0: f64,
    pub ts: f64,
    pub tl: f64,
}

impl SiteDesignValues {
    /// All-zero hazard with the fixed TL
    pub fn zero_hazard() -> Self {
        Self {
            fa: 0.0,
            fv: 0.0,
            sms: 0.0,
            sm1: 0.0,
            sds: 0.0,
            sd1: 0.0,
            t0: 0.0,
            ts: 0.0,
            tl: LONG_PERIOD_TRANSITION,
        }
    }
}

/// Derive site design values from Ss, S1, and site class.
///
/// Site class SF short-circuits to [`SiteDesignValues::zero_hazard`]: such
/// sites require a site-specific response analysis and have no table value.
/// When SDS is zero (Ss = 0) the corner periods are reported as zero.
pub fn derive(ss: f64, s1: f64, site_class: SiteClass) -> SiteDesignValues {
    if site_class.is_site_specific() {
        log::warn!(
            "Site class {} requires site-specific response analysis; using zero hazard",
            site_class
        );
        return SiteDesignValues::zero_hazard();
    }

    let fa = site_coefficient_fa(ss, site_class);
    let fv = site_coefficient_fv(s1, site_class);

    let sms = fa * ss;
    let sm1 = fv * s1;
    let sds = DESIGN_FRACTION * sms;
    let sd1 = DESIGN_FRACTION * sm1;

    let (t0, ts) = if sds > 0.0 {
        (0.2 * sd1 / sds, sd1 / sds)
    } else {
        (0.0, 0.0)
    };

    log::debug!(
        "Site {}: Fa={:.3} Fv={:.3} SDS={:.4} SD1={:.4} T0={:.3}s Ts={:.3}s",
        site_class,
        fa,
        fv,
        sds,
        sd1,
        t0,
        ts
    );

    SiteDesignValues {
        fa,
        fv,
        sms,
        sm1,
        sds,
        sd1,
        t0,
        ts,
        tl: LONG_PERIOD_TRANSITION,
    }
}

/// Complete seismic parameter set for one analysis run.
///
/// Produced by [`SeismicParameters::compute`]. Derived fields are output
/// values; construct a new [`SeismicInput`] to change the hazard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeismicParameters {
    pub ss: f64,
    pub s1: f64,
    pub site_class: SiteClass,
    pub r: f64,
    pub importance: f64,
    pub fa: f64,
    pub fv: f64,
    pub sms: f64,
    pub sm1: f64,
    pub sds: f64,
    pub sd1: f64,
    pub t0: f64,
    pub ts: f64,
    pub tl: f64,
}

impl SeismicParameters {
    /// Validate the input and derive all design values.
    pub fn compute(input: &SeismicInput) -> CalcResult<Self> {
        input.validate()?;
        let values = derive(input.ss, input.s1, input.site_class);
        Ok(Self::from_parts(input, values))
    }

    fn from_parts(input: &SeismicInput, values: SiteDesignValues) -> Self {
        Self {
            ss: input.ss,
            s1: input.s1,
            site_class: input.site_class,
            r: input.r,
            importance: input.importance,
            fa: values.fa,
            fv: values.fv,
            sms: values.sms,
            sm1: values.sm1,
            sds: values.sds,
            sd1: values.sd1,
            t0: values.t0,
            ts: values.ts,
            tl: values.tl,
        }
    }

    /// R / Ie
    pub fn response_ratio(&self) -> f64 {
        self.r / self.importance
    }

    /// The derived subset, e.g. for spectrum generation
    pub fn design_values(&self) -> SiteDesignValues {
        SiteDesignValues {
            fa: self.fa,
            fv: self.fv,
            sms: self.sms,
            sm1: self.sm1,
            sds: self.sds,
            sd1: self.sd1,
            t0: self.t0,
            ts: self.ts,
            tl: self.tl,
        }
    }
}
