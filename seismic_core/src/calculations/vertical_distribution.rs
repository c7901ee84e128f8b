//! # Vertical Distribution of Seismic Forces
//!
//! Distributes the base shear over the height of the building per ASCE 7-10
//! Section 12.8.3, and accumulates story shears and overturning moments
//! (Sections 12.8.4 and 12.8.5).
//!
//! ```text
//! Fx  = Cvx · V
//! Cvx = wx·hx^k / Σ(wi·hi^k)
//!
//! k = 1                     T ≤ 0.5 s
//! k = 1 + (T − 0.5)/2       0.5 s < T < 2.5 s
//! k = 2                     T ≥ 2.5 s
//! ```
//!
//! Every floor carries the same weight wx = A·(D + partitions)·g/1000.
//!
//! ## Example
//!
//! ```rust
//! use seismic_core::building::{Geometry, Loads};
//! use seismic_core::calculations::vertical_distribution::distribute;
//!
//! let geometry = Geometry::new(20.0, 15.0, 3, 3.5);
//! let loads = Loads::new(5.5, 0.0, 4.0);
//! let forces = distribute(100.0, 0.4, &geometry, &loads);
//!
//! let total: f64 = forces.iter().map(|f| f.force).sum();
//! assert!((total - 100.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::building::{Geometry, Loads};

/// Lateral force at one floor level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorForce {
    /// Floor index, 1 = lowest level above the base
    pub floor: u32,
    /// Elevation above the base hx (m)
    pub height: f64,
    /// Floor seismic weight wx (kN)
    pub weight: f64,
    /// Vertical distribution factor Cvx
    pub cvx: f64,
    /// Lateral force Fx (kN)
    pub force: f64,
}

/// Cumulative shear and overturning moment at a story.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoryShear {
    /// Story index; story x spans from level x−1 to level x
    pub story: u32,
    /// Story shear Vx = Σ Fi for i ≥ x (kN)
    pub shear: f64,
    /// Overturning moment at the bottom of the story (kN·m)
    pub overturning_moment: f64,
}

/// Distribution exponent k as a function of period.
pub fn distribution_exponent(ta: f64) -> f64 {
    if ta <= 0.5 {
        1.0
    } else if ta >= 2.5 {
        2.0
    } else {
        1.0 + (ta - 0.5) / 2.0
    }
}

/// Distribute base shear `v` to each floor, lowest first.
///
/// If the floor weights are zero the weights cancel out of Cvx, so the
/// distribution falls back to hx^k alone and still sums to `v`.
pub fn distribute(v: f64, ta: f64, geometry: &Geometry, loads: &Loads) -> Vec<FloorForce> {
    let k = distribution_exponent(ta);
    let weight = (loads.dead_intensity() * geometry.floor_area_m2()).0;

    let levels: Vec<(u32, f64)> = (1..=geometry.number_of_floors)
        .map(|floor| (floor, geometry.floor_height_m(floor)))
        .collect();

    let weighted = |w: f64, h: f64| w * h.powf(k);
    let mut effective_weight = weight;
    let mut denominator: f64 = levels.iter().map(|&(_, h)| weighted(effective_weight, h)).sum();
    if denominator <= 0.0 {
        effective_weight = 1.0;
        denominator = levels.iter().map(|&(_, h)| weighted(effective_weight, h)).sum();
    }

    log::debug!("k={:.3} w={:.2} kN Σwh^k={:.3}", k, weight, denominator);

    levels
        .into_iter()
        .map(|(floor, height)| {
            let cvx = if denominator > 0.0 {
                weighted(effective_weight, height) / denominator
            } else {
                0.0
            };
            FloorForce {
                floor,
                height,
                weight,
                cvx,
                force: cvx * v,
            }
        })
        .collect()
}

/// Story shears and overturning moments from floor forces ordered lowest first.
///
/// Returns one entry per story, lowest first. The overturning moment of
/// story x is taken at its base, elevation hx − story height.
pub fn story_shears(forces: &[FloorForce], height_per_floor_m: f64) -> Vec<StoryShear> {
    forces
        .iter()
        .map(|story_top| {
            let base_elevation = story_top.height - height_per_floor_m;
            let above = forces.iter().filter(|f| f.floor >= story_top.floor);
            let (shear, moment) = above.fold((0.0, 0.0), |(v, m), f| {
                (v + f.force, m + f.force * (f.height - base_elevation))
            });
            StoryShear {
                story: story_top.floor,
                shear,
                overturning_moment: moment,
            }
        })
        .collect()
}
