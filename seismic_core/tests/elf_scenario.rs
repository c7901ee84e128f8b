use approx::{assert_abs_diff_eq, assert_relative_eq};
use seismic_core::analysis::{analyze, SeismicAnalysisInput};
use seismic_core::building::{Geometry, Loads, MaterialProperties};
use seismic_core::calculations::spectrum::SAMPLE_COUNT;
use seismic_core::calculations::SeismicInput;
use seismic_core::site::SiteClass;

fn three_story_frame() -> SeismicAnalysisInput {
    // 20 m × 15 m plan, three 3.5 m stories on stiff soil
    SeismicAnalysisInput {
        seismic: SeismicInput::new(0.8, 0.3, SiteClass::SD)
            .with_r(8.0)
            .with_importance(1.0),
        soil: None,
        geometry: Geometry::new(20.0, 15.0, 3, 3.5),
        loads: Loads::new(5.5, 0.0, 4.0),
        materials: MaterialProperties::new(28.0),
    }
}

#[test]
fn three_story_frame_on_stiff_soil() {
    let analysis = analyze(&three_story_frame()).unwrap();
    let p = &analysis.parameters;

    // Site coefficients lie within the SD row bounds
    assert!(p.fa >= 1.0 && p.fa <= 1.6, "Fa = {}", p.fa);
    assert!(p.fv >= 1.8 && p.fv <= 2.4, "Fv = {}", p.fv);
    assert_relative_eq!(p.fa, 1.18, epsilon = 1e-12);
    assert_relative_eq!(p.fv, 1.8, epsilon = 1e-12);

    assert!(p.sds > 0.0 && p.sd1 > 0.0);
    assert!(p.t0 <= p.ts);

    let period = &analysis.period;
    assert!(period.ta > 0.0);
    assert!(period.ta < period.tmax);

    let shear = &analysis.base_shear;
    assert!(shear.v > 0.0);
    assert!(shear.cs >= shear.cs_min);
    // Short period: SDS/(R/Ie) governs
    assert_relative_eq!(shear.cs, p.sds / 8.0, epsilon = 1e-12);

    assert_eq!(analysis.floor_forces.len(), 3);
    let total: f64 = analysis.floor_forces.iter().map(|f| f.force).sum();
    assert_abs_diff_eq!(total, shear.v, epsilon = 1e-6 * shear.v);
}

#[test]
fn spectrum_matches_derived_parameters() {
    let analysis = analyze(&three_story_frame()).unwrap();
    let p = &analysis.parameters;
    assert_eq!(analysis.spectrum.len(), SAMPLE_COUNT);
    assert_relative_eq!(analysis.spectrum[0].acceleration, 0.4 * p.sds, epsilon = 1e-12);

    let plateau_max = analysis
        .spectrum
        .iter()
        .map(|pt| pt.acceleration)
        .fold(0.0_f64, f64::max);
    assert_relative_eq!(plateau_max, p.sds, epsilon = 1e-12);

    let last = analysis.spectrum.last().unwrap();
    assert_relative_eq!(last.acceleration, p.sd1 / last.period, epsilon = 1e-12);
}

#[test]
fn pipeline_is_idempotent() {
    let input = three_story_frame();
    let first = analyze(&input).unwrap();
    let second = analyze(&input).unwrap();
    assert_eq!(first, second);

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn site_class_sf_runs_with_zero_hazard() {
    let mut input = three_story_frame();
    input.seismic.site_class = SiteClass::SF;
    let analysis = analyze(&input).unwrap();
    let p = &analysis.parameters;

    assert_eq!((p.fa, p.fv, p.sds, p.sd1, p.t0, p.ts), (0.0, 0.0, 0.0, 0.0, 0.0, 0.0));
    assert_eq!(p.tl, 12.0);
    assert!(analysis.spectrum.iter().all(|pt| pt.acceleration == 0.0));

    // The Cs floor still applies and forces still balance
    let total: f64 = analysis.floor_forces.iter().map(|f| f.force).sum();
    assert_abs_diff_eq!(total, analysis.base_shear.v, epsilon = 1e-9);
}

#[test]
fn high_rise_uses_parabolic_distribution() {
    let mut input = three_story_frame();
    input.geometry.number_of_floors = 40;
    input.seismic = SeismicInput::new(1.5, 0.6, SiteClass::SC);
    let analysis = analyze(&input).unwrap();

    assert!(analysis.period.ta > 2.5, "Ta = {}", analysis.period.ta);
    let top = analysis.floor_forces.last().unwrap();
    let bottom = analysis.floor_forces.first().unwrap();
    // k = 2: force ratio equals the squared height ratio
    assert_relative_eq!(top.force / bottom.force, 1600.0, epsilon = 1e-6);
}

#[test]
fn malformed_records_are_rejected() {
    let mut input = three_story_frame();
    input.geometry.width_m = 0.0;
    assert!(analyze(&input).is_err());

    let mut input = three_story_frame();
    input.seismic.ss = -0.5;
    assert!(analyze(&input).is_err());

    let json = r#"{
        "seismic": { "ss": 0.8, "s1": 0.3 },
        "geometry": { "length_m": 20.0, "width_m": 15.0, "number_of_floors": -1, "height_per_floor_m": 3.5 },
        "loads": { "dead_load": 5.5, "live_load": 4.0 }
    }"#;
    assert!(serde_json::from_str::<SeismicAnalysisInput>(json).is_err());
}
