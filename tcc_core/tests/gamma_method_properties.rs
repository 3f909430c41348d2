//! Property tests for the gamma-method pipeline over randomized valid inputs.

use proptest::prelude::*;

use tcc_core::calculations::tcc::{
    calculate, compute_composite_state, compute_section_properties, ConnectionParams, LoadCase,
    MaterialProperties, SectionGeometry, StrengthLimits, TccInput,
};
use tcc_core::equations::{gamma_factor, non_composite_bending_stiffness};
use tcc_core::settings::CalcSettings;

fn input_strategy() -> impl Strategy<Value = TccInput> {
    (
        (5.0e9..20.0e9_f64, 20.0e9..45.0e9_f64),
        (0.05..0.40_f64, 0.08..0.60_f64, 0.20..2.0_f64, 0.04..0.30_f64),
        (0.05..1.0_f64, 1.0e6..1.0e9_f64),
        (0.0..5.0e5_f64, 0.5..15.0_f64),
    )
        .prop_map(|((e_t, e_c), (b_t, h_t, b_c, h_c), (s, k), (p, l))| TccInput {
            label: "prop".to_string(),
            materials: MaterialProperties {
                e_timber_pa: e_t,
                e_concrete_pa: e_c,
            },
            geometry: SectionGeometry {
                b_timber_m: b_t,
                h_timber_m: h_t,
                b_concrete_m: b_c,
                h_concrete_m: h_c,
            },
            connection: ConnectionParams {
                spacing_m: s,
                k_ser_n_per_m: k,
            },
            load: LoadCase {
                point_load_n: p,
                span_m: l,
            },
            strength: StrengthLimits {
                f_m_timber_pa: 24.0e6,
                f_t_timber_pa: 14.0e6,
            },
        })
}

proptest! {
    #[test]
    fn gamma_stays_in_unit_interval(input in input_strategy()) {
        let result = calculate(&input, &CalcSettings::default()).unwrap();
        let gamma = result.composite.gamma_concrete;
        prop_assert!(gamma > 0.0 && gamma <= 1.0, "gamma = {}", gamma);
        prop_assert!(result.warnings.is_empty());
    }

    #[test]
    fn gamma_tends_to_limits(
        e_c in 20.0e9..45.0e9_f64,
        a_c in 0.01..0.5_f64,
        s in 0.05..1.0_f64,
        l in 0.5..15.0_f64,
    ) {
        let rigid = gamma_factor(e_c, a_c, s, 1.0e30, l);
        let loose = gamma_factor(e_c, a_c, s, 1.0e-3, l);
        prop_assert!(rigid > 0.999_999);
        prop_assert!(loose > 0.0 && loose < 1.0e-6);
    }

    #[test]
    fn gamma_increases_with_slip_modulus(
        input in input_strategy(),
        factor in 1.5..100.0_f64,
    ) {
        let mut stiffer = input.clone();
        stiffer.connection.k_ser_n_per_m *= factor;
        let soft = calculate(&input, &CalcSettings::default()).unwrap();
        let stiff = calculate(&stiffer, &CalcSettings::default()).unwrap();
        prop_assert!(stiff.composite.gamma_concrete >= soft.composite.gamma_concrete);
        prop_assert!(stiff.composite.ei_eff_nm2 >= soft.composite.ei_eff_nm2);
    }

    #[test]
    fn composite_action_stiffens(input in input_strategy()) {
        let props = compute_section_properties(&input.geometry).unwrap();
        let state = compute_composite_state(
            &input.materials,
            &input.geometry,
            &input.connection,
            input.load.span_m,
            &props,
        )
        .unwrap();
        let bare = non_composite_bending_stiffness(
            input.materials.e_timber_pa,
            props.i_timber_m4,
            input.materials.e_concrete_pa,
            props.i_concrete_m4,
        );
        prop_assert!(state.ei_eff_nm2 > bare, "EI_eff = {}, bare = {}", state.ei_eff_nm2, bare);
    }

    #[test]
    fn offsets_reconstruct_section_depth(input in input_strategy()) {
        let result = calculate(&input, &CalcSettings::default()).unwrap();
        let g = &input.geometry;
        let c = &result.composite;
        let depth = c.a_timber_m + c.a_concrete_m + 0.5 * g.h_timber_m + 0.5 * g.h_concrete_m;
        prop_assert!((depth - g.total_height_m()).abs() <= 1e-12 * g.total_height_m());
    }

    #[test]
    fn deflection_is_symmetric(input in input_strategy(), t in 0.0..=1.0_f64) {
        let result = calculate(&input, &CalcSettings::default()).unwrap();
        let curve = result.deflection;
        let x = t * curve.span_m() / 2.0;
        let left = curve.deflection_at(x);
        let right = curve.deflection_at(curve.span_m() - x);
        let scale = curve.max_deflection().abs().max(f64::MIN_POSITIVE);
        prop_assert!((left - right).abs() <= 1e-9 * scale, "{} vs {}", left, right);

        let samples: Vec<_> = curve.points().collect();
        let n = curve.points_per_half();
        for i in 0..n {
            prop_assert_eq!(samples[i].deflection_m, samples[2 * n - 1 - i].deflection_m);
        }
    }

    #[test]
    fn internal_forces_are_exact(input in input_strategy()) {
        let result = calculate(&input, &CalcSettings::default()).unwrap();
        let p = input.load.point_load_n;
        let l = input.load.span_m;
        prop_assert_eq!(result.forces.m_mid_nm, p * l / 4.0);
        prop_assert_eq!(result.forces.v_max_n, p / 2.0);
    }

    #[test]
    fn reruns_are_bit_identical(input in input_strategy(), points in 2usize..200) {
        let settings = CalcSettings::with_deflection_points(points);
        let a = calculate(&input, &settings).unwrap();
        let b = calculate(&input, &settings).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
        prop_assert_eq!(a.deflection.points().count(), 2 * points);
    }

    #[test]
    fn tiny_spacing_keeps_connector_force_finite(
        input in input_strategy(),
        exponent in 3i32..12,
    ) {
        let mut input = input;
        input.connection.spacing_m = 10f64.powi(-exponent);
        let result = calculate(&input, &CalcSettings::default()).unwrap();
        prop_assert!(result.composite.ei_eff_nm2.is_finite());
        prop_assert!(result.results.f_connector_n.is_finite());
        prop_assert!(result.results.f_connector_n >= 0.0);
    }
}
