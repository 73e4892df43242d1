//! Property tests for effort fusion and PWM mapping.

use proptest::prelude::*;
use wheelbox_ffb::{
    CUTOUT_DEGREES, EffortInputs, MotorOutput, PWM_FLOOR, PWM_MAX, SafetyCutout,
    centering_command, fuse,
};

fn drive(degrees: f32, effort: u8) -> MotorOutput {
    let mut cutout = SafetyCutout::default();
    centering_command(&mut cutout, degrees, effort)
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(1000))]

    #[test]
    fn prop_fuse_never_below_pedal(
        local_pedal in any::<u8>(),
        speed_kph in 0u16..=500,
        lateral_g in any::<u8>(),
        rumble in any::<u8>(),
    ) {
        let inputs = EffortInputs { local_pedal, speed_kph, lateral_g, rumble };
        prop_assert!(fuse(inputs) >= local_pedal);
    }

    #[test]
    fn prop_fuse_monotone_in_rumble(
        local_pedal in any::<u8>(),
        speed_kph in 0u16..=500,
        lateral_g in any::<u8>(),
        rumble in 0u8..255,
    ) {
        let lo = fuse(EffortInputs { local_pedal, speed_kph, lateral_g, rumble });
        let hi = fuse(EffortInputs { local_pedal, speed_kph, lateral_g, rumble: rumble + 1 });
        prop_assert!(hi >= lo);
    }

    #[test]
    fn prop_fuse_monotone_in_speed(
        speed_kph in 0u16..500,
        lateral_g in any::<u8>(),
        rumble in any::<u8>(),
    ) {
        let lo = fuse(EffortInputs { local_pedal: 0, speed_kph, lateral_g, rumble });
        let hi = fuse(EffortInputs { local_pedal: 0, speed_kph: speed_kph + 1, lateral_g, rumble });
        prop_assert!(hi >= lo);
    }

    #[test]
    fn prop_pwm_zero_or_floored(degrees in -600.0f32..600.0, effort in any::<u8>()) {
        let pwm = drive(degrees, effort).pwm();
        prop_assert!(pwm == 0 || (PWM_FLOOR..=PWM_MAX).contains(&pwm));
    }

    #[test]
    fn prop_cutout_beats_any_effort(
        degrees in prop_oneof![450.0f32..=2000.0, -2000.0f32..=-450.0],
        effort in any::<u8>(),
    ) {
        prop_assert_eq!(drive(degrees, effort), MotorOutput::Disabled);
    }

    #[test]
    fn prop_in_range_angle_never_disables(
        degrees in -449.9f32..=449.9,
        effort in any::<u8>(),
    ) {
        prop_assert!(degrees.abs() < CUTOUT_DEGREES);
        prop_assert!(matches!(drive(degrees, effort), MotorOutput::Command(_)));
    }

    #[test]
    fn prop_pwm_monotone_in_angle(
        degrees in 5.0f32..449.0,
        step in 0.1f32..10.0,
        effort in 1u8..=255,
    ) {
        let near = drive(degrees, effort).pwm();
        let far_angle = (degrees + step).min(449.9);
        let far = drive(far_angle, effort).pwm();
        prop_assert!(far >= near, "pwm fell from {} to {} going {}° -> {}°", near, far, degrees, far_angle);
    }

    #[test]
    fn prop_mirrored_angles_same_pwm(degrees in 0.0f32..=449.9, effort in any::<u8>()) {
        prop_assert_eq!(drive(degrees, effort).pwm(), drive(-degrees, effort).pwm());
    }
}
