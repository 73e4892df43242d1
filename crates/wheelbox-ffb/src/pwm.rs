//! PWM mapping and the mechanical safety cutout.
//!
//! The self-centering law: counter-rotating torque scales with both how
//! far off-center the wheel is and how strong the fused effort is,
//! saturating at the PWM ceiling. Past the mechanical end-stop the driver
//! is de-energized outright — "power removed", not "no force".

/// Angles inside `±PWM_THRESHOLD_DEG` command a stop. Prevents chatter
/// around straight-ahead.
pub const PWM_THRESHOLD_DEG: f32 = 5.0;

/// Duty cycles below this stall the motor without moving it; nonzero
/// results are raised to the floor instead of buzzing.
pub const PWM_FLOOR: u8 = 15;

/// Duty cycle commanded at the bottom of the mapped range.
pub const PWM_MIN: u8 = 60;

/// Duty ceiling.
pub const PWM_MAX: u8 = 255;

/// Unrecoverable end-stop angle; at or past this the driver is disabled.
pub const CUTOUT_DEGREES: f32 = 450.0;

/// Top of the angle×effort product range: `450 × 255`.
pub const PRODUCT_MAX: i64 = 114_750;

/// Rotation direction of the motor, viewed from the driver's seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Counter-clockwise torque, centering a wheel turned left.
    Left,
    /// Clockwise torque, centering a wheel turned right.
    Right,
    /// Both PWM lines low, enables up.
    Stop,
}

/// One actuator command: a direction and a duty cycle.
///
/// Invariant: `pwm` is 0 for [`Direction::Stop`] and within
/// `[PWM_FLOOR, PWM_MAX]` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotorCommand {
    /// Torque direction.
    pub direction: Direction,
    /// Duty cycle, `0..=255`.
    pub pwm: u8,
}

impl MotorCommand {
    /// The do-nothing command: both PWM lines at zero.
    pub fn stop() -> Self {
        Self {
            direction: Direction::Stop,
            pwm: 0,
        }
    }
}

/// What the motor driver should do this cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorOutput {
    /// End-stop cutout engaged: drop both enable lines.
    Disabled,
    /// Drive (or stop) with the enables energized.
    Command(MotorCommand),
}

impl MotorOutput {
    /// Duty cycle carried by this output; 0 when disabled or stopped.
    pub fn pwm(&self) -> u8 {
        match self {
            MotorOutput::Disabled => 0,
            MotorOutput::Command(cmd) => cmd.pwm,
        }
    }
}

/// Two-state machine tracking the mechanical end-stop cutout.
///
/// Engages whenever `|degrees| >= CUTOUT_DEGREES` and releases as soon as
/// the angle returns within range. Engagement overrides any effort demand.
#[derive(Debug, Clone, Copy, Default)]
pub struct SafetyCutout {
    engaged: bool,
}

impl SafetyCutout {
    /// Feeds the current angle; returns whether the cutout is engaged.
    pub fn update(&mut self, degrees: f32) -> bool {
        self.engaged = degrees.abs() >= CUTOUT_DEGREES;
        self.engaged
    }

    /// Whether the driver is currently cut out.
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }
}

/// Maps angle and fused effort to a proportional value in
/// `[PWM_MIN, PWM_MAX]`, with the stall floor applied.
fn scale(magnitude_degrees: f32, effort: u8) -> u8 {
    // Whole degrees, like the fixed-point original.
    let product = (magnitude_degrees as i64) * i64::from(effort);
    let span = i64::from(PWM_MAX - PWM_MIN);
    let pwm = i64::from(PWM_MIN) + product * span / PRODUCT_MAX;
    let pwm = pwm.clamp(0, i64::from(PWM_MAX)) as u8;
    if pwm > 0 && pwm < PWM_FLOOR { PWM_FLOOR } else { pwm }
}

/// Computes this cycle's motor output from the calibrated angle and the
/// fused effort.
///
/// # Examples
///
/// ```
/// use wheelbox_ffb::{Direction, MotorOutput, SafetyCutout, centering_command};
///
/// let mut cutout = SafetyCutout::default();
/// match centering_command(&mut cutout, 30.0, 113) {
///     MotorOutput::Command(cmd) => {
///         assert_eq!(cmd.direction, Direction::Right);
///         assert!(cmd.pwm >= 60);
///     }
///     MotorOutput::Disabled => unreachable!("well within the end-stop"),
/// }
/// ```
pub fn centering_command(cutout: &mut SafetyCutout, degrees: f32, effort: u8) -> MotorOutput {
    if cutout.update(degrees) {
        return MotorOutput::Disabled;
    }

    if effort == 0 {
        return MotorOutput::Command(MotorCommand::stop());
    }

    if degrees >= PWM_THRESHOLD_DEG {
        MotorOutput::Command(MotorCommand {
            direction: Direction::Right,
            pwm: scale(degrees, effort),
        })
    } else if degrees <= -PWM_THRESHOLD_DEG {
        MotorOutput::Command(MotorCommand {
            direction: Direction::Left,
            pwm: scale(-degrees, effort),
        })
    } else {
        MotorOutput::Command(MotorCommand::stop())
    }
}
