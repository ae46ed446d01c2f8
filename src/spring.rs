use serde::{Deserialize, Serialize};

/// Spring-like easing used for the snap animation.
///
/// `progress` is the step response of a damped harmonic oscillator, cut off
/// at `duration` so the animation always settles on its target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spring {
    /// Period of the undamped oscillation, in seconds
    pub response: f32,
    /// 1.0 = critically damped, below 1.0 overshoots slightly
    pub damping_fraction: f32,
    /// Time after which the animation is considered finished, in seconds
    pub duration: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            response: 0.55,
            damping_fraction: 0.825,
            duration: 0.5,
        }
    }
}

impl Spring {
    /// A spring that lands on its target immediately
    pub fn instant() -> Self {
        Self {
            duration: 0.0,
            ..Self::default()
        }
    }

    pub fn is_instant(&self) -> bool {
        self.duration <= 0.0
    }

    /// Fraction of the way from start to target after `t` seconds
    pub fn progress(&self, t: f32) -> f32 {
        if t >= self.duration {
            return 1.0;
        }
        if t <= 0.0 {
            return 0.0;
        }

        let omega = std::f32::consts::TAU / self.response.max(f32::EPSILON);
        let zeta = self.damping_fraction.max(0.0);

        if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * omega * t).exp();
            1.0 - decay * ((omega_d * t).cos() + (zeta * omega / omega_d) * (omega_d * t).sin())
        } else {
            // Overdamped springs are approximated by the critically damped curve
            1.0 - (-omega * t).exp() * (1.0 + omega * t)
        }
    }

    /// Interpolated value between `from` and `to` after `t` seconds
    pub fn value_at(&self, from: f32, to: f32, t: f32) -> f32 {
        from + (to - from) * self.progress(t)
    }
}
