use serde::{Deserialize, Serialize};

/// What happens to inputs outside a channel's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Extrapolate {
    /// Hold at the nearest range endpoint.
    #[default]
    Clamp,
    /// Keep following the line.
    Extend,
}

/// Linear map from an input domain onto an output range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterpolationChannel {
    pub domain: (f32, f32),
    pub range: (f32, f32),
    pub extrapolate: Extrapolate,
}

impl InterpolationChannel {
    pub const fn new(domain: (f32, f32), range: (f32, f32)) -> Self {
        Self {
            domain,
            range,
            extrapolate: Extrapolate::Clamp,
        }
    }

    pub const fn with_extrapolate(mut self, extrapolate: Extrapolate) -> Self {
        self.extrapolate = extrapolate;
        self
    }

    /// Normalized position of `input` within the domain.
    pub fn progress(&self, input: f32) -> f32 {
        let (low, high) = self.domain;
        let span = high - low;

        let t = if span == 0.0 {
            // Step at the single domain point
            if input < low { 0.0 } else { 1.0 }
        } else {
            (input - low) / span
        };

        if t.is_nan() {
            return 0.0;
        }

        match self.extrapolate {
            Extrapolate::Clamp => t.clamp(0.0, 1.0),
            Extrapolate::Extend => t,
        }
    }

    pub fn evaluate(&self, input: f32) -> f32 {
        let (v0, v1) = self.range;
        let t = self.progress(input);

        // Exact endpoints regardless of rounding in the lerp
        if t == 0.0 {
            v0
        } else if t == 1.0 {
            v1
        } else {
            v0 + (v1 - v0) * t
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_inside_domain() {
        let ch = InterpolationChannel::new((0.0, 250.0), (120.0, 0.0));
        assert_eq!(ch.evaluate(0.0), 120.0);
        assert_eq!(ch.evaluate(125.0), 60.0);
        assert_eq!(ch.evaluate(250.0), 0.0);
    }

    #[test]
    fn test_clamps_both_ends() {
        let ch = InterpolationChannel::new((0.0, 250.0), (1.0, 0.0));
        assert_eq!(ch.evaluate(-50.0), 1.0);
        assert_eq!(ch.evaluate(10_000.0), 0.0);
        assert_eq!(ch.evaluate(f32::NEG_INFINITY), 1.0);
        assert_eq!(ch.evaluate(f32::INFINITY), 0.0);
    }

    #[test]
    fn test_extend_follows_line() {
        let ch = InterpolationChannel::new((0.0, 10.0), (0.0, 100.0))
            .with_extrapolate(Extrapolate::Extend);
        assert_eq!(ch.evaluate(20.0), 200.0);
        assert_eq!(ch.evaluate(-5.0), -50.0);
    }

    #[test]
    fn test_nan_input_holds_start() {
        let ch = InterpolationChannel::new((87.5, 212.5), (0.0, 1.0));
        assert_eq!(ch.evaluate(f32::NAN), 0.0);
    }

    #[test]
    fn test_zero_width_domain_steps() {
        let ch = InterpolationChannel::new((50.0, 50.0), (0.0, 1.0));
        assert_eq!(ch.evaluate(49.9), 0.0);
        assert_eq!(ch.evaluate(50.0), 1.0);
    }
}
