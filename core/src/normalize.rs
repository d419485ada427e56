/// Floor applied to the divisor so all-zero input normalizes to all-zero output.
pub const SCORE_EPSILON: f64 = 0.00001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Raw scores such as term frequency; the largest maps to 1.0.
    #[default]
    HigherIsBetter,
    /// Raw scores such as distances; the smallest maps to 1.0.
    SmallerIsBetter,
}

/// Rescale non-negative raw scores into `[0, 1]` in place.
pub fn normalize(scores: &mut [f64], orientation: Orientation) {
    if scores.is_empty() {
        return;
    }
    match orientation {
        Orientation::HigherIsBetter => {
            let mut max = scores.iter().copied().fold(0.0, f64::max);
            if max == 0.0 {
                max = SCORE_EPSILON;
            }
            for s in scores.iter_mut() {
                *s /= max;
            }
        }
        Orientation::SmallerIsBetter => {
            let min = scores.iter().copied().fold(f64::INFINITY, f64::min).max(SCORE_EPSILON);
            for s in scores.iter_mut() {
                *s = min / s.max(SCORE_EPSILON);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

    #[test]
    fn higher_is_better_divides_by_max() {
        let mut s = vec![1.0, 3.0, 0.0];
        normalize(&mut s, Orientation::HigherIsBetter);
        assert!(approx(s[0], 1.0 / 3.0));
        assert_eq!(s[1], 1.0);
        assert_eq!(s[2], 0.0);
    }

    #[test]
    fn all_zero_stays_zero() {
        let mut s = vec![0.0, 0.0];
        normalize(&mut s, Orientation::HigherIsBetter);
        assert_eq!(s, vec![0.0, 0.0]);
    }

    #[test]
    fn smaller_is_better_inverts() {
        let mut s = vec![2.0, 4.0, 8.0];
        normalize(&mut s, Orientation::SmallerIsBetter);
        assert_eq!(s, vec![1.0, 0.5, 0.25]);
    }

    #[test]
    fn smaller_is_better_zero_distance_is_best() {
        let mut s = vec![0.0, 1.0];
        normalize(&mut s, Orientation::SmallerIsBetter);
        assert_eq!(s[0], 1.0);
        assert!(approx(s[1], SCORE_EPSILON));
    }

    #[test]
    fn empty_is_noop() {
        let mut s: Vec<f64> = Vec::new();
        normalize(&mut s, Orientation::SmallerIsBetter);
        assert!(s.is_empty());
    }
}
