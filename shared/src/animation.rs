//! Count-up animation for the statistics cards.

/// Parse a stat card number the way `parseInt` reads it: optional leading
/// whitespace and sign, then as many digits as are present. `"95%"` is 95,
/// `"abc"` is nothing.
pub fn parse_stat_value(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Frames of a linear count from zero to `target`.
///
/// Yields one rounded value per frame; the final frame is exactly `target`,
/// after which the iterator is exhausted. A target at or below zero is
/// reached on the first frame.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: f64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CountUp {
    /// Count to `target` over `duration_ms` in frames of `frame_ms`.
    pub fn new(target: i64, duration_ms: u32, frame_ms: u32) -> Self {
        let frames = (f64::from(duration_ms) / f64::from(frame_ms.max(1))).max(1.0);
        let target = target as f64;
        Self {
            target,
            increment: target / frames,
            current: 0.0,
            finished: false,
        }
    }
}

impl Iterator for CountUp {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.finished {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target {
            self.finished = true;
            Some(self.target.round() as i64)
        } else {
            Some(self.current.round() as i64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leading_integer() {
        assert_eq!(parse_stat_value("150"), Some(150));
        assert_eq!(parse_stat_value("  95%"), Some(95));
        assert_eq!(parse_stat_value("-3 pts"), Some(-3));
        assert_eq!(parse_stat_value("∞"), None);
        assert_eq!(parse_stat_value(""), None);
    }

    #[test]
    fn counts_up_monotonically_and_ends_on_target() {
        let frames: Vec<i64> = CountUp::new(150, 2000, 16).collect();
        assert_eq!(frames.last(), Some(&150));
        assert!(frames.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(frames.len() >= 125 && frames.len() <= 126);
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let frames: Vec<i64> = CountUp::new(0, 2000, 16).collect();
        assert_eq!(frames, vec![0]);
    }

    #[test]
    fn negative_target_is_shown_at_once() {
        let frames: Vec<i64> = CountUp::new(-10, 160, 16).collect();
        assert_eq!(frames, vec![-10]);
    }
}
