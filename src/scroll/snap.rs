/// Nearest snap point strictly ahead of `offset` in the direction of
/// `direction` (positive is down). Falls back to the last point going
/// down and to `0` going up.
pub fn find_intro_snap_target(points: &[f64], offset: f64, direction: f64) -> f64 {
    if direction > 0.0 {
        points
            .iter()
            .copied()
            .find(|&p| p > offset)
            .or_else(|| points.last().copied())
            .unwrap_or(0.0)
    } else {
        points
            .iter()
            .rev()
            .copied()
            .find(|&p| p < offset)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POINTS: [f64; 2] = [0.0, 900.0];

    #[test]
    fn forward_picks_next_point() {
        assert_eq!(find_intro_snap_target(&POINTS, 0.0, 120.0), 900.0);
        assert_eq!(find_intro_snap_target(&POINTS, 450.0, 1.0), 900.0);
    }

    #[test]
    fn forward_past_the_end_returns_last_point() {
        assert_eq!(find_intro_snap_target(&POINTS, 900.0, 10.0), 900.0);
        assert_eq!(find_intro_snap_target(&POINTS, 1200.0, 10.0), 900.0);
    }

    #[test]
    fn backward_picks_previous_point() {
        assert_eq!(find_intro_snap_target(&POINTS, 900.0, -3.0), 0.0);
        assert_eq!(find_intro_snap_target(&[0.0, 300.0, 900.0], 900.0, -3.0), 300.0);
    }

    #[test]
    fn backward_from_top_stays_at_zero() {
        assert_eq!(find_intro_snap_target(&POINTS, 0.0, -50.0), 0.0);
    }

    #[test]
    fn empty_sequence_falls_back_to_zero() {
        assert_eq!(find_intro_snap_target(&[], 300.0, 1.0), 0.0);
        assert_eq!(find_intro_snap_target(&[], 300.0, -1.0), 0.0);
    }
}
