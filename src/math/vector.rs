/// Index of the maximum element in a slice.
///
/// Ties go to the first occurrence and NaN entries are skipped. Returns
/// `None` for an empty slice or one that holds only NaN.
pub fn argmax(v: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &x) in v.iter().enumerate() {
        if x.is_nan() {
            continue;
        }
        match best {
            Some((_, max)) if x <= max => {}
            _ => best = Some((i, x)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_largest() {
        assert_eq!(argmax(&[0.1, 0.9, 0.3]), Some(1));
        assert_eq!(argmax(&[-3.0, -1.0, -2.0]), Some(1));
        assert_eq!(argmax(&[f64::NEG_INFINITY]), Some(0));
    }

    #[test]
    fn ties_break_to_lowest_index() {
        assert_eq!(argmax(&[0.5, 0.7, 0.7, 0.1]), Some(1));
        assert_eq!(argmax(&[2.0, 2.0]), Some(0));
    }

    #[test]
    fn empty_and_nan() {
        assert_eq!(argmax(&[]), None);
        assert_eq!(argmax(&[f64::NAN, f64::NAN]), None);
        assert_eq!(argmax(&[f64::NAN, 0.2, 0.1]), Some(1));
    }
}
