use super::RandomSource;

/// Returns one item matching `test`, chosen uniformly at random, via an index buffer.
///
/// One pass records the positions of all matches, then a single draw picks one of
/// them. Takes `O(k)` extra memory for `k` matches.
///
/// Returns `None` when nothing matches. The slice is not modified.
pub fn random_item_temp_array<T, P, R>(items: &[T], test: P, rng: &mut R) -> Option<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
    R: RandomSource + ?Sized,
{
    let matches: Vec<usize> = items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| test(item).then_some(i))
        .collect();
    if matches.is_empty() {
        return None;
    }

    let pick = rng.rand_index(matches.len() - 1);
    Some(items[matches[pick]].clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::randomized::XorShift32;

    #[test]
    fn test_random_item_temp_array() {
        let data = vec![10, 11, 12, 13, 14, 15];
        let mut rng = XorShift32::new(5);
        for _ in 0..100 {
            let x = random_item_temp_array(&data, |x| x % 2 == 1, &mut rng).unwrap();
            assert!([11, 13, 15].contains(&x));
        }
    }

    #[test]
    fn test_picks_by_drawn_position() {
        let data: Vec<u32> = (0..30).collect();
        let mut rng = XorShift32::new(77);
        let mut shadow = XorShift32::new(77);
        let picked = random_item_temp_array(&data, |x| *x >= 10, &mut rng).unwrap();
        assert_eq!(picked, 10 + shadow.rand_range(19));
    }

    #[test]
    fn test_empty_slice() {
        let data: Vec<u32> = Vec::new();
        let mut rng = XorShift32::new(77);
        assert_eq!(random_item_temp_array(&data, |_| true, &mut rng), None);
    }
}
