use super::RandomSource;
use crate::cs::sort::stable_partition;

/// Returns one item matching `test`, chosen uniformly at random, after partitioning
/// `items` in place.
///
/// All matching items are moved, in their original relative order, to a contiguous
/// tail of the slice; one draw then picks an offset inside that tail. The reordering
/// is observable by the caller, which is why this takes `&mut [T]`. Running it again
/// with the same predicate leaves the slice as it is.
///
/// Returns `None` when nothing matches (the slice is then left in its original order).
pub fn random_item_sort_array<T, P, R>(items: &mut [T], test: P, rng: &mut R) -> Option<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
    R: RandomSource + ?Sized,
{
    let first_match = stable_partition(items, test);
    let matched = &items[first_match..];
    if matched.is_empty() {
        return None;
    }

    let offset = rng.rand_index(matched.len() - 1);
    Some(matched[offset].clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::randomized::XorShift32;

    #[test]
    fn test_random_item_sort_array() {
        let mut data = vec!["apple", "ant", "bee", "ape", "cat"];
        let mut rng = XorShift32::new(1234);
        let w = random_item_sort_array(&mut data, |w| w.starts_with('a'), &mut rng).unwrap();
        assert!(w.starts_with('a'));
        assert_eq!(data, vec!["bee", "cat", "apple", "ant", "ape"]);
    }

    #[test]
    fn test_picks_offset_in_tail() {
        let mut data: Vec<u32> = (0..20).collect();
        let mut rng = XorShift32::new(3);
        let mut shadow = XorShift32::new(3);
        let picked = random_item_sort_array(&mut data, |x| x % 4 == 0, &mut rng).unwrap();
        assert_eq!(picked, shadow.rand_range(4) * 4);
    }

    #[test]
    fn test_no_match_keeps_order() {
        let mut data = vec![5, 3, 1];
        let mut rng = XorShift32::new(3);
        assert_eq!(random_item_sort_array(&mut data, |x| *x > 10, &mut rng), None);
        assert_eq!(data, vec![5, 3, 1]);
    }
}
