use super::RandomSource;

/// Returns one item matching `test`, chosen uniformly at random, using two passes.
///
/// The first pass counts the matches, a single draw picks the target match index,
/// and the second pass walks the matches again until it reaches that index.
/// The predicate is evaluated up to twice per item and must give the same answer
/// both times.
///
/// Returns `None` when nothing matches. The slice is not modified.
pub fn random_item_dual_iterate<T, P, R>(items: &[T], test: P, rng: &mut R) -> Option<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
    R: RandomSource + ?Sized,
{
    let matching_count = items.iter().filter(|item| test(*item)).count();
    if matching_count == 0 {
        return None;
    }

    let match_index = rng.rand_index(matching_count - 1);
    items
        .iter()
        .filter(|item| test(*item))
        .nth(match_index)
        .cloned()
}
