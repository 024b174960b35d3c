/// Reorders `arr` so that every element satisfying `pred` sits after every element
/// that does not, keeping the relative order inside both groups.
///
/// Returns the index of the first matching element (`arr.len()` if none match).
/// Runs in place with `O(n log n)` element moves: each half is partitioned
/// recursively, then the left half's matches are rotated past the right half's
/// non-matches.
///
/// Partitioning an already partitioned slice leaves it unchanged.
pub fn stable_partition<T, P>(arr: &mut [T], pred: P) -> usize
where
    P: Fn(&T) -> bool,
{
    partition_in_place(arr, &pred)
}

fn partition_in_place<T, P>(arr: &mut [T], pred: &P) -> usize
where
    P: Fn(&T) -> bool,
{
    match arr.len() {
        0 => 0,
        1 => usize::from(!pred(&arr[0])),
        len => {
            let mid = len / 2;
            let left = partition_in_place(&mut arr[..mid], pred);
            let right = partition_in_place(&mut arr[mid..], pred);
            // [non_l | match_l | non_r | match_r] -> [non_l | non_r | match_l | match_r]
            arr[left..mid + right].rotate_left(mid - left);
            left + right
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_partition() {
        let mut arr = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let split = stable_partition(&mut arr, |x| x % 2 == 0);
        assert_eq!(split, 4);
        assert_eq!(arr, vec![1, 3, 5, 7, 2, 4, 6, 8]);
    }

    #[test]
    fn test_keeps_order_of_equal_keys() {
        let mut arr = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd'), (1, 'e')];
        let split = stable_partition(&mut arr, |&(k, _)| k == 1);
        assert_eq!(split, 2);
        assert_eq!(arr, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c'), (1, 'e')]);
    }

    #[test]
    fn test_edge_cases() {
        let mut empty: Vec<i32> = vec![];
        assert_eq!(stable_partition(&mut empty, |_| true), 0);

        let mut none = vec![1, 3, 5];
        assert_eq!(stable_partition(&mut none, |x| x % 2 == 0), 3);
        assert_eq!(none, vec![1, 3, 5]);

        let mut all = vec![2, 4, 6];
        assert_eq!(stable_partition(&mut all, |x| x % 2 == 0), 0);
        assert_eq!(all, vec![2, 4, 6]);
    }

    #[test]
    fn test_idempotent() {
        let mut arr: Vec<u32> = (0..37).rev().collect();
        let first = stable_partition(&mut arr, |x| x % 3 == 0);
        let once = arr.clone();
        let second = stable_partition(&mut arr, |x| x % 3 == 0);
        assert_eq!(first, second);
        assert_eq!(arr, once);
    }
}
