use crate::cs::randomized::RandomSource;

/// A string of `len` random letters from `a..=z`.
pub fn random_lowercase<R: RandomSource + ?Sized>(len: usize, rng: &mut R) -> String {
    (0..len)
        .map(|_| char::from(b'a' + rng.rand_range(25) as u8))
        .collect()
}

/// `count` random lowercase strings of `len` letters each.
pub fn generate_items<R: RandomSource + ?Sized>(count: usize, len: usize, rng: &mut R) -> Vec<String> {
    (0..count).map(|_| random_lowercase(len, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::randomized::XorShift32;

    #[test]
    fn test_generate_items() {
        let mut rng = XorShift32::new(1234);
        let items = generate_items(200, 4, &mut rng);
        assert_eq!(items.len(), 200);
        for s in &items {
            assert_eq!(s.len(), 4);
            assert!(s.bytes().all(|b| b.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_same_seed_same_data() {
        let a = generate_items(50, 3, &mut XorShift32::new(7));
        let b = generate_items(50, 3, &mut XorShift32::new(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_length() {
        let mut rng = XorShift32::new(7);
        assert_eq!(random_lowercase(0, &mut rng), "");
        assert_eq!(rng, XorShift32::new(7));
    }
}
