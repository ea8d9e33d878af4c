use crate::error::AppError;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick one element uniformly at random.
///
/// Production callers pass `rand::rng()`; tests pass a seeded `StdRng`.
///
/// # Errors
/// `InvalidArgument` if `candidates` is empty.
pub fn pick<'a, T, R>(candidates: &'a [T], rng: &mut R) -> Result<&'a T, AppError>
where
    R: Rng + ?Sized,
{
    candidates
        .choose(rng)
        .ok_or_else(|| AppError::InvalidArgument("no candidates to pick from".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_pick_empty_is_invalid_argument() {
        let mut rng = StdRng::seed_from_u64(42);
        let empty: [String; 0] = [];
        assert!(matches!(
            pick(&empty, &mut rng),
            Err(AppError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_pick_single_candidate() {
        let mut rng = StdRng::seed_from_u64(42);
        let only = ["validate0000.tfrecord".to_string()];
        assert_eq!(pick(&only, &mut rng).unwrap(), "validate0000.tfrecord");
    }

    #[test]
    fn test_same_seed_same_choice() {
        let files: Vec<String> = (0..50).map(|i| format!("validate{i:04}.tfrecord")).collect();
        let first = pick(&files, &mut StdRng::seed_from_u64(7)).unwrap();
        let second = pick(&files, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_candidate_reachable() {
        let files = ["a", "b", "c"];
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(*pick(&files, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), files.len());
    }

    proptest! {
        #[test]
        fn prop_pick_returns_member(
            candidates in prop::collection::vec(any::<u32>(), 1..32),
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let chosen = pick(&candidates, &mut rng).unwrap();
            prop_assert!(candidates.contains(chosen));
        }
    }
}
