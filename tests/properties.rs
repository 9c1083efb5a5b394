//! Property tests for the algebraic laws of version vectors.

use proptest::prelude::*;
use vclock_kit::prelude::*;

const REPLICAS: [&str; 5] = ["a", "b", "c", "d", "e"];

/// Builds a vector by replaying a sequence of writes.
fn replay(creation_time: u64, writes: &[usize]) -> VersionVector<&'static str> {
    writes
        .iter()
        .fold(VersionVector::at(creation_time), |v, &i| v.append(REPLICAS[i]))
}

fn writes() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..REPLICAS.len(), 0..16)
}

fn same_counters(left: &VersionVector<&str>, right: &VersionVector<&str>) -> bool {
    left.keys().eq(right.keys())
        && left
            .values()
            .map(Counter::value)
            .eq(right.values().map(Counter::value))
}

proptest! {
    #[test]
    fn compare_is_reflexive(w in writes()) {
        let v = replay(0, &w);
        prop_assert_eq!(v.compare(&v), Occurred::Identical);
        prop_assert_eq!(v.compare(&v.clone()), Occurred::Identical);
    }

    #[test]
    fn append_is_strictly_monotonic(w in writes(), k in 0..REPLICAS.len()) {
        let v = replay(0, &w);
        let next = v.append(REPLICAS[k]);
        prop_assert_eq!(next.compare(&v), Occurred::After);
        prop_assert_eq!(v.compare(&next), Occurred::Before);
        prop_assert!(next.get(&REPLICAS[k]) > v.get(&REPLICAS[k]));
    }

    #[test]
    fn append_keeps_creation_time(w in writes(), t in any::<u64>()) {
        prop_assert_eq!(replay(t, &w).creation_time(), t);
    }

    #[test]
    fn merge_is_idempotent(w in writes()) {
        let v = replay(0, &w);
        prop_assert!(same_counters(&v.merge(&v), &v));
    }

    #[test]
    fn merge_is_commutative(w1 in writes(), w2 in writes(), t1 in any::<u64>(), t2 in any::<u64>()) {
        let a = replay(t1, &w1);
        let b = replay(t2, &w2);
        prop_assert!(same_counters(&a.merge(&b), &b.merge(&a)));
    }

    #[test]
    fn merge_is_associative(w1 in writes(), w2 in writes(), w3 in writes()) {
        let a = replay(0, &w1);
        let b = replay(0, &w2);
        let c = replay(0, &w3);
        prop_assert!(same_counters(&a.merge(&b).merge(&c), &a.merge(&b.merge(&c))));
    }

    #[test]
    fn merge_is_an_upper_bound(w1 in writes(), w2 in writes()) {
        let a = replay(0, &w1);
        let b = replay(0, &w2);
        let joined = a.merge(&b);
        for side in [&a, &b] {
            let occurred = joined.compare(side);
            prop_assert!(
                matches!(occurred, Occurred::Identical | Occurred::After),
                "join compared {} to an input", occurred
            );
        }
    }

    #[test]
    fn merge_takes_earliest_creation_time(t1 in any::<u64>(), t2 in any::<u64>(), w in writes()) {
        let a = replay(t1, &w);
        let b = replay(t2, &w);
        prop_assert_eq!(a.merge(&b).creation_time(), t1.min(t2));
    }

    #[test]
    fn compare_is_antisymmetric_unless_key_sets_cross(w1 in writes(), w2 in writes()) {
        let a = replay(0, &w1);
        let b = replay(0, &w2);
        prop_assume!(a.len() != b.len() || a.keys().eq(b.keys()));
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
    }

    #[test]
    fn disjoint_single_writes_are_concurrent(k1 in 0..REPLICAS.len(), k2 in 0..REPLICAS.len()) {
        prop_assume!(k1 != k2);
        let a = VersionVector::with_key(REPLICAS[k1]);
        let b = VersionVector::with_key(REPLICAS[k2]);
        prop_assert_eq!(a.compare(&b), Occurred::Concurrent);
    }

    #[test]
    fn inputs_are_unchanged_by_derivation(w1 in writes(), w2 in writes(), k in 0..REPLICAS.len()) {
        let a = replay(0, &w1);
        let b = replay(0, &w2);
        let a_before = a.clone();
        let b_before = b.clone();

        let _ = a.append(REPLICAS[k]);
        let _ = a.merge(&b);

        prop_assert!(same_counters(&a, &a_before));
        prop_assert!(same_counters(&b, &b_before));
    }
}
