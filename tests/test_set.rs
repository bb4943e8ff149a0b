extern crate balanced_set;
extern crate rand;

use balanced_set::{Backend, Set};
use rand::{Rng, SeedableRng, XorShiftRng};
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 20_000;
const BACKENDS: [Backend; 2] = [Backend::Avl, Backend::Llrb];

fn random_set<R: Rng>(rng: &mut R, backend: Backend, len: usize) -> (Set, BTreeSet<i32>) {
    let mut set = Set::new(backend);
    let mut expected = BTreeSet::new();
    for _ in 0..len {
        let key = rng.gen_range(-200, 200);
        assert_eq!(set.insert(key), expected.insert(key));
    }
    (set, expected)
}

macro_rules! bst_set_tests {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use balanced_set::$module_name::$type_name;
                use rand::{Rng, SeedableRng, XorShiftRng};
                use std::collections::BTreeSet;
                use super::NUM_OF_OPERATIONS;

                #[test]
                fn test_random_operations() {
                    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut set = $type_name::new();
                    let mut expected = BTreeSet::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen_range(-1000, 1000);
                        if rng.gen_weighted_bool(3) {
                            assert_eq!(set.remove(key), expected.remove(&key));
                        } else {
                            assert_eq!(set.insert(key), expected.insert(key));
                        }
                        assert_eq!(set.contains(key), expected.contains(&key));
                        assert_eq!(set.len(), expected.len());
                    }

                    assert!(set.validate().is_ok());
                    assert_eq!(set.traverse(), expected.iter().cloned().collect::<Vec<i32>>());
                }

                #[test]
                fn test_invariants_after_every_mutation() {
                    let mut rng: XorShiftRng = SeedableRng::from_seed([2, 7, 1, 8]);
                    let mut set = $type_name::new();

                    for _ in 0..2000 {
                        let key = rng.gen_range(0, 100);
                        if rng.gen() {
                            set.insert(key);
                        } else {
                            set.remove(key);
                        }
                        assert_eq!(set.validate(), Ok(()));

                        let keys = set.traverse();
                        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
                    }
                }

                #[test]
                fn test_insert_idempotent() {
                    let mut set = $type_name::new();
                    for key in &[8, 3, 10, 1, 6, 14, 4, 7, 13] {
                        set.insert(*key);
                    }
                    let before = set.traverse();
                    for key in &before {
                        assert!(!set.insert(*key));
                    }
                    assert_eq!(set.traverse(), before);
                    assert!(set.validate().is_ok());
                }

                #[test]
                fn test_insert_then_remove_restores_members() {
                    let mut rng: XorShiftRng = SeedableRng::from_seed([3, 1, 4, 1]);
                    let mut set = $type_name::new();
                    for _ in 0..500 {
                        set.insert(rng.gen_range(0, 1000));
                    }
                    let before = set.traverse();

                    for key in 1000..1100 {
                        assert!(set.insert(key));
                        assert!(set.remove(key));
                        assert_eq!(set.traverse(), before);
                        assert!(set.validate().is_ok());
                    }
                }

                #[test]
                fn test_descending_and_ascending() {
                    let mut set = $type_name::new();
                    for key in (0..512).rev() {
                        set.insert(key);
                    }
                    for key in 512..1024 {
                        set.insert(key);
                    }
                    assert!(set.validate().is_ok());
                    for key in (0..1024).filter(|key| key % 2 == 0) {
                        assert!(set.remove(key));
                    }
                    assert!(set.validate().is_ok());
                    assert_eq!(set.len(), 512);
                    assert_eq!(set.min(), Some(1));
                    assert_eq!(set.max(), Some(1023));
                }

                #[test]
                fn test_algebra_matches_btreeset() {
                    let mut rng: XorShiftRng = SeedableRng::from_seed([5, 4, 3, 2]);
                    let mut a = $type_name::new();
                    let mut b = $type_name::new();
                    let mut expected_a = BTreeSet::new();
                    let mut expected_b = BTreeSet::new();
                    for _ in 0..300 {
                        let key = rng.gen_range(0, 400);
                        a.insert(key);
                        expected_a.insert(key);
                        let key = rng.gen_range(0, 400);
                        b.insert(key);
                        expected_b.insert(key);
                    }

                    let union = a.union(&b);
                    let intersection = a.intersection(&b);
                    assert!(union.validate().is_ok());
                    assert!(intersection.validate().is_ok());
                    assert_eq!(
                        union.traverse(),
                        expected_a.union(&expected_b).cloned().collect::<Vec<i32>>(),
                    );
                    assert_eq!(
                        intersection.traverse(),
                        expected_a.intersection(&expected_b).cloned().collect::<Vec<i32>>(),
                    );
                    assert_eq!(b.union(&a).traverse(), union.traverse());
                    assert_eq!(b.intersection(&a).traverse(), intersection.traverse());
                }
            }
        )*
    };
}

bst_set_tests!(
    avl_tree: AvlSet,
    red_black_tree: LlrbSet,
);

#[test]
fn test_set_random_operations() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([9, 9, 9, 9]);
    for backend in &BACKENDS {
        let mut set = Set::new(*backend);
        let mut expected = BTreeSet::new();
        for _ in 0..NUM_OF_OPERATIONS {
            let key = rng.gen_range(-300, 300);
            match rng.gen_range(0, 3) {
                0 => assert_eq!(set.try_insert(key).is_ok(), expected.insert(key)),
                1 => assert_eq!(set.try_remove(key).is_ok(), expected.remove(&key)),
                _ => assert_eq!(set.contains(key), expected.contains(&key)),
            }
        }
        assert!(set.validate().is_ok());
        assert_eq!(set.traverse(), expected.into_iter().collect::<Vec<i32>>());
    }
}

#[test]
fn test_set_algebra_laws() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([4, 3, 2, 1]);
    for backend in &BACKENDS {
        let (a, expected_a) = random_set(&mut rng, *backend, 150);
        let (b, expected_b) = random_set(&mut rng, *backend, 150);
        let empty = Set::new(*backend);

        let union = a.union(&b).unwrap();
        assert_eq!(union.backend(), *backend);
        assert_eq!(
            union.traverse(),
            expected_a.union(&expected_b).cloned().collect::<Vec<i32>>(),
        );
        assert_eq!(b.union(&a).unwrap().traverse(), union.traverse());

        let intersection = a.intersection(&b).unwrap();
        assert_eq!(intersection.backend(), *backend);
        assert_eq!(
            intersection.traverse(),
            expected_a.intersection(&expected_b).cloned().collect::<Vec<i32>>(),
        );
        assert_eq!(b.intersection(&a).unwrap().traverse(), intersection.traverse());

        assert_eq!(a.intersection(&a).unwrap().traverse(), a.traverse());
        assert_eq!(a.union(&empty).unwrap().traverse(), a.traverse());
        assert!(a.intersection(&empty).unwrap().is_empty());
    }
}

#[test]
fn test_set_mismatched_backends_always_fail() {
    let a = Set::from_keys(Backend::Avl, vec![1, 2, 3]);
    let b = Set::from_keys(Backend::Llrb, vec![1, 2, 3]);
    assert!(a.union(&b).is_err());
    assert!(b.union(&a).is_err());
    assert!(a.intersection(&b).is_err());
    assert!(b.intersection(&a).is_err());
}

#[test]
fn test_set_scenarios() {
    let avl = Set::from_keys(Backend::Avl, vec![30, 20, 10]);
    assert_eq!(avl.traverse(), vec![10, 20, 30]);

    let llrb = Set::from_keys(Backend::Llrb, vec![10, 20, 30]);
    assert_eq!(llrb.traverse(), vec![10, 20, 30]);
    assert!(llrb.validate().is_ok());

    for backend in &BACKENDS {
        let mut set = Set::from_keys(*backend, vec![5, 3, 8]);
        assert!(set.remove(3));
        assert!(!set.contains(3));
        assert_eq!(set.traverse(), vec![5, 8]);
    }
}
