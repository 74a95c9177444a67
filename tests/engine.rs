//! Concrete scenarios and error paths of the public interface.

use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

use rand::rngs::StdRng;
use rand::SeedableRng;

use ksort::other::shuffle::shuffle;
use ksort::unstable::heap;
use ksort::{Algorithm, SortError};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn lt(a: &i32, b: &i32) -> bool {
    a < b
}

#[test]
fn mixed_duplicates() {
    init_logger();

    let input = [5, -3, 5, 1, -3, 0];
    let expected = [-3, -3, 0, 1, 5, 5];

    let mut v = input;
    ksort::sort_introsort(&mut v, lt).unwrap();
    assert_eq!(v, expected);

    let mut v = input;
    ksort::merge_sort(&mut v, lt, None).unwrap();
    assert_eq!(v, expected);

    let mut v = input;
    let mut scratch = [0; 6];
    ksort::merge_sort(&mut v, lt, Some(&mut scratch[..])).unwrap();
    assert_eq!(v, expected);

    let mut v = input;
    assert_eq!(ksort::select_kth(&mut v, lt, 2), Ok(&0));
}

#[test]
fn empty_input_every_algorithm() {
    init_logger();

    for algo in Algorithm::ALL {
        let mut v: Vec<i32> = Vec::new();
        algo.sort(&mut v).unwrap();
        assert!(v.is_empty());
    }

    let mut v: Vec<i32> = Vec::new();
    let mut scratch: [i32; 0] = [];
    ksort::merge_sort(&mut v, lt, Some(&mut scratch[..])).unwrap();
}

#[test]
fn single_element_every_algorithm() {
    for algo in Algorithm::ALL {
        let mut v = [42];
        let mut comp_count = 0;
        algo.sort_by(&mut v, |a, b| {
            comp_count += 1;
            a < b
        })
        .unwrap();

        assert_eq!(v, [42]);
        assert_eq!(comp_count, 0, "{algo}");
    }
}

#[test]
fn comb_sort_descending_ten() {
    let mut v = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
    ksort::sort_comb(&mut v, lt).unwrap();
    assert_eq!(v, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn root_functions_match_modules() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut input: Vec<i32> = (0..500).map(|i| i % 37).collect();
    shuffle(&mut input, &mut rng);

    let mut expected = input.clone();
    expected.sort();

    let sorts: [fn(&mut [i32]) -> ksort::Result<()>; 4] = [
        |v| ksort::sort_insertion(v, lt),
        |v| ksort::sort_comb(v, lt),
        |v| ksort::sort_heap(v, lt),
        |v| ksort::sort_introsort(v, lt),
    ];

    for sort in sorts {
        let mut v = input.clone();
        sort(&mut v).unwrap();
        assert_eq!(v, expected);
    }
}

#[test]
fn idempotent_on_sorted_input() {
    for algo in Algorithm::ALL {
        let mut v: Vec<i32> = (0..300).collect();
        algo.sort(&mut v).unwrap();
        assert_eq!(v, (0..300).collect::<Vec<_>>(), "{algo}");
    }
}

#[test]
fn merge_sort_is_stable() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut keys: Vec<u8> = (0..1_000).map(|i| (i % 7) as u8).collect();
    shuffle(&mut keys, &mut rng);

    // Tag every key with its input position.
    let mut v: Vec<(u8, usize)> = keys.into_iter().enumerate().map(|(i, k)| (k, i)).collect();
    ksort::merge_sort(&mut v, |a, b| a.0 < b.0, None).unwrap();

    assert!(v.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn merge_sort_scratch_too_small() {
    let mut v = [3, 2, 1];
    let mut scratch = [0; 2];

    let err = ksort::merge_sort(&mut v, lt, Some(&mut scratch[..])).unwrap_err();

    assert_eq!(err, SortError::ScratchTooSmall { required: 3, len: 2 });
    assert_eq!(v, [3, 2, 1]);
    assert_eq!(
        err.to_string(),
        "scratch buffer holds 2 elements, but 3 are required"
    );
}

#[test]
fn select_rejects_bad_input() {
    let mut v: [i32; 0] = [];
    assert_eq!(ksort::select_kth(&mut v, lt, 0), Err(SortError::EmptyInput));

    let mut v = [4, 1, 3];
    let err = ksort::select_kth(&mut v, lt, 7).unwrap_err();
    assert_eq!(err, SortError::IndexOutOfRange { index: 7, len: 3 });
    assert_eq!(v, [4, 1, 3]);
}

#[test]
fn select_matches_sorted_for_every_k() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut input: Vec<i32> = (0..200).map(|i| (i * 7919) % 101).collect();
    shuffle(&mut input, &mut rng);

    let mut sorted = input.clone();
    ksort::sort_introsort(&mut sorted, lt).unwrap();

    for k in 0..input.len() {
        let mut v = input.clone();
        assert_eq!(ksort::select_kth(&mut v, lt, k), Ok(&sorted[k]));
    }
}

#[test]
fn two_elements_one_comparison() {
    for algo in Algorithm::ALL {
        let mut v = [2, 1];
        let mut comp_count = 0;

        algo.sort_by(&mut v, |a, b| {
            comp_count += 1;
            a < b
        })
        .unwrap();

        assert_eq!(v, [1, 2]);
        assert_eq!(comp_count, 1, "{algo}");
    }
}

#[test]
fn zero_sized_types() {
    for algo in Algorithm::ALL {
        let mut v = [(); 10];
        algo.sort_by(&mut v, |_, _| panic!("no comparisons for zero-sized types"))
            .unwrap();
    }
}

#[test]
fn heap_primitives() {
    let mut v = [5, -3, 5, 1, -3, 0, 12];

    heap::heapify(&mut v, lt);
    assert_eq!(v[0], 12);
    assert!((1..v.len()).all(|i| v[(i - 1) / 2] >= v[i]));

    heap::sort_heap(&mut v, lt);
    assert_eq!(v, [-3, -3, 0, 1, 5, 5, 12]);
}

#[test]
fn merge_sort_panic_keeps_elements() {
    // Panics at every possible comparison, for an odd and an even number of merge passes.
    for len in [5, 9] {
        let input: Vec<Vec<i32>> = (0..len).rev().map(|i| vec![i]).collect();

        let mut required = 0;
        let count_comparisons = |a: &Vec<i32>, b: &Vec<i32>| {
            required += 1;
            a < b
        };
        ksort::merge_sort(&mut input.clone(), count_comparisons, None).unwrap();

        for panic_at in 0..required {
            let mut v = input.clone();
            let count = Cell::new(0);

            let res = panic::catch_unwind(AssertUnwindSafe(|| {
                ksort::merge_sort(
                    &mut v,
                    |a, b| {
                        if count.get() == panic_at {
                            panic!("comparison {panic_at}");
                        }
                        count.set(count.get() + 1);
                        a < b
                    },
                    None,
                )
            }));
            assert!(res.is_err());

            let mut after = v.iter().map(|x| x[0]).collect::<Vec<_>>();
            after.sort();
            assert_eq!(after, (0..len).collect::<Vec<_>>());
        }
    }
}

#[test]
fn algorithm_metadata() {
    assert!(Algorithm::Merge.is_stable());
    assert!(Algorithm::Insertion.is_stable());
    assert!(!Algorithm::Intro.is_stable());
    assert_eq!("Intro".parse::<Algorithm>(), Ok(Algorithm::Intro));
    assert!("shell".parse::<Algorithm>().is_err());
}
