use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use textbook_sort::{
    heap_sort, is_sorted, merge, merge_sort, native_sort, quick_sort, Algorithm, ArrayKind,
    QuickSortVariant,
};

fn random_input(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-500..=500)).collect()
}

#[test]
fn permutation_of_input() {
    for (seed, len) in [0, 1, 2, 17, 100, 513].into_iter().enumerate() {
        let input = random_input(len, seed as u64);

        let mut expected = input.clone();
        expected.sort();

        for algorithm in Algorithm::ALL {
            let sorted = algorithm.sort(&input);
            assert_eq!(sorted, expected, "{algorithm} len: {len}");
        }
    }
}

#[test]
fn idempotent() {
    let input = random_input(300, 7);

    for algorithm in Algorithm::ALL {
        let once = algorithm.sort(&input);
        let twice = algorithm.sort(&once);
        assert_eq!(once, twice, "{algorithm}");
    }
}

#[test]
fn algorithms_agree() {
    for kind in ArrayKind::ALL {
        let mut rng = StdRng::seed_from_u64(42);
        // Small enough for the recursive variants on sorted input.
        let input = kind.generate(800, &mut rng);

        let reference = Algorithm::Native.sort(&input);
        assert!(is_sorted(&reference));

        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.sort(&input), reference, "{algorithm} on {kind}");
        }
    }
}

#[test]
fn copy_returning_leaves_input() {
    let input = random_input(200, 3);
    let snapshot = input.clone();

    let _ = merge_sort(&input);
    let _ = heap_sort(&input);
    let _ = native_sort(&input);
    for variant in QuickSortVariant::ALL {
        let _ = quick_sort(&input, variant);
    }
    for algorithm in Algorithm::ALL {
        let _ = algorithm.sort(&input);
    }

    assert_eq!(input, snapshot);
}

#[test]
fn in_place_routines() {
    let input = random_input(150, 11);
    let mut expected = input.clone();
    expected.sort();

    let mut v = input.clone();
    textbook_sort::bubble_sort(&mut v);
    assert_eq!(v, expected);

    let mut v = input;
    textbook_sort::insertion_sort(&mut v);
    assert_eq!(v, expected);
}

#[test]
fn merge_prefers_left_on_ties() {
    // Sorted by key, the tag records where each element came from.
    let left = vec![(1, 'l'), (2, 'l'), (2, 'l'), (4, 'l')];
    let right = vec![(2, 'r'), (3, 'r'), (4, 'r')];

    let merged = merge(left, right, &mut |a: &(i32, char), b: &(i32, char)| a.0 < b.0);

    assert_eq!(
        merged,
        vec![
            (1, 'l'),
            (2, 'l'),
            (2, 'l'),
            (2, 'r'),
            (3, 'r'),
            (4, 'l'),
            (4, 'r')
        ]
    );
}

#[test]
fn merge_with_empty_side() {
    let is_less = &mut |a: &i32, b: &i32| a < b;

    assert_eq!(merge(vec![], vec![1, 2], is_less), vec![1, 2]);
    assert_eq!(merge(vec![1, 2], vec![], is_less), vec![1, 2]);
    assert_eq!(merge(Vec::<i32>::new(), vec![], is_less), Vec::<i32>::new());
}

#[test]
fn heapify_builds_max_heap() {
    let mut v = random_input(97, 5);
    let len = v.len();
    let is_less = &mut |a: &i64, b: &i64| a < b;

    for i in (0..len / 2).rev() {
        textbook_sort::heapify(&mut v, len, i, is_less);
    }

    for child in 1..len {
        let parent = (child - 1) / 2;
        assert!(v[parent] >= v[child], "parent {parent} child {child}");
    }
}

#[test]
fn is_sorted_edges() {
    assert!(is_sorted::<i32>(&[]));
    assert!(is_sorted(&[1]));
    assert!(is_sorted(&[1, 1, 2, 2]));
    assert!(!is_sorted(&[1, 3, 2]));
    assert!(!is_sorted(&[2.0, -1.0]));
}

#[test]
fn randomized_sort_impl_repeats_comparisons() {
    use sort_test_tools::Sort;
    use textbook_sort::unstable::quicksort_randomized::SortImpl;

    let input = random_input(500, 21);

    let comparisons = |input: &[i64]| {
        let mut v = input.to_vec();
        let mut count = 0u32;
        SortImpl::sort_by(&mut v, |a, b| {
            count += 1;
            a.cmp(b)
        });
        assert!(is_sorted(&v));
        count
    };

    let first = comparisons(&input);
    for _ in 0..4 {
        assert_eq!(comparisons(&input), first);
    }
}
