use std::str::FromStr;

use textbook_sort::{
    parse_sequence, sort, validate_sequence, Algorithm, ArrayKind, QuickSortVariant, SortError,
};

#[test]
fn parse_plain_list() {
    assert_eq!(
        parse_sequence("3, 6,8 ,10,1,2,1").unwrap(),
        vec![3.0, 6.0, 8.0, 10.0, 1.0, 2.0, 1.0]
    );
    assert_eq!(
        parse_sequence("-2.5, 0.125, 1e3").unwrap(),
        vec![-2.5, 0.125, 1000.0]
    );
}

#[test]
fn parse_skips_garbage_tokens() {
    assert_eq!(parse_sequence("3, x, 1,,2").unwrap(), vec![3.0, 1.0, 2.0]);
    assert_eq!(parse_sequence(" 7 ,").unwrap(), vec![7.0]);
    assert_eq!(parse_sequence("1, NaN, inf, 2").unwrap(), vec![1.0, 2.0]);
}

#[test]
fn parse_reads_leading_number() {
    assert_eq!(
        parse_sequence("12abc, 1.5.3, -4e2x, 7e, .5, 3.").unwrap(),
        vec![12.0, 1.5, -400.0, 7.0, 0.5, 3.0]
    );
    assert_eq!(parse_sequence("+8, 0x10").unwrap(), vec![8.0, 0.0]);
}

#[test]
fn parse_rejects_empty() {
    for text in ["", " ", ",,,", "a, b, c", "-, ., e5"] {
        assert!(
            matches!(parse_sequence(text), Err(SortError::InvalidInput(_))),
            "{text:?}"
        );
    }
}

#[test]
fn parse_rejects_non_finite() {
    for text in ["Infinity", "3, -Infinity", "1, 1e400, 2"] {
        assert!(
            matches!(parse_sequence(text), Err(SortError::InvalidInput(_))),
            "{text:?}"
        );
    }
}

#[test]
fn validate() {
    assert!(validate_sequence(&[]).is_ok());
    assert!(validate_sequence(&[1.0, -0.0, 1e300]).is_ok());

    let err = validate_sequence(&[1.0, f64::NAN]).unwrap_err();
    assert!(err.to_string().contains("index 1"), "{err}");
}

#[test]
fn algorithm_ids_round_trip() {
    for algorithm in Algorithm::ALL {
        assert_eq!(Algorithm::from_str(algorithm.id()).unwrap(), algorithm);
    }
}

#[test]
fn algorithm_ids_case_insensitive() {
    assert_eq!(Algorithm::from_str("MergeSort").unwrap(), Algorithm::MergeSort);
    assert_eq!(
        Algorithm::from_str(" 3WAY ").unwrap(),
        Algorithm::QuickSort(QuickSortVariant::ThreeWay)
    );
    assert_eq!(
        Algorithm::from_str("Optimized").unwrap(),
        Algorithm::QuickSort(QuickSortVariant::Randomized)
    );
}

#[test]
fn unsupported_algorithm() {
    let err = sort(&[3, 1, 2], "timsort").unwrap_err();

    assert_eq!(err, SortError::UnsupportedAlgorithm("timsort".to_string()));
    assert_eq!(
        err.to_string(),
        "Invalid algorithm 'timsort'. Supported algorithms: recursive, iterative, optimized, 3way, \
         mergesort, heapsort, bubblesort, insertionsort, native"
    );
}

#[test]
fn sort_by_id() {
    assert_eq!(sort(&[3, 1, 2], "heapsort").unwrap(), vec![1, 2, 3]);
    assert_eq!(sort(&[3.5, -1.0], "native").unwrap(), vec![-1.0, 3.5]);
    assert!(sort::<i32>(&[], "recursive").unwrap().is_empty());
}

#[test]
fn quicksort_variant_ids() {
    assert_eq!(QuickSortVariant::default(), QuickSortVariant::Recursive);
    assert_eq!(
        QuickSortVariant::from_str("randomized").unwrap(),
        QuickSortVariant::Randomized
    );
    assert!(QuickSortVariant::from_str("mergesort").is_err());

    for variant in QuickSortVariant::ALL {
        assert_eq!(QuickSortVariant::from_str(variant.id()).unwrap(), variant);
    }
}

#[test]
fn array_kind_ids() {
    for kind in ArrayKind::ALL {
        assert_eq!(ArrayKind::from_str(kind.name()).unwrap(), kind);
    }

    assert_eq!(ArrayKind::from_str("Nearly").unwrap(), ArrayKind::NearlySorted);
    assert!(ArrayKind::from_str("zigzag").is_err());
}
