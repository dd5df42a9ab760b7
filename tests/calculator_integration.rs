use lcs_dp::{lcs_values, IndexPair, Lcs, LcsBuilder};

fn is_subsequence<T: PartialEq>(needle: &[&T], hay: &[T]) -> bool {
    let mut it = hay.iter();
    needle.iter().all(|n| it.any(|h| h == *n))
}

#[test]
fn textbook_letters() {
    let a = ["A", "B", "C", "B", "D", "A", "B"];
    let b = ["B", "D", "C", "A", "B", "A"];
    let lcs = Lcs::new(&a, &b);

    assert_eq!(lcs.length(), 4);
    let values = lcs.values();
    assert_eq!(values.len(), 4);
    assert!(is_subsequence(values, &a));
    assert!(is_subsequence(values, &b));
    // Ties are broken by dropping from `left` first.
    let picked: Vec<&str> = values.iter().map(|v| **v).collect();
    assert_eq!(picked, vec!["B", "C", "B", "A"]);
    for (p, v) in lcs.index_pairs().iter().zip(values) {
        assert_eq!(a[p.left], **v);
        assert_eq!(b[p.right], **v);
    }
}

#[test]
fn numbers_with_repeats() {
    let a = [1, 2, 3, 4, 1];
    let b = [3, 4, 1, 2, 1, 3];
    let lcs = Lcs::new(&a, &b);
    assert_eq!(lcs.length(), 3);
    assert_eq!(
        lcs.index_pairs(),
        &[IndexPair::new(0, 2), IndexPair::new(1, 3), IndexPair::new(2, 5)]
    );
    assert_eq!(lcs_values(&a, &b), vec![1, 2, 3]);
}

#[test]
fn empty_left() {
    let a: [i32; 0] = [];
    let b = [1, 2, 3];
    let lcs = Lcs::new(&a, &b);
    assert_eq!(lcs.length(), 0);
    assert!(lcs.index_pairs().is_empty());
    assert!(lcs.values().is_empty());
    assert_eq!(lcs.table().rows(), 1);
    assert_eq!(lcs.table().cols(), 4);
}

#[test]
fn both_empty() {
    let a: Vec<String> = Vec::new();
    let lcs = Lcs::new(&a, &a);
    assert_eq!(lcs.length(), 0);
    assert!(lcs.values().is_empty());
}

#[test]
fn structural_equality_of_composites() {
    #[derive(Debug, Clone, PartialEq)]
    struct Line {
        indent: usize,
        words: Vec<String>,
    }
    fn line(indent: usize, words: &[&str]) -> Line {
        Line {
            indent,
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    let a = vec![line(0, &["fn", "main"]), line(4, &["let", "x"]), line(0, &["}"])];
    let b = vec![line(0, &["fn", "main"]), line(4, &["let", "y"]), line(0, &["}"])];
    let lcs = Lcs::new(&a, &b);
    assert_eq!(lcs.length(), 2);
    assert_eq!(lcs.values_cloned(), vec![line(0, &["fn", "main"]), line(0, &["}"])]);
}

#[test]
fn longer_right_does_not_swap_accessors() {
    let a = [1, 2];
    let b = [9, 1, 9, 2, 9];
    let lcs = Lcs::new(&a, &b);
    assert_eq!(lcs.length(), 2);
    assert_eq!(lcs.left(), &a);
    assert_eq!(lcs.right(), &b);
    // Pairs keep the caller's orientation.
    assert_eq!(lcs.index_pairs(), &[IndexPair::new(0, 1), IndexPair::new(1, 3)]);
}

#[test]
fn builder_case_insensitive() {
    let a = ["Hello", "big", "World"];
    let b = ["hello", "WORLD", "again"];
    let lcs = LcsBuilder::new(&a, &b)
        .matcher(|x: &&str, y: &&str| x.eq_ignore_ascii_case(y))
        .build();
    assert_eq!(lcs.length(), 2);
    // Values come from `left`.
    assert_eq!(lcs.values(), &[&"Hello", &"World"]);
}

#[test]
fn index_pairs_identity_is_stable() {
    let a: Vec<u32> = (0..50).map(|i| i % 7).collect();
    let b: Vec<u32> = (0..60).map(|i| i % 5).collect();
    let lcs = Lcs::new(&a, &b);
    let first = lcs.index_pairs();
    let second = lcs.index_pairs();
    assert!(std::ptr::eq(first, second));
    assert!(std::ptr::eq(lcs.values(), lcs.values()));
    assert!(std::ptr::eq(lcs.table(), lcs.table()));
}
