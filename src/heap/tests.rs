use super::*;
use crate::test_helpers::test_rng;
use crate::Skipped;
use alloc::rc::Rc;
use alloc::vec;
use rand::Rng;
use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};

fn random_values(len: usize) -> Vec<i32> {
    let mut rng = test_rng();
    (0..len).map(|_| rng.gen_range(-500..500)).collect()
}

fn drain<T, D: Direction, O: TotalOrder<T>>(heap: &mut Heap<T, D, O>) -> Vec<T> {
    let mut out = Vec::with_capacity(heap.len());
    while let Some(x) = heap.extract() {
        out.push(x);
    }
    out
}

#[test]
fn test_empty() {
    let mut heap = MinHeap::<i32>::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.extract(), None);
    assert_eq!(heap.extract_min(), None);
    assert!(heap.is_valid());
    assert!(heap.sort().is_empty());
    assert!(heap.top_k(3).is_empty());

    let default: MaxHeap<i32> = Default::default();
    assert!(default.is_empty());
    assert!(default.allows_duplicates());
}

#[test]
fn test_min_extraction_order() {
    let mut heap = MinHeap::new();
    for x in [5, 3, 7, 1, 9] {
        assert_eq!(heap.insert(x), Ok(Insertion::Inserted));
    }
    assert_eq!(heap.peek(), Some(&1));
    assert_eq!(drain(&mut heap), [1, 3, 5, 7, 9]);
}

#[test]
fn test_max_extraction_order() {
    let mut heap = MaxHeap::new();
    for x in [5, 3, 7, 1, 9] {
        heap.insert(x).unwrap();
    }
    assert_eq!(heap.peek(), Some(&9));
    assert_eq!(heap.extract_max(), Some(9));
    assert_eq!(heap.len(), 4);
    assert_eq!(heap.peek(), Some(&7));
    assert_eq!(drain(&mut heap), [7, 5, 3, 1]);
}

#[test]
fn test_duplicates_allowed_by_default() {
    let mut heap = MinHeap::new();
    for _ in 0..3 {
        assert_eq!(heap.insert(3), Ok(Insertion::Inserted));
    }
    assert_eq!(heap.len(), 3);
    assert_eq!(drain(&mut heap), [3, 3, 3]);
}

#[test]
fn test_duplicate_insert_is_skipped() {
    let mut heap = MinHeap::with_options(HeapOptions::new().allow_duplicates(false));
    assert_eq!(heap.insert(3), Ok(Insertion::Inserted));
    assert_eq!(heap.insert(3), Ok(Insertion::Duplicate));
    assert!(!heap.insert(3).unwrap().is_inserted());
    assert_eq!(heap.insert(4), Ok(Insertion::Inserted));
    assert_eq!(heap.len(), 2);
}

#[test]
fn test_absent_insert_fails() {
    let mut heap = MaxHeap::new();
    heap.insert(Some(1)).unwrap();
    assert_eq!(heap.insert(None), Err(HeapError::InvalidValue));
    assert_eq!(heap.len(), 1);
    assert!(heap.is_valid());

    let mut floats = MaxHeap::with_order(f64::total_cmp);
    floats.insert(1.5).unwrap();
    assert_eq!(floats.insert(f64::NAN), Err(HeapError::InvalidValue));
    assert_eq!(floats.peek(), Some(&1.5));
}

#[test]
fn test_batch_insert_reports_skips() {
    let mut heap = MinHeap::with_options(HeapOptions::new().allow_duplicates(false));
    heap.insert(Some(5)).unwrap();

    let report = heap.batch_insert([Some(2), None, Some(5), Some(8), Some(2)]);
    assert_eq!(report.inserted(), 2);
    assert!(!report.is_clean());

    let skipped = report.into_skipped();
    assert_eq!(
        skipped,
        [
            Skipped { index: 1, reason: SkipReason::Absent, value: None },
            Skipped { index: 2, reason: SkipReason::Duplicate, value: Some(5) },
            Skipped { index: 4, reason: SkipReason::Duplicate, value: Some(2) },
        ]
    );
    assert_eq!(heap.len(), 3);
    assert!(heap.is_valid());
    assert_eq!(heap.sort(), [Some(2), Some(5), Some(8)]);
}

#[test]
fn test_batch_insert_clean_report() {
    let mut heap = MaxHeap::new();
    let report = heap.batch_insert(vec![4, 8, 1]);
    assert!(report.is_clean());
    assert_eq!(report.inserted(), 3);
    assert!(heap.batch_insert(Vec::new()).is_clean());
    assert_eq!(heap.len(), 3);
}

#[test]
fn test_batch_matches_individual_inserts() {
    let values = random_values(200);

    let mut batched = MinHeap::new();
    batched.batch_insert(values.iter().copied());

    let mut single = MinHeap::new();
    for &x in &values {
        single.insert(x).unwrap();
    }

    assert!(batched.is_valid());
    assert_eq!(drain(&mut batched), drain(&mut single));
}

#[test]
fn test_batch_into_non_empty_heap() {
    let mut heap: MaxHeap<i32> = [10, 20, 30].into();
    heap.batch_insert([25, 5, 35]);
    assert!(heap.is_valid());
    assert_eq!(heap.into_sorted_vec(), [35, 30, 25, 20, 10, 5]);
}

#[test]
fn test_random_operations_keep_invariant() {
    let mut rng = test_rng();
    let mut min = MinHeap::new();
    let mut max = MaxHeap::new();
    let mut expected_len = 0usize;

    for _ in 0..1000 {
        match rng.gen_range(0..4) {
            0 | 1 => {
                let x: i32 = rng.gen_range(-50..50);
                min.insert(x).unwrap();
                max.insert(x).unwrap();
                expected_len += 1;
            }
            2 => {
                let batch: Vec<i32> = (0..rng.gen_range(0..8)).map(|_| rng.gen()).collect();
                expected_len += batch.len();
                min.batch_insert(batch.iter().copied());
                max.batch_insert(batch);
            }
            _ => {
                let (a, b) = (min.extract(), max.extract());
                assert_eq!(a.is_some(), b.is_some());
                if a.is_some() {
                    expected_len -= 1;
                }
            }
        }
        assert!(min.is_valid());
        assert!(max.is_valid());
        assert_eq!(min.len(), expected_len);
        assert_eq!(max.len(), expected_len);
    }
}

#[test]
fn test_extraction_is_monotonic() {
    let values = random_values(300);

    let mut min: MinHeap<i32> = values.clone().into();
    let drained = drain(&mut min);
    assert!(drained.windows(2).all(|w| w[0] <= w[1]));

    let mut max: MaxHeap<i32> = values.into();
    let drained = drain(&mut max);
    assert!(drained.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_peek_is_idempotent() {
    let heap: MinHeap<i32> = [4, 2, 6].into();
    assert_eq!(heap.peek(), Some(&2));
    assert_eq!(heap.peek(), Some(&2));
    assert_eq!(heap.len(), 3);
}

#[test]
fn test_top_k() {
    let min: MinHeap<i32> = [5, 3, 7, 1, 9].into();
    assert_eq!(min.top_k(2), [9, 7]);
    assert_eq!(min.top_k(5), [9, 7, 5, 3, 1]);
    assert_eq!(min.top_k(50), [9, 7, 5, 3, 1]);
    assert!(min.top_k(0).is_empty());
    assert_eq!(min.len(), 5);

    let max: MaxHeap<i32> = [5, 3, 7, 1, 9].into();
    assert_eq!(max.top_k(2), [1, 3]);
    assert_eq!(max.top_k(9), [1, 3, 5, 7, 9]);
}

#[test]
fn test_top_k_matches_sorted_tail() {
    let values = random_values(120);
    let heap: MinHeap<i32> = values.clone().into();

    let mut descending = values;
    descending.sort_unstable_by(|a, b| b.cmp(a));
    for k in [1, 7, 60, 119, 120, 121] {
        let expected: Vec<i32> = descending.iter().copied().take(k).collect();
        assert_eq!(heap.top_k(k), expected);
    }
}

#[test]
fn test_derived_operations_do_not_mutate() {
    let heap: MaxHeap<i32> = random_values(64).into();
    let before = heap.to_vec();

    let _ = heap.top_k(10);
    let _ = heap.sort();
    let _ = heap.iter_sorted().take(3).count();

    assert_eq!(heap.len(), 64);
    assert_eq!(heap.to_vec(), before);
}

#[test]
fn test_sort() {
    let values = random_values(100);
    let mut ascending = values.clone();
    ascending.sort_unstable();

    let min: MinHeap<i32> = values.clone().into();
    assert_eq!(min.sort(), ascending);

    let max: MaxHeap<i32> = values.into();
    ascending.reverse();
    assert_eq!(max.sort(), ascending);
}

#[test]
fn test_into_sorted_vec() {
    let values = random_values(100);
    let mut ascending = values.clone();
    ascending.sort_unstable();

    let min: MinHeap<i32> = values.clone().into();
    assert_eq!(min.into_sorted_vec(), ascending);

    let max: MaxHeap<i32> = values.into();
    ascending.reverse();
    assert_eq!(max.into_sorted_vec(), ascending);

    assert!(MinHeap::<i32>::new().into_sorted_vec().is_empty());
}

#[test]
fn test_iteration_is_restartable() {
    let heap: MinHeap<i32> = [3, 1, 2].into();

    let mut first = heap.iter_sorted();
    assert_eq!(first.len(), 3);
    assert_eq!(first.next(), Some(1));
    drop(first);

    let mut seen = Vec::new();
    for x in &heap {
        seen.push(x);
    }
    assert_eq!(seen, [1, 2, 3]);
    assert_eq!((&heap).into_iter().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(heap.len(), 3);

    assert_eq!(heap.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
}

#[test]
fn test_custom_order() {
    // by magnitude, ties broken by sign
    let order = |a: &i32, b: &i32| a.abs().cmp(&b.abs()).then(a.cmp(b));
    let mut heap = MaxHeap::with_order(order);
    heap.batch_insert([-7, 3, 7, -1, 0]);
    assert_eq!(heap.sort(), [7, -7, 3, -1, 0]);
    assert_eq!(heap.top_k(2), [0, -1]);
}

#[test]
fn test_custom_order_duplicates() {
    let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
    let options = HeapOptions::new()
        .order(by_len)
        .initial_data(["abc", "de", "fgh", "i"])
        .allow_duplicates(false);
    let mut heap = MinHeap::with_options(options);
    assert_eq!(heap.len(), 3);
    assert!(heap.contains(&"xyz"));
    assert_eq!(heap.insert("jk"), Ok(Insertion::Duplicate));
    assert_eq!(heap.sort(), ["i", "de", "abc"]);
}

#[test]
fn test_duplicates_follow_ordering_not_equality() {
    // ordered by `rank` alone, but `PartialEq` also looks at `label`
    #[derive(Debug, PartialEq, Eq)]
    struct Ranked {
        rank: u8,
        label: &'static str,
    }

    impl PartialOrd for Ranked {
        fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Ranked {
        fn cmp(&self, other: &Self) -> core::cmp::Ordering {
            self.rank.cmp(&other.rank)
        }
    }

    impl Presence for Ranked {}

    let mut heap = MinHeap::with_options(HeapOptions::new().allow_duplicates(false));
    assert_eq!(heap.insert(Ranked { rank: 2, label: "a" }), Ok(Insertion::Inserted));
    assert!(heap.contains(&Ranked { rank: 2, label: "b" }));
    assert_eq!(heap.insert(Ranked { rank: 2, label: "b" }), Ok(Insertion::Duplicate));

    let report = heap.batch_insert([Ranked { rank: 1, label: "c" }, Ranked { rank: 2, label: "d" }]);
    assert_eq!(report.inserted(), 1);
    assert_eq!(report.skipped()[0].reason, SkipReason::Duplicate);
    assert_eq!(report.skipped()[0].value.label, "d");
    assert_eq!(heap.len(), 2);
    assert_eq!(heap.peek().map(|r| r.label), Some("c"));
}

#[test]
fn test_is_valid_detects_violation() {
    fn raw<D: Direction>(data: Vec<i32>) -> Heap<i32, D> {
        Heap { data, order: OrdTotalOrder, direction: D::default(), allow_duplicates: true }
    }

    assert!(!raw::<Min>(vec![5, 1, 9]).is_valid());
    assert!(!raw::<Max>(vec![5, 9, 1]).is_valid());
    assert!(raw::<Max>(vec![5, 1, 4]).is_valid());
    assert!(raw::<Min>(vec![1, 5, 4, 6]).is_valid());
    assert!(!raw::<Min>(vec![1, 5, 4, 2]).is_valid());
}

#[test]
fn test_clear_and_drain() {
    let mut heap: MinHeap<i32> = [5, 3].into();
    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);

    heap.batch_insert([4, 8, 1]);
    let mut drained: Vec<i32> = heap.drain().collect();
    drained.sort_unstable();
    assert_eq!(drained, [1, 4, 8]);
    assert!(heap.is_empty());
}

#[test]
fn test_to_vec_is_a_copy_in_heap_order() {
    let heap: MinHeap<i32> = [5, 3, 7].into();
    let mut arr = heap.to_vec();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[0], 3);
    arr.clear();
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.as_slice()[0], 3);
}

#[test]
fn test_append() {
    let mut a = MinHeap::with_options(HeapOptions::new().initial_data([1, 5]).allow_duplicates(false));
    let mut b: MinHeap<i32> = [5, 2, 9].into();

    let report = a.append(&mut b);
    assert_eq!(report.inserted(), 2);
    assert_eq!(report.skipped().len(), 1);
    assert!(b.is_empty());
    assert_eq!(a.sort(), [1, 2, 5, 9]);
}

#[test]
fn test_retain() {
    let mut heap: MaxHeap<i32> = (0..20).collect();
    heap.retain(|x| x % 3 == 0);
    assert!(heap.is_valid());
    assert_eq!(heap.into_sorted_vec(), [18, 15, 12, 9, 6, 3, 0]);
}

#[test]
fn test_extend() {
    let mut heap: MinHeap<i32> = MinHeap::new();
    heap.extend([3, 1]);
    heap.extend(&[2, 0]);
    assert!(heap.is_valid());
    assert_eq!(heap.into_vec().len(), 4);
}

#[test]
fn test_capacity() {
    let mut heap = MaxHeap::<u8>::with_capacity(16);
    assert!(heap.capacity() >= 16);
    heap.reserve(40);
    assert!(heap.capacity() >= 40);
    heap.insert(1).unwrap();
    heap.shrink_to_fit();
    assert!(heap.capacity() >= 1);

    let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
    let mut words = MinHeap::with_capacity_and_order(4, by_len);
    assert!(words.capacity() >= 4);
    words.insert("four").unwrap();
    words.insert("one").unwrap();
    assert_eq!(words.order()(&"ab", &"c"), core::cmp::Ordering::Greater);
    assert_eq!(words.peek(), Some(&"one"));
}

#[test]
fn test_clone_is_independent() {
    let mut a: MinHeap<i32> = [2, 1].into();
    let b = a.clone();
    a.extract();
    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 2);

    let mut c = MinHeap::new();
    c.clone_from(&b);
    assert_eq!(c.sort(), [1, 2]);
}

#[test]
fn test_debug() {
    let heap: MinHeap<i32> = [1].into();
    assert_eq!(format!("{heap:?}"), "[1]");
    assert_eq!(format!("{:?}", heap.iter()), "Iter([1])");
}

#[test]
fn test_large_descending_input() {
    let mut heap = MinHeap::new();
    for i in (1..=1000).rev() {
        heap.insert(i).unwrap();
    }
    assert_eq!(heap.len(), 1000);
    assert_eq!(heap.peek(), Some(&1));

    let mut heap = MaxHeap::new();
    for i in 1..=1000 {
        heap.insert(i).unwrap();
    }
    assert_eq!(heap.peek(), Some(&1000));
}

#[test]
fn test_panicking_order_leaves_heap_valid() {
    let calls = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&calls);
    let order = move |a: &i32, b: &i32| {
        counter.set(counter.get() + 1);
        if counter.get() == 12 {
            panic!("comparison budget exhausted");
        }
        a.cmp(b)
    };
    let mut heap =
        MinHeap::with_options(HeapOptions::new().order(order).allow_duplicates(false));

    // duplicate scans cost 0, 1, 2, 3 and 4 comparisons, so the sixth entry's
    // scan panics with five entries pushed
    let result = catch_unwind(AssertUnwindSafe(|| heap.batch_insert([9, 4, 7, 1, 8, 2, 6])));
    assert!(result.is_err());
    assert!(calls.get() > 12);
    assert_eq!(heap.len(), 5);
    assert!(heap.is_valid());
    assert_eq!(heap.sort(), [1, 4, 7, 8, 9]);
}
