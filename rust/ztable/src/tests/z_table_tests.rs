use crate::error::ErrorKind;
use crate::z_table::ZTable;

#[test]
fn test_new_sorts_unsorted_input() {
    let table = ZTable::new(vec![5, 1, 3, 3, 9]);
    assert_eq!(table.as_slice(), &[1, 3, 3, 5, 9]);
}

#[test]
fn test_new_keeps_sorted_input() {
    let table = ZTable::new(vec![1, 3, 3, 5, 9]);
    assert_eq!(table.as_slice(), &[1, 3, 3, 5, 9]);
}

#[test]
fn test_new_preserves_duplicates() {
    let table = ZTable::new(vec![4, 4, 2, 4, 2]);
    assert_eq!(table.as_slice(), &[2, 2, 4, 4, 4]);
    assert_eq!(table.len(), 5);
}

#[test]
fn test_empty_and_default() {
    let empty = ZTable::empty();
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);
    assert_eq!(empty.min_height(), None);
    assert_eq!(empty.max_height(), None);
    assert_eq!(empty, ZTable::default());
}

#[test]
fn test_from_slice_is_independent_copy() {
    let mut source = vec![30, 10, 20];
    let table = ZTable::from_slice(&source);

    // Mutating or dropping the source must not affect the table.
    source.push(99);
    source[0] = 0;
    drop(source);

    assert_eq!(table.as_slice(), &[10, 20, 30]);
}

#[test]
fn test_conversions() {
    let from_vec: ZTable = vec![9, 1, 5].into();
    assert_eq!(from_vec.as_slice(), &[1, 5, 9]);

    let from_slice: ZTable = [9u32, 1, 5].as_slice().into();
    assert_eq!(from_slice, from_vec);

    let collected: ZTable = (1..=4).rev().collect();
    assert_eq!(collected.as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn test_from_sorted_accepts_non_decreasing() {
    let table = ZTable::from_sorted(vec![1, 3, 3, 5, 9]).unwrap();
    assert_eq!(table.as_slice(), &[1, 3, 3, 5, 9]);

    assert!(ZTable::from_sorted(Vec::new()).unwrap().is_empty());
    assert_eq!(ZTable::from_sorted(vec![7]).unwrap().len(), 1);
    assert_eq!(ZTable::from_sorted(vec![2, 2, 2]).unwrap().len(), 3);
}

#[test]
fn test_from_sorted_rejects_descent() {
    let err = ZTable::from_sorted(vec![1, 3, 2]).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::InvalidArgument { name, .. } if name == "heights"
    ));

    let kind = ZTable::from_sorted(vec![5, 4]).unwrap_err().into_kind();
    assert!(matches!(kind, ErrorKind::InvalidArgument { .. }));
}

#[test]
fn test_contains() {
    let table = ZTable::new(vec![1, 3, 3, 5, 9]);
    assert!(table.contains(1));
    assert!(table.contains(3));
    assert!(table.contains(9));
    assert!(!table.contains(0));
    assert!(!table.contains(4));
    assert!(!table.contains(10));
    assert!(!ZTable::empty().contains(0));
}

#[test]
fn test_min_max_height() {
    let table = ZTable::new(vec![5, 1, 9]);
    assert_eq!(table.min_height(), Some(1));
    assert_eq!(table.max_height(), Some(9));

    let single = ZTable::new(vec![42]);
    assert_eq!(single.min_height(), Some(42));
    assert_eq!(single.max_height(), Some(42));
}

#[test]
fn heights_iterator_yields_ascending() {
    let table = ZTable::new(vec![9, 5, 1, 3, 3]);
    let collected: Vec<u32> = table.heights().collect();
    assert_eq!(collected, vec![1, 3, 3, 5, 9]);
    assert_eq!(table.heights().len(), 5);
    assert_eq!(ZTable::empty().heights().count(), 0);
}

#[test]
fn heights_iterator_supports_double_ended_iteration() {
    let table = ZTable::new(vec![1, 3, 5]);
    let mut it = table.heights();
    assert_eq!(it.next(), Some(1));
    assert_eq!(it.next_back(), Some(5));
    assert_eq!(it.next(), Some(3));
    assert_eq!(it.next_back(), None);
    assert_eq!(it.next(), None);
}

#[test]
fn into_iterator_for_reference() {
    let table = ZTable::new(vec![2, 4, 6]);
    let mut sum = 0u32;
    for z in &table {
        sum += z;
    }
    assert_eq!(sum, 12);
}

#[test]
fn debug_format_lists_heights() {
    let table = ZTable::new(vec![5, 1, 3]);
    assert_eq!(format!("{table:?}"), "[1, 3, 5]");
    assert_eq!(format!("{:?}", ZTable::empty()), "[]");
}

#[test]
fn equality_ignores_supply_order() {
    let a = ZTable::new(vec![3, 1, 2]);
    let b = ZTable::new(vec![1, 2, 3]);
    assert_eq!(a, b);
    assert_eq!(a, a.clone());

    let c = ZTable::new(vec![1, 2, 4]);
    assert_ne!(a, c);
    assert_ne!(a, ZTable::empty());
}

#[test]
fn heap_size_bytes_tracks_storage() {
    assert_eq!(ZTable::empty().heap_size_bytes(), 0);

    let table = ZTable::new(vec![1, 2, 3, 4]);
    assert!(table.heap_size_bytes() >= 4 * std::mem::size_of::<u32>());
}

#[test]
fn invariant_checks_pass_on_constructed_tables() {
    for table in [
        ZTable::empty(),
        ZTable::new(vec![7]),
        ZTable::new(vec![9, 1, 5, 5, 3]),
        ZTable::from_sorted(vec![0, 0, 1, u32::MAX]).unwrap(),
    ] {
        table.check_basic_invariants();
        table.check_full_invariants();
    }
}
