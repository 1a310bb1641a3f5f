use itertools::{izip, multizip};
use lockstep::prelude::*;
use lockstep::sequence::from_iter;
use lockstep::{zip, zip_exact, zip_pair, PairZip, PairZipIterator};
use proptest::prelude::*;

#[test]
fn pair_drops_the_longer_tail() {
    let a = [1, 2, 3];
    let b = ["a", "b"];
    let out: Vec<_> = zip_pair(&a, &b).iter().map(|(n, s)| (*n, *s)).collect();
    assert_eq!(out, [(1, "a"), (2, "b")]);
}

#[test]
fn three_way_stops_at_the_shortest() {
    let a = [1, 2];
    let b = [10, 20];
    let c = [100];
    let out: Vec<_> = zip((&a, &b, &c))
        .iter()
        .map(|(a, b, c)| (*a, *b, *c))
        .collect();
    assert_eq!(out, [(1, 10, 100)]);
}

#[test]
fn no_sequences_yields_nothing() {
    let mut zipped = zip(());
    let end = zipped.end();
    let pos = zipped.begin();
    assert!(pos == end);
    assert_eq!(zipped.iter().count(), 0);
}

#[test]
fn pull_protocol_writes_through_mutable_bindings() {
    let weights = vec![2, 3, 4];
    let mut totals = vec![1, 1, 1, 1];

    let mut zipped: PairZip<_, _> = zip_pair(&weights, &mut totals);
    let end = zipped.end();
    let mut pos: PairZipIterator<'_, &Vec<i32>, &mut Vec<i32>> = zipped.begin();
    while pos != end {
        let (w, t) = pos.current();
        *t *= *w;
        pos.advance();
    }

    assert_eq!(totals, [2, 3, 4, 1]);
    assert_eq!(weights, [2, 3, 4]);
}

#[test]
fn current_twice_reads_the_same_tuple() {
    let a = [7, 8];
    let mut b = vec!['x', 'y'];
    let mut zipped = (&a, &mut b).zip();
    let mut pos = zipped.begin();
    pos.advance();

    let first = {
        let (a, b) = pos.current();
        (*a, *b)
    };
    let second = {
        let (a, b) = pos.current();
        (*a, *b)
    };
    assert_eq!(first, (8, 'y'));
    assert_eq!(first, second);
}

#[test]
fn owned_sequences_can_be_recovered() {
    let mut zipped = (vec![1, 2, 3], from_iter(0..3)).zip();
    for (slot, i) in &mut zipped {
        *slot += i * 100;
    }
    let (values, _) = zipped.into_inner();
    assert_eq!(values, [1, 102, 203]);
}

#[test]
fn exact_mode_is_separate_from_truncation() {
    let a = [1, 2, 3];
    let b = [4, 5];

    assert_eq!(zip((&a, &b)).iter().count(), 2);

    let err = zip_exact((&a, &b)).unwrap_err();
    assert_eq!(err.index(), 1);
    assert_eq!(err.expected(), 3);
    assert_eq!(err.found(), 2);
    assert_eq!(err.to_string(), "sequence 1 has length 2, expected 3");

    let c = [6, 7, 8];
    let pairs: Vec<_> = zip_exact((&a, &c)).unwrap().iter().collect();
    assert_eq!(pairs, [(&1, &6), (&2, &7), (&3, &8)]);
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    let one = [1u8];
    let none: [u8; 0] = [];
    let err = zip_exact((&one, &none)).unwrap_err();
    assert_error(&err);
}

#[test]
fn arrays_of_sequences_yield_arrays() {
    let rows = [vec![1, 2, 3], vec![4, 5, 6], vec![7, 8]];
    let columns: Vec<[i32; 3]> = [&rows[0], &rows[1], &rows[2]]
        .zip()
        .iter()
        .map(|column| column.map(|n| *n))
        .collect();
    assert_eq!(columns, [[1, 4, 7], [2, 5, 8]]);
}

#[test]
fn matches_itertools_multizip() {
    let a = [1, 2, 3, 4];
    let b = vec!["w", "x", "y"];
    let c = [1.0, 2.0, 3.0, 4.0, 5.0];

    let ours: Vec<_> = zip((&a, &b, &c)).iter().collect();
    let theirs: Vec<_> = multizip((&a, &b, &c)).collect();
    assert_eq!(ours, theirs);
}

proptest! {
    #[test]
    fn yields_min_length_tuples(
        a in prop::collection::vec(any::<u8>(), 0..32),
        b in prop::collection::vec(any::<i64>(), 0..32),
        c in prop::collection::vec(any::<bool>(), 0..32),
    ) {
        let expected = a.len().min(b.len()).min(c.len());
        let mut zipped = zip((&a, &b, &c));
        prop_assert_eq!(zipped.iter().len(), expected);
        prop_assert_eq!(zipped.iter().count(), expected);
    }

    #[test]
    fn kth_tuple_holds_kth_elements(
        a in prop::collection::vec(any::<u16>(), 0..32),
        b in prop::collection::vec(any::<u16>(), 0..32),
    ) {
        let ours: Vec<_> = zip_pair(&a, &b).iter().collect();
        let theirs: Vec<_> = izip!(&a, &b).collect();
        prop_assert_eq!(&ours, &theirs);
        for (k, (x, y)) in ours.into_iter().enumerate() {
            prop_assert_eq!(*x, a[k]);
            prop_assert_eq!(*y, b[k]);
        }
    }

    #[test]
    fn any_empty_sequence_yields_nothing(
        a in prop::collection::vec(any::<u8>(), 0..16),
        b in prop::collection::vec(any::<u8>(), 0..16),
    ) {
        let empty: Vec<u8> = Vec::new();
        let mut zipped = zip((&a, &empty, &b));
        let end = zipped.end();
        prop_assert!(zipped.begin() == end);
        prop_assert_eq!(zipped.iter().next(), None);
    }

    #[test]
    fn writes_land_in_the_source(
        mut data in prop::collection::vec(any::<u32>(), 0..32),
        delta in prop::collection::vec(0u32..1000, 0..32),
    ) {
        let before = data.clone();
        for (slot, d) in &mut zip((&mut data, &delta)) {
            *slot = slot.wrapping_add(*d);
        }
        for (k, value) in data.iter().enumerate() {
            let expected = match delta.get(k) {
                Some(d) => before[k].wrapping_add(*d),
                None => before[k],
            };
            prop_assert_eq!(*value, expected);
        }
    }

    #[test]
    fn exact_accepts_only_equal_lengths(
        a in prop::collection::vec(any::<u8>(), 0..8),
        b in prop::collection::vec(any::<u8>(), 0..8),
    ) {
        let result = zip_exact((&a, &b));
        prop_assert_eq!(result.is_ok(), a.len() == b.len());
    }
}
