#![no_std]

use lockstep::prelude::*;
use lockstep::sequence::from_iter;
use lockstep::{zip, zip_exact, zip_pair};

// These tests ensure that the traits provided by `lockstep` work in a no std environment.

#[test]
fn zip_pair_slices() {
    let a = [1, 2, 3];
    let b = [4, 5];
    let mut out = [0; 3];
    for ((x, y), slot) in zip_pair(&a, &b).iter().zip(out.iter_mut()) {
        *slot = x + y;
    }
    assert_eq!(out, [5, 7, 0]);
}

#[test]
fn zip_tuple_with_mutable_array() {
    let src = [1u8, 2, 3];
    let mut dst = [0u8; 3];
    for (s, d) in &mut (&src, &mut dst).zip() {
        *d = s * 3;
    }
    assert_eq!(dst, [3, 6, 9]);
}

#[test]
fn zip_array_3() {
    let a = [1, 1];
    let b = [2, 2];
    let c = [3, 3];
    let mut zipped = [&a, &b, &c].zip();
    let mut iter = zipped.iter();

    assert_eq!(iter.next(), Some([&1, &2, &3]));
    assert_eq!(iter.next(), Some([&1, &2, &3]));
    assert_eq!(iter.next(), None);
}

#[test]
fn zip_from_iter() {
    let letters = ['a', 'b', 'c'];
    let mut zipped = zip((from_iter(0..2), &letters));
    let end = zipped.end();
    let mut pos = zipped.begin();
    let mut seen = 0;
    while pos != end {
        let (i, l) = pos.current();
        assert_eq!(letters[*i], *l);
        seen += 1;
        pos.advance();
    }
    assert_eq!(seen, 2);
}

#[test]
fn zip_empty() {
    let mut zipped = zip(());
    assert_eq!(zipped.iter().len(), 0);
}

#[test]
fn zip_exact_mismatch() {
    let a = [1, 2];
    let b = [1];
    assert!(zip_exact((&a, &b)).is_err());
}
