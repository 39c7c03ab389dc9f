//! Internal testing utilities

use std::cell::Cell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::comparer::Comparer;

//  SpyCount
//
//  A counter of the number of instances of elements.
pub struct SpyCount(AtomicUsize);

impl SpyCount {
    pub fn zero() -> Self { SpyCount(AtomicUsize::new(0)) }

    pub fn get(&self) -> usize { self.0.load(Ordering::Relaxed) }

    fn decrement(&self) { self.0.fetch_sub(1, Ordering::Relaxed); }

    fn increment(&self) { self.0.fetch_add(1, Ordering::Relaxed); }
}

//  Spy Element
//
//  An element tracking the number of instances, helpful to ensure proper drop.
pub struct SpyElement<'a> {
    count: &'a SpyCount,
}

impl<'a> SpyElement<'a> {
    pub fn new(count: &'a SpyCount) -> Self {
        count.increment();
        SpyElement { count }
    }
}

impl<'a> Drop for SpyElement<'a> {
    fn drop(&mut self) {
        self.count.decrement();
    }
}

//  A value which may panic on drop.
#[derive(Debug, Eq, Hash, PartialEq)]
pub struct PanickyDrop<T>(T, bool);

impl<T> PanickyDrop<T> {
    //  Creates a normal instance.
    pub fn new(value: T) -> Self { Self(value, false) }

    //  Creates a panicky instance.
    pub fn panicky(value: T) -> Self { Self(value, true) }
}

impl<T> Drop for PanickyDrop<T> {
    fn drop(&mut self) { if self.1 { panic!("Oh No!") } }
}

//  A Comparer ignoring ASCII case.
#[derive(Clone, Copy, Debug, Default)]
pub struct CaseInsensitive;

impl Comparer<String> for CaseInsensitive {
    fn equals(&self, left: &String, right: &String) -> bool { left.eq_ignore_ascii_case(right) }

    fn hash(&self, value: &String) -> u64 { hash_of(&value.to_ascii_lowercase()) }
}

//  A Comparer hashing all values alike, so that all end up in a single chain.
#[derive(Clone, Copy, Debug, Default)]
pub struct Colliding;

impl<T: Eq> Comparer<T> for Colliding {
    fn equals(&self, left: &T, right: &T) -> bool { left == right }

    fn hash(&self, _: &T) -> u64 { 42 }
}

//  A Comparer counting the number of hashes computed.
#[derive(Debug, Default)]
pub struct Counting {
    hashes: Cell<usize>,
}

impl Counting {
    pub fn hashes(&self) -> usize { self.hashes.get() }
}

impl<T: Eq + Hash> Comparer<T> for Counting {
    fn equals(&self, left: &T, right: &T) -> bool { left == right }

    fn hash(&self, value: &T) -> u64 {
        self.hashes.set(self.hashes.get() + 1);
        hash_of(value)
    }
}

//  A Comparer yielding hashes with the top bit set.
#[derive(Clone, Copy, Debug, Default)]
pub struct HighBits;

impl Comparer<u32> for HighBits {
    fn equals(&self, left: &u32, right: &u32) -> bool { left == right }

    fn hash(&self, value: &u32) -> u64 { u64::MAX - *value as u64 }
}

fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
