//! The Slot of a HashSet.

//  The hash codes only use the lower 31 bits.
pub const LOWER_31_BIT_MASK: u64 = 0x7FFF_FFFF;

//  A Slot.
//
//  A vacant slot was either never written to, or was reclaimed; its `next` then links the free list.
#[derive(Debug)]
pub struct Slot<T> {
    pub hash_code: u32,
    pub next: Option<usize>,
    pub value: Option<T>,
}

impl<T> Slot<T> {
    //  Creates a vacant slot, linked to nothing.
    pub fn vacant() -> Self { Self { hash_code: 0, next: None, value: None } }
}
