use super::{Cons, HList, IsEmpty, Nil, Nothing};

/// Compile-time list length.
pub trait Len {
    const LEN: usize;
}

impl Len for Nil {
    const LEN: usize = 0;
}

// A traversal that steps one past the last element lands on `Nothing`;
// the recursion bottoms out here as well as at `Nil`.
impl Len for Nothing {
    const LEN: usize = 0;
}

impl<H, T> Len for Cons<H, T>
where
    T: Len,
{
    const LEN: usize = 1 + T::LEN;
}

/// Value-level access to the constants, for code that holds an instance.
pub trait HListLen {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

impl<L> HListLen for L
where
    L: HList,
{
    fn len(&self) -> usize {
        <L as Len>::LEN
    }

    fn is_empty(&self) -> bool {
        <L as IsEmpty>::IS_EMPTY
    }
}
