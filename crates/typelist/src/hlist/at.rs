use super::nat::{Nat, Succ, Zero};
use super::Cons;

/// Access to the element at position `N`, both its type and its value.
///
/// There is deliberately no impl for `Nil`: indexing past the end is a
/// compile error, not a sentinel result.
pub trait At<N: Nat> {
    type Item;

    fn at(&self) -> &Self::Item;
    fn at_mut(&mut self) -> &mut Self::Item;
}

impl<H, T> At<Zero> for Cons<H, T> {
    type Item = H;

    fn at(&self) -> &H {
        &self.head
    }

    fn at_mut(&mut self) -> &mut H {
        &mut self.head
    }
}

impl<H, T, N> At<Succ<N>> for Cons<H, T>
where
    N: Nat,
    T: At<N>,
{
    type Item = T::Item;

    fn at(&self) -> &Self::Item {
        self.tail.at()
    }

    fn at_mut(&mut self) -> &mut Self::Item {
        self.tail.at_mut()
    }
}

/// The type at position `N` of list `L`.
pub type ItemAt<L, N> = <L as At<N>>::Item;
