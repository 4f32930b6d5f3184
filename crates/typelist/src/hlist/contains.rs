use std::any::TypeId;
use std::marker::PhantomData;

use super::{Cons, Nil};

/// Membership by type identity, head first.
pub trait Contains {
    fn contains<T: 'static>() -> bool;
}

impl Contains for Nil {
    fn contains<T: 'static>() -> bool {
        false
    }
}

impl<H, Tail> Contains for Cons<H, Tail>
where
    H: 'static,
    Tail: Contains,
{
    fn contains<T: 'static>() -> bool {
        TypeId::of::<H>() == TypeId::of::<T>() || Tail::contains::<T>()
    }
}

/// Search index: the sought type is the head.
#[derive(Debug, Default, Clone, Copy)]
pub struct Here;

/// Search index: the sought type is somewhere in the tail.
pub struct There<I>(PhantomData<I>);

/// Membership witness: implemented exactly when `T` occurs in the list,
/// with `I` encoding where it was found. Asking for an absent type does
/// not compile.
pub trait Find<T, I> {
    fn find(&self) -> &T;
    fn find_mut(&mut self) -> &mut T;
}

impl<T, Tail> Find<T, Here> for Cons<T, Tail> {
    fn find(&self) -> &T {
        &self.head
    }

    fn find_mut(&mut self) -> &mut T {
        &mut self.head
    }
}

impl<T, H, Tail, I> Find<T, There<I>> for Cons<H, Tail>
where
    Tail: Find<T, I>,
{
    fn find(&self) -> &T {
        self.tail.find()
    }

    fn find_mut(&mut self) -> &mut T {
        self.tail.find_mut()
    }
}
