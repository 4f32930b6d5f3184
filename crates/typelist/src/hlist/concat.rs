use super::{Cons, HList, Nil};

/// Concatenation of two lists.
///
/// Joining two things has four distinct shapes, and each one lives in its
/// own impl so that no pair of them can ever overlap:
///
///   * `Cons ++ list` — elementwise splice (this trait, `Cons` impl);
///   * `Nil ++ list` — the right operand (this trait, `Nil` impl);
///   * `list ++ bare item` — [`PushBack`];
///   * `bare item ++ list` — [`PushFront`].
pub trait Concat<Rhs>
where
    Rhs: HList,
{
    type Out: HList;

    fn concat(self, rhs: Rhs) -> Self::Out;
}

impl<Rhs> Concat<Rhs> for Nil
where
    Rhs: HList,
{
    type Out = Rhs;

    fn concat(self, rhs: Rhs) -> Self::Out {
        rhs
    }
}

impl<H, Tail, Rhs> Concat<Rhs> for Cons<H, Tail>
where
    Tail: Concat<Rhs>,
    Rhs: HList,
{
    type Out = Cons<H, Tail::Out>;

    fn concat(self, rhs: Rhs) -> Self::Out {
        Cons { head: self.head, tail: self.tail.concat(rhs) }
    }
}

/// Appends a bare item behind the last element.
pub trait PushBack<I>: HList {
    type Out: HList;

    fn push_back(self, item: I) -> Self::Out;
}

impl<I> PushBack<I> for Nil {
    type Out = Cons<I, Nil>;

    fn push_back(self, item: I) -> Self::Out {
        Cons { head: item, tail: Nil }
    }
}

impl<I, H, Tail> PushBack<I> for Cons<H, Tail>
where
    Tail: PushBack<I>,
{
    type Out = Cons<H, Tail::Out>;

    fn push_back(self, item: I) -> Self::Out {
        Cons { head: self.head, tail: self.tail.push_back(item) }
    }
}

/// Inserts a bare item in front of the first element.
pub trait PushFront<H>: HList {
    fn push_front(self, head: H) -> Cons<H, Self> {
        Cons { head, tail: self }
    }
}

impl<H, L> PushFront<H> for L where L: HList {}

/// Prepending is concatenation with the single-element list on the left.
pub type Prepend<T, L> = <Cons<T, Nil> as Concat<L>>::Out;
