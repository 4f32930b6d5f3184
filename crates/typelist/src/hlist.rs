pub mod nat;

mod at;
pub use at::{At, ItemAt};

mod concat;
pub use concat::{Concat, Prepend, PushBack, PushFront};

mod contains;
pub use contains::{Contains, Find, Here, There};

mod is_empty;
pub use is_empty::IsEmpty;

mod len;
pub use len::{HListLen, Len};

/// What the empty list's `Head` and `Tail` resolve to: not a list, and
/// uninhabited, so stepping past the end can never produce a value.
pub type Nothing = std::convert::Infallible;

/// The empty list, a valid sequence of length zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nil;

/// A non-empty list: one stored value plus the rest of the list, inline.
///
/// The fields are public so a value is assigned and read the same way the
/// type is built: by walking `tail` links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cons<H, T> {
    pub head: H,
    pub tail: T,
}

/// Implemented by `Nil` and `Cons` only; the structural split between the
/// two impls is what terminates every recursive operation in this module.
pub trait HList: Len + IsEmpty + Sized {
    type Head;
    type Tail;
}

impl HList for Nil {
    type Head = Nothing;
    type Tail = Nothing;
}

impl<H, T> HList for Cons<H, T>
where
    T: HList,
{
    type Head = H;
    type Tail = T;
}

/// The list type of the given element types, in order.
#[macro_export]
macro_rules! HList {
    () => { $crate::hlist::Nil };
    ($head:ty $(, $($rest:tt)*)?) => {
        $crate::hlist::Cons<$head, $crate::HList![$($($rest)*)?]>
    };
}

/// A list value holding the given expressions, in order.
#[macro_export]
macro_rules! hlist {
    () => { $crate::hlist::Nil };
    ($head:expr $(, $($rest:tt)*)?) => {
        $crate::hlist::Cons {
            head: $head,
            tail: $crate::hlist![$($($rest)*)?],
        }
    };
}

/// Destructures a list value, one pattern per position.
#[macro_export]
macro_rules! hlist_pat {
    () => { $crate::hlist::Nil };
    ($head:pat $(, $($rest:tt)*)?) => {
        $crate::hlist::Cons {
            head: $head,
            tail: $crate::hlist_pat![$($($rest)*)?],
        }
    };
}
