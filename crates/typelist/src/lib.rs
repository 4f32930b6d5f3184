//! Compile-time heterogeneous type sequences.
//!
//! A sequence of types is encoded as nested [`Cons`] cells terminated by
//! [`Nil`]; an instance of such a type is an ordinary stack-allocated nested
//! record holding one value per listed type. Length, indexed access,
//! membership and concatenation are all resolved during type checking.

pub mod hlist;

pub use hlist::nat;
pub use hlist::{
    At, Concat, Cons, Contains, Find, HList, HListLen, Here, IsEmpty, ItemAt, Len, Nil, Nothing,
    Prepend, PushBack, PushFront, There,
};
