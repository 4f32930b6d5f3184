//! Type-level unsigned integers, used as list indices.

use std::marker::PhantomData;

pub trait Nat {}

/// Index 0.
#[derive(Debug, Default, Clone, Copy)]
pub struct Zero;

/// The successor of `N`.
pub struct Succ<N: Nat>(PhantomData<N>);

impl Nat for Zero {}
impl<N: Nat> Nat for Succ<N> {}

pub type N0 = Zero;
pub type N1 = Succ<N0>;
pub type N2 = Succ<N1>;
pub type N3 = Succ<N2>;
pub type N4 = Succ<N3>;
pub type N5 = Succ<N4>;
pub type N6 = Succ<N5>;
pub type N7 = Succ<N6>;
pub type N8 = Succ<N7>;
pub type N9 = Succ<N8>;
