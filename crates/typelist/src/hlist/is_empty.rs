use super::{Cons, Nil, Nothing};

/// The stop test every recursive operation consults.
pub trait IsEmpty {
    const IS_EMPTY: bool;
}

impl IsEmpty for Nil {
    const IS_EMPTY: bool = true;
}

// The sentinel is not a list at all, so in particular it is not the empty
// list.
impl IsEmpty for Nothing {
    const IS_EMPTY: bool = false;
}

impl<H, T> IsEmpty for Cons<H, T> {
    const IS_EMPTY: bool = false;
}
