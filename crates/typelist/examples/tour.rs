//! Walks through the type-level operations and the nested value storage.
//!
//! Run with `RUST_LOG=info cargo run --example tour`.

use std::any::type_name;

use typelist::nat::{N0, N6};
use typelist::{hlist, Concat, Contains, ItemAt, Len, Nil, Prepend};

type List = typelist::HList![f32, f32, f64, i32];
type List2 = typelist::HList![String, char, *mut *mut f64];

type Appended = <List as Concat<List2>>::Out;
type Prepended = Prepend<*mut *mut i32, List2>;

fn main() {
    let _ = pretty_env_logger::try_init_timed();

    log::info!("empty list length: {}", <Nil as Len>::LEN);
    log::info!(
        "appended: last item is {} [length: {}]",
        type_name::<ItemAt<Appended, N6>>(),
        <Appended as Len>::LEN,
    );
    log::info!(
        "prepended: first item is {} [length: {}]",
        type_name::<ItemAt<Prepended, N0>>(),
        <Prepended as Len>::LEN,
    );

    log::info!(
        "does List contain *mut *mut i32? {}",
        <List as Contains>::contains::<*mut *mut i32>()
    );
    log::info!(
        "does Prepended contain *mut *mut i32? {}",
        <Prepended as Contains>::contains::<*mut *mut i32>()
    );

    let mut list: typelist::HList![i32, f64, char, String, *const i32] =
        hlist![5, 20.22, 'c', "text".to_owned(), std::ptr::null()];
    list.tail.tail.tail.tail.head = &list.head;

    log::info!("{}", list.head);
    log::info!("{}", list.tail.head);
    log::info!("{}", list.tail.tail.head);
    log::info!("{}", list.tail.tail.tail.head);
    log::info!("{}", unsafe { *list.tail.tail.tail.tail.head });
}
