#[macro_use]
extern crate quickcheck_macros;

#[path = "../../src/test/quick.rs"]
mod quick;

mod ordered_set;

pub(crate) use quick::Op;
