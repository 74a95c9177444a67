//! Sorts that may reorder equal elements. None of them allocate on behalf of the elements,
//! introsort allocates its partition stack.

pub mod comb;
pub mod heap;
pub mod intro;
