pub mod intersect;
pub mod maps;
pub mod multi;

pub use intersect::{Intersection, intersect, intersect_into, intersect_iter};
pub use maps::{intersect_btree_maps, intersect_btree_sets};
pub use multi::intersect_all;
