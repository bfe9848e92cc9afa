pub mod avl_base;
pub mod avl_set;
