pub mod arith;
pub mod show;
