pub mod abs;
pub mod demo;
pub mod matrix;
pub mod reflect;
pub mod session;
pub mod widen;

#[cfg(test)]
mod abs_tests;
