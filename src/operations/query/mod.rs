mod is_simple;

pub use is_simple::IsSimpleCycle;
