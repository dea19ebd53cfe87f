pub mod stack;

pub use stack::WrapStack;
