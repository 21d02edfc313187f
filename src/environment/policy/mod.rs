//! Policy trait and baseline implementations.

pub mod constant;
pub mod random;
pub mod trait_;

pub use constant::ConstantPolicy;
pub use random::RandomPolicy;
pub use trait_::Policy;
