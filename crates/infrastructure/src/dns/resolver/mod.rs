pub mod iterative;
mod state;

pub use iterative::IterativeResolver;
