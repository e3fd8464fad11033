pub mod fixtures;
pub mod mocks;

pub use mocks::MockRunner;
