pub mod estimate;
pub mod ng;

pub use estimate::{aggregate, estimate, AggregateResult};
