pub mod errors;
pub mod report;
pub mod schedule;

pub use errors::{LinkError, LinkResult};
