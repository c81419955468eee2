mod capacity;

pub use capacity::{CapacityError, CapacityService};
