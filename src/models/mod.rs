pub mod activities;
pub mod values;

pub use activities::{Activity, ActivityRegistry, DuplicateActivity};
pub use values::{ActivityName, Email};
