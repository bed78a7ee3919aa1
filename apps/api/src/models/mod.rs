pub mod record;

pub use record::{Employer, HiringLead, Record};
