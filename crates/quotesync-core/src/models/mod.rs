mod record;
mod status;
mod sync_outcome;

pub use record::Record;
pub use status::{Severity, StatusReport};
pub use sync_outcome::{SyncOutcome, SyncReport};
