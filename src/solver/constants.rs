// How many evaluations pass between deadline checks
pub const DEADLINE_CHECK_INTERVAL: u64 = 1024;
