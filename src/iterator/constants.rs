// Subsets are tracked with a u64 bit mask, one bit per die
pub const MAX_DICE: usize = 63;
