/// Largest target count solved by exhaustive permutation search by default.
pub(crate) const DEFAULT_EXACT_THRESHOLD: usize = 3;
/// 8! = 40_320 candidate paths; anything above is refused as an option value.
pub(crate) const MAX_EXACT_THRESHOLD: usize = 8;

pub(crate) const ERR_NO_TARGETS: &str = "No target points provided.";
pub(crate) const ERR_INVALID_START: &str = "Start point has non-finite coordinates";
pub(crate) const ERR_INVALID_TARGET: &str = "Target point has non-finite coordinates";
