/// Concurrency used when neither the config nor the OS provides a value
pub const DEFAULT_MAX_CONCURRENCY: usize = 4;
/// Option key for the peak finder's threshold
pub const THRESHOLD_OPTION: &str = "threshold";
