/// Decimal precision for return calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Exchange calendar MIC used for trading-session lookups.
pub const DEFAULT_EXCHANGE_CALENDAR: &str = "XNYS";

/// Seconds a resolved trading-session query may be reused before it is
/// considered stale and eligible for refetch.
pub const SESSION_CACHE_TTL_SECS: u64 = 3600;

/// Upper bound on distinct session ranges kept in the cache.
pub const SESSION_CACHE_MAX_CAPACITY: u64 = 64;

/// Maximum simultaneous benchmark overlays on the dashboard view.
pub const MAX_BENCHMARKS_DASHBOARD: usize = 3;

/// Maximum simultaneous benchmark overlays on the standalone charting view.
pub const MAX_BENCHMARKS: usize = 10;

/// Character limit for a benchmark display label. Longer names keep
/// `BENCHMARK_LABEL_MAX_CHARS - 2` characters and gain a `...` suffix.
pub const BENCHMARK_LABEL_MAX_CHARS: usize = 21;

/// Prefix marking a composite symphony reference ticker, e.g.
/// `symphony:abc123`.
pub const SYMPHONY_TICKER_PREFIX: &str = "symphony:";

/// Fixed color palette for benchmark overlays. Assignment prefers the first
/// unused entry; once every entry is in use, colors cycle.
pub const BENCHMARK_COLOR_PALETTE: [&str; 10] = [
    "#2563EB", "#F97316", "#10B981", "#8B5CF6", "#EF4444", "#14B8A6", "#EAB308", "#EC4899",
    "#6366F1", "#84CC16",
];
