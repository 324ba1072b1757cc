//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet.

pub struct DebugFlags {
    /// Emit detailed snapshot serialization/deserialization logs.
    pub print_serde: bool,
    /// Emit per-bin volumes and the value-area search result for each profile.
    pub print_profile_details: bool,
    /// Emit one line per observation dropped by the summary builder (unknown indicators included).
    pub print_summary_skips: bool,
    /// Emit timings for batch (multi-ticker) level analysis.
    pub print_batch_timings: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_serde: false,
    print_profile_details: false,
    print_summary_skips: false,
    print_batch_timings: false,
};
