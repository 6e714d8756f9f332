/// Observable lifecycle of a `RecordWriter`.
///
/// ```text
/// Idle ──write──▶ Recording ──end_record──▶ RecordBoundary
///                     ▲                          │
///                     └──────────write───────────┤
///                                                └──complete──▶ Complete
/// ```
///
/// `Complete` is not terminal: any write resumes `Recording`.
/// `reset` returns to `Idle` from every state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriterState {
    #[default]
    Idle,
    Recording,
    RecordBoundary,
    Complete,
}

impl WriterState {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriterState::Idle => "idle",
            WriterState::Recording => "recording",
            WriterState::RecordBoundary => "record_boundary",
            WriterState::Complete => "complete",
        }
    }
}

/// Footer values `complete` wrote, handed back for logging and telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamFooter {
    pub total_records: i64,
    pub checksum: u32,
}
