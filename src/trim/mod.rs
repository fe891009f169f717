// Audio trimming
// Cuts a section out of a file by second offsets or HH:MM:SS stamps

mod timecode;

pub use timecode::{Timecode, TimecodeError};

/// Trim using offsets in whole seconds
pub fn trim(input_path: &str, output_path: &str, start: u32, end: u32) -> String {
    format!("-ss {} -i {} \"{}\" -t {}", start, input_path, output_path, end)
}

/// Trim using `HH:MM:SS` start and duration stamps
///
/// Example: start `"00:01:00"` with duration `"00:00:30"` cuts the 30
/// seconds beginning one minute in.
pub fn trim_timestamp(input_path: &str, output_path: &str, start: &str, duration: &str) -> String {
    format!(
        "-ss {} -i {} -o \"{}\" -to {}",
        start, input_path, output_path, duration
    )
}

/// Trim using typed timecodes; formats them and delegates to [`trim_timestamp`]
pub fn trim_timecode(
    input_path: &str,
    output_path: &str,
    start: Timecode,
    duration: Timecode,
) -> String {
    trim_timestamp(
        input_path,
        output_path,
        &start.to_string(),
        &duration.to_string(),
    )
}
