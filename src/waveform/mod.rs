// Waveform amplitude extraction
// Streams raw mono pcm_s16le samples to stdout for rendering a waveform

use std::num::NonZeroU32;

/// Sample rate the resample computation is anchored to
const BASE_SAMPLE_RATE: u64 = 44_100;

/// Dump amplitude data as a raw pcm_s16le stream on stdout
/// The caller decodes the bytes; see [`resample_rate`] for the rate
pub fn amplitude_values(input_path: &str, aresample: u32) -> String {
    format!(
        "-i \"{}\" -vn -ac 1 -filter:a aresample={} -map 0:a -c:a pcm_s16le -f data -",
        input_path, aresample
    )
}

/// Resample rate that yields roughly one sample per pixel of waveform width
/// Computed as 44100 * duration / width with integer truncation
pub fn resample_rate(duration_secs: u32, waveform_width: NonZeroU32) -> u32 {
    (BASE_SAMPLE_RATE * u64::from(duration_secs) / u64::from(waveform_width.get())) as u32
}
