// Audio format conversion
// Generic and bitrate-controlled conversion argument builders

mod codecs;

pub use codecs::{
    convert_to_aac, convert_to_ac3, convert_to_amr, convert_to_mp3, convert_to_ogg,
    convert_to_opus, convert_to_wav,
};

use crate::ext::output_extension;

/// Convert an audio file, letting ffmpeg infer settings from the output path
pub fn convert(input_path: &str, output_path: &str) -> String {
    format!("-i {} \"{}\"", input_path, output_path)
}

/// Convert with an explicit bitrate
/// The container format is taken from the output path's extension
pub fn convert_with_bitrate(input_path: &str, output_path: &str, bitrate: u32) -> String {
    let format = output_extension(output_path);
    log::debug!("Converting {} to {} at bitrate {}", input_path, format, bitrate);
    format!(
        "-i {} -f {} -ab {} \"{}\"",
        input_path, format, bitrate, output_path
    )
}
