// Fixed codec targets
// One builder per supported output format, each with its own flag set

/// Convert any audio file to AMR (narrowband, 8 kHz mono)
pub fn convert_to_amr(input_path: &str, output_path: &str) -> String {
    format!(
        "-i {} -codec amr_nb -ar 8000 -ac 1 -ab 32 \"{}\"",
        input_path, output_path
    )
}

/// Convert any audio file to OGG
pub fn convert_to_ogg(input_path: &str, output_path: &str) -> String {
    format!("-i {} -acodec libvorbis \"{}\"", input_path, output_path)
}

/// Convert any audio file to MP3
pub fn convert_to_mp3(input_path: &str, output_path: &str) -> String {
    format!("-i {} -acodec libmp3lame \"{}\"", input_path, output_path)
}

/// Convert any audio file to AC3
pub fn convert_to_ac3(input_path: &str, output_path: &str) -> String {
    format!("-i {} -acodec ac3 \"{}\"", input_path, output_path)
}

/// Convert any audio file to OPUS
pub fn convert_to_opus(input_path: &str, output_path: &str) -> String {
    format!("-i {} -acodec libopus \"{}\"", input_path, output_path)
}

/// Convert any audio file to WAV (8-bit PCM at 22.05 kHz)
pub fn convert_to_wav(input_path: &str, output_path: &str) -> String {
    format!(
        "-i {} -acodec pcm_u8 -ar 22050 \"{}\"",
        input_path, output_path
    )
}

/// Convert any audio file to AAC
pub fn convert_to_aac(input_path: &str, output_path: &str) -> String {
    format!("-i {} -acodec aac \"{}\"", input_path, output_path)
}
