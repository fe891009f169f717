// Audio filters
// Noise, silence, and vocal removal argument builders

/// Band-pass the audio between a highpass and lowpass cutoff to cut noise
pub fn remove_noise(input_path: &str, output_path: &str, highpass: u32, lowpass: u32) -> String {
    format!(
        "-i {} -af \"highpass=f={}, lowpass=f={}\" \"{}\"",
        input_path, highpass, lowpass, output_path
    )
}

/// Strip leading silence below -50 dB
pub fn remove_silence(input_path: &str, output_path: &str) -> String {
    format!(
        "-i {} -af silenceremove=1:0:-50dB -o \"{}\"",
        input_path, output_path
    )
}

/// Cancel center-panned vocals by inverting one channel and downmixing
pub fn remove_vocal(input_path: &str, output_path: &str) -> String {
    format!(
        "-i {} -af pan=\"stereo|c0=c0|c1=-1*c1\" -ac 1 -o \"{}\"",
        input_path, output_path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_noise() {
        assert_eq!(
            remove_noise("in.wav", "out.wav", 200, 3000),
            "-i in.wav -af \"highpass=f=200, lowpass=f=3000\" \"out.wav\""
        );
    }

    #[test]
    fn test_remove_silence() {
        assert_eq!(
            remove_silence("in.wav", "out.wav"),
            "-i in.wav -af silenceremove=1:0:-50dB -o \"out.wav\""
        );
    }

    #[test]
    fn test_remove_vocal() {
        assert_eq!(
            remove_vocal("in.wav", "out.wav"),
            "-i in.wav -af pan=\"stereo|c0=c0|c1=-1*c1\" -ac 1 -o \"out.wav\""
        );
    }
}
