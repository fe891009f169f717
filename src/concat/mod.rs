// Two-file concatenation
// Joins a pair of audio files into one output

use crate::ext::output_extension;

/// Concatenate two audio files
/// The `-c:a` codec token is taken from the output path's extension
pub fn combine_files(input_path1: &str, input_path2: &str, output_path: &str) -> String {
    let codec = output_extension(output_path);
    log::debug!("Concatenating {} and {} with codec {}", input_path1, input_path2, codec);
    format!(
        "-i {} -i {} -filter_complex concat=n=3:v=0:a=1 -c:a {} -vn -o \"{}\"",
        input_path1, input_path2, codec, output_path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_files() {
        assert_eq!(
            combine_files("a.wav", "b.wav", "out.mp3"),
            "-i a.wav -i b.wav -filter_complex concat=n=3:v=0:a=1 -c:a mp3 -vn -o \"out.mp3\""
        );
    }

    #[test]
    fn test_combine_files_no_extension() {
        // Degenerate output path: the whole path becomes the codec token
        assert_eq!(
            combine_files("a.wav", "b.wav", "merged"),
            "-i a.wav -i b.wav -filter_complex concat=n=3:v=0:a=1 -c:a merged -vn -o \"merged\""
        );
    }
}
