// ffcmd - FFmpeg argument builder for audio processing
// Module declarations and crate-level re-exports

pub mod concat;
pub mod convert;
pub mod effects;
pub mod filters;
pub mod trim;
pub mod waveform;

mod ext;

pub use concat::combine_files;
pub use convert::{
    convert, convert_to_aac, convert_to_ac3, convert_to_amr, convert_to_mp3, convert_to_ogg,
    convert_to_opus, convert_to_wav, convert_with_bitrate,
};
pub use effects::{echo_effect, robot_effect, EchoOption};
pub use filters::{remove_noise, remove_silence, remove_vocal};
pub use trim::{trim, trim_timecode, trim_timestamp, Timecode, TimecodeError};
pub use waveform::{amplitude_values, resample_rate};
