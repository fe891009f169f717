// Audio effects
// Robot voice and echo argument builders

pub mod types;

pub use types::EchoOption;

/// Robot voice via an asetrate/atempo filter chain
pub fn robot_effect(input_path: &str, output_path: &str) -> String {
    format!(
        "-i {} -af asetrate=11100,atempo=4/3,atempo=1/2,atempo=3/4 -o \"{}\"",
        input_path, output_path
    )
}

/// Echo with the preset selected by [`EchoOption`]
pub fn echo_effect(input_path: &str, output_path: &str, echo_option: EchoOption) -> String {
    let filter = echo_option.filter();
    log::debug!("Echo preset {:?}: {}", echo_option, filter);
    format!(
        "-i {} -filter_complex \"{}\" -o \"{}\"",
        input_path, filter, output_path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_robot_effect() {
        assert_eq!(
            robot_effect("in.wav", "out.wav"),
            "-i in.wav -af asetrate=11100,atempo=4/3,atempo=1/2,atempo=3/4 -o \"out.wav\""
        );
    }

    #[test]
    fn test_echo_effect_mountains() {
        assert_eq!(
            echo_effect("in.wav", "out.wav", EchoOption::Mountains),
            "-i in.wav -filter_complex \"aecho=0.8:0.9:500|1000:0.2|0.1\" -o \"out.wav\""
        );
    }

    #[test]
    fn test_echo_effect_indoor() {
        assert_eq!(
            echo_effect("in.wav", "out.wav", EchoOption::Indoor),
            "-i in.wav -filter_complex \"aecho=0.8:0.9:40|50|70:0.4|0.3|0.2\" -o \"out.wav\""
        );
    }
}
