// Echo preset definitions
// Parameter sets for the aecho filter

use serde::{Deserialize, Serialize};

/// Echo ambience selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EchoOption {
    Indoor,    // Tight reflections, short delays
    Mountains, // Long delays, faint returns
}

impl EchoOption {
    /// aecho parameter string for this preset
    /// Anything that is not `Mountains` falls back to the indoor preset
    pub fn filter(self) -> &'static str {
        match self {
            EchoOption::Mountains => "aecho=0.8:0.9:500|1000:0.2|0.1",
            _ => "aecho=0.8:0.9:40|50|70:0.4|0.3|0.2",
        }
    }
}
