use serde::{Deserialize, Serialize};

/// Limits applied by the wire decoder to every message it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct DecoderConfig {
    /// Maximum number of compression pointers followed while reading one name.
    #[serde(default = "default_max_pointer_depth")]
    pub max_pointer_depth: usize,

    /// Maximum uncompressed wire length of a name, terminator included.
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_pointer_depth: default_max_pointer_depth(),
            max_name_length: default_max_name_length(),
        }
    }
}

fn default_max_pointer_depth() -> usize {
    16
}

fn default_max_name_length() -> usize {
    255
}
