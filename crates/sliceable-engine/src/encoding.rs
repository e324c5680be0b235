use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Label of the encoding a text was constructed from.
///
/// Text is always held as UTF-8 in memory; the label is carried through
/// slicing so a sliced value reports the same encoding as its source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Encoding(Cow<'static, str>);

impl Encoding {
    pub const UTF_8: Encoding = Encoding(Cow::Borrowed("UTF-8"));

    pub fn new(label: impl Into<String>) -> Self {
        Encoding(Cow::Owned(label.into()))
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::UTF_8
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Encoding {
    fn from(label: &str) -> Self {
        Encoding::new(label)
    }
}
