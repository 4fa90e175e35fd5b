use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Test size bucket a run can be restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestSize {
    Small,
    Medium,
    Large,
}

impl TestSize {
    pub const ALL: [TestSize; 3] = [TestSize::Small, TestSize::Medium, TestSize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            TestSize::Small => "small",
            TestSize::Medium => "medium",
            TestSize::Large => "large",
        }
    }
}

impl FromStr for TestSize {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TestSize::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for TestSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
