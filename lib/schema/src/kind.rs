use scalescore_core::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Score variant produced for each respondent
///
/// `Hundred` and `Pomp` are the same computation (percent of maximum
/// possible) under two names; both need a response range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ScoreKind {
    /// Prorated sum: mean of answered items times the full item count
    Sum,
    /// Mean of answered items
    Mean,
    /// Mean rescaled from the response range onto 0-100
    Hundred,
    /// Percent of maximum possible; identical to `Hundred`
    #[default]
    Pomp,
}

impl ScoreKind {
    pub const ALL: [ScoreKind; 4] = [ScoreKind::Sum, ScoreKind::Mean, ScoreKind::Hundred, ScoreKind::Pomp];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreKind::Sum => "sum",
            ScoreKind::Mean => "mean",
            ScoreKind::Hundred => "100",
            ScoreKind::Pomp => "pomp",
        }
    }

    /// Whether this kind rescales onto 0-100 and so needs a response range
    pub fn requires_range(&self) -> bool {
        matches!(self, ScoreKind::Hundred | ScoreKind::Pomp)
    }
}

impl fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoreKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sum" => Ok(ScoreKind::Sum),
            "mean" => Ok(ScoreKind::Mean),
            "100" => Ok(ScoreKind::Hundred),
            "pomp" => Ok(ScoreKind::Pomp),
            _ => Err(Error::UnknownScoreKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for ScoreKind {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ScoreKind> for &'static str {
    fn from(kind: ScoreKind) -> Self {
        kind.as_str()
    }
}
