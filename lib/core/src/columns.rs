use serde::{Deserialize, Serialize};

/// How a caller addresses a set of columns
///
/// Used both for the items to score and for the items to reverse-code.
/// Positions are 1-based, matching how questionnaires number their items.
///
/// Serialized form: `null` (or absent) → `Unspecified`, `true`/`false` →
/// `AllFlag`, `[1, 3]` → `ByPosition`, `["q1", "q3"]` → `ByName`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnSpec {
    #[default]
    Unspecified,
    AllFlag(bool),
    ByPosition(Vec<usize>),
    ByName(Vec<String>),
}

impl ColumnSpec {
    pub fn names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        ColumnSpec::ByName(names.into_iter().map(Into::into).collect())
    }

    pub fn positions(positions: impl IntoIterator<Item = usize>) -> Self {
        ColumnSpec::ByPosition(positions.into_iter().collect())
    }

    pub fn all() -> Self {
        ColumnSpec::AllFlag(true)
    }

    pub fn none() -> Self {
        ColumnSpec::AllFlag(false)
    }

    /// True when this spec selects no column at all
    pub fn designates_nothing(&self) -> bool {
        match self {
            ColumnSpec::Unspecified | ColumnSpec::AllFlag(false) => true,
            ColumnSpec::AllFlag(true) => false,
            ColumnSpec::ByPosition(p) => p.is_empty(),
            ColumnSpec::ByName(n) => n.is_empty(),
        }
    }
}

impl From<Vec<String>> for ColumnSpec {
    fn from(names: Vec<String>) -> Self {
        ColumnSpec::ByName(names)
    }
}

impl From<Vec<&str>> for ColumnSpec {
    fn from(names: Vec<&str>) -> Self {
        ColumnSpec::names(names)
    }
}

impl From<Vec<usize>> for ColumnSpec {
    fn from(positions: Vec<usize>) -> Self {
        ColumnSpec::ByPosition(positions)
    }
}

impl From<bool> for ColumnSpec {
    fn from(flag: bool) -> Self {
        ColumnSpec::AllFlag(flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_designates_nothing() {
        assert!(ColumnSpec::Unspecified.designates_nothing());
        assert!(ColumnSpec::none().designates_nothing());
        assert!(ColumnSpec::ByName(vec![]).designates_nothing());
        assert!(!ColumnSpec::all().designates_nothing());
        assert!(!ColumnSpec::positions([2]).designates_nothing());
    }

    #[test]
    fn test_deserialize_shapes() {
        let parse = |s: &str| serde_json::from_str::<ColumnSpec>(s).unwrap();

        assert_eq!(parse("null"), ColumnSpec::Unspecified);
        assert_eq!(parse("true"), ColumnSpec::AllFlag(true));
        assert_eq!(parse("false"), ColumnSpec::AllFlag(false));
        assert_eq!(parse("[1, 3]"), ColumnSpec::ByPosition(vec![1, 3]));
        assert_eq!(parse(r#"["q1", "q3"]"#), ColumnSpec::names(["q1", "q3"]));
    }

    #[test]
    fn test_deserialize_rejects_mixed_list() {
        assert!(serde_json::from_str::<ColumnSpec>(r#"[1, "q2"]"#).is_err());
    }
}
