use std::str::FromStr;

use crate::validation::ValidationError;

/// Represents the type of SQL JOIN operation used for a configured child
/// table. SQLite's RIGHT and FULL OUTER joins are not offered; no query in
/// this system needs them and older engine releases reject them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// INNER JOIN - parent rows without a matching child row are excluded
    Inner,
    /// LEFT JOIN - parent rows without a matching child row appear with NULLs
    Left,
    /// CROSS JOIN - Cartesian product of both tables
    Cross,
}

impl JoinKind {
    /// Convert JoinKind to SQL string
    pub fn to_sql(&self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Cross => "CROSS JOIN",
        }
    }
}

impl Default for JoinKind {
    fn default() -> Self {
        JoinKind::Inner
    }
}

/// Parses the configuration keywords `inner`, `left` and `cross`.
impl FromStr for JoinKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inner" => Ok(JoinKind::Inner),
            "left" => Ok(JoinKind::Left),
            "cross" => Ok(JoinKind::Cross),
            _ => Err(ValidationError::UnknownJoinKeyword(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_kind_to_sql() {
        assert_eq!(JoinKind::Inner.to_sql(), "INNER JOIN");
        assert_eq!(JoinKind::Left.to_sql(), "LEFT JOIN");
        assert_eq!(JoinKind::Cross.to_sql(), "CROSS JOIN");
    }

    #[test]
    fn test_parses_config_keywords() {
        assert_eq!("inner".parse::<JoinKind>().unwrap(), JoinKind::Inner);
        assert_eq!("LEFT".parse::<JoinKind>().unwrap(), JoinKind::Left);
        assert_eq!("Cross".parse::<JoinKind>().unwrap(), JoinKind::Cross);
    }

    #[test]
    fn test_rejects_unknown_keyword() {
        let err = "natural".parse::<JoinKind>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownJoinKeyword("natural".to_string())
        );
    }

    #[test]
    fn test_default_is_inner() {
        assert_eq!(JoinKind::default(), JoinKind::Inner);
    }
}
