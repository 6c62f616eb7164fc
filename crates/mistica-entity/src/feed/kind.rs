//! Feed post kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use mistica_core::AppError;

/// Kind of a feed post, shown as a badge in clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedPostKind {
    /// A regular post.
    Post,
    /// A warning/notice to members.
    Notice,
    /// A content update announcement.
    Update,
}

impl FeedPostKind {
    /// Return the kind as a lowercase string (the stored column value).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Notice => "notice",
            Self::Update => "update",
        }
    }

    /// Parse a stored kind, folding the legacy `"news"` value into `Post`.
    ///
    /// Early rows were written with `news` before the kind was renamed;
    /// they render identically to regular posts.
    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s {
            "post" | "news" => Ok(Self::Post),
            "notice" => Ok(Self::Notice),
            "update" => Ok(Self::Update),
            _ => Err(AppError::validation(format!(
                "Invalid feed post kind: '{s}'. Expected one of: post, notice, update"
            ))),
        }
    }
}

impl fmt::Display for FeedPostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FeedPostKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        assert_eq!("post".parse::<FeedPostKind>().unwrap(), FeedPostKind::Post);
        assert_eq!(
            "notice".parse::<FeedPostKind>().unwrap(),
            FeedPostKind::Notice
        );
        assert_eq!(
            "update".parse::<FeedPostKind>().unwrap(),
            FeedPostKind::Update
        );
    }

    #[test]
    fn test_legacy_news_is_normalized() {
        assert_eq!("news".parse::<FeedPostKind>().unwrap(), FeedPostKind::Post);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!("meme".parse::<FeedPostKind>().is_err());
    }
}
