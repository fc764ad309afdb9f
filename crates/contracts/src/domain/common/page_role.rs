use serde::{Deserialize, Serialize};

/// Role of a page inside a forum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageRole {
    Forum,
    ForumCategory,
    ForumTopic,
}

impl PageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageRole::Forum => "Forum",
            PageRole::ForumCategory => "ForumCategory",
            PageRole::ForumTopic => "ForumTopic",
        }
    }
}

impl std::fmt::Display for PageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_display() {
        for role in [PageRole::Forum, PageRole::ForumCategory, PageRole::ForumTopic] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role));
        }
    }
}
