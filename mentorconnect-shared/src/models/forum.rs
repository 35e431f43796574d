use serde::{Deserialize, Serialize};

use super::Role;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForumCategory {
    pub id: String,
    pub name: String,
    pub topic_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForumTopic {
    pub id: String,
    pub title: String,
    pub author: String,
    pub author_role: Role,
    /// Display-only age such as "2 days ago".
    pub posted: String,
    pub replies: u32,
    pub views: u32,
    /// Name of the owning [`ForumCategory`].
    pub category: String,
    pub verified: bool,
    pub trending: bool,
}

/// Topics in `category` (every category when `None`) whose title, category
/// or author contains `query`, ignoring case.
pub fn filter_topics<'a>(
    topics: &'a [ForumTopic],
    category: Option<&str>,
    query: &str,
) -> Vec<&'a ForumTopic> {
    let needle = query.trim().to_lowercase();
    topics
        .iter()
        .filter(|topic| category.is_none_or(|wanted| topic.category == wanted))
        .filter(|topic| {
            needle.is_empty()
                || [&topic.title, &topic.category, &topic.author]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(id: &str, title: &str, category: &str, author: &str) -> ForumTopic {
        ForumTopic {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            author_role: Role::Mentee,
            posted: "1 day ago".into(),
            replies: 0,
            views: 0,
            category: category.into(),
            verified: false,
            trending: false,
        }
    }

    fn topics() -> Vec<ForumTopic> {
        vec![
            topic("1", "Preparing for interviews", "Technical Skills", "Alex Rivera"),
            topic("2", "Moving into product", "Career Development", "Jamie Kennedy"),
            topic("3", "Learning React", "Technical Skills", "Alex Rivera"),
        ]
    }

    #[test]
    fn test_filter_topics_without_constraints_returns_all() {
        let topics = topics();
        assert_eq!(filter_topics(&topics, None, "  ").len(), 3);
    }

    #[test]
    fn test_filter_topics_by_category() {
        let topics = topics();
        let found = filter_topics(&topics, Some("Career Development"), "");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "2");
    }

    #[test]
    fn test_filter_topics_query_matches_author_case_insensitively() {
        let topics = topics();
        let ids: Vec<_> = filter_topics(&topics, None, "ALEX")
            .into_iter()
            .map(|topic| topic.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn test_filter_topics_combines_category_and_query() {
        let topics = topics();
        assert!(filter_topics(&topics, Some("Career Development"), "react").is_empty());
        assert_eq!(filter_topics(&topics, Some("Technical Skills"), "react").len(), 1);
    }
}
