//! GitHub REST wire types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Comment;

/// Login GitHub shows for comments whose author account was deleted
const GHOST_LOGIN: &str = "ghost";

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    pub login: String,
}

/// Issue comment as returned by `GET /repos/{owner}/{repo}/issues/{n}/comments`
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubComment {
    pub user: Option<GitHubUser>,
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<GitHubComment> for Comment {
    fn from(comment: GitHubComment) -> Self {
        Comment {
            author: comment
                .user
                .map(|user| user.login)
                .unwrap_or_else(|| GHOST_LOGIN.to_string()),
            body: comment.body.unwrap_or_default(),
            created_at: comment.created_at,
        }
    }
}

/// Body of `POST /repos/{owner}/{repo}/issues/{n}/labels`
#[derive(Debug, Clone, Serialize)]
pub struct AddLabelsRequest<'a> {
    pub labels: Vec<&'a str>,
}

/// Error payload GitHub returns with non-success statuses
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_from_api_json() {
        let json = r#"{
            "id": 1,
            "user": { "login": "qa-tester", "id": 99 },
            "body": "QA Report\nTesting Results: Passed",
            "created_at": "2024-03-01T12:30:00Z",
            "updated_at": "2024-03-01T12:31:00Z"
        }"#;
        let comment: Comment = serde_json::from_str::<GitHubComment>(json).unwrap().into();
        assert_eq!(comment.author, "qa-tester");
        assert_eq!(comment.body, "QA Report\nTesting Results: Passed");
        assert_eq!(comment.created_at.to_rfc3339(), "2024-03-01T12:30:00+00:00");
    }

    #[test]
    fn test_comment_with_deleted_author_and_no_body() {
        let json = r#"{ "user": null, "body": null, "created_at": "2024-03-01T12:30:00Z" }"#;
        let comment: Comment = serde_json::from_str::<GitHubComment>(json).unwrap().into();
        assert_eq!(comment.author, "ghost");
        assert!(comment.body.is_empty());
    }

    #[test]
    fn test_add_labels_request_shape() {
        let body = serde_json::to_value(AddLabelsRequest { labels: vec!["qa-passed"] }).unwrap();
        assert_eq!(body, serde_json::json!({ "labels": ["qa-passed"] }));
    }
}
