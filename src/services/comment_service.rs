//! Comment service: threaded retrieval and validated insertion.

use std::collections::HashMap;

use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::models::{Comment, NewComment};
use crate::repositories::{BlogRepository, CommentRepository};

/// A comment with its recursively collected replies.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentThread {
    pub comment: Comment,
    pub sub_comments: Vec<CommentThread>,
}

#[derive(Clone)]
pub struct CommentService {
    repo: CommentRepository,
    blogs: BlogRepository,
}

impl CommentService {
    pub fn new(repo: CommentRepository, blogs: BlogRepository) -> Self {
        Self { repo, blogs }
    }

    /// Comments of a blog at the given level (direct children of
    /// `parent_comment_id`, roots when `None`), each with its full
    /// subtree. Unknown blog or parent ids yield an empty list rather
    /// than an error.
    pub async fn get_thread(
        &self,
        blog_id: i32,
        parent_comment_id: Option<i32>,
    ) -> AppResult<Vec<CommentThread>> {
        let comments = self.repo.list_by_blog(blog_id).await?;
        Ok(build_thread(comments, parent_comment_id))
    }

    /// Adds a comment after validating that the blog exists and that
    /// the parent, when given, is a comment of the same blog.
    pub async fn add_comment(
        &self,
        blog_id: i32,
        parent_comment_id: Option<i32>,
        content: String,
    ) -> AppResult<Comment> {
        self.blogs
            .find_by_id(blog_id)
            .await?
            .ok_or(AppError::NotFound {
                entity: "blog".to_string(),
                field: "id".to_string(),
                value: blog_id.to_string(),
            })?;

        if let Some(parent_id) = parent_comment_id {
            let parent =
                self.repo
                    .find_by_id(parent_id)
                    .await?
                    .ok_or_else(|| AppError::Validation {
                        field: "parent_comment_id".to_string(),
                        reason: format!("parent comment {parent_id} does not exist"),
                    })?;
            if parent.blog_id != blog_id {
                return Err(AppError::Validation {
                    field: "parent_comment_id".to_string(),
                    reason: format!(
                        "parent comment {parent_id} belongs to blog {}, not blog {blog_id}",
                        parent.blog_id
                    ),
                });
            }
        }

        self.repo
            .create(NewComment {
                blog_id,
                parent_comment_id,
                content,
                posted_time: Utc::now(),
            })
            .await
    }
}

/// Assembles the comment tree from a flat id-ordered list.
///
/// Rows are grouped into a parent index first, then subtrees are moved
/// out of it level by level. Sibling order is the input (insertion)
/// order, and no cycles are possible because a parent id always
/// references an earlier row.
fn build_thread(comments: Vec<Comment>, parent: Option<i32>) -> Vec<CommentThread> {
    let mut by_parent: HashMap<Option<i32>, Vec<Comment>> = HashMap::new();
    for comment in comments {
        by_parent
            .entry(comment.parent_comment_id)
            .or_default()
            .push(comment);
    }
    attach(&mut by_parent, parent)
}

fn attach(
    by_parent: &mut HashMap<Option<i32>, Vec<Comment>>,
    parent: Option<i32>,
) -> Vec<CommentThread> {
    by_parent
        .remove(&parent)
        .unwrap_or_default()
        .into_iter()
        .map(|comment| {
            let sub_comments = attach(by_parent, Some(comment.id));
            CommentThread {
                comment,
                sub_comments,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn comment(id: i32, parent: Option<i32>) -> Comment {
        Comment {
            id,
            blog_id: 1,
            parent_comment_id: parent,
            content: format!("comment {id}"),
            posted_time: Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap(),
        }
    }

    fn ids(threads: &[CommentThread]) -> Vec<i32> {
        threads.iter().map(|t| t.comment.id).collect()
    }

    #[test]
    fn roots_preserve_insertion_order() {
        let threads = build_thread(
            vec![comment(1, None), comment(2, None), comment(3, None)],
            None,
        );
        assert_eq!(ids(&threads), vec![1, 2, 3]);
        assert!(threads.iter().all(|t| t.sub_comments.is_empty()));
    }

    #[test]
    fn replies_nest_under_their_parent() {
        let threads = build_thread(
            vec![
                comment(1, None),
                comment(2, Some(1)),
                comment(3, None),
                comment(4, Some(2)),
                comment(5, Some(1)),
            ],
            None,
        );
        assert_eq!(ids(&threads), vec![1, 3]);
        assert_eq!(ids(&threads[0].sub_comments), vec![2, 5]);
        assert_eq!(ids(&threads[0].sub_comments[0].sub_comments), vec![4]);
    }

    #[test]
    fn requesting_a_level_returns_direct_children_with_subtrees() {
        let threads = build_thread(
            vec![
                comment(1, None),
                comment(2, Some(1)),
                comment(3, Some(1)),
                comment(4, Some(2)),
            ],
            Some(1),
        );
        assert_eq!(ids(&threads), vec![2, 3]);
        assert_eq!(ids(&threads[0].sub_comments), vec![4]);
    }

    #[test]
    fn unknown_parent_yields_empty() {
        let threads = build_thread(vec![comment(1, None)], Some(99));
        assert!(threads.is_empty());
    }

    #[test]
    fn no_comments_yields_empty() {
        assert!(build_thread(Vec::new(), None).is_empty());
    }

    /// Parent assignments where each node may only reference an
    /// earlier node, mirroring the insert-time invariant.
    fn arb_parent_links() -> impl Strategy<Value = Vec<Option<usize>>> {
        (1usize..24).prop_flat_map(|n| {
            (0..n)
                .map(|i| {
                    if i == 0 {
                        Just(None).boxed()
                    } else {
                        proptest::option::of(0..i).boxed()
                    }
                })
                .collect::<Vec<_>>()
        })
    }

    fn count_nodes(threads: &[CommentThread]) -> usize {
        threads
            .iter()
            .map(|t| 1 + count_nodes(&t.sub_comments))
            .sum()
    }

    fn assert_sibling_order(threads: &[CommentThread]) {
        let sibling_ids = ids(threads);
        let mut sorted = sibling_ids.clone();
        sorted.sort_unstable();
        assert_eq!(sibling_ids, sorted, "sibling order must follow insertion order");
        for thread in threads {
            for sub in &thread.sub_comments {
                assert_eq!(sub.comment.parent_comment_id, Some(thread.comment.id));
            }
            assert_sibling_order(&thread.sub_comments);
        }
    }

    proptest! {
        #[test]
        fn every_comment_appears_once_in_order(links in arb_parent_links()) {
            let comments: Vec<Comment> = links
                .iter()
                .enumerate()
                .map(|(i, parent)| comment(i as i32 + 1, parent.map(|p| p as i32 + 1)))
                .collect();

            let threads = build_thread(comments, None);
            prop_assert_eq!(count_nodes(&threads), links.len());
            assert_sibling_order(&threads);
        }
    }
}
