//! Post, comment and like storage.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::Serialize;

use forum_core::{CommentId, DomainError, DomainResult, PostId, UserId};

/// A forum post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author_id: UserId,
    pub is_misleading: bool,
    pub created_at: DateTime<Utc>,
}

/// A comment on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub author_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Read view of a post with its comments and like count.
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    #[serde(flatten)]
    pub post: Post,
    pub comments: Vec<Comment>,
    pub likes_count: usize,
}

#[derive(Debug, Default)]
struct Inner {
    posts: HashMap<PostId, Post>,
    comments: Vec<Comment>,
    likes: HashSet<(UserId, PostId)>,
}

/// In-memory post/comment/like store.
#[derive(Debug, Default)]
pub struct PostStore {
    inner: RwLock<Inner>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> DomainResult<std::sync::RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| DomainError::store("post store lock poisoned"))
    }

    fn write(&self) -> DomainResult<std::sync::RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| DomainError::store("post store lock poisoned"))
    }

    pub fn create_post(
        &self,
        author_id: UserId,
        title: String,
        content: String,
    ) -> DomainResult<Post> {
        let post = Post {
            id: PostId::new(),
            title,
            content,
            author_id,
            is_misleading: false,
            created_at: Utc::now(),
        };

        self.write()?.posts.insert(post.id, post.clone());
        tracing::debug!(post_id = %post.id, author_id = %author_id, "post created");

        Ok(post)
    }

    /// List posts in creation order, with `skip`/`limit` paging.
    pub fn list_posts(&self, skip: usize, limit: usize) -> DomainResult<Vec<PostView>> {
        let inner = self.read()?;

        let mut posts: Vec<&Post> = inner.posts.values().collect();
        posts.sort_by_key(|p| (p.created_at, *p.id.as_uuid()));

        Ok(posts
            .into_iter()
            .skip(skip)
            .take(limit)
            .map(|p| Self::view(&inner, p))
            .collect())
    }

    pub fn get_post(&self, id: PostId) -> DomainResult<PostView> {
        let inner = self.read()?;
        let post = inner.posts.get(&id).ok_or(DomainError::NotFound)?;
        Ok(Self::view(&inner, post))
    }

    pub fn add_comment(
        &self,
        post_id: PostId,
        author_id: UserId,
        content: String,
    ) -> DomainResult<Comment> {
        let mut inner = self.write()?;

        if !inner.posts.contains_key(&post_id) {
            return Err(DomainError::NotFound);
        }

        let comment = Comment {
            id: CommentId::new(),
            post_id,
            author_id,
            content,
            created_at: Utc::now(),
        };
        inner.comments.push(comment.clone());

        Ok(comment)
    }

    /// Record a like. Fails with `NotFound` for a missing post and with
    /// `Conflict` for a duplicate like. The self-like rule is an access-gate
    /// concern, enforced above this store.
    pub fn like(&self, post_id: PostId, user_id: UserId) -> DomainResult<()> {
        let mut inner = self.write()?;

        if !inner.posts.contains_key(&post_id) {
            return Err(DomainError::NotFound);
        }
        if !inner.likes.insert((user_id, post_id)) {
            return Err(DomainError::conflict("post already liked"));
        }

        Ok(())
    }

    /// Set or clear the moderation flag on a post.
    pub fn set_misleading(&self, post_id: PostId, is_misleading: bool) -> DomainResult<Post> {
        let mut inner = self.write()?;

        let post = inner.posts.get_mut(&post_id).ok_or(DomainError::NotFound)?;
        post.is_misleading = is_misleading;

        Ok(post.clone())
    }

    fn view(inner: &Inner, post: &Post) -> PostView {
        let comments = inner
            .comments
            .iter()
            .filter(|c| c.post_id == post.id)
            .cloned()
            .collect();
        let likes_count = inner.likes.iter().filter(|(_, p)| *p == post.id).count();

        PostView {
            post: post.clone(),
            comments,
            likes_count,
        }
    }
}
