//! # Articles
//!
//! In-memory registry of uploaded PDFs.
//!
//! - Ordered by upload time, oldest first
//! - No uniqueness on filename, re-uploading a name adds a second record
//! - Lives as long as the process, nothing is persisted
//! - Async `RwLock` so uploads from different sessions append safely
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub filename: String,
    pub author: String,
}

#[derive(Default)]
pub struct ArticleRegistry {
    articles: RwLock<Vec<Article>>,
}

impl ArticleRegistry {
    pub async fn append(&self, article: Article) {
        self.articles.write().await.push(article);
    }

    pub async fn snapshot(&self) -> Vec<Article> {
        self.articles.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.articles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.articles.read().await.is_empty()
    }
}
