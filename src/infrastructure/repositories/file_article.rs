// src/infrastructure/repositories/file_article.rs
use super::error::{map_encode, map_join, map_read};
use super::record::ArticleRecord;
use crate::application::ports::time::Clock;
use crate::domain::article::{Article, ArticleRepository, ArticleSlug};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::storage::write_atomic;
use async_trait::async_trait;
use std::{
    ffi::OsStr,
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

/// One pretty-printed JSON file per article at `<root>/<slug>.json`.
#[derive(Clone)]
pub struct FileArticleRepository {
    dir: Arc<RecordDir>,
    clock: Arc<dyn Clock>,
}

struct RecordDir {
    root: PathBuf,
    default_author: String,
}

impl FileArticleRepository {
    pub fn new(root: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        Self::with_default_author(root, clock, "Admin")
    }

    /// `default_author` fills records written before articles carried an author.
    pub fn with_default_author(
        root: impl Into<PathBuf>,
        clock: Arc<dyn Clock>,
        default_author: impl Into<String>,
    ) -> Self {
        Self {
            dir: Arc::new(RecordDir {
                root: root.into(),
                default_author: default_author.into(),
            }),
            clock,
        }
    }

    pub fn root(&self) -> &Path {
        &self.dir.root
    }

    pub fn path_for(&self, slug: &ArticleSlug) -> PathBuf {
        self.dir.path_for(slug)
    }

    /// Create the storage directory if it does not exist yet.
    pub fn ensure_root(&self) -> DomainResult<()> {
        fs::create_dir_all(&self.dir.root)?;
        Ok(())
    }

    async fn run<T, F>(&self, op: F) -> DomainResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&RecordDir) -> DomainResult<T> + Send + 'static,
    {
        let dir = Arc::clone(&self.dir);
        tokio::task::spawn_blocking(move || op(&dir))
            .await
            .map_err(map_join)?
    }
}

impl RecordDir {
    fn path_for(&self, slug: &ArticleSlug) -> PathBuf {
        self.root.join(slug.file_name())
    }

    fn read(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let text = match fs::read_to_string(self.path_for(slug)) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(map_read(slug.as_str(), err)),
        };
        let record: ArticleRecord = serde_json::from_str(&text)
            .map_err(|err| DomainError::corrupt(slug.as_str(), err))?;
        record.into_article(slug, &self.default_author).map(Some)
    }

    fn write(&self, article: &Article) -> DomainResult<()> {
        let mut json =
            serde_json::to_vec_pretty(&ArticleRecord::from(article)).map_err(map_encode)?;
        json.push(b'\n');
        write_atomic(&self.path_for(&article.slug), &json)?;
        Ok(())
    }

    fn remove(&self, slug: &ArticleSlug) -> DomainResult<bool> {
        match fs::remove_file(self.path_for(slug)) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn list(&self) -> DomainResult<Vec<Article>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut articles = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(OsStr::to_str) != Some("json") {
                continue;
            }
            let stem = path
                .file_stem()
                .and_then(OsStr::to_str)
                .unwrap_or_default();

            let loaded = ArticleSlug::new(stem)
                .map_err(|_| DomainError::corrupt(stem, "file name is not a valid slug"))
                .and_then(|slug| self.read(&slug));

            match loaded {
                Ok(Some(article)) => articles.push(article),
                // removed between read_dir and read
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "skipping unreadable article record");
                }
            }
        }

        articles.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.slug.cmp(&b.slug))
        });
        Ok(articles)
    }
}

#[async_trait]
impl ArticleRepository for FileArticleRepository {
    async fn save(&self, article: &Article) -> DomainResult<Article> {
        let mut article = article.clone();
        article.touch(self.clock.now());
        self.run(move |dir| {
            dir.write(&article)?;
            Ok(article)
        })
        .await
    }

    async fn load(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let slug = slug.clone();
        self.run(move |dir| dir.read(&slug)).await
    }

    async fn exists(&self, slug: &ArticleSlug) -> DomainResult<bool> {
        let slug = slug.clone();
        self.run(move |dir| Ok(dir.path_for(&slug).try_exists()?))
            .await
    }

    async fn delete(&self, slug: &ArticleSlug) -> DomainResult<bool> {
        let slug = slug.clone();
        self.run(move |dir| dir.remove(&slug)).await
    }

    async fn all(&self) -> DomainResult<Vec<Article>> {
        self.run(RecordDir::list).await
    }
}
