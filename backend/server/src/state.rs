use std::sync::Arc;

use tracing::info;

use super::{
    articles::ArticleRegistry, auth::Credentials, config::Config, error::AppError,
    storage::FileStore,
};

pub struct AppState {
    pub config: Config,
    pub credentials: Credentials,
    pub articles: ArticleRegistry,
    pub files: FileStore,
}

impl AppState {
    pub fn new(config: Config) -> Result<Arc<Self>, AppError> {
        let files = FileStore::open(&config.upload_dir)?;
        info!("Upload directory ready at {}", files.root().display());

        Ok(Arc::new(Self {
            config,
            credentials: Credentials::default(),
            articles: ArticleRegistry::default(),
            files,
        }))
    }
}
