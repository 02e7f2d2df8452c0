use hf_hub::api::sync::Api as HfApi;
use hf_hub::{Repo, RepoType};
use std::path::PathBuf;
use tokenizers::Tokenizer;
use tracing::debug;

/// Resolves a single file in a Hugging Face Hub model repo to a local path,
/// downloading it into the hub cache on first use.
#[derive(Debug, Clone)]
pub(crate) struct HfLoader {
    pub repo: String,
    pub revision: String,
    pub filename: String,
}

impl HfLoader {
    pub fn new(repo: &str, revision: &str, filename: &str) -> Self {
        Self {
            repo: repo.into(),
            revision: revision.into(),
            filename: filename.into(),
        }
    }

    pub fn load(&self) -> anyhow::Result<PathBuf> {
        let hf_api = HfApi::new()?;
        let hf_repo = hf_api.repo(Repo::with_revision(
            self.repo.clone(),
            RepoType::Model,
            self.revision.clone(),
        ));

        debug!(repo = %self.repo, file = %self.filename, "resolving hub asset");
        let file_path = hf_repo.get(self.filename.as_str())?;

        Ok(file_path)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct TokenizerLoader {
    pub tokenizer_file_loader: HfLoader,
}

impl TokenizerLoader {
    pub fn new(repo: &str, revision: &str, filename: &str) -> Self {
        let tokenizer_file_loader = HfLoader::new(repo, revision, filename);

        Self {
            tokenizer_file_loader,
        }
    }

    pub fn load(&self) -> anyhow::Result<Tokenizer> {
        let tokenizer_file_path = self.tokenizer_file_loader.load()?;

        let tokenizer =
            tokenizers::Tokenizer::from_file(tokenizer_file_path).map_err(anyhow::Error::msg)?;

        Ok(tokenizer)
    }
}
