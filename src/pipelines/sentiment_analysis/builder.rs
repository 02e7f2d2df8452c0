use std::path::PathBuf;

use anyhow::{Error as E, Result};
use tokenizers::{PaddingParams, Tokenizer};

use super::pipeline::SentimentAnalysisPipeline;
use crate::loaders::TokenizerLoader;
use crate::models::sentiment_modern_bert::{ModelSource, SentimentModernBertModel};
use crate::models::ModernBertSize;
use crate::pipelines::utils::DeviceRequest;

/// Builder for configuring and constructing a sentiment analysis pipeline
/// using ModernBERT.
///
/// Start by creating a builder with `new(ModernBertSize)`, then chain
/// optional settings:
/// - `.model_id(String)`: Override the Hugging Face model repository ID.
/// - `.revision(String)`: Specify a git revision (branch, tag, commit hash).
/// - `.tokenizer_file(PathBuf)`: Provide a local path to `tokenizer.json`.
/// - `.config_file(PathBuf)`: Provide a local path to `config.json`.
/// - `.weight_files(PathBuf)`: Provide a local path to model weights
///   (`.safetensors` or `.bin`).
/// - `.cpu()`: Force execution on CPU even if CUDA is available.
/// - `.cuda_device(usize)`: Select a specific CUDA device.
///
/// Finally, call `.build()` to obtain a [`SentimentAnalysisPipeline`].
pub struct SentimentAnalysisPipelineBuilder {
    size: ModernBertSize,
    model_id: Option<String>,
    revision: String,
    tokenizer_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
    weight_files: Option<PathBuf>,
    device_request: DeviceRequest,
}

impl SentimentAnalysisPipelineBuilder {
    /// Creates a new builder for the specified ModernBERT sentiment model size.
    pub fn new(size: ModernBertSize) -> Self {
        Self {
            size,
            model_id: None,
            revision: "main".to_string(),
            tokenizer_file: None,
            config_file: None,
            weight_files: None,
            device_request: DeviceRequest::Default,
        }
    }

    /// Overrides the default Hugging Face model repository ID.
    pub fn model_id(mut self, id: impl Into<String>) -> Self {
        self.model_id = Some(id.into());
        self
    }

    /// Sets the git revision (branch, tag, commit hash) to use.
    pub fn revision(mut self, rev: impl Into<String>) -> Self {
        self.revision = rev.into();
        self
    }

    /// Sets a local path for the tokenizer configuration file.
    pub fn tokenizer_file(mut self, p: impl Into<PathBuf>) -> Self {
        self.tokenizer_file = Some(p.into());
        self
    }

    /// Sets a local path for the model configuration file.
    pub fn config_file(mut self, p: impl Into<PathBuf>) -> Self {
        self.config_file = Some(p.into());
        self
    }

    /// Sets a local path for the model weight file(s).
    pub fn weight_files(mut self, p: impl Into<PathBuf>) -> Self {
        self.weight_files = Some(p.into());
        self
    }

    /// Forces the pipeline to run on the CPU.
    pub fn cpu(mut self) -> Self {
        self.device_request = DeviceRequest::Cpu;
        self
    }

    /// Selects a specific CUDA device by index.
    pub fn cuda_device(mut self, index: usize) -> Self {
        self.device_request = DeviceRequest::Cuda(index);
        self
    }

    /// Provides an already constructed device.
    pub fn device(mut self, device: candle_core::Device) -> Self {
        self.device_request = DeviceRequest::Explicit(device);
        self
    }

    /// Constructs the [`SentimentAnalysisPipeline`].
    ///
    /// This involves downloading model/tokenizer assets (if not provided
    /// locally) and loading the model and tokenizer. Any failure here is
    /// fatal to the pipeline: no partially constructed pipeline is returned.
    pub fn build(self) -> Result<SentimentAnalysisPipeline> {
        let device = self.device_request.resolve()?;

        let model_id = self
            .model_id
            .unwrap_or_else(|| self.size.default_model_id().to_string());

        let source = ModelSource {
            model_id: model_id.clone(),
            revision: self.revision.clone(),
            config_file: self.config_file,
            weight_files: self.weight_files,
        };
        let model = SentimentModernBertModel::load(&source, device)?;

        let mut tokenizer = match self.tokenizer_file {
            Some(local_tokenizer_path) => Tokenizer::from_file(local_tokenizer_path)
                .map_err(|e| E::msg(format!("Failed to load local tokenizer file: {}", e)))?,
            None => TokenizerLoader::new(&model_id, &self.revision, "tokenizer.json").load()?,
        };

        // Pad id comes from the model config; single utterances are never
        // actually padded, but the tokenizer still wants consistent params.
        let pad_token_id = model.pad_token_id();
        let pp = PaddingParams {
            strategy: tokenizers::PaddingStrategy::BatchLongest,
            pad_id: pad_token_id,
            pad_token: tokenizer
                .id_to_token(pad_token_id)
                .unwrap_or_else(|| "[PAD]".to_string()),
            ..Default::default()
        };
        tokenizer
            .with_padding(Some(pp))
            .with_truncation(None)
            .map_err(E::msg)?;

        Ok(SentimentAnalysisPipeline { model, tokenizer })
    }
}
