use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Error as E, Result};
use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::modernbert::{Config, ModernBertForSequenceClassification};
use tokenizers::Tokenizer;
use tracing::{debug, info};

use crate::loaders::HfLoader;
use crate::pipelines::sentiment_analysis::SentimentResult;

/// Available ModernBERT sentiment model sizes.
#[derive(Debug, Clone, Copy)]
pub enum ModernBertSize {
    Base,
    Large,
}

impl ModernBertSize {
    pub(crate) fn default_model_id(self) -> &'static str {
        match self {
            ModernBertSize::Base => "clapAI/modernBERT-base-multilingual-sentiment",
            ModernBertSize::Large => "clapAI/modernBERT-large-multilingual-sentiment",
        }
    }
}

/// Where to fetch model assets from: a Hub repo/revision, with optional local
/// file overrides taking precedence over the hub.
#[derive(Debug, Clone)]
pub(crate) struct ModelSource {
    pub model_id: String,
    pub revision: String,
    pub config_file: Option<PathBuf>,
    pub weight_files: Option<PathBuf>,
}

/// A ModernBERT checkpoint with a sequence-classification head, plus the
/// `id2label` vocabulary it was fine-tuned with.
pub struct SentimentModernBertModel {
    model: ModernBertForSequenceClassification,
    device: Device,
    id2label: HashMap<String, String>,
    pad_token_id: u32,
}

impl SentimentModernBertModel {
    pub(crate) fn load(source: &ModelSource, device: Device) -> Result<Self> {
        let config_filename = match &source.config_file {
            Some(path) => path.clone(),
            None => HfLoader::new(&source.model_id, &source.revision, "config.json").load()?,
        };
        let weights_filename = match &source.weight_files {
            Some(path) => path.clone(),
            None => Self::resolve_weights(&source.model_id, &source.revision)?,
        };

        let config_content = std::fs::read_to_string(&config_filename).map_err(|e| {
            E::msg(format!(
                "Failed to read config file {:?}: {}",
                config_filename, e
            ))
        })?;
        let config: Config = serde_json::from_str(&config_content)
            .map_err(|e| E::msg(format!("Failed to parse model config: {}", e)))?;

        let id2label = config
            .classifier_config
            .as_ref()
            .map(|cc| cc.id2label.clone())
            .unwrap_or_default();
        if id2label.is_empty() {
            anyhow::bail!(
                "config for '{}' carries no id2label mapping; not a sequence classification checkpoint",
                source.model_id
            );
        }

        let dtype = DType::F32;
        let vb = if weights_filename
            .extension()
            .map_or(false, |ext| ext == "safetensors")
        {
            unsafe { VarBuilder::from_mmaped_safetensors(&[&weights_filename], dtype, &device)? }
        } else if weights_filename
            .extension()
            .map_or(false, |ext| ext == "bin")
        {
            VarBuilder::from_pth(&weights_filename, dtype, &device)?
        } else {
            anyhow::bail!("Unsupported weight file format: {:?}", weights_filename);
        };

        let model = ModernBertForSequenceClassification::load(vb, &config)?;
        info!(
            model_id = %source.model_id,
            labels = id2label.len(),
            cuda = device.is_cuda(),
            "sentiment model loaded"
        );

        Ok(Self {
            model,
            device,
            id2label,
            pad_token_id: config.pad_token_id,
        })
    }

    fn resolve_weights(model_id: &str, revision: &str) -> Result<PathBuf> {
        match HfLoader::new(model_id, revision, "model.safetensors").load() {
            Ok(safetensors) => Ok(safetensors),
            Err(_) => match HfLoader::new(model_id, revision, "pytorch_model.bin").load() {
                Ok(pytorch_model) => Ok(pytorch_model),
                Err(e) => {
                    anyhow::bail!("Model weights not found in repo '{model_id}'. Expected `model.safetensors` or `pytorch_model.bin`. Error: {e}")
                }
            },
        }
    }

    /// Classifies one utterance, returning the argmax label with its softmax
    /// probability.
    pub fn predict(&self, tokenizer: &Tokenizer, text: &str) -> Result<SentimentResult> {
        let tokens = tokenizer
            .encode(text, true)
            .map_err(|e| E::msg(format!("Tokenization error: {}", e)))?;

        let input_ids = Tensor::new(tokens.get_ids(), &self.device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(tokens.get_attention_mask(), &self.device)?.unsqueeze(0)?;

        let logits = self.model.forward(&input_ids, &attention_mask)?;
        let logits: Vec<f32> = logits.squeeze(0)?.to_vec1()?;
        debug!(classes = logits.len(), "forward pass complete");

        let probabilities = softmax(&logits);
        let (class, score) = probabilities
            .iter()
            .copied()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .ok_or_else(|| E::msg("classifier head produced no logits"))?;

        let label = self
            .id2label
            .get(&class.to_string())
            .ok_or_else(|| {
                E::msg(format!(
                    "Predicted ID '{}' not found in id2label map",
                    class
                ))
            })?
            .clone();

        Ok(SentimentResult { label, score })
    }

    pub fn pad_token_id(&self) -> u32 {
        self.pad_token_id
    }

    pub fn device(&self) -> &Device {
        &self.device
    }
}

/// Numerically stable softmax over one row of logits.
fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&l| (l - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
