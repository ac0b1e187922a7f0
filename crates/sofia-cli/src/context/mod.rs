//! Application context: configuration plus the fully wired assistant.

mod config_warnings;

use std::sync::Arc;

use anyhow::Context;
use sofia_assistant::{Assistant, AssistantSettings};
use sofia_config::SofiaConfig;
use sofia_corpus::CorpusLoader;
use sofia_embeddings::{EmbeddingIndex, FastEmbedEncoder};
use sofia_generation::ConfiguredGenerator;
use sofia_notify::PushoverNotifier;

use crate::progress::Progress;

pub use config_warnings::warn_unconfigured;

pub type SofiaAssistant = Assistant<FastEmbedEncoder, ConfiguredGenerator, PushoverNotifier>;

pub struct AppContext {
    pub config: SofiaConfig,
    pub assistant: SofiaAssistant,
}

impl AppContext {
    /// Load the corpus, start the encoder and connect the external services.
    ///
    /// Only a missing or unreadable corpus is fatal. An encoder that cannot
    /// start leaves retrieval disabled and answers come without context.
    pub async fn init(config: SofiaConfig) -> anyhow::Result<Self> {
        let spinner = Progress::spinner("Carregando base de conhecimento...");
        let corpus = CorpusLoader::new(&config.corpus.path)
            .with_columns(&config.corpus.question_column, &config.corpus.answer_column)
            .load();
        let corpus = match corpus {
            Ok(corpus) => {
                spinner.finish_clear();
                corpus
            }
            Err(error) => {
                spinner.finish_err("Não foi possível carregar a base de conhecimento.");
                return Err(error).context("failed to load the FAQ corpus; check corpus.path");
            }
        };

        let spinner = Progress::spinner("Inicializando sistema de busca...");
        let index = Arc::new(start_encoder(&config).await);

        let generator = ConfiguredGenerator::from_config(&config.generation)
            .context("failed to build the generation client")?;
        let notifier =
            PushoverNotifier::new(&config.notify).context("failed to build the notification client")?;

        let assistant = Assistant::new(
            corpus,
            index,
            generator,
            notifier,
            AssistantSettings::from_config(&config),
        );
        if assistant.warm_up().await {
            spinner.finish_clear();
        } else {
            spinner.finish_err("Busca semântica indisponível; respondendo sem contexto.");
        }

        tracing::debug!(
            entries = assistant.corpus().len(),
            model = assistant.generator().model(),
            "assistant ready"
        );
        Ok(Self { config, assistant })
    }
}

/// Model download and session setup block, so they run off the async runtime.
async fn start_encoder(config: &SofiaConfig) -> EmbeddingIndex<FastEmbedEncoder> {
    let cache_dir = config.embeddings.cache_dir();
    let show_progress = config.embeddings.show_download_progress;
    let started =
        tokio::task::spawn_blocking(move || FastEmbedEncoder::new(cache_dir, show_progress)).await;

    match started {
        Ok(Ok(encoder)) => EmbeddingIndex::new(encoder),
        Ok(Err(error)) => {
            tracing::warn!(%error, "embedding model unavailable; retrieval disabled");
            EmbeddingIndex::disabled(error.to_string())
        }
        Err(error) => {
            tracing::warn!(%error, "embedding model task failed; retrieval disabled");
            EmbeddingIndex::disabled(error.to_string())
        }
    }
}
