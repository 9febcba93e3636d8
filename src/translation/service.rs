use std::time::Duration;

use tracing::{debug, warn};

use super::{chunker::split_text_into_chunks, client::Translator};

#[derive(Debug, Clone)]
pub struct ChunkPlan {
    pub max_len: usize,
    pub delay: Duration,
}

/// Translate chunk by chunk, in order. A chunk the API fails on is kept in the
/// source language so the caller always gets a full text back.
pub async fn translate_text(
    translator: &dyn Translator,
    text: &str,
    source: &str,
    target: &str,
    plan: &ChunkPlan,
) -> String {
    let chunks = split_text_into_chunks(text, plan.max_len);
    let total = chunks.len();
    let mut translated = Vec::with_capacity(total);

    for (i, chunk) in chunks.into_iter().enumerate() {
        debug!(chunk = i + 1, total, "translating chunk");
        match translator.translate(&chunk, source, target).await {
            Ok(t) => translated.push(t),
            Err(e) => {
                warn!(error = %e, chunk = i + 1, total, "chunk translation failed, keeping original");
                translated.push(chunk);
            }
        }
        if i + 1 < total && !plan.delay.is_zero() {
            tokio::time::sleep(plan.delay).await;
        }
    }

    translated.join("\n")
}
