//! Résumé analysis flow: input check → prompt → generate → strict parse.
//!
//! Runs without touching any session state; the caller decides where the
//! outcome is stored.

use tracing::{info, warn};

use crate::analysis::prompts::build_analysis_prompt;
use crate::analysis::{parse_analysis, AnalysisError};
use crate::config::LlmSettings;
use crate::llm_client::TextGenerator;
use crate::models::analysis::AnalysisResult;

/// Analyzes raw résumé text. Blank input is rejected before the generator is called.
pub async fn analyze_resume(
    resume_text: &str,
    generator: &dyn TextGenerator,
    settings: &LlmSettings,
) -> Result<AnalysisResult, AnalysisError> {
    if resume_text.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let prompt = build_analysis_prompt(resume_text);
    let raw = generator
        .generate(&prompt, &settings.model, &settings.options())
        .await
        .map_err(|e| {
            warn!("Resume analysis generation failed: {e}");
            AnalysisError::Service(e.to_string())
        })?;

    let result = parse_analysis(&raw).map_err(|e| {
        warn!("Resume analysis response rejected: {e}");
        e
    })?;

    info!(
        "Resume analysis complete: score={}, keywords={}",
        result.overall_score,
        result.keywords.len()
    );
    Ok(result)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::{GenerationOptions, LlmError};

    /// Generator double that replays one scripted outcome and records calls.
    pub struct ScriptedGenerator {
        reply: Result<String, String>,
        pub calls: AtomicUsize,
        pub last_call: Mutex<Option<(String, String, GenerationOptions)>>,
    }

    impl ScriptedGenerator {
        pub fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                last_call: Mutex::new(None),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                calls: AtomicUsize::new(0),
                last_call: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(
            &self,
            prompt: &str,
            model: &str,
            options: &GenerationOptions,
        ) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_call.lock().unwrap() =
                Some((prompt.to_string(), model.to_string(), *options));
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(message) => Err(LlmError::Api {
                    status: 503,
                    message: message.clone(),
                }),
            }
        }
    }

    pub const VALID_RESPONSE: &str = r#"{
        "overallScore": 82,
        "strengths": ["Quantified impact", "Modern stack", "Clear layout"],
        "improvements": ["Add summary", "Trim older roles", "Consistent dates"],
        "keywords": ["Rust", "Tokio", "Kubernetes", "PostgreSQL", "AWS"],
        "tips": ["Lead with results", "Tailor per role", "Keep to one page"],
        "summary": "Strong backend résumé with room to sharpen the narrative."
    }"#;

    #[tokio::test]
    async fn test_blank_input_never_calls_generator() {
        let generator = ScriptedGenerator::replying(VALID_RESPONSE);
        let err = analyze_resume("  \n\t", &generator, &LlmSettings::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyInput));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_successful_analysis_uses_configured_model_and_options() {
        let generator = ScriptedGenerator::replying(VALID_RESPONSE);
        let settings = LlmSettings::default();
        let result = analyze_resume("Jane Roe — Rust engineer", &generator, &settings)
            .await
            .unwrap();
        assert_eq!(result.overall_score, 82.0);
        assert_eq!(result.keywords.len(), 5);

        let (prompt, model, options) = generator.last_call.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("Jane Roe — Rust engineer"));
        assert_eq!(model, settings.model);
        assert_eq!(options, settings.options());
    }

    #[tokio::test]
    async fn test_service_failure_is_typed() {
        let generator = ScriptedGenerator::failing("overloaded");
        let err = analyze_resume("resume", &generator, &LlmSettings::default())
            .await
            .unwrap_err();
        match err {
            AnalysisError::Service(reason) => assert!(reason.contains("overloaded")),
            other => panic!("expected service failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_prose_response_is_parse_failure() {
        let generator = ScriptedGenerator::replying("Sure! Here is my analysis: great resume.");
        let err = analyze_resume("resume", &generator, &LlmSettings::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Parse { .. }));
        assert_eq!(err.raw(), Some("Sure! Here is my analysis: great resume."));
    }

    #[tokio::test]
    async fn test_single_call_per_request() {
        let generator = ScriptedGenerator::replying("not json");
        let _ = analyze_resume("resume", &generator, &LlmSettings::default()).await;
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }
}
