//! Conversation-Starter Generator.
//!
//! Flow: resolve placeholders → build prompt → try each model variant in order →
//! parse lines → fall back to local templates if nothing usable came back.
//!
//! The local templates only echo the employer and role they were given, so the
//! fallback cannot invent facts.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::llm_client::prompts::GROUNDING_INSTRUCTION;
use crate::llm_client::TextGenerator;
use crate::starters::prompts::STARTERS_PROMPT_TEMPLATE;

/// Model variants, tried in order until one returns text.
pub const MODEL_VARIANTS: &[&str] = &["gpt-4o-mini", "gpt-4o"];

pub const MAX_STARTERS: usize = 3;

pub const EMPLOYER_PLACEHOLDER: &str = "this employer";
pub const ROLE_PLACEHOLDER: &str = "this role";

/// Produces conversation starters, preferring the LLM backend when one is configured.
#[derive(Clone)]
pub struct StarterGenerator {
    /// `None` when no generation credential is configured.
    backend: Option<Arc<dyn TextGenerator>>,
}

impl StarterGenerator {
    pub fn new(backend: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { backend }
    }

    /// Always returns exactly `MAX_STARTERS` non-empty starters. A short LLM reply
    /// is topped up from the local templates at the missing positions.
    pub async fn generate(&self, employer: Option<&str>, role: Option<&str>) -> Vec<String> {
        let employer = or_placeholder(employer, EMPLOYER_PLACEHOLDER);
        let role = or_placeholder(role, ROLE_PLACEHOLDER);

        let prompt = build_prompt(employer, role);
        match self.generate_remote(&prompt).await {
            Some(mut lines) if !lines.is_empty() => {
                let have = lines.len();
                lines.extend(local_starters(employer, role).into_iter().skip(have));
                lines
            }
            Some(_) => {
                warn!("LLM reply had no usable lines; using local starters");
                local_starters(employer, role)
            }
            None => local_starters(employer, role),
        }
    }

    /// Tries each model variant until one answers with text. The first textual
    /// answer ends the loop even if it parses to nothing.
    async fn generate_remote(&self, prompt: &str) -> Option<Vec<String>> {
        let Some(backend) = &self.backend else {
            info!("No generation credential configured; using local starters");
            return None;
        };

        for model in MODEL_VARIANTS {
            debug!("Requesting starters from {model}");
            match backend.complete(model, prompt).await {
                Ok(text) => return Some(parse_starter_lines(&text)),
                Err(e) => warn!("Starter generation with {model} failed: {e}"),
            }
        }

        warn!(
            "All {} model variants failed; using local starters",
            MODEL_VARIANTS.len()
        );
        None
    }
}

fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(placeholder)
}

pub fn build_prompt(employer: &str, role: &str) -> String {
    let template =
        STARTERS_PROMPT_TEMPLATE.replace("{grounding_instruction}", GROUNDING_INSTRUCTION);
    fill_placeholders(&template, &[("{employer}", employer), ("{role}", role)])
}

/// Single left-to-right pass, so substituted text is never scanned again.
fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    loop {
        let next = values
            .iter()
            .filter_map(|&(key, value)| rest.find(key).map(|at| (at, key, value)))
            .min_by_key(|&(at, _, _)| at);
        let Some((at, key, value)) = next else {
            break;
        };
        out.push_str(&rest[..at]);
        out.push_str(value);
        rest = &rest[at + key.len()..];
    }
    out.push_str(rest);
    out
}

/// Splits an LLM reply into at most `MAX_STARTERS` clean lines.
/// Bullet markers, ordinals like `1.` / `2)` and wrapping quotes are stripped.
pub fn parse_starter_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            let line =
                line.trim_matches(|c: char| matches!(c, '-' | '•' | '*') || c.is_whitespace());
            strip_ordinal(line).trim().trim_matches('"').trim()
        })
        .filter(|line| !line.is_empty())
        .take(MAX_STARTERS)
        .map(str::to_string)
        .collect()
}

fn strip_ordinal(line: &str) -> &str {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return line;
    }
    let rest = &line[digits..];
    rest.strip_prefix('.')
        .or_else(|| rest.strip_prefix(')'))
        .filter(|after| after.is_empty() || after.starts_with(char::is_whitespace))
        .unwrap_or(line)
}

/// Deterministic starters used whenever the LLM path yields nothing.
pub fn local_starters(employer: &str, role: &str) -> Vec<String> {
    vec![
        format!("What skills matter most for success in {role} at {employer}?"),
        "Which teams would I collaborate with most as an intern?".to_string(),
        "How do you support learning and feedback in the first 8–12 weeks?".to_string(),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays canned replies in order and records which models were asked.
    struct ScriptedBackend {
        replies: Mutex<VecDeque<Result<String, LlmError>>>,
        models: Mutex<Vec<String>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedBackend {
        fn new(replies: Vec<Result<String, LlmError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                models: Mutex::new(Vec::new()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn models(&self) -> Vec<String> {
            self.models.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedBackend {
        async fn complete(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
            self.models.lock().unwrap().push(model.to_string());
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(LlmError::EmptyContent))
        }
    }

    fn with_backend(backend: Arc<ScriptedBackend>) -> StarterGenerator {
        StarterGenerator::new(Some(backend as Arc<dyn TextGenerator>))
    }

    #[tokio::test]
    async fn test_no_credential_uses_local_templates() {
        let generator = StarterGenerator::new(None);
        let starters = generator.generate(Some("Acme"), Some("Data Analyst")).await;
        assert_eq!(starters, local_starters("Acme", "Data Analyst"));
        assert_eq!(starters.len(), 3);
    }

    #[tokio::test]
    async fn test_missing_names_use_placeholders() {
        let generator = StarterGenerator::new(None);
        let starters = generator.generate(None, Some("  ")).await;
        assert_eq!(
            starters[0],
            "What skills matter most for success in this role at this employer?"
        );
        assert!(starters.iter().all(|s| !s.is_empty()));
    }

    #[tokio::test]
    async fn test_first_model_success_is_used() {
        let backend = ScriptedBackend::new(vec![Ok(
            "- Ask about the team\n- Ask about mentoring\n- Ask about projects".to_string(),
        )]);
        let starters = with_backend(backend.clone())
            .generate(Some("Acme"), Some("Intern"))
            .await;

        assert_eq!(
            starters,
            vec!["Ask about the team", "Ask about mentoring", "Ask about projects"]
        );
        assert_eq!(backend.models(), vec!["gpt-4o-mini"]);
    }

    #[tokio::test]
    async fn test_failed_model_falls_through_to_next_variant() {
        let backend = ScriptedBackend::new(vec![
            Err(LlmError::Api {
                status: 404,
                message: "model not found".to_string(),
            }),
            Ok("1. What does a typical week look like?".to_string()),
        ]);
        let starters = with_backend(backend.clone()).generate(None, None).await;

        assert_eq!(starters.len(), MAX_STARTERS);
        assert_eq!(starters[0], "What does a typical week look like?");
        assert_eq!(backend.models(), vec!["gpt-4o-mini", "gpt-4o"]);
    }

    #[tokio::test]
    async fn test_all_variants_failing_uses_local_templates() {
        let backend = ScriptedBackend::new(vec![
            Err(LlmError::EmptyContent),
            Err(LlmError::EmptyContent),
        ]);
        let starters = with_backend(backend.clone())
            .generate(Some("Globex"), None)
            .await;

        assert_eq!(starters, local_starters("Globex", ROLE_PLACEHOLDER));
        assert_eq!(backend.models().len(), MODEL_VARIANTS.len());
    }

    #[tokio::test]
    async fn test_blank_reply_uses_local_without_trying_next_model() {
        let backend = ScriptedBackend::new(vec![Ok(" \n - \n".to_string())]);
        let starters = with_backend(backend.clone())
            .generate(Some("Acme"), Some("Chef"))
            .await;

        assert_eq!(starters, local_starters("Acme", "Chef"));
        assert_eq!(backend.models(), vec!["gpt-4o-mini"]);
    }

    #[tokio::test]
    async fn test_prompt_names_inputs_and_forbids_invention() {
        let backend = ScriptedBackend::new(vec![Ok("Hi".to_string())]);
        with_backend(backend.clone())
            .generate(Some("Acme"), Some("Data Analyst"))
            .await;

        let prompts = backend.prompts.lock().unwrap();
        assert!(prompts[0].contains("'Acme'"));
        assert!(prompts[0].contains("'Data Analyst'"));
        assert!(prompts[0].contains("avoid inventing facts"));
        assert!(prompts[0].contains("under 18 words"));
    }

    #[tokio::test]
    async fn test_short_reply_is_topped_up_from_local_templates() {
        let backend = ScriptedBackend::new(vec![Ok("- Ask about the team".to_string())]);
        let starters = with_backend(backend).generate(Some("Acme"), Some("Chef")).await;

        let local = local_starters("Acme", "Chef");
        assert_eq!(
            starters,
            vec!["Ask about the team".to_string(), local[1].clone(), local[2].clone()]
        );
    }

    #[test]
    fn test_parse_keeps_at_most_three() {
        let lines = parse_starter_lines("a\nb\nc\nd\ne");
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_strips_markers_and_blank_lines() {
        let text = "• First question?\n\n  * Second question?  \n\"Third question?\"";
        assert_eq!(
            parse_starter_lines(text),
            vec!["First question?", "Second question?", "Third question?"]
        );
    }

    #[test]
    fn test_parse_strips_ordinals_but_not_leading_numbers() {
        let text = "1. One\n2) Two\n18 months of mentoring?";
        assert_eq!(
            parse_starter_lines(text),
            vec!["One", "Two", "18 months of mentoring?"]
        );
    }

    #[test]
    fn test_parse_keeps_decimal_numbers_intact() {
        let text = "1.5 years of mentoring?\n2)Two\n3. Three";
        assert_eq!(
            parse_starter_lines(text),
            vec!["1.5 years of mentoring?", "2)Two", "Three"]
        );
    }

    #[test]
    fn test_prompt_does_not_expand_placeholders_inside_names() {
        let prompt = build_prompt("{role} {grounding_instruction} Inc", "Analyst");
        assert!(prompt.contains("'{role} {grounding_instruction} Inc'"));
        assert!(prompt.contains("role 'Analyst'"));
        assert_eq!(prompt.matches("avoid inventing facts").count(), 1);
    }

    #[test]
    fn test_local_starters_are_three_and_non_empty() {
        let starters = local_starters(EMPLOYER_PLACEHOLDER, ROLE_PLACEHOLDER);
        assert_eq!(starters.len(), MAX_STARTERS);
        assert!(starters.iter().all(|s| !s.trim().is_empty()));
    }
}
