//! Prompt service implementation.
//!
//! The PromptService exposes the registry to MCP clients. It advertises a
//! single parameterized `sat_question` prompt and resolves it through the
//! [`PromptRegistry`], rendering the template with the caller's arguments.

use rmcp::model::{GetPromptResult, Prompt, PromptArgument, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use super::error::PromptError;
use super::key::RegistryKey;
use super::record::Difficulty;
use super::registry::PromptRegistry;
use super::templates::PromptTemplate;

/// Name of the question-generation prompt.
pub const SAT_QUESTION_PROMPT: &str = "sat_question";

const REQUIRED_ARGS: [(&str, &str); 3] = [
    ("skill", "Tested skill, e.g. \"Words in Context\""),
    ("domain", "Skill domain, e.g. \"Craft and Structure\""),
    ("difficulty", "One of: easy, medium, hard"),
];

const OPTIONAL_ARGS: [(&str, &str); 2] = [
    ("topic", "Subject area for the passage or word problem"),
    ("count", "Number of questions to generate (default 1)"),
];

/// Service translating MCP prompt requests into registry lookups.
pub struct PromptService {
    registry: Arc<PromptRegistry>,
}

impl PromptService {
    pub fn new(registry: Arc<PromptRegistry>) -> Self {
        info!("Initializing PromptService");
        Self { registry }
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        let arguments = REQUIRED_ARGS
            .iter()
            .map(|&(name, description)| argument(name, description, true))
            .chain(
                OPTIONAL_ARGS
                    .iter()
                    .map(|&(name, description)| argument(name, description, false)),
            )
            .collect();

        vec![Prompt {
            name: SAT_QUESTION_PROMPT.to_string(),
            title: Some("SAT practice question".to_string()),
            description: Some(
                "Instructions for generating SAT-style practice questions for a skill, \
                 domain and difficulty"
                    .to_string(),
            ),
            arguments: Some(arguments),
            icons: None,
            meta: None,
        }]
    }

    /// Resolve and render the `sat_question` prompt.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        if name != SAT_QUESTION_PROMPT {
            return Err(PromptError::not_found(name));
        }

        let mut arguments = arguments.unwrap_or_default();
        for (arg, _) in REQUIRED_ARGS {
            if arguments.get(arg).is_none_or(|v| v.trim().is_empty()) {
                return Err(PromptError::missing_argument(arg));
            }
        }

        let skill = arguments["skill"].clone();
        let domain = arguments["domain"].clone();
        let difficulty: Difficulty = arguments["difficulty"].parse()?;

        let template = self
            .registry
            .get_prompt(&skill, &domain, difficulty)
            .await?
            .ok_or_else(|| {
                PromptError::not_found(RegistryKey::new(&skill, &domain, difficulty).to_string())
            })?;
        debug!("Rendering prompt {} / {} / {}", skill, domain, difficulty);

        arguments
            .entry("count".to_string())
            .or_insert_with(|| "1".to_string());
        let content = PromptTemplate::new(template.as_ref()).render(&arguments)?;

        Ok(GetPromptResult {
            description: Some(format!("{skill} ({domain}), {difficulty}")),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }
}

fn argument(name: &str, description: &str, required: bool) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(required),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::PromptMessageContent;

    fn service() -> PromptService {
        PromptService::new(Arc::new(PromptRegistry::builtin()))
    }

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn text_of(result: &GetPromptResult) -> &str {
        match &result.messages[0].content {
            PromptMessageContent::Text { text } => text,
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_prompts() {
        let prompts = service().list_prompts().await;
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].name, SAT_QUESTION_PROMPT);

        let arguments = prompts[0].arguments.as_ref().unwrap();
        assert_eq!(arguments.len(), 5);
        assert_eq!(arguments.iter().filter(|a| a.required == Some(true)).count(), 3);
    }

    #[tokio::test]
    async fn test_get_prompt_renders_template() {
        let result = service()
            .get_prompt(
                SAT_QUESTION_PROMPT,
                Some(args(&[
                    ("skill", "words in context"),
                    ("domain", "Craft and Structure"),
                    ("difficulty", "Hard"),
                    ("topic", "marine biology"),
                    ("count", "4"),
                ])),
            )
            .await
            .unwrap();

        let text = text_of(&result);
        assert!(text.contains("Skill: Words in Context"));
        assert!(text.contains("Difficulty: hard"));
        assert!(text.contains("marine biology"));
        assert!(text.contains("Produce 4 question(s)"));
        assert!(!text.contains("{{"));
    }

    #[tokio::test]
    async fn test_get_prompt_defaults() {
        let result = service()
            .get_prompt(
                SAT_QUESTION_PROMPT,
                Some(args(&[
                    ("skill", "Circles"),
                    ("domain", "Geometry and Trigonometry"),
                    ("difficulty", "easy"),
                ])),
            )
            .await
            .unwrap();

        let text = text_of(&result);
        assert!(text.contains("Produce 1 question(s)"));
        assert!(!text.contains("subject area"));
    }

    #[tokio::test]
    async fn test_get_prompt_missing_required_argument() {
        let result = service()
            .get_prompt(SAT_QUESTION_PROMPT, Some(args(&[("skill", "Circles")])))
            .await;
        assert!(matches!(result, Err(PromptError::MissingArgument(_))));
    }

    #[tokio::test]
    async fn test_get_prompt_invalid_difficulty() {
        let result = service()
            .get_prompt(
                SAT_QUESTION_PROMPT,
                Some(args(&[
                    ("skill", "Circles"),
                    ("domain", "Geometry and Trigonometry"),
                    ("difficulty", "extreme"),
                ])),
            )
            .await;
        assert!(matches!(result, Err(PromptError::InvalidDifficulty(_))));
    }

    #[tokio::test]
    async fn test_get_prompt_unknown_skill() {
        let result = service()
            .get_prompt(
                SAT_QUESTION_PROMPT,
                Some(args(&[
                    ("skill", "Calculus"),
                    ("domain", "Advanced Math"),
                    ("difficulty", "easy"),
                ])),
            )
            .await;
        match result {
            Err(PromptError::NotFound(key)) => assert_eq!(key, "calculus/advanced-math/easy"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_nonexistent_prompt() {
        let result = service().get_prompt("greeting", None).await;
        assert!(matches!(result, Err(PromptError::NotFound(_))));
    }
}
