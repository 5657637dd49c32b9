/// Cue appended to a prompt to elicit intermediate reasoning steps.
pub const REASONING_CUE: &str = "Let's think step by step.";

/// Builder for flat text prompts in the styles the demos compare.
///
/// The endpoint takes raw text, so few-shot examples are rendered as
/// `Q:`/`A:` pairs ahead of the query, leaving a trailing `A:` for the model
/// to continue.
#[derive(Debug, Clone, Default)]
pub struct Prompt {
    instruction: Option<String>,
    examples: Vec<(String, String)>,
    query: Option<String>,
    reasoning_cue: bool,
}

impl Prompt {
    /// Start from a standalone instruction or task description.
    pub fn instruction(text: impl Into<String>) -> Self {
        Self {
            instruction: Some(text.into()),
            ..Self::default()
        }
    }

    /// Start from a bare question (zero-shot).
    pub fn question(text: impl Into<String>) -> Self {
        Self {
            query: Some(text.into()),
            ..Self::default()
        }
    }

    /// Add a worked input/output example (few-shot).
    pub fn with_example(mut self, input: impl Into<String>, output: impl Into<String>) -> Self {
        self.examples.push((input.into(), output.into()));
        self
    }

    /// Set the actual query that follows the examples.
    pub fn with_query(mut self, text: impl Into<String>) -> Self {
        self.query = Some(text.into());
        self
    }

    /// Append [`REASONING_CUE`] after the final `A:` (chain-of-thought).
    pub fn with_reasoning_cue(mut self) -> Self {
        self.reasoning_cue = true;
        self
    }

    /// Render the prompt to the flat string sent to the endpoint.
    pub fn render(&self) -> String {
        let mut sections = Vec::new();

        if let Some(instruction) = &self.instruction {
            sections.push(instruction.clone());
        }

        for (input, output) in &self.examples {
            sections.push(format!("Q: {input}\nA: {output}"));
        }

        if let Some(query) = &self.query {
            let answer = if self.reasoning_cue {
                format!("A: {REASONING_CUE}")
            } else {
                "A:".to_string()
            };
            sections.push(format!("Q: {query}\n{answer}"));
        }

        sections.join("\n\n")
    }
}

impl From<&str> for Prompt {
    fn from(s: &str) -> Self {
        Prompt::question(s)
    }
}

impl From<String> for Prompt {
    fn from(s: String) -> Self {
        Prompt::question(s)
    }
}
