//! Markdown report rendering for a completed run.

use crate::domain::{ModelOutcome, Outcome};

/// Render a run as a Markdown document.
///
/// The document has a top-level title, the verbatim prompt in a fenced
/// block, and one section per outcome in the given order.
pub fn render_markdown(title: &str, prompt: &str, outcomes: &[ModelOutcome]) -> String {
    let mut lines: Vec<String> = vec![
        format!("# {title}"),
        String::new(),
        "## Prompt".to_string(),
        "```".to_string(),
        prompt.trim().to_string(),
        "```".to_string(),
        String::new(),
    ];

    for result in outcomes {
        lines.push("---".to_string());
        lines.push(String::new());
        lines.push(format!("### {}", result.model));
        lines.push(String::new());

        match &result.outcome {
            Outcome::Completed {
                content,
                input_tokens,
                output_tokens,
            } => {
                lines.push(content.clone());
                lines.push(String::new());
                lines.push(format!("*Tokens: {input_tokens} in / {output_tokens} out*"));
            }
            Outcome::Failed { error } => {
                lines.push(format!("**ERROR:** {error}"));
            }
        }

        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_prompt_block() {
        let doc = render_markdown("greeting", "  Say hi\n", &[]);
        assert_eq!(doc, "# greeting\n\n## Prompt\n```\nSay hi\n```\n");
    }

    #[test]
    fn test_sections_follow_input_order() {
        let outcomes = vec![
            ModelOutcome::completed("m/a", "Hi!", 3, 2),
            ModelOutcome::failed("m/b", "HTTP 429: rate limited"),
        ];
        let doc = render_markdown("greeting", "Say hi", &outcomes);

        let a = doc.find("### m/a").unwrap();
        let b = doc.find("### m/b").unwrap();
        assert!(a < b);
        assert!(doc.contains("Hi!\n\n*Tokens: 3 in / 2 out*"));
        assert!(doc.contains("**ERROR:** HTTP 429: rate limited"));
        assert_eq!(doc.matches("---").count(), 2);
    }
}
