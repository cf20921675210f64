use ideagen_client::AgentMessage;
use ideagen_client::GenerationResult;

use crate::domain::models::DisplayBlock;
use crate::domain::services::formatter;

pub fn render_blocks(blocks: &[DisplayBlock]) -> String {
    return blocks
        .iter()
        .map(|block| match block {
            DisplayBlock::Heading(text) => format!("## {}", text.trim()),
            DisplayBlock::IndentedLine(text) => format!("  {text}"),
            DisplayBlock::Break => String::new(),
            DisplayBlock::Paragraph(text) => text.to_string(),
        })
        .collect::<Vec<String>>()
        .join("\n");
}

pub fn render_conversation(conversations: &[AgentMessage]) -> String {
    if conversations.is_empty() {
        return "No conversation available yet.".to_string();
    }

    return conversations
        .iter()
        .map(|conversation| {
            let badge = conversation.initial().unwrap_or('?');
            return format!(
                "[{badge}] {}\n{}",
                conversation.agent.to_uppercase(),
                render_blocks(&formatter::format(&conversation.message))
            );
        })
        .collect::<Vec<String>>()
        .join("\n\n");
}

/// Plain-text report of a generation, conversation first.
pub fn render_result(result: &GenerationResult) -> String {
    return format!(
        "=== Agent Conversation ===\n\n{}\n\n=== Final Document ===\n\n{}\n",
        render_conversation(&result.conversations),
        result.final_document
    );
}
