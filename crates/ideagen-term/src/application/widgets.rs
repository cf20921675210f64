use ideagen_client::AgentMessage;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::DisplayBlock;
use crate::domain::models::Step;
use crate::domain::services::formatter;

pub const ACCENT: Color = Color::Rgb(0, 82, 155);

const LIST_INDENT: &str = "  ";

pub fn block_lines(blocks: Vec<DisplayBlock>) -> Vec<Line<'static>> {
    return blocks
        .into_iter()
        .map(|block| match block {
            DisplayBlock::Heading(text) => Line::styled(
                text,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            DisplayBlock::IndentedLine(text) => Line::from(format!("{LIST_INDENT}{text}")),
            DisplayBlock::Break => Line::default(),
            DisplayBlock::Paragraph(text) => Line::from(text),
        })
        .collect();
}

pub fn conversation_lines(conversations: &[AgentMessage]) -> Vec<Line<'static>> {
    if conversations.is_empty() {
        return vec![Line::styled(
            "No conversation available yet.",
            Style::default().fg(Color::DarkGray),
        )
        .centered()];
    }

    let mut lines = vec![];
    for conversation in conversations {
        let badge = conversation
            .initial()
            .map(|c| return c.to_string())
            .unwrap_or_else(|| return "?".to_string());

        lines.push(Line::from(vec![
            Span::styled(
                format!(" {badge} "),
                Style::default().fg(Color::White).bg(ACCENT),
            ),
            Span::raw(" "),
            Span::styled(
                conversation.agent.to_uppercase(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.extend(block_lines(formatter::format(&conversation.message)));
        lines.push(Line::default());
    }

    return lines;
}

pub fn tab_titles(steps: &[(Step, bool)]) -> Vec<Line<'static>> {
    return steps
        .iter()
        .enumerate()
        .map(|(idx, (step, enabled))| {
            let style = if *enabled {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            return Line::styled(format!("F{} {step}", idx + 1), style);
        })
        .collect();
}
