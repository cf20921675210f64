/// One classified line of an agent message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayBlock {
    Heading(String),
    IndentedLine(String),
    Break,
    Paragraph(String),
}
