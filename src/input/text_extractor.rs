//! Text extraction from various file formats

use crate::error::{AtsScorerError, Result};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        let display = path.display().to_string();

        // pdf-extract is CPU bound, keep it off the async workers
        tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
                AtsScorerError::PdfExtraction(format!(
                    "Failed to extract text from PDF '{}': {}",
                    display, e
                ))
            })
        })
        .await
        .map_err(|e| AtsScorerError::Processing(format!("PDF extraction task failed: {}", e)))?
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path).await?)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Strip Markdown markup, keeping one block per line.
///
/// Headings come out underlined with `=` and list items as `- item` lines,
/// so a Markdown resume keeps the structure the style score looks for.
pub fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::new();
    let mut heading_start = 0;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading(..)) => {
                if !text.is_empty() && !text.ends_with('\n') {
                    text.push('\n');
                }
                heading_start = text.len();
            }
            Event::End(Tag::Heading(..)) => {
                let width = text[heading_start..].trim().chars().count().max(1);
                text.push('\n');
                text.push_str(&"=".repeat(width));
                text.push('\n');
            }
            Event::Start(Tag::Item) => {
                if !text.is_empty() && !text.ends_with('\n') {
                    text.push('\n');
                }
                text.push_str("- ");
            }
            Event::End(Tag::Paragraph)
            | Event::End(Tag::Item)
            | Event::End(Tag::CodeBlock(_))
            | Event::End(Tag::TableRow)
            | Event::HardBreak => text.push('\n'),
            Event::Text(content) | Event::Code(content) => text.push_str(&content),
            Event::SoftBreak => text.push(' '),
            _ => {}
        }
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_headings_and_paragraphs() {
        let text = markdown_to_text("# Summary\n\nBackend **engineer** with `Rust`\nand Go.\n");
        assert_eq!(text, "Summary\n=======\nBackend engineer with Rust and Go.");
    }

    #[test]
    fn test_markdown_lists_keep_bullets() {
        let text = markdown_to_text("## Skills\n\n- Python\n- Leadership\n  - Mentoring\n");
        assert_eq!(text, "Skills\n======\n- Python\n- Leadership\n- Mentoring");
    }

    #[test]
    fn test_markdown_setext_heading_keeps_underline() {
        let text = markdown_to_text("Experience\n==========\n\nShipped **things**\n");
        assert_eq!(text, "Experience\n==========\nShipped things");
    }

    #[test]
    fn test_markdown_links_keep_label() {
        let text = markdown_to_text("See [my site](https://example.com).");
        assert_eq!(text, "See my site.");
    }

    #[test]
    fn test_markdown_empty() {
        assert_eq!(markdown_to_text(""), "");
    }
}
