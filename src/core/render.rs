//! HTML assembly

use super::content::ContentBlock;
use crate::utils::error::{ForgeError, Result};
use pulldown_cmark::{Parser, escape::escape_html, html};

const IMAGE_STYLE: &str = "max-width: 100%; height: auto; display: block; margin: 2em auto;";

/// Render an article: escaped `<h1>` title, paragraphs as Markdown, and an
/// `<img>` for each image block that has data. Image blocks without data are
/// left out.
pub fn render_html(title: &str, blocks: &[ContentBlock]) -> Result<String> {
    let mut out = String::from("<h1>");
    escape(&mut out, title)?;
    out.push_str("</h1>\n\n");

    for block in blocks {
        match block {
            ContentBlock::Paragraph { text } => {
                html::push_html(&mut out, Parser::new(text));
            }
            ContentBlock::Image {
                source_prompt,
                encoded_data: Some(data),
                ..
            } => {
                out.push_str("<img src=\"");
                escape(&mut out, data)?;
                out.push_str("\" alt=\"");
                escape(&mut out, source_prompt)?;
                out.push_str("\" style=\"");
                out.push_str(IMAGE_STYLE);
                out.push_str("\"/>\n\n");
            }
            ContentBlock::Image { .. } => {}
        }
    }

    Ok(out)
}

fn escape(out: &mut String, text: &str) -> Result<()> {
    escape_html(&mut *out, text).map_err(|e| ForgeError::Render(e.to_string()))
}
