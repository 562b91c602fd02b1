//! `<IMAGE>` marker splitting

use super::content::ContentBlock;

/// Marker the article model places where an illustration belongs
pub const IMAGE_MARKER: &str = "<IMAGE>";

/// Subject used for a marker with no text before it
pub const FALLBACK_IMAGE_SUBJECT: &str = "相关场景";

/// Split article text into paragraphs and image slots.
///
/// Every non-empty trimmed part between markers becomes a paragraph. Every
/// marker becomes an image slot, illustrating the text right before it, or the
/// last paragraph when that text is empty, or [`FALLBACK_IMAGE_SUBJECT`]. With
/// `include_images` off the markers are dropped.
pub fn split_article(text: &str, include_images: bool) -> Vec<ContentBlock> {
    let parts: Vec<&str> = text.split(IMAGE_MARKER).collect();
    let last = parts.len().saturating_sub(1);
    let mut blocks = Vec::with_capacity(parts.len() * 2);

    for (i, part) in parts.iter().enumerate() {
        let part = part.trim();
        if !part.is_empty() {
            blocks.push(ContentBlock::paragraph(part));
        }

        if i < last && include_images {
            let subject = match blocks.last() {
                _ if !part.is_empty() => part.to_string(),
                Some(ContentBlock::Paragraph { text }) => text.clone(),
                _ => FALLBACK_IMAGE_SUBJECT.to_string(),
            };
            blocks.push(ContentBlock::image_slot(subject));
        }
    }

    blocks
}
