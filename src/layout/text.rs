use crate::canvas::{Canvas, SpanFont, SpanLayout, TextStyle};
use crate::document::Document;
use crate::units::Px;

/// Wrap `text` into display lines that each measure at most `max_width`
/// under `measure`.
///
/// Explicit newlines split the text into paragraphs; each paragraph is
/// wrapped independently and an empty paragraph contributes exactly one
/// empty line, preserving blank lines and vertical spacing. Within a
/// paragraph, whitespace-delimited tokens are accumulated greedily with a
/// single space reinserted between them; a token too wide to fit on a line
/// by itself is split character-by-character.
///
/// `measure` must return the rendered width of a string at the current
/// font and size, and is assumed monotonic-nondecreasing under character
/// append. The output is deterministic, and no line measures wider than
/// `max_width` except a single character that alone exceeds it, which is
/// emitted anyway so that layout always makes forward progress.
pub fn wrap<F>(text: &str, measure: F, max_width: Px) -> Vec<String>
where
    F: Fn(&str) -> Px,
{
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, &measure, max_width, &mut lines);
    }
    lines
}

fn wrap_paragraph<F>(paragraph: &str, measure: &F, max_width: Px, lines: &mut Vec<String>)
where
    F: Fn(&str) -> Px,
{
    let emitted_before = lines.len();
    let mut current = String::new();

    for word in paragraph.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if measure(&candidate) <= max_width {
            current = candidate;
        } else if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            if measure(word) > max_width {
                current = fill_chars(word, measure, max_width, lines);
            } else {
                current = word.to_string();
            }
        } else {
            // a single token already too wide on an empty line
            current = fill_chars(word, measure, max_width, lines);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    } else if lines.len() == emitted_before {
        // empty or whitespace-only paragraph: one empty line
        lines.push(String::new());
    }
}

/// Greedily fill lines character-by-character from a word too wide to fit
/// on a line of its own. Full lines are emitted; the last partial fill is
/// returned as the new current line.
fn fill_chars<F>(word: &str, measure: &F, max_width: Px, lines: &mut Vec<String>) -> String
where
    F: Fn(&str) -> Px,
{
    let mut current = String::new();
    for ch in word.chars() {
        let mut candidate = current.clone();
        candidate.push(ch);
        if measure(&candidate) > max_width {
            if !current.is_empty() {
                lines.push(current);
            }
            current = ch.to_string();
        } else {
            current = candidate;
        }
    }
    current
}

/// The vertical distance from one line's top anchor to the next
pub fn line_height(font_size: Px, multiplier: f32) -> Px {
    font_size * multiplier
}

/// The top anchor of line `index` (zero-indexed): `index * line_height + top`.
///
/// Anyone measuring or rendering the same text must use this same formula
/// so that an interactive text-entry surface and the rendered output stay
/// pixel-aligned.
pub fn line_offset(index: usize, line_height: Px, top: Px) -> Px {
    line_height * index as f32 + top
}

/// Perform one full layout pass: wrap `text` to the width of the canvas's
/// content box using the style's font and size, and place one span per
/// line at the content box's left edge and the line's vertical offset.
///
/// Any spans from a previous layout pass are replaced; every triggering
/// event (text, font, size, line-height, or resize) re-lays-out from
/// scratch.
pub fn layout_text(document: &Document, canvas: &mut Canvas, style: &TextStyle, text: &str) {
    let font = &document.fonts[style.font];
    let max_width = canvas.content_box.width();
    let lh = line_height(style.size, style.line_height);

    let lines = wrap(text, |s| font.width_of_text(s, style.size), max_width);
    log::debug!(
        "laid out {} line(s) at {}px line height",
        lines.len(),
        lh.0
    );

    canvas.clear_spans();
    for (index, line) in lines.into_iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        canvas.add_span(SpanLayout {
            text: line,
            font: SpanFont {
                id: style.font,
                size: style.size,
            },
            colour: style.colour,
            coords: (
                canvas.content_box.x1,
                line_offset(index, lh, canvas.content_box.y1),
            ),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ten pixels per character, like a monospaced font
    fn measure(s: &str) -> Px {
        Px(s.chars().count() as f32 * 10.0)
    }

    #[test]
    fn empty_text_yields_one_empty_line() {
        assert_eq!(wrap("", measure, Px(50.0)), vec![String::new()]);
    }

    #[test]
    fn whitespace_only_yields_one_empty_line_per_paragraph() {
        assert_eq!(wrap("   ", measure, Px(50.0)), vec![String::new()]);
        assert_eq!(
            wrap(" \n  ", measure, Px(50.0)),
            vec![String::new(), String::new()]
        );
    }

    #[test]
    fn fitting_paragraph_is_one_line() {
        assert_eq!(wrap("hello", measure, Px(50.0)), vec!["hello"]);
    }

    #[test]
    fn blank_lines_are_preserved() {
        assert_eq!(wrap("a\n\nb", measure, Px(50.0)), vec!["a", "", "b"]);
    }

    #[test]
    fn greedy_word_wrap() {
        // maxWidth = 5 characters
        assert_eq!(
            wrap("aaaaa aaaaa", measure, Px(50.0)),
            vec!["aaaaa", "aaaaa"]
        );
    }

    #[test]
    fn overlong_word_splits_by_characters() {
        assert_eq!(wrap("aaaaaa", measure, Px(50.0)), vec!["aaaaa", "a"]);
    }

    #[test]
    fn overlong_word_after_a_full_line() {
        // "ab" fits, "cdefghijklm" must be split character-by-character
        assert_eq!(
            wrap("ab cdefghijklm", measure, Px(50.0)),
            vec!["ab", "cdefg", "hijkl", "m"]
        );
    }

    #[test]
    fn spaceless_text_fills_minimal_character_lines() {
        let text: String = std::iter::repeat('x').take(23).collect();
        let lines = wrap(&text, measure, Px(50.0));
        assert_eq!(lines.len(), 5);
        for line in &lines[..4] {
            assert_eq!(line.chars().count(), 5);
        }
        assert_eq!(lines[4].chars().count(), 3);
        for line in &lines {
            assert!(measure(line) <= Px(50.0));
        }
    }

    #[test]
    fn single_overwide_character_is_emitted_alone() {
        // each character measures 10, wider than the 5px line
        let lines = wrap("abc", measure, Px(5.0));
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn no_emitted_line_is_empty_except_blank_paragraphs() {
        let lines = wrap("word\n\n  \nanother longish paragraph", measure, Px(70.0));
        let blank_count = lines.iter().filter(|l| l.is_empty()).count();
        assert_eq!(blank_count, 2);
    }

    #[test]
    fn rewrapping_an_output_line_is_idempotent() {
        let lines = wrap(
            "the quick brown fox jumps over the lazy dog",
            measure,
            Px(120.0),
        );
        for line in lines {
            assert_eq!(wrap(&line, measure, Px(120.0)), vec![line]);
        }
    }

    #[test]
    fn output_has_at_least_one_line_per_paragraph() {
        let text = "one\ntwo two two two two\n\nthree";
        let paragraphs = text.split('\n').count();
        assert!(wrap(text, measure, Px(50.0)).len() >= paragraphs);
    }

    #[test]
    fn wrapping_is_deterministic() {
        let text = "some text\nwith newlines and a veryverylongword here";
        assert_eq!(
            wrap(text, measure, Px(80.0)),
            wrap(text, measure, Px(80.0))
        );
    }

    #[test]
    fn vertical_placement_formula() {
        let lh = line_height(Px(20.0), 1.8);
        assert_eq!(lh, Px(36.0));
        assert_eq!(line_offset(2, lh, Px(40.0)), Px(112.0));
        assert_eq!(line_offset(0, lh, Px(40.0)), Px(40.0));
    }
}
