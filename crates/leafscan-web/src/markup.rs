//! Rendering for the inline Markdown used in advisory text.

/// Escape `text` for HTML and turn `**strong**` and `*em*` spans into tags.
///
/// Unpaired markers are kept literally.
pub fn inline_markdown(text: &str) -> String {
    let escaped = escape_html(text);
    let mut out = String::with_capacity(escaped.len() + 32);
    let mut rest = escaped.as_str();

    while let Some(start) = rest.find('*') {
        out.push_str(&rest[..start]);
        let (marker, tag) = if rest[start..].starts_with("**") {
            ("**", "strong")
        } else {
            ("*", "em")
        };
        let after = &rest[start + marker.len()..];
        match after.find(marker) {
            Some(end) if end > 0 => {
                out.push('<');
                out.push_str(tag);
                out.push('>');
                out.push_str(&after[..end]);
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
                rest = &after[end + marker.len()..];
            }
            _ => {
                out.push_str(marker);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_and_em() {
        assert_eq!(
            inline_markdown("From *Alternaria solani*. **Prevention:** rotate."),
            "From <em>Alternaria solani</em>. <strong>Prevention:</strong> rotate."
        );
    }

    #[test]
    fn escapes_before_markup() {
        assert_eq!(
            inline_markdown(r#"an open "vase" <shape> & **more**"#),
            "an open &quot;vase&quot; &lt;shape&gt; &amp; <strong>more</strong>"
        );
    }

    #[test]
    fn unpaired_marker_kept() {
        assert_eq!(inline_markdown("5 * 3"), "5 * 3");
        assert_eq!(inline_markdown("**open"), "**open");
    }

    #[test]
    fn every_advisory_balances() {
        let labels = leafscan_core::LabelSet::plant_village();
        let table = leafscan_core::AdvisoryTable::global();
        for name in labels.iter() {
            let html = inline_markdown(table.get_or_fallback(name));
            assert!(!html.contains('*'), "stray marker in {name}: {html}");
            assert_eq!(
                html.matches("<strong>").count(),
                html.matches("</strong>").count()
            );
        }
    }
}
