//! SVG quote card generation.
//!
//! Builds the 1200×630 card as a string, one element at a time. Everything
//! interpolated from quote content goes through [`escape_xml`]; the layout
//! constants are fixed, so the output is fully determined by the quote.

use mymemo_core::{Quote, escape_xml, wrap_text};

use super::{CANVAS_HEIGHT, CANVAS_WIDTH, SITE_NAME};

/// Maximum characters per wrapped quote line.
pub const MAX_LINE_CHARS: usize = 30;

/// Baseline of the first quote line.
const QUOTE_BASE_Y: u32 = 280;

/// Vertical distance between quote lines.
const LINE_HEIGHT: u32 = 60;

/// Gap between the last quote line and the author line.
const AUTHOR_MARGIN: u32 = 60;

/// Gap between the author line and the optional description line.
const DESCRIPTION_MARGIN: u32 = 40;

/// Card tagline under the site name.
const CARD_TAGLINE: &str = "哲学者と学ぶメモ習慣";

/// Render a quote as a complete SVG document.
pub fn quote_svg(quote: &Quote) -> String {
    let lines = wrap_text(quote.text, MAX_LINE_CHARS);
    let author_y = QUOTE_BASE_Y + lines.len() as u32 * LINE_HEIGHT + AUTHOR_MARGIN;

    let mut svg = String::with_capacity(4096);

    svg.push_str(&format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            "\n",
            r#"<svg width="{w}" height="{h}" xmlns="http://www.w3.org/2000/svg">"#,
            "\n",
        ),
        w = CANVAS_WIDTH,
        h = CANVAS_HEIGHT,
    ));

    // Gradient background and dot pattern
    svg.push_str(concat!(
        "<defs>\n",
        r#"<linearGradient id="bgGradient" x1="0%" y1="0%" x2="100%" y2="100%">"#,
        r#"<stop offset="0%" style="stop-color:#667eea;stop-opacity:1"/>"#,
        r#"<stop offset="100%" style="stop-color:#764ba2;stop-opacity:1"/>"#,
        "</linearGradient>\n",
        r#"<pattern id="dots" x="0" y="0" width="60" height="60" patternUnits="userSpaceOnUse">"#,
        r#"<circle cx="15" cy="15" r="2" fill="rgba(255,255,255,0.1)"/>"#,
        "</pattern>\n",
        "</defs>\n",
    ));
    svg.push_str(&format!(
        concat!(
            r#"<rect width="{w}" height="{h}" fill="url(#bgGradient)"/>"#,
            "\n",
            r#"<rect width="{w}" height="{h}" fill="url(#dots)"/>"#,
            "\n",
        ),
        w = CANVAS_WIDTH,
        h = CANVAS_HEIGHT,
    ));

    // Decorative circles and oversized quote marks
    svg.push_str(concat!(
        r#"<circle cx="100" cy="100" r="80" fill="rgba(255,255,255,0.05)"/>"#,
        "\n",
        r#"<circle cx="1100" cy="530" r="100" fill="rgba(255,255,255,0.05)"/>"#,
        "\n",
        r#"<text x="100" y="180" font-size="120" fill="rgba(255,255,255,0.2)" font-weight="bold">&quot;</text>"#,
        "\n",
        r#"<text x="1100" y="560" font-size="120" fill="rgba(255,255,255,0.2)" font-weight="bold" text-anchor="end">&quot;</text>"#,
        "\n",
    ));

    // Wrapped quote lines
    for (index, line) in lines.iter().enumerate() {
        let y = QUOTE_BASE_Y + index as u32 * LINE_HEIGHT;
        svg.push_str(&format!(
            concat!(
                r#"<text x="600" y="{y}" font-size="48" font-weight="bold" fill="white" text-anchor="middle">{line}</text>"#,
                "\n",
            ),
            y = y,
            line = escape_xml(line),
        ));
    }

    // Author line, then the optional description below it
    svg.push_str(&format!(
        concat!(
            r#"<text x="600" y="{y}" font-size="36" fill="rgba(255,255,255,0.95)" text-anchor="middle" font-weight="600">- {author} -</text>"#,
            "\n",
        ),
        y = author_y,
        author = escape_xml(quote.author),
    ));

    if let Some(description) = quote.author_description {
        svg.push_str(&format!(
            concat!(
                r#"<text x="600" y="{y}" font-size="20" fill="rgba(255,255,255,0.75)" text-anchor="middle">{description}</text>"#,
                "\n",
            ),
            y = author_y + DESCRIPTION_MARGIN,
            description = escape_xml(description),
        ));
    }

    // Branding
    svg.push_str(&format!(
        concat!(
            r#"<g transform="translate(600, 570)">"#,
            "\n",
            r#"<text x="0" y="0" font-size="28" font-weight="bold" fill="white" text-anchor="middle">{site}</text>"#,
            "\n",
            r#"<text x="0" y="30" font-size="16" fill="rgba(255,255,255,0.85)" text-anchor="middle">{tagline}</text>"#,
            "\n",
            "</g>\n",
        ),
        site = SITE_NAME,
        tagline = CARD_TAGLINE,
    ));

    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use mymemo_core::QUOTES;

    fn sample_quote() -> Quote {
        Quote {
            id: 17,
            text: "朝起きたら、生きていること、考えること、楽しむこと、愛することの特権を思え",
            author: "マルクス・アウレリウス",
            author_description: Some("ローマ皇帝・ストア派の哲学者"),
        }
    }

    #[test]
    fn svg_has_document_frame() {
        let svg = quote_svg(&sample_quote());
        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(svg.contains(r#"<svg width="1200" height="630""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn svg_contains_author_and_branding() {
        let svg = quote_svg(&sample_quote());
        assert!(svg.contains("- マルクス・アウレリウス -"));
        assert!(svg.contains("ローマ皇帝・ストア派の哲学者"));
        assert!(svg.contains("マイメモ"));
        assert!(svg.contains("哲学者と学ぶメモ習慣"));
    }

    #[test]
    fn quote_text_element_count_matches_wrap() {
        let quote = sample_quote();
        let svg = quote_svg(&quote);
        let expected_lines = wrap_text(quote.text, MAX_LINE_CHARS).len();
        // quote lines + author + description + 2 quote marks + 2 branding texts
        let expected_text_elements = expected_lines + 1 + 1 + 2 + 2;
        assert_eq!(svg.matches("<text").count(), expected_text_elements);
        assert_eq!(svg.matches("</text>").count(), expected_text_elements);
    }

    #[test]
    fn line_placement_follows_fixed_layout() {
        let text: &'static str = Box::leak("あ".repeat(65).into_boxed_str());
        let quote = Quote {
            id: 0,
            text,
            author: "作者",
            author_description: None,
        };
        let svg = quote_svg(&quote);
        // 65 chars wrap to 3 lines at y = 280, 340, 400; author at 400 + 60 + 60
        assert!(svg.contains(r#"y="280" font-size="48""#));
        assert!(svg.contains(r#"y="340" font-size="48""#));
        assert!(svg.contains(r#"y="400" font-size="48""#));
        assert!(svg.contains(r#"y="520" font-size="36""#));
    }

    #[test]
    fn description_omitted_when_absent() {
        let quote = Quote {
            id: 0,
            text: "短い",
            author: "作者",
            author_description: None,
        };
        let svg = quote_svg(&quote);
        assert!(!svg.contains(r#"font-size="20""#));
    }

    #[test]
    fn every_table_quote_renders_with_escaped_content() {
        for quote in QUOTES {
            let svg = quote_svg(quote);
            const KNOWN_OPENERS: &[&str] = &[
                "<?xml", "<svg", "</svg>", "<defs>", "</defs>", "<linearGradient",
                "</linearGradient>", "<stop", "<pattern", "</pattern>", "<circle",
                "<rect", "<text", "</text>", "<g ", "</g>",
            ];
            // Every '<' must open a known element; quote content is escaped.
            for (i, _) in svg.match_indices('<') {
                let rest = &svg[i..];
                assert!(
                    KNOWN_OPENERS.iter().any(|o| rest.starts_with(o)),
                    "unexpected markup at byte {i} in quote {}",
                    quote.id
                );
            }
        }
    }

    #[test]
    fn hostile_quote_content_is_escaped() {
        let quote = Quote {
            id: 0,
            text: "<script>alert('x')</script>",
            author: "\"author\"",
            author_description: Some("desc & <b>bold</b>"),
        };
        let svg = quote_svg(&quote);
        assert!(!svg.contains("<script"));
        assert!(!svg.contains("<b>"));
        assert!(svg.contains("&lt;script&gt;"));
        assert!(svg.contains("&quot;author&quot;"));
        assert!(svg.contains("desc &amp; &lt;b&gt;"));
    }

    #[test]
    fn balanced_table_wide_element_counts() {
        for quote in QUOTES {
            let svg = quote_svg(quote);
            assert_eq!(
                svg.matches("<text").count(),
                svg.matches("</text>").count(),
                "unbalanced text elements for quote {}",
                quote.id
            );
        }
    }
}
