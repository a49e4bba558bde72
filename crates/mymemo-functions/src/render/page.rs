//! HTML share page with social-preview meta tags.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use mymemo_core::Quote;

use super::{CANVAS_HEIGHT, CANVAS_WIDTH, SITE_NAME};

/// Tagline shown under the app name on the fallback card.
const TAGLINE: &str = "哲学者の知恵とともに、メモ習慣を楽しく継続";

/// Call-to-action label on the fallback card.
const CTA_LABEL: &str = "🎮 マイメモで学びの習慣を始める";

/// Inline CSS for the share page.
const SHARE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI","Helvetica Neue",Arial,sans-serif;background:linear-gradient(135deg,#667eea 0%,#764ba2 100%);min-height:100vh;display:flex;align-items:center;justify-content:center;padding:20px;color:white}
.container{max-width:800px;width:100%;background:rgba(255,255,255,.1);backdrop-filter:blur(10px);border-radius:24px;padding:60px 40px;box-shadow:0 20px 60px rgba(0,0,0,.3);text-align:center}
.quote-icon{font-size:48px;margin-bottom:20px;opacity:.9}
.quote-text{font-size:28px;line-height:1.6;margin-bottom:30px;font-weight:500;text-shadow:0 2px 10px rgba(0,0,0,.2)}
.quote-author{font-size:20px;margin-bottom:10px;opacity:.9;font-weight:600}
.author-description{font-size:14px;opacity:.7;margin-bottom:40px}
.cta-button{display:inline-block;background:white;color:#667eea;padding:16px 40px;border-radius:50px;text-decoration:none;font-weight:bold;font-size:18px;box-shadow:0 10px 30px rgba(0,0,0,.2);transition:transform .3s ease,box-shadow .3s ease}
.cta-button:hover{transform:translateY(-2px);box-shadow:0 15px 40px rgba(0,0,0,.3)}
.app-name{margin-top:40px;font-size:24px;font-weight:bold;opacity:.95}
.app-tagline{margin-top:10px;font-size:16px;opacity:.8}
@media(max-width:768px){
.container{padding:40px 24px}
.quote-text{font-size:22px}
.quote-author{font-size:18px}
.cta-button{font-size:16px;padding:14px 32px}
}
"#;

/// Render the complete share page for a quote.
///
/// `image_url` is the matching `generate-quote-image` URL for the resolved
/// id; `canonical_url` is this page's own URL; `app_url` is the web app the
/// call-to-action links to. All quote-derived text passes through maud's
/// automatic escaping, so hostile quote content cannot inject markup.
pub fn share_page(quote: &Quote, image_url: &str, canonical_url: &str, app_url: &str) -> Markup {
    let og_title = format!("💭 今日の名言 - {}", quote.author);
    let page_title = format!("💭 {}の名言 | {SITE_NAME}", quote.author);
    let image_alt = format!("{}の名言", quote.author);

    html! {
        (DOCTYPE)
        html lang="ja" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";

                // Open Graph
                meta property="og:type" content="website";
                meta property="og:site_name" content=(SITE_NAME);
                meta property="og:title" content=(og_title);
                meta property="og:description" content=(quote.text);
                meta property="og:image" content=(image_url);
                meta property="og:image:width" content=(CANVAS_WIDTH);
                meta property="og:image:height" content=(CANVAS_HEIGHT);
                meta property="og:url" content=(canonical_url);
                meta property="og:locale" content="ja_JP";

                // Twitter Card
                meta name="twitter:card" content="summary_large_image";
                meta name="twitter:title" content=(og_title);
                meta name="twitter:description" content=(quote.text);
                meta name="twitter:image" content=(image_url);
                meta name="twitter:image:alt" content=(image_alt);

                title { (page_title) }

                style { (PreEscaped(SHARE_CSS)) }
            }
            body {
                div class="container" {
                    div class="quote-icon" { "💭" }

                    div class="quote-text" {
                        "「" (quote.text) "」"
                    }

                    div class="quote-author" {
                        "- " (quote.author) " -"
                    }

                    @if let Some(description) = quote.author_description {
                        div class="author-description" {
                            (description)
                        }
                    }

                    a href=(app_url) class="cta-button" {
                        (CTA_LABEL)
                    }

                    div class="app-name" { (SITE_NAME) }

                    div class="app-tagline" { (TAGLINE) }
                }
            }
        }
    }
}
