//! Markdown to HTML conversion and the workbook print page.

use pulldown_cmark::{html, Options, Parser};

/// Convert a Markdown document to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, parser);
    out
}

/// Print stylesheet for the workbook PDF path. The `@font-face` rule and
/// the long font-family chain exist for CJK glyph coverage: whichever
/// Noto/Malgun face the rendering host has installed gets used.
const WORKBOOK_CSS: &str = r#"
@font-face {
    font-family: 'NotoSansCJKKR';
    src: url('file:///usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc') format('truetype-collection');
    font-weight: normal;
    font-style: normal;
}
body {
    font-family: 'NotoSansCJKKR', 'Noto Sans CJK KR', 'Noto Sans KR', 'Malgun Gothic', 'Apple SD Gothic Neo', sans-serif;
    line-height: 1.8;
    margin: 2.5cm;
    font-size: 11pt;
    color: #333;
    word-break: keep-all;
}
h1, h2, h3, h4, h5, h6 {
    font-weight: bold;
    margin-top: 2em;
    margin-bottom: 0.8em;
    color: #2c3e50;
    word-break: keep-all;
}
h1 { font-size: 22pt; border-bottom: 3px solid #3498db; padding-bottom: 0.5em; }
h2 { font-size: 18pt; border-bottom: 2px solid #e74c3c; padding-bottom: 0.3em; }
h3 { font-size: 14pt; color: #e67e22; }
p { margin-bottom: 1.2em; text-align: justify; }
ul, ol { margin-bottom: 1.5em; padding-left: 2.5em; }
li { margin-bottom: 0.8em; }
code {
    font-family: 'Courier New', 'DejaVu Sans Mono', monospace;
    background-color: #f8f9fa;
    padding: 3px 6px;
    border-radius: 4px;
}
"#;

/// Wrap the workbook Markdown into a standalone HTML page for the
/// HTML-to-PDF renderers.
pub fn workbook_page(markdown: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
<meta charset="UTF-8">
<style>{WORKBOOK_CSS}</style>
</head>
<body>
{}
</body>
</html>"#,
        markdown_to_html(markdown)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_survive_conversion_verbatim() {
        let markdown = "# 크롬 브라우저 기초\n\n내용\n\n## 북마크 활용\n\n### 단축키 활용\n";
        let html = markdown_to_html(markdown);
        assert!(html.contains("크롬 브라우저 기초"));
        assert!(html.contains("북마크 활용"));
        assert!(html.contains("단축키 활용"));
        assert!(html.contains("<h1>"));
        assert!(html.contains("<h3>"));
    }

    #[test]
    fn tables_are_enabled() {
        let markdown = "| a | b |\n|---|---|\n| 1 | 2 |\n";
        assert!(markdown_to_html(markdown).contains("<table>"));
    }

    #[test]
    fn workbook_page_is_standalone_korean_html() {
        let page = workbook_page("# 워크북\n");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"<html lang="ko">"#));
        assert!(page.contains("워크북"));
        assert!(page.contains("Noto Sans CJK KR"));
    }
}
