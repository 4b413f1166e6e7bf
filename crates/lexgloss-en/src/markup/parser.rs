// HTML text to tree

use super::{
    Attribute, Closing, Document, Element, MarkupError, Node, is_raw_text_element,
    is_void_element,
};

/// Parse a complete document.
pub fn parse_document(input: &str) -> Result<Document, MarkupError> {
    parse_fragment(input).map(Document::new)
}

/// Parse a fragment of markup into a node list.
pub fn parse_fragment(input: &str) -> Result<Vec<Node>, MarkupError> {
    let mut builder = TreeBuilder::default();
    let mut pos = 0;
    let mut text_start = 0;

    while let Some(rel) = input[pos..].find('<') {
        let lt = pos + rel;
        let Some(end) = parse_markup_at(input, lt, &mut builder, &input[text_start..lt])? else {
            // A '<' that does not open markup is ordinary text.
            pos = lt + 1;
            continue;
        };
        pos = end;
        text_start = end;
    }
    builder.append_text(&input[text_start..]);
    Ok(builder.finish())
}

/// Try to parse a markup construct at `lt` (which holds `<`). On success
/// the pending text is flushed first, the construct is added to the tree,
/// and the offset just past it is returned.
fn parse_markup_at(
    input: &str,
    lt: usize,
    builder: &mut TreeBuilder,
    pending_text: &str,
) -> Result<Option<usize>, MarkupError> {
    let rest = &input[lt..];
    let bytes = input.as_bytes();
    let next = bytes.get(lt + 1).copied();

    if rest.starts_with("<!--") {
        let close = input[lt + 4..]
            .find("-->")
            .ok_or(MarkupError::UnterminatedComment { offset: lt })?;
        let end = lt + 4 + close + 3;
        builder.append_text(pending_text);
        builder.append(Node::Comment(input[lt..end].to_string()));
        return Ok(Some(end));
    }

    if matches!(next, Some(b'!') | Some(b'?')) {
        let gt = input[lt..]
            .find('>')
            .ok_or(MarkupError::UnterminatedDeclaration { offset: lt })?;
        let end = lt + gt + 1;
        builder.append_text(pending_text);
        builder.append(Node::Declaration(input[lt..end].to_string()));
        return Ok(Some(end));
    }

    if next == Some(b'/') && bytes.get(lt + 2).is_some_and(u8::is_ascii_alphabetic) {
        let name_end = scan_name(bytes, lt + 2);
        let name = input[lt + 2..name_end].to_ascii_lowercase();
        let gt = input[name_end..]
            .find('>')
            .ok_or(MarkupError::UnterminatedTag { offset: lt })?;
        let end = name_end + gt + 1;
        builder.append_text(pending_text);
        builder.close_named(&name, &input[lt..end], lt);
        return Ok(Some(end));
    }

    if next.is_some_and(|b| b.is_ascii_alphabetic()) {
        let tag = parse_start_tag(input, lt)?;
        builder.append_text(pending_text);
        let raw_open = input[lt..tag.end].to_string();

        builder.imply_end_before(&tag.name);

        if tag.self_closing || is_void_element(&tag.name) {
            let el = Element::parsed(tag.name, tag.attributes, raw_open, Closing::Void);
            builder.append(Node::Element(el));
            return Ok(Some(tag.end));
        }

        if is_raw_text_element(&tag.name) {
            let (close_start, close_end) = find_raw_text_end(input, tag.end, &tag.name)
                .ok_or_else(|| MarkupError::UnclosedRawText {
                    name: tag.name.clone(),
                    offset: lt,
                })?;
            let raw_close = input[close_start..close_end].to_string();
            let mut el = Element::parsed(
                tag.name,
                tag.attributes,
                raw_open,
                Closing::Tag(Some(raw_close)),
            );
            let content = &input[tag.end..close_start];
            if !content.is_empty() {
                el.children.push(Node::text(content));
            }
            builder.append(Node::Element(el));
            return Ok(Some(close_end));
        }

        builder.open(Element::parsed(
            tag.name,
            tag.attributes,
            raw_open,
            Closing::Omitted,
        ));
        return Ok(Some(tag.end));
    }

    Ok(None)
}

struct StartTag {
    name: String,
    attributes: Vec<Attribute>,
    self_closing: bool,
    /// Offset just past the closing `>`.
    end: usize,
}

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0C')
}

/// End of a tag name starting at `start`.
fn scan_name(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && !is_space(bytes[i]) && bytes[i] != b'>' && bytes[i] != b'/' {
        i += 1;
    }
    i
}

fn skip_spaces(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && is_space(bytes[i]) {
        i += 1;
    }
    i
}

fn parse_start_tag(input: &str, lt: usize) -> Result<StartTag, MarkupError> {
    let bytes = input.as_bytes();
    let len = bytes.len();
    let name_end = scan_name(bytes, lt + 1);
    let name = input[lt + 1..name_end].to_ascii_lowercase();
    let mut attributes = Vec::new();
    let mut i = name_end;

    loop {
        i = skip_spaces(bytes, i);
        if i >= len {
            return Err(MarkupError::UnterminatedTag { offset: lt });
        }
        match bytes[i] {
            b'>' => {
                return Ok(StartTag {
                    name,
                    attributes,
                    self_closing: false,
                    end: i + 1,
                });
            }
            b'/' if bytes.get(i + 1) == Some(&b'>') => {
                return Ok(StartTag {
                    name,
                    attributes,
                    self_closing: true,
                    end: i + 2,
                });
            }
            b'/' | b'=' => {
                i += 1;
                continue;
            }
            _ => {}
        }

        let attr_start = i;
        while i < len
            && !is_space(bytes[i])
            && !matches!(bytes[i], b'>' | b'/' | b'=')
        {
            i += 1;
        }
        let attr_name = input[attr_start..i].to_string();

        i = skip_spaces(bytes, i);
        let mut value = None;
        if i < len && bytes[i] == b'=' {
            i = skip_spaces(bytes, i + 1);
            if i >= len {
                return Err(MarkupError::UnterminatedTag { offset: lt });
            }
            if matches!(bytes[i], b'"' | b'\'') {
                let quote = bytes[i] as char;
                let value_start = i + 1;
                let close = input[value_start..]
                    .find(quote)
                    .ok_or(MarkupError::UnterminatedAttribute { offset: i })?;
                value = Some(input[value_start..value_start + close].to_string());
                i = value_start + close + 1;
            } else {
                let value_start = i;
                while i < len && !is_space(bytes[i]) && bytes[i] != b'>' {
                    i += 1;
                }
                value = Some(input[value_start..i].to_string());
            }
        }
        attributes.push(Attribute {
            name: attr_name,
            value,
        });
    }
}

/// Locate `</name ...>` (ASCII case-insensitive) at or after `from`.
/// Returns the start and end offsets of the end tag.
fn find_raw_text_end(input: &str, from: usize, name: &str) -> Option<(usize, usize)> {
    let bytes = input.as_bytes();
    let name = name.as_bytes();
    for (rel, _) in input[from..].match_indices("</") {
        let start = from + rel;
        let name_start = start + 2;
        let name_end = name_start + name.len();
        let matches_name = bytes
            .get(name_start..name_end)
            .is_some_and(|s| s.eq_ignore_ascii_case(name));
        let delimited = bytes
            .get(name_end)
            .is_some_and(|&b| is_space(b) || b == b'>' || b == b'/');
        if matches_name && delimited {
            let gt = input[name_end..].find('>')?;
            return Some((start, name_end + gt + 1));
        }
    }
    None
}

/// Stack of open elements plus the finished top-level nodes.
#[derive(Default)]
struct TreeBuilder {
    root: Vec<Node>,
    stack: Vec<Element>,
}

impl TreeBuilder {
    fn children_mut(&mut self) -> &mut Vec<Node> {
        match self.stack.last_mut() {
            Some(top) => &mut top.children,
            None => &mut self.root,
        }
    }

    fn append(&mut self, node: Node) {
        self.children_mut().push(node);
    }

    /// Append text, merging with a directly preceding text node.
    fn append_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let children = self.children_mut();
        if let Some(Node::Text(prev)) = children.last_mut() {
            prev.push_str(text);
        } else {
            children.push(Node::text(text));
        }
    }

    fn open(&mut self, el: Element) {
        self.stack.push(el);
    }

    fn close_top(&mut self, closing: Closing) {
        if let Some(mut el) = self.stack.pop() {
            el.closing = closing;
            self.append(Node::Element(el));
        }
    }

    /// Close the innermost open element named `name`, implicitly closing
    /// anything opened inside it. An end tag with no open element of that
    /// name (`</br>`, or `</p>` after an implied close) is kept verbatim.
    fn close_named(&mut self, name: &str, raw: &str, offset: usize) {
        let Some(idx) = self.stack.iter().rposition(|el| el.name() == name) else {
            log::debug!("unmatched end tag </{name}> at byte {offset} kept as text");
            self.append(Node::UnmatchedEndTag(raw.to_string()));
            return;
        };
        while self.stack.len() > idx + 1 {
            self.close_top(Closing::Omitted);
        }
        self.close_top(Closing::Tag(Some(raw.to_string())));
    }

    /// Optional end tags: a new `<li>` ends an open `<li>`, a new `<p>`
    /// ends an open `<p>`.
    fn imply_end_before(&mut self, name: &str) {
        if matches!(name, "li" | "p") && self.stack.last().is_some_and(|top| top.name() == name) {
            self.close_top(Closing::Omitted);
        }
    }

    fn finish(mut self) -> Vec<Node> {
        while !self.stack.is_empty() {
            self.close_top(Closing::Omitted);
        }
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Chapter 1 &amp; notes</title>
    <style>
        p { margin: 1em 0; }
        a > b { color: red; }
    </style>
    <script>if (a < b && c > d) { x = "</div>"; }</script>
</head>
<body>
    <!-- English first, translation follows -->
    <div class='content'>
        <h1>Pairings</h1>
        <p>Text with <code>code</code> and <em>emphasis</em>.<br/>Line two, a < b.</p>
        <blockquote><p>中文翻译</p></blockquote>
        <ul>
            <li>first
            <li>second</li>
        </ul>
        <img src=figure.png alt="A figure">
        <input disabled>
    </div>
</body>
</html>
"#;

    fn first<'a>(doc: &'a Document, name: &str) -> &'a Element {
        doc.find(|el| el.name() == name)
            .unwrap_or_else(|| panic!("no <{name}>"))
    }

    #[test]
    fn round_trip_is_lossless() {
        let doc = parse_document(SAMPLE).unwrap();
        assert_eq!(doc.to_html(), SAMPLE);
    }

    #[test]
    fn raw_text_elements_hold_one_text_node() {
        let doc = parse_document(SAMPLE).unwrap();
        let style = first(&doc, "style");
        assert_eq!(style.children.len(), 1);
        assert!(style.text_content().contains("a > b"));
        let script = first(&doc, "script");
        assert!(script.text_content().contains("\"</div>\""));
        assert!(doc.find(|el| el.name() == "div" && el.attr("class").is_none()).is_none());
    }

    #[test]
    fn attributes_are_parsed() {
        let doc = parse_document(SAMPLE).unwrap();
        assert_eq!(first(&doc, "html").attr("lang"), Some("en"));
        assert!(first(&doc, "div").has_class("content"));
        let img = first(&doc, "img");
        assert_eq!(img.attr("src"), Some("figure.png"));
        assert_eq!(img.attr("alt"), Some("A figure"));
        assert_eq!(img.closing, Closing::Void);
        assert_eq!(first(&doc, "input").attr("disabled"), Some(""));
    }

    #[test]
    fn paragraph_children_keep_inline_structure() {
        let doc = parse_document(SAMPLE).unwrap();
        let p = first(&doc, "p");
        let names: Vec<_> = p
            .children
            .iter()
            .map(|n| match n {
                Node::Element(el) => el.name().to_string(),
                Node::Text(_) => "#text".to_string(),
                _ => "#other".to_string(),
            })
            .collect();
        assert_eq!(
            names,
            vec!["#text", "code", "#text", "em", "#text", "br", "#text"]
        );
        // The literal '<' stays inside a single text node.
        assert_eq!(p.children[6], Node::text("Line two, a < b."));
    }

    #[test]
    fn omitted_li_end_is_implied() {
        let doc = parse_document(SAMPLE).unwrap();
        let items = doc.find_all(|el| el.name() == "li");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].closing, Closing::Omitted);
        assert!(items[0].text_content().starts_with("first"));
        assert!(matches!(items[1].closing, Closing::Tag(Some(_))));
    }

    #[test]
    fn parent_end_tag_closes_open_children() {
        let doc = parse_document("<div><p>one<p>two</div>").unwrap();
        let div = doc.children[0].as_element().unwrap();
        assert_eq!(div.children.len(), 2);
        assert_eq!(doc.to_html(), "<div><p>one<p>two</div>");
    }

    #[test]
    fn end_tags_match_case_insensitively() {
        let doc = parse_document("<P>Hi</p><STYLE>x</Style>").unwrap();
        assert_eq!(doc.children.len(), 2);
        assert_eq!(doc.to_html(), "<P>Hi</p><STYLE>x</Style>");
    }

    #[test]
    fn fragment_with_marker_span() {
        let nodes =
            parse_fragment("A <span class=\"vocab\" title=\"/x/ 曲线\">curve</span>.").unwrap();
        assert_eq!(nodes.len(), 3);
        let span = nodes[1].as_element().unwrap();
        assert!(span.has_class("vocab"));
        assert_eq!(span.attr("title"), Some("/x/ 曲线"));
        assert_eq!(span.text_content(), "curve");
    }

    #[test]
    fn end_tag_after_implied_close_is_kept_verbatim() {
        let input = "<p>a<p>b</p></p>";
        let doc = parse_document(input).unwrap();
        assert_eq!(doc.children.len(), 3);
        assert_eq!(doc.children[2], Node::UnmatchedEndTag("</p>".into()));
        assert_eq!(doc.to_html(), input);
    }

    #[test]
    fn unmatched_end_tags_do_not_close_anything() {
        let input = "<h1>Title</br>x</h1><div>y</span>z</div>";
        let doc = parse_document(input).unwrap();
        let h1 = first(&doc, "h1");
        assert_eq!(h1.children[1], Node::UnmatchedEndTag("</br>".into()));
        assert_eq!(h1.text_content(), "Titlex");
        assert_eq!(first(&doc, "div").text_content(), "yz");
        assert_eq!(doc.to_html(), input);
    }

    #[test]
    fn unclosed_elements_close_at_end() {
        let doc = parse_document("<p>dangling").unwrap();
        assert_eq!(doc.to_html(), "<p>dangling");
    }

    #[test]
    fn empty_input() {
        assert!(parse_document("").unwrap().children.is_empty());
    }

    // -- Errors ---------------------------------------------------------------

    #[test]
    fn unterminated_comment_is_an_error() {
        assert_eq!(
            parse_document("<p>x</p><!-- open"),
            Err(MarkupError::UnterminatedComment { offset: 8 })
        );
    }

    #[test]
    fn unterminated_tag_is_an_error() {
        assert_eq!(
            parse_document("<p class=\"a\""),
            Err(MarkupError::UnterminatedTag { offset: 0 })
        );
        assert_eq!(
            parse_document("text</p"),
            Err(MarkupError::UnterminatedTag { offset: 4 })
        );
    }

    #[test]
    fn unterminated_attribute_is_an_error() {
        assert_eq!(
            parse_document("<p title=\"open>text</p>"),
            Err(MarkupError::UnterminatedAttribute { offset: 9 })
        );
    }

    #[test]
    fn unclosed_raw_text_is_an_error() {
        assert!(matches!(
            parse_document("<style>p {}"),
            Err(MarkupError::UnclosedRawText { .. })
        ));
    }
}
