//! Minimal RSS 2.0 item scanner.
//!
//! Covers exactly the subset the news feed uses: `<item>` blocks with
//! `title`, `description`, `link` and `pubDate` children, CDATA sections,
//! and the five standard XML entities. Anything else passes through or is
//! skipped; a malformed trailing block is dropped rather than failing the
//! whole feed.

/// Raw fields of one `<item>` block. `pub_date` stays an unparsed RFC2822
/// string; the adapter owns timestamp handling.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RssItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub pub_date: Option<String>,
}

/// Extract every complete `<item>` block from a feed document.
pub fn parse_items(xml: &str) -> Vec<RssItem> {
    let mut items = Vec::new();
    let mut rest = xml;

    while let Some(element) = next_element(rest, "item") {
        items.push(RssItem {
            title: child_text(element.inner, "title"),
            description: child_text(element.inner, "description"),
            link: child_text(element.inner, "link"),
            pub_date: child_text(element.inner, "pubDate"),
        });
        rest = element.after;
    }

    items
}

struct Element<'a> {
    inner: &'a str,
    after: &'a str,
}

/// Find the first complete `<tag ...>...</tag>` element, skipping tags whose
/// name merely starts with `tag`.
fn next_element<'a>(xml: &'a str, tag: &str) -> Option<Element<'a>> {
    let open = format!("<{tag}");
    let close = format!("</{tag}>");
    let mut search_from = 0;

    loop {
        let start = xml.get(search_from..)?.find(&open)? + search_from;
        let name_end = start + open.len();
        let tail = xml.get(name_end..)?;

        let boundary = tail.chars().next()?;
        if boundary != '>' && boundary != '/' && !boundary.is_whitespace() {
            search_from = name_end;
            continue;
        }

        let gt_offset = tail.find('>')?;
        let content_start = name_end + gt_offset + 1;
        if tail[..gt_offset].ends_with('/') {
            return Some(Element {
                inner: "",
                after: &xml[content_start..],
            });
        }

        let content_end = xml[content_start..].find(&close)? + content_start;
        return Some(Element {
            inner: &xml[content_start..content_end],
            after: &xml[content_end + close.len()..],
        });
    }
}

fn child_text(block: &str, tag: &str) -> Option<String> {
    let element = next_element(block, tag)?;
    let raw = element.inner.trim();

    let text = match strip_cdata(raw) {
        // CDATA payloads are literal text, no entity decoding
        Some(literal) => literal.trim().to_owned(),
        None => unescape(raw).trim().to_owned(),
    };

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn strip_cdata(text: &str) -> Option<&str> {
    text.strip_prefix("<![CDATA[")?.strip_suffix("]]>")
}

const ENTITIES: [(&str, char); 5] = [
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&apos;", '\''),
];

/// Decode the five standard entities, leaving unknown references intact.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        let mut decoded = false;
        for (entity, ch) in ENTITIES {
            if let Some(after) = tail.strip_prefix(entity) {
                out.push(ch);
                rest = after;
                decoded = true;
                break;
            }
        }

        if !decoded {
            out.push('&');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}
