use chrono::{DateTime, Utc};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use super::append_text;
use crate::models::FeedEntry;
use crate::FeedError;

/// Parse an Atom feed from raw XML bytes
pub(crate) fn parse_atom_feed(xml: &[u8]) -> Result<Vec<FeedEntry>, FeedError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut buf = Vec::new();

    let mut current_entry: Option<EntryBuilder> = None;
    let mut current_element = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                current_element = name.clone();

                if name == "entry" {
                    current_entry = Some(EntryBuilder::default());
                }
                if name == "link" {
                    if let Some(ref mut entry) = current_entry {
                        entry.set_link(&e);
                    }
                }
            }
            Ok(Event::Empty(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();

                // Atom links are usually self-closing: <link href="..."/>
                if name == "link" {
                    if let Some(ref mut entry) = current_entry {
                        entry.set_link(&e);
                    }
                }
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();

                if name == "entry" {
                    if let Some(builder) = current_entry.take() {
                        entries.push(builder.build());
                    }
                }
                current_element.clear();
            }
            Ok(Event::Text(e)) => {
                if let Some(ref mut entry) = current_entry {
                    let text = e.unescape().unwrap_or_default().to_string();
                    if !text.is_empty() {
                        entry.set_field(&current_element, &text);
                    }
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(ref mut entry) = current_entry {
                    let text = String::from_utf8_lossy(&e.into_inner()).to_string();
                    if !text.is_empty() {
                        entry.set_field(&current_element, &text);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(FeedError::Parse(format!("XML parse error: {}", e))),
            _ => {}
        }
        buf.clear();
    }

    Ok(entries)
}

#[derive(Default)]
struct EntryBuilder {
    title: Option<String>,
    link: Option<String>,
    published: Option<String>,
    updated: Option<String>,
    summary: Option<String>,
    content: Option<String>,
}

impl EntryBuilder {
    fn set_field(&mut self, element: &str, text: &str) {
        match element {
            "title" => append_text(&mut self.title, text),
            "published" => append_text(&mut self.published, text),
            "updated" => append_text(&mut self.updated, text),
            "summary" => append_text(&mut self.summary, text),
            "content" => append_text(&mut self.content, text),
            _ => {}
        }
    }

    /// Take the first alternate (or unqualified) link's href attribute
    fn set_link(&mut self, e: &BytesStart) {
        if self.link.is_some() {
            return;
        }

        let mut href = None;
        let mut rel = None;
        for attr in e.attributes().flatten() {
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let value = String::from_utf8_lossy(&attr.value).to_string();
            match key.as_str() {
                "href" => href = Some(value),
                "rel" => rel = Some(value),
                _ => {}
            }
        }

        if matches!(rel.as_deref(), None | Some("alternate")) {
            self.link = href;
        }
    }

    fn build(self) -> FeedEntry {
        let timestamp = self.published.or(self.updated);
        FeedEntry {
            title: self.title,
            link: self.link,
            published_at: timestamp.as_deref().and_then(parse_timestamp),
            content: self.content,
            description: self.summary,
        }
    }
}

/// Parse an RFC 3339 timestamp; unparseable values become None
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|date| date.with_timezone(&Utc))
}
