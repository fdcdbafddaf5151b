use chrono::{DateTime, Utc};
use quick_xml::events::Event;
use quick_xml::reader::Reader;

use super::append_text;
use crate::models::FeedEntry;
use crate::FeedError;

/// Parse an RSS 2.0 feed from raw XML bytes
pub(crate) fn parse_rss_feed(xml: &[u8]) -> Result<Vec<FeedEntry>, FeedError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut buf = Vec::new();

    let mut current_item: Option<EntryBuilder> = None;
    let mut current_element = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                current_element = name.clone();

                if name == "item" {
                    current_item = Some(EntryBuilder::default());
                }
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();

                if name == "item" {
                    if let Some(builder) = current_item.take() {
                        entries.push(builder.build());
                    }
                }
                current_element.clear();
            }
            Ok(Event::Text(e)) => {
                if let Some(ref mut item) = current_item {
                    let text = e.unescape().unwrap_or_default().to_string();
                    if !text.is_empty() {
                        item.set_field(&current_element, &text);
                    }
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(ref mut item) = current_item {
                    let text = String::from_utf8_lossy(&e.into_inner()).to_string();
                    if !text.is_empty() {
                        item.set_field(&current_element, &text);
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
    pub_date: Option<String>,
    description: Option<String>,
    content: Option<String>,
}

impl EntryBuilder {
    fn set_field(&mut self, element: &str, text: &str) {
        match element {
            "title" => append_text(&mut self.title, text),
            "link" => append_text(&mut self.link, text),
            "pubDate" => append_text(&mut self.pub_date, text),
            "description" => append_text(&mut self.description, text),
            "content:encoded" => append_text(&mut self.content, text),
            _ => {}
        }
    }

    fn build(self) -> FeedEntry {
        FeedEntry {
            title: self.title,
            link: self.link,
            published_at: self.pub_date.as_deref().and_then(parse_pub_date),
            content: self.content,
            description: self.description,
        }
    }
}

/// Parse an RFC 2822 publish date; unparseable dates become None
fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(raw.trim())
        .ok()
        .map(|date| date.with_timezone(&Utc))
}
