use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::FeedError;
use crate::models::FeedEntry;

mod atom;
mod rss2;

/// Parse a syndication feed from raw XML bytes.
///
/// The feed dialect is decided by the document's root element: `<rss>` (and
/// RSS 1.0's `<rdf:RDF>`) dispatch to the RSS parser, `<feed>` to the Atom
/// parser. Anything else is a parse error.
pub(crate) fn parse_feed(xml: &[u8]) -> Result<Vec<FeedEntry>, FeedError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                return match name.as_str() {
                    "rss" | "rdf:RDF" => rss2::parse_rss_feed(xml),
                    "feed" => atom::parse_atom_feed(xml),
                    other => Err(FeedError::Parse(format!(
                        "Unsupported feed root element <{}>",
                        other
                    ))),
                };
            }
            Ok(Event::Eof) => return Err(FeedError::Parse("Empty feed document".into())),
            Err(e) => return Err(FeedError::Parse(format!("XML parse error: {}", e))),
            _ => {}
        }
        buf.clear();
    }
}

/// Append a text fragment to an optional field, concatenating when the
/// element's text arrives in several events (text mixed with CDATA).
fn append_text(slot: &mut Option<String>, text: &str) {
    match slot {
        Some(existing) => existing.push_str(text),
        None => *slot = Some(text.to_string()),
    }
}
