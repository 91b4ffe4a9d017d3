use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::types::SubmissionResult;

impl SubmissionResult {
    /// Reads an S3-style `PostResponse` body.
    ///
    /// Never fails: a missing element or a broken document leaves the
    /// corresponding field empty. The URL itself is not validated.
    pub fn from_xml(body: &str) -> Self {
        let mut result = SubmissionResult::default();
        let mut reader = Reader::from_str(body);

        let mut buf = Vec::new();
        let mut current: Option<String> = None;
        let mut text = String::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    current = Some(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
                    text.clear();
                }
                Ok(Event::Text(e)) => {
                    if current.is_some() {
                        if let Ok(decoded) = e.decode() {
                            text.push_str(&decoded);
                        }
                    }
                }
                Ok(Event::GeneralRef(e)) => {
                    if current.is_some() {
                        if let Ok(Some(ch)) = e.resolve_char_ref() {
                            text.push(ch);
                        } else if let Ok(name) = e.decode() {
                            if let Some(resolved) = resolve_entity(&name) {
                                text.push_str(resolved);
                            }
                        }
                    }
                }
                Ok(Event::CData(e)) => {
                    if current.is_some() {
                        text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                    }
                }
                Ok(Event::End(_)) => {
                    if let Some(name) = current.take() {
                        result.assign(&name, std::mem::take(&mut text));
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!("storage response is not well-formed XML: {e}");
                    break;
                }
            }
            buf.clear();
        }

        result
    }

    fn assign(&mut self, element: &str, value: String) {
        match element {
            "Location" if self.location.is_empty() => self.location = value,
            "Bucket" if self.bucket.is_none() => self.bucket = Some(value),
            "Key" if self.key.is_none() => self.key = Some(value),
            "ETag" if self.etag.is_none() => self.etag = Some(value),
            _ => {}
        }
    }
}

fn resolve_entity(name: &str) -> Option<&'static str> {
    match name {
        "amp" => Some("&"),
        "lt" => Some("<"),
        "gt" => Some(">"),
        "quot" => Some("\""),
        "apos" => Some("'"),
        _ => None,
    }
}
