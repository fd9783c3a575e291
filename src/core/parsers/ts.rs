//! Reader for Qt Linguist translation documents (`.ts`).
//!
//! The document is read event by event so every `<message>` can be tied back
//! to the line and column of its `<source>` element. Whitespace inside text
//! elements is significant and kept as written.

use std::{collections::HashMap, fs, path::Path};

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::core::{
    ContextBlock, DocumentError, LocalizedMessage, LocationHint, MessageLocation, MessageSite,
    ParsedDocument, SchemaVersion, TranslationState, TsDocument,
};

pub fn parse_ts_file(path: &Path) -> Result<ParsedDocument, DocumentError> {
    let content = fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_ts_str(&content, &path.to_string_lossy())
}

pub fn parse_ts_str(content: &str, file_path: &str) -> Result<ParsedDocument, DocumentError> {
    TsParser::new(content, file_path).parse()
}

/// Text-bearing elements whose content ends up in a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capture {
    ContextName,
    Source,
    Disambiguation,
    Translation,
    NumerusForm,
    LengthVariant,
    ExtraComment,
    TranslatorComment,
}

fn capture_for(path: &[Vec<u8>]) -> Option<Capture> {
    let names: Vec<&[u8]> = path.iter().map(Vec::as_slice).collect();
    match names.as_slice() {
        [b"TS", b"context", b"name"] => Some(Capture::ContextName),
        [b"TS", b"context", b"message", b"source"] => Some(Capture::Source),
        [b"TS", b"context", b"message", b"comment"] => Some(Capture::Disambiguation),
        [b"TS", b"context", b"message", b"translation"] => Some(Capture::Translation),
        [b"TS", b"context", b"message", b"translation", b"numerusform"] => {
            Some(Capture::NumerusForm)
        }
        [b"TS", b"context", b"message", b"translation", b"lengthvariant"] => {
            Some(Capture::LengthVariant)
        }
        [b"TS", b"context", b"message", b"extracomment"] => Some(Capture::ExtraComment),
        [b"TS", b"context", b"message", b"translatorcomment"] => {
            Some(Capture::TranslatorComment)
        }
        _ => None,
    }
}

/// Structural elements that carry attributes or start a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Context,
    Message,
    Location,
    Source,
    Translation,
    Other,
}

fn slot_for(path: &[Vec<u8>]) -> Slot {
    let names: Vec<&[u8]> = path.iter().map(Vec::as_slice).collect();
    match names.as_slice() {
        [b"TS", b"context"] => Slot::Context,
        [b"TS", b"context", b"message"] => Slot::Message,
        [b"TS", b"context", b"message", b"location"] => Slot::Location,
        [b"TS", b"context", b"message", b"source"] => Slot::Source,
        [b"TS", b"context", b"message", b"translation"] => Slot::Translation,
        _ => Slot::Other,
    }
}

/// A `<message>` being read.
#[derive(Debug, Default)]
struct PendingMessage {
    message: LocalizedMessage,
    numerus: bool,
    start_offset: usize,
    source_offset: Option<usize>,
    has_translation: bool,
}

struct TsParser<'a> {
    reader: Reader<&'a [u8]>,
    content: &'a str,
    file_path: &'a str,
    line_index: Vec<usize>,
    path: Vec<Vec<u8>>,
    text: String,
    root: Option<MessageLocation>,
    document: TsDocument,
    sites: Vec<MessageSite>,
    context_name: Option<String>,
    context_offset: usize,
    pending: Option<PendingMessage>,
    /// Last absolute line per file, for relative `line="+N"` hints.
    last_lines: HashMap<String, i64>,
    last_filename: Option<String>,
}

impl<'a> TsParser<'a> {
    fn new(content: &'a str, file_path: &'a str) -> Self {
        Self {
            reader: Reader::from_str(content),
            content,
            file_path,
            line_index: build_line_index(content),
            path: Vec::new(),
            text: String::new(),
            root: None,
            document: TsDocument::default(),
            sites: Vec::new(),
            context_name: None,
            context_offset: 0,
            pending: None,
            last_lines: HashMap::new(),
            last_filename: None,
        }
    }

    fn parse(mut self) -> Result<ParsedDocument, DocumentError> {
        loop {
            let offset = self.reader.buffer_position() as usize;
            let event = match self.reader.read_event() {
                Ok(event) => event,
                Err(err) => {
                    let line = self.line_at(self.reader.error_position() as usize);
                    return Err(DocumentError::Xml {
                        line,
                        message: err.to_string(),
                    });
                }
            };

            match event {
                Event::Start(e) => self.open(&e, offset)?,
                Event::Empty(e) => {
                    self.open(&e, offset)?;
                    self.close(offset)?;
                }
                Event::End(_) => self.close(offset)?,
                Event::Text(t) => {
                    if capture_for(&self.path).is_some() {
                        let text = t.unescape().map_err(|err| self.xml_error(offset, err))?;
                        self.text.push_str(&text);
                    }
                }
                Event::CData(c) => {
                    if capture_for(&self.path).is_some() {
                        self.text.push_str(&String::from_utf8_lossy(&c));
                    }
                }
                Event::Eof => {
                    if let Some(open) = self.path.last() {
                        let name = String::from_utf8_lossy(open).into_owned();
                        return Err(self.xml_error(
                            offset,
                            format_args!("unexpected end of document, <{}> is not closed", name),
                        ));
                    }
                    break;
                }
                _ => {}
            }
        }

        let root = self.root.ok_or(DocumentError::MissingRoot)?;
        Ok(ParsedDocument {
            file_path: self.file_path.to_string(),
            root,
            document: self.document,
            sites: self.sites,
        })
    }

    fn open(&mut self, e: &BytesStart<'_>, offset: usize) -> Result<(), DocumentError> {
        let name = e.name().as_ref().to_vec();

        if self.path.is_empty() {
            if name != b"TS" {
                return Err(DocumentError::UnexpectedRoot {
                    line: self.line_at(offset),
                    found: String::from_utf8_lossy(&name).into_owned(),
                });
            }
            self.open_root(e, offset)?;
            self.path.push(name);
            return Ok(());
        }

        // Qt stores control characters as <byte value="x1b"/>.
        if name == b"byte" {
            if capture_for(&self.path).is_some()
                && let Some(value) = self.attribute(e, "value", offset)?
                && let Some(ch) = decode_byte_value(&value)
            {
                self.text.push(ch);
            }
            self.path.push(name);
            return Ok(());
        }

        self.path.push(name);
        if capture_for(&self.path).is_some() {
            self.text.clear();
        }

        match slot_for(&self.path) {
            Slot::Context => {
                self.context_name = None;
                self.context_offset = offset;
            }
            Slot::Message => {
                let Some(context) = self.context_name.clone() else {
                    return Err(DocumentError::MissingElement {
                        line: self.line_at(self.context_offset),
                        element: "name",
                        parent: "context",
                    });
                };
                let numerus = self.attribute(e, "numerus", offset)?.as_deref() == Some("yes");
                self.pending = Some(PendingMessage {
                    message: LocalizedMessage {
                        context,
                        ..LocalizedMessage::default()
                    },
                    numerus,
                    start_offset: offset,
                    ..PendingMessage::default()
                });
            }
            Slot::Location => {
                let filename = self.attribute(e, "filename", offset)?;
                let line = self.attribute(e, "line", offset)?;
                let hint = self.resolve_location(filename, line.as_deref());
                if let (Some(pending), Some(hint)) = (self.pending.as_mut(), hint) {
                    pending.message.locations.push(hint);
                }
            }
            Slot::Source => {
                if let Some(pending) = self.pending.as_mut() {
                    pending.source_offset = Some(offset);
                }
            }
            Slot::Translation => {
                let kind = self.attribute(e, "type", offset)?;
                if let Some(pending) = self.pending.as_mut() {
                    pending.has_translation = true;
                    pending.message.state = TranslationState::from_attribute(kind.as_deref());
                }
            }
            Slot::Other => {}
        }

        Ok(())
    }

    fn open_root(&mut self, e: &BytesStart<'_>, offset: usize) -> Result<(), DocumentError> {
        let line = self.line_at(offset);
        let version = self
            .attribute(e, "version", offset)?
            .ok_or(DocumentError::MissingAttribute {
                line,
                element: "TS",
                attribute: "version",
            })?;
        let version: SchemaVersion = version
            .parse()
            .map_err(|source| DocumentError::InvalidVersion { line, source })?;

        self.document = TsDocument {
            version,
            language: self.attribute(e, "language", offset)?,
            source_language: self.attribute(e, "sourcelanguage", offset)?,
            contexts: Vec::new(),
        };
        self.root = Some(MessageLocation::new(
            self.file_path,
            line,
            self.col_at(offset),
        ));
        Ok(())
    }

    fn close(&mut self, offset: usize) -> Result<(), DocumentError> {
        let capture = capture_for(&self.path);
        let is_message = self.path.len() == 3 && self.path[1] == b"context";

        if let Some(capture) = capture {
            let text = std::mem::take(&mut self.text);
            self.store(capture, text);
        } else if is_message && self.path[2] == b"message" {
            self.finish_message(offset)?;
        }

        self.path.pop();
        Ok(())
    }

    fn store(&mut self, capture: Capture, text: String) {
        if capture == Capture::ContextName {
            if !self.document.contexts.iter().any(|block| block.name == text) {
                self.document.contexts.push(ContextBlock::new(text.clone()));
            }
            self.context_name = Some(text);
            return;
        }

        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        let message = &mut pending.message;
        match capture {
            Capture::ContextName => {}
            Capture::Source => message.source = text,
            Capture::Disambiguation => {
                message.disambiguation = Some(text).filter(|t| !t.is_empty())
            }
            Capture::Translation => {
                message.translation = if pending.numerus {
                    message.numerus_forms.first().cloned().unwrap_or_default()
                } else if let Some(longest) = message.length_variants.first() {
                    longest.clone()
                } else {
                    text
                };
            }
            Capture::NumerusForm => message.numerus_forms.push(text),
            Capture::LengthVariant => message.length_variants.push(text),
            Capture::ExtraComment => message.extra_comment = Some(text),
            Capture::TranslatorComment => message.translator_comment = Some(text),
        }
    }

    fn finish_message(&mut self, offset: usize) -> Result<(), DocumentError> {
        let Some(mut pending) = self.pending.take() else {
            return Ok(());
        };
        let Some(source_offset) = pending.source_offset else {
            return Err(DocumentError::MissingElement {
                line: self.line_at(pending.start_offset),
                element: "source",
                parent: "message",
            });
        };
        if !pending.has_translation {
            tracing::debug!(
                file = self.file_path,
                line = self.line_at(offset),
                "message without <translation>, treating as unfinished"
            );
            pending.message.state = TranslationState::Unfinished;
        }

        let line = self.line_at(source_offset);
        let site = MessageSite::new(
            MessageLocation::new(self.file_path, line, self.col_at(source_offset)),
            pending.message.clone(),
        )
        .with_source_line(self.line_text(line));

        self.sites.push(site);
        self.document.push(pending.message);
        Ok(())
    }

    /// Turn `filename`/`line` attributes into an absolute hint.
    ///
    /// A missing filename means "same file as the previous location", and a
    /// signed line is relative to the previous line seen for that file.
    fn resolve_location(
        &mut self,
        filename: Option<String>,
        line: Option<&str>,
    ) -> Option<LocationHint> {
        let filename = filename
            .filter(|name| !name.is_empty())
            .or_else(|| self.last_filename.clone())?;

        let line = line.and_then(|raw| {
            let raw = raw.trim();
            if raw.starts_with('+') || raw.starts_with('-') {
                let delta: i64 = raw.parse().ok()?;
                let base = self.last_lines.get(&filename).copied().unwrap_or(0);
                Some(base + delta)
            } else {
                raw.parse::<i64>().ok()
            }
        });

        if let Some(line) = line {
            self.last_lines.insert(filename.clone(), line);
        }
        self.last_filename = Some(filename.clone());

        Some(LocationHint::new(
            filename,
            line.and_then(|l| u32::try_from(l).ok()),
        ))
    }

    fn attribute(
        &self,
        e: &BytesStart<'_>,
        name: &str,
        offset: usize,
    ) -> Result<Option<String>, DocumentError> {
        let attr = e
            .try_get_attribute(name)
            .map_err(|err| self.xml_error(offset, err))?;
        match attr {
            Some(attr) => {
                let value = attr
                    .unescape_value()
                    .map_err(|err| self.xml_error(offset, err))?;
                Ok(Some(value.into_owned()))
            }
            None => Ok(None),
        }
    }

    fn xml_error(&self, offset: usize, err: impl std::fmt::Display) -> DocumentError {
        DocumentError::Xml {
            line: self.line_at(offset),
            message: err.to_string(),
        }
    }

    fn line_at(&self, offset: usize) -> usize {
        offset_to_line(&self.line_index, offset)
    }

    /// 1-based column in characters.
    fn col_at(&self, offset: usize) -> usize {
        let line = self.line_at(offset);
        let start = self.line_index[line - 1];
        let end = offset.min(self.content.len());
        self.content
            .get(start..end)
            .map(|prefix| prefix.chars().count() + 1)
            .unwrap_or(1)
    }

    fn line_text(&self, line: usize) -> &str {
        let start = self.line_index[line - 1];
        let end = self
            .line_index
            .get(line)
            .copied()
            .unwrap_or(self.content.len());
        self.content[start..end].trim_end_matches(['\r', '\n'])
    }
}

/// Decode the value of a `<byte value="..."/>` element.
///
/// Values are hexadecimal with an `x` prefix, or decimal.
fn decode_byte_value(value: &str) -> Option<char> {
    let code = match value.strip_prefix('x') {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => value.parse().ok()?,
    };
    char::from_u32(code)
}

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// The returned vector contains byte offsets where each line starts.
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find line number for a byte offset using binary search.
///
/// Returns 1-based line number.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}
