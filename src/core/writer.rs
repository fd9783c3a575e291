//! Canonical writer for translation documents.
//!
//! Output follows the layout `lupdate` produces: contexts start at column 0
//! and nest by four spaces. Every location spells out its filename, so a
//! document written here parses back to the same [`TsDocument`].

use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::core::{DocumentError, LocalizedMessage, TsDocument};

pub fn write_document(document: &TsDocument) -> Result<String, DocumentError> {
    let mut header = Writer::new_with_indent(Vec::new(), b' ', 4);
    header.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    header.write_event(Event::DocType(BytesText::from_escaped("TS")))?;

    let version = document.version.to_string();
    let mut root = BytesStart::new("TS");
    root.push_attribute(("version", version.as_str()));
    if let Some(language) = &document.language {
        root.push_attribute(("language", language.as_str()));
    }
    if let Some(source_language) = &document.source_language {
        root.push_attribute(("sourcelanguage", source_language.as_str()));
    }
    header.write_event(Event::Start(root))?;

    // Contexts are not indented under <TS>, so they get a writer of their own.
    let mut body = Writer::new_with_indent(Vec::new(), b' ', 4);
    for block in &document.contexts {
        body.write_event(Event::Start(BytesStart::new("context")))?;
        write_text_element(&mut body, "name", &block.name)?;
        for message in &block.messages {
            write_message(&mut body, message)?;
        }
        body.write_event(Event::End(BytesEnd::new("context")))?;
    }

    let mut output = String::from_utf8_lossy(&header.into_inner()).into_owned();
    output.push('\n');
    let body = body.into_inner();
    if !body.is_empty() {
        output.push_str(&String::from_utf8_lossy(&body));
        output.push('\n');
    }
    output.push_str("</TS>\n");
    Ok(output)
}

fn write_message(
    writer: &mut Writer<Vec<u8>>,
    message: &LocalizedMessage,
) -> Result<(), DocumentError> {
    let mut start = BytesStart::new("message");
    if message.is_numerus() {
        start.push_attribute(("numerus", "yes"));
    }
    writer.write_event(Event::Start(start))?;

    for location in &message.locations {
        let mut element = BytesStart::new("location");
        element.push_attribute(("filename", location.filename.as_str()));
        if let Some(line) = location.line {
            element.push_attribute(("line", line.to_string().as_str()));
        }
        writer.write_event(Event::Empty(element))?;
    }

    write_text_element(writer, "source", &message.source)?;
    if let Some(disambiguation) = &message.disambiguation {
        write_text_element(writer, "comment", disambiguation)?;
    }
    if let Some(extra) = &message.extra_comment {
        write_text_element(writer, "extracomment", extra)?;
    }
    if let Some(note) = &message.translator_comment {
        write_text_element(writer, "translatorcomment", note)?;
    }

    let mut translation = BytesStart::new("translation");
    if let Some(kind) = message.state.as_attribute() {
        translation.push_attribute(("type", kind));
    }

    if message.is_numerus() {
        writer.write_event(Event::Start(translation))?;
        for form in &message.numerus_forms {
            write_text_element(writer, "numerusform", form)?;
        }
        writer.write_event(Event::End(BytesEnd::new("translation")))?;
    } else if !message.length_variants.is_empty() {
        translation.push_attribute(("variants", "yes"));
        writer.write_event(Event::Start(translation))?;
        for variant in &message.length_variants {
            write_text_element(writer, "lengthvariant", variant)?;
        }
        writer.write_event(Event::End(BytesEnd::new("translation")))?;
    } else {
        writer.write_event(Event::Start(translation))?;
        // A text event, even an empty one, keeps the end tag on the same line.
        write_text(writer, &message.translation)?;
        writer.write_event(Event::End(BytesEnd::new("translation")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("message")))?;
    Ok(())
}

fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> Result<(), DocumentError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    write_text(writer, text)?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Write `text`, spelling control characters XML 1.0 cannot carry as
/// `<byte value="xNN"/>`.
fn write_text(writer: &mut Writer<Vec<u8>>, text: &str) -> Result<(), DocumentError> {
    let mut rest = text;
    while let Some(index) = rest.find(needs_byte_element) {
        let (plain, tail) = rest.split_at(index);
        writer.write_event(Event::Text(BytesText::new(plain)))?;

        let mut chars = tail.chars();
        if let Some(ch) = chars.next() {
            let value = format!("x{:x}", u32::from(ch));
            let mut byte = BytesStart::new("byte");
            byte.push_attribute(("value", value.as_str()));
            writer.write_event(Event::Empty(byte))?;
        }
        rest = chars.as_str();
    }
    writer.write_event(Event::Text(BytesText::new(rest)))?;
    Ok(())
}

fn needs_byte_element(ch: char) -> bool {
    ch < '\u{20}' && !matches!(ch, '\t' | '\n' | '\r')
}
