//! Line codec for day files
//!
//! Each entry is stored as one JSON object per line. Lines are written with
//! `", "` / `": "` separators and every character outside printable ASCII is
//! escaped as `\uXXXX`, which keeps lines byte-compatible with stores written
//! by earlier versions of the tool.

use crate::domain::{date_of_timestamp, Entry};
use crate::error::{BragError, Result};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io::{self, Write};

/// Encode an entry into a single line without a trailing newline.
pub fn encode(entry: &Entry) -> Result<String> {
    date_of_timestamp(&entry.timestamp)?;

    let mut buf = Vec::with_capacity(128 + entry.content.len());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, LineFormatter);
    entry.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| BragError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Serialize `value` as an indented document using the line escaping.
pub fn encode_pretty<T: ?Sized + Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = DocumentFormatter {
        inner: PrettyFormatter::with_indent(b"  "),
    };
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| BragError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Decode one stored line back into an entry.
pub fn decode(line: &str) -> Result<Entry> {
    serde_json::from_str(line).map_err(|e| BragError::Decode(e.to_string()))
}

struct LineFormatter;

impl Formatter for LineFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        write_ascii_fragment(writer, fragment)
    }
}

/// Indented output for whole documents, with the same escaping as lines.
struct DocumentFormatter {
    inner: PrettyFormatter<'static>,
}

impl Formatter for DocumentFormatter {
    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        write_ascii_fragment(writer, fragment)
    }
}

/// Write `fragment` with everything outside printable ASCII as `\uXXXX`
/// UTF-16 units.
fn write_ascii_fragment<W>(writer: &mut W, fragment: &str) -> io::Result<()>
where
    W: ?Sized + Write,
{
    let mut start = 0;
    for (idx, ch) in fragment.char_indices() {
        if (' '..='~').contains(&ch) {
            continue;
        }
        writer.write_all(fragment[start..idx].as_bytes())?;
        let mut units = [0u16; 2];
        for unit in ch.encode_utf16(&mut units).iter() {
            write!(writer, "\\u{:04x}", unit)?;
        }
        start = idx + ch.len_utf8();
    }
    writer.write_all(fragment[start..].as_bytes())
}
