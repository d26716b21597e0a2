//! EXIF capture-date strategy.
//!
//! EXIF metadata is typically found in JPEG and TIFF files. Anything
//! without readable EXIF simply yields no date.

use chrono::NaiveDate;
use exif::{In, Reader, Tag, Value};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::OnceLock;

/// EXIF fields that can carry a capture date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExifField {
    DateTime,
    DateTimeOriginal,
    DateTimeDigitized,
}

impl ExifField {
    /// Order used when a profile does not say otherwise
    pub const DEFAULT_ORDER: [ExifField; 3] = [
        ExifField::DateTime,
        ExifField::DateTimeOriginal,
        ExifField::DateTimeDigitized,
    ];

    fn tag(self) -> Tag {
        match self {
            ExifField::DateTime => Tag::DateTime,
            ExifField::DateTimeOriginal => Tag::DateTimeOriginal,
            ExifField::DateTimeDigitized => Tag::DateTimeDigitized,
        }
    }
}

impl fmt::Display for ExifField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExifField::DateTime => "DateTime",
            ExifField::DateTimeOriginal => "DateTimeOriginal",
            ExifField::DateTimeDigitized => "DateTimeDigitized",
        };
        f.write_str(name)
    }
}

/// Read the first usable date among `fields`, in order.
///
/// Missing files, non-EXIF containers, absent fields and malformed values
/// all come back as `None`.
pub fn read_exif_date(path: &Path, fields: &[ExifField]) -> Option<(NaiveDate, ExifField)> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let exif = Reader::new().read_from_container(&mut reader).ok()?;

    fields.iter().find_map(|&field| {
        let entry = exif.get_field(field.tag(), In::PRIMARY)?;
        let text = first_ascii(&entry.value)?;
        parse_exif_date(text).map(|date| (date, field))
    })
}

/// Parse a strict `YYYY:MM:DD[ HH:MM:SS]` value into a calendar date.
///
/// Placeholder values such as `0000:00:00 00:00:00` are rejected because
/// they are not real dates.
pub fn parse_exif_date(value: &str) -> Option<NaiveDate> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]{4}):([0-9]{2}):([0-9]{2})(?: [0-9]{2}:[0-9]{2}:[0-9]{2})?$")
            .expect("EXIF date pattern is valid")
    });

    let value = value.trim_end_matches('\0');
    let caps = pattern.captures(value)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn first_ascii(value: &Value) -> Option<&str> {
    if let Value::Ascii(ref vec) = value {
        let bytes = vec.first()?;
        return std::str::from_utf8(bytes).ok();
    }
    None
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Minimal JPEG files carrying hand-assembled EXIF segments.

    const ASCII: u16 = 2;
    const LONG: u16 = 4;
    const EXIF_IFD_POINTER: u16 = 0x8769;

    pub const TAG_DATE_TIME: u16 = 0x0132;
    pub const TAG_DATE_TIME_ORIGINAL: u16 = 0x9003;
    pub const TAG_DATE_TIME_DIGITIZED: u16 = 0x9004;

    /// Build a JPEG whose IFD0 holds `primary` and whose Exif sub-IFD holds
    /// `exif`. Values are written as NUL-terminated ASCII.
    pub fn jpeg_with_exif(primary: &[(u16, &str)], exif: &[(u16, &str)]) -> Vec<u8> {
        let tiff = tiff_with_exif(primary, exif);

        let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
        let segment_len = (2 + 6 + tiff.len()) as u16;
        jpeg.extend_from_slice(&segment_len.to_be_bytes());
        jpeg.extend_from_slice(b"Exif\0\0");
        jpeg.extend_from_slice(&tiff);
        jpeg.extend_from_slice(&[0xFF, 0xD9]);
        jpeg
    }

    fn tiff_with_exif(primary: &[(u16, &str)], exif: &[(u16, &str)]) -> Vec<u8> {
        let ifd_len = |entries: usize| 2 + 12 * entries + 4;
        let primary_count = primary.len() + usize::from(!exif.is_empty());
        let exif_ifd_offset = 8 + ifd_len(primary_count);
        let mut data_offset = exif_ifd_offset;
        if !exif.is_empty() {
            data_offset += ifd_len(exif.len());
        }

        let mut data = Vec::new();
        let mut out = b"MM\0\x2A\0\0\0\x08".to_vec();

        let mut write_ifd = |out: &mut Vec<u8>, entries: &[(u16, &str)], pointer: Option<u32>| {
            let count = entries.len() + usize::from(pointer.is_some());
            out.extend_from_slice(&(count as u16).to_be_bytes());
            for (tag, text) in entries {
                let mut bytes = text.as_bytes().to_vec();
                bytes.push(0);
                out.extend_from_slice(&tag.to_be_bytes());
                out.extend_from_slice(&ASCII.to_be_bytes());
                out.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
                if bytes.len() <= 4 {
                    bytes.resize(4, 0);
                    out.extend_from_slice(&bytes);
                } else {
                    let offset = (data_offset + data.len()) as u32;
                    out.extend_from_slice(&offset.to_be_bytes());
                    data.extend_from_slice(&bytes);
                }
            }
            if let Some(offset) = pointer {
                out.extend_from_slice(&EXIF_IFD_POINTER.to_be_bytes());
                out.extend_from_slice(&LONG.to_be_bytes());
                out.extend_from_slice(&1u32.to_be_bytes());
                out.extend_from_slice(&offset.to_be_bytes());
            }
            out.extend_from_slice(&0u32.to_be_bytes());
        };

        let pointer = (!exif.is_empty()).then_some(exif_ifd_offset as u32);
        write_ifd(&mut out, primary, pointer);
        if !exif.is_empty() {
            write_ifd(&mut out, exif, None);
        }
        drop(write_ifd);

        out.extend_from_slice(&data);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use tempfile::TempDir;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn write_jpeg(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn parses_date_with_time() {
        assert_eq!(parse_exif_date("2016:07:05 14:30:00"), Some(ymd(2016, 7, 5)));
    }

    #[test]
    fn parses_date_without_time() {
        assert_eq!(parse_exif_date("2016:07:05"), Some(ymd(2016, 7, 5)));
    }

    #[test]
    fn rejects_loose_formats() {
        assert_eq!(parse_exif_date("2016-07-05 14:30:00"), None);
        assert_eq!(parse_exif_date("16:07:05"), None);
        assert_eq!(parse_exif_date("2016:07:05T14:30:00"), None);
        assert_eq!(parse_exif_date(""), None);
    }

    #[test]
    fn rejects_placeholder_dates() {
        assert_eq!(parse_exif_date("0000:00:00 00:00:00"), None);
        assert_eq!(parse_exif_date("2016:13:40 00:00:00"), None);
    }

    #[test]
    fn reads_primary_date_time() {
        let dir = TempDir::new().unwrap();
        let bytes = jpeg_with_exif(&[(TAG_DATE_TIME, "2016:07:05 10:00:00")], &[]);
        let path = write_jpeg(&dir, "photo.jpg", &bytes);

        let found = read_exif_date(&path, &ExifField::DEFAULT_ORDER);
        assert_eq!(found, Some((ymd(2016, 7, 5), ExifField::DateTime)));
    }

    #[test]
    fn falls_back_to_original_then_digitized() {
        let dir = TempDir::new().unwrap();
        let bytes = jpeg_with_exif(
            &[(TAG_DATE_TIME, "garbage")],
            &[
                (TAG_DATE_TIME_ORIGINAL, "0000:00:00 00:00:00"),
                (TAG_DATE_TIME_DIGITIZED, "2015:01:02 03:04:05"),
            ],
        );
        let path = write_jpeg(&dir, "photo.jpg", &bytes);

        let found = read_exif_date(&path, &ExifField::DEFAULT_ORDER);
        assert_eq!(found, Some((ymd(2015, 1, 2), ExifField::DateTimeDigitized)));
    }

    #[test]
    fn respects_configured_field_order() {
        let dir = TempDir::new().unwrap();
        let bytes = jpeg_with_exif(
            &[(TAG_DATE_TIME, "2020:02:02 00:00:00")],
            &[(TAG_DATE_TIME_ORIGINAL, "2010:01:01 00:00:00")],
        );
        let path = write_jpeg(&dir, "photo.jpg", &bytes);

        let found = read_exif_date(
            &path,
            &[ExifField::DateTimeOriginal, ExifField::DateTime],
        );
        assert_eq!(found, Some((ymd(2010, 1, 1), ExifField::DateTimeOriginal)));

        let only_primary = read_exif_date(&path, &[ExifField::DateTimeDigitized]);
        assert_eq!(only_primary, None);
    }

    #[test]
    fn non_exif_files_yield_nothing() {
        let dir = TempDir::new().unwrap();
        let path = write_jpeg(&dir, "notes.txt", b"no metadata here");
        assert_eq!(read_exif_date(&path, &ExifField::DEFAULT_ORDER), None);
        assert_eq!(
            read_exif_date(Path::new("/nonexistent/file.jpg"), &ExifField::DEFAULT_ORDER),
            None
        );
    }
}
