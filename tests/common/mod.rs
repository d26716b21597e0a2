//! Shared helpers for integration tests.

#![allow(dead_code)]

use chrono::{DateTime, Local, NaiveDate};
use std::fs::{self, File};
use std::path::Path;
use std::time::{Duration, SystemTime};

/// A minimal JPEG whose IFD0 carries `DateTime` set to `date_time`
/// (`"YYYY:MM:DD HH:MM:SS"`).
pub fn jpeg_with_date_time(date_time: &str) -> Vec<u8> {
    let mut value = date_time.as_bytes().to_vec();
    value.push(0);

    // Header (8) + entry count (2) + one entry (12) + next IFD offset (4)
    let value_offset: u32 = 8 + 2 + 12 + 4;

    let mut tiff = b"MM\0\x2A\0\0\0\x08".to_vec();
    tiff.extend_from_slice(&1u16.to_be_bytes());
    tiff.extend_from_slice(&0x0132u16.to_be_bytes()); // DateTime
    tiff.extend_from_slice(&2u16.to_be_bytes()); // ASCII
    tiff.extend_from_slice(&(value.len() as u32).to_be_bytes());
    tiff.extend_from_slice(&value_offset.to_be_bytes());
    tiff.extend_from_slice(&0u32.to_be_bytes());
    tiff.extend_from_slice(&value);

    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    jpeg.extend_from_slice(&((2 + 6 + tiff.len()) as u16).to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

/// Write `content` to `path`, creating parent directories
pub fn write_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// 2016-07-05 12:00:00 UTC
pub const JULY_5_2016_NOON: u64 = 1_467_720_000;

pub fn set_mtime(path: &Path, secs_since_epoch: u64) {
    let file = File::options().write(true).open(path).unwrap();
    file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs_since_epoch))
        .unwrap();
}

/// Calendar date of `secs_since_epoch` in the local time zone
pub fn local_date(secs_since_epoch: u64) -> NaiveDate {
    let time = SystemTime::UNIX_EPOCH + Duration::from_secs(secs_since_epoch);
    DateTime::<Local>::from(time).date_naive()
}
