//! `DATE` and `TIME`: packed calendar fields (§4.1.3).
//!
//! `TIME`'s wire layout fixes a source quirk: the reference packer sets the
//! `has_timezone` bit whenever a timezone is attached at all, even when the
//! offset is exactly zero (in which case it never actually emits the 2-byte
//! offset suffix, leaving the flag and payload out of sync). Here the flag
//! tracks only whether the 2-byte suffix is actually written, both ways.

use super::util::take;
use crate::error::{Error, Result};
use crate::value::TimeValue;
use chrono::{NaiveDate, NaiveTime, Timelike};

pub(crate) fn pack_date(out: &mut Vec<u8>, value: NaiveDate) {
    use chrono::Datelike;
    let raw: u32 = (value.day() << 19) | (value.month() << 15) | ((value.year() as u32) << 1);
    out.extend_from_slice(&raw.to_be_bytes()[1..]);
}

pub(crate) fn unpack_date(data: &[u8], offset: usize) -> Result<(usize, NaiveDate)> {
    let slice = take(data, offset, 3)?;
    let raw = u32::from_be_bytes([0, slice[0], slice[1], slice[2]]);
    let day = raw >> 19;
    let month = (raw >> 15) & 0xf;
    let year = (raw >> 1) & 0x3fff;
    let date = NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or(Error::InvalidCalendarValue)?;
    Ok((offset + 3, date))
}

pub(crate) fn pack_time(out: &mut Vec<u8>, value: &TimeValue) {
    let microseconds = value.time.nanosecond() / 1000;
    let has_microseconds = microseconds != 0;
    let has_timezone = matches!(value.offset_minutes, Some(m) if m != 0);

    let mut integer: u64 = ((value.time.hour() as u64) << 19)
        | ((value.time.minute() as u64) << 13)
        | ((value.time.second() as u64) << 7);
    let mut size = 3usize;
    if has_microseconds {
        integer |= 1 << 6;
    }
    if has_timezone {
        integer |= 1 << 5;
    }
    // The microsecond field borrows the head's 4 low (otherwise-unused) bits
    // as its high 4 bits, then continues into 2 more bytes — mirroring the
    // reference packer's `integer <<= 16; integer |= microsecond`.
    if has_microseconds {
        integer <<= 16;
        integer |= microseconds as u64;
        size += 2;
    }
    if let Some(minutes) = value.offset_minutes {
        if minutes != 0 {
            integer <<= 16;
            if minutes < 0 {
                integer |= 1 << 15;
            }
            integer |= (minutes.unsigned_abs() as u64) << 4;
            size += 2;
        }
    }
    out.extend_from_slice(&integer.to_be_bytes()[(8 - size)..]);
}

pub(crate) fn unpack_time(data: &[u8], offset: usize) -> Result<(usize, TimeValue)> {
    let slice = take(data, offset, 3)?;
    let head = u32::from_be_bytes([0, slice[0], slice[1], slice[2]]) as u64;
    let hour = (head >> 19) as u32;
    let minute = ((head >> 13) & 0x3f) as u32;
    let second = ((head >> 7) & 0x3f) as u32;
    let has_microseconds = (head >> 6) & 1 == 1;
    let has_timezone = (head >> 5) & 1 == 1;
    let mut pointer = offset + 3;

    let microsecond = if has_microseconds {
        let slice = take(data, pointer, 2)?;
        pointer += 2;
        (((head & 0xf) << 16) | u16::from_be_bytes([slice[0], slice[1]]) as u64) as u32
    } else {
        0
    };

    let offset_minutes = if has_timezone {
        let slice = take(data, pointer, 2)?;
        pointer += 2;
        let raw = u16::from_be_bytes([slice[0], slice[1]]);
        let sign: i32 = if (raw >> 15) & 1 == 1 { -1 } else { 1 };
        let minutes = ((raw >> 4) & 0x7ff) as i32;
        Some(sign * minutes)
    } else {
        None
    };

    let time = NaiveTime::from_hms_micro_opt(hour, minute, second, microsecond)
        .ok_or(Error::InvalidCalendarValue)?;
    Ok((
        pointer,
        TimeValue {
            time,
            offset_minutes,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_matches_the_seed_scenario() {
        let date = NaiveDate::from_ymd_opt(2014, 7, 4).unwrap();
        let mut out = Vec::new();
        pack_date(&mut out, date);
        assert_eq!(out, vec![0x23, 0x8f, 0xbc]);
        assert_eq!(unpack_date(&out, 0).unwrap(), (3, date));
    }

    #[test]
    fn date_rejects_invalid_calendar_values() {
        // month = 13 packed directly, bypassing a validating constructor.
        let raw: u32 = (4 << 19) | (13 << 15) | (2014 << 1);
        let bytes = raw.to_be_bytes()[1..].to_vec();
        assert!(unpack_date(&bytes, 0).is_err());
    }

    #[test]
    fn naive_time_round_trips_without_flags() {
        let value = TimeValue {
            time: NaiveTime::from_hms_opt(13, 45, 9).unwrap(),
            offset_minutes: None,
        };
        let mut out = Vec::new();
        pack_time(&mut out, &value);
        assert_eq!(out.len(), 3);
        assert_eq!(unpack_time(&out, 0).unwrap(), (3, value));
    }

    #[test]
    fn time_with_microseconds_round_trips() {
        let value = TimeValue {
            time: NaiveTime::from_hms_micro_opt(13, 45, 9, 123_456).unwrap(),
            offset_minutes: None,
        };
        let mut out = Vec::new();
        pack_time(&mut out, &value);
        assert_eq!(out.len(), 5);
        assert_eq!(unpack_time(&out, 0).unwrap(), (5, value));
    }

    #[test]
    fn time_with_negative_offset_round_trips() {
        let value = TimeValue {
            time: NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
            offset_minutes: Some(-300),
        };
        let mut out = Vec::new();
        pack_time(&mut out, &value);
        assert_eq!(out.len(), 5);
        assert_eq!(unpack_time(&out, 0).unwrap(), (5, value));
    }

    #[test]
    fn zero_offset_is_encoded_as_naive_not_as_a_timezone_suffix() {
        let value = TimeValue {
            time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            offset_minutes: Some(0),
        };
        let mut out = Vec::new();
        pack_time(&mut out, &value);
        assert_eq!(out.len(), 3);
        let (_, decoded) = unpack_time(&out, 0).unwrap();
        assert_eq!(decoded.offset_minutes, None);
    }

    #[test]
    fn time_with_both_flags_round_trips() {
        let value = TimeValue {
            time: NaiveTime::from_hms_micro_opt(23, 59, 59, 1).unwrap(),
            offset_minutes: Some(330),
        };
        let mut out = Vec::new();
        pack_time(&mut out, &value);
        assert_eq!(out.len(), 7);
        assert_eq!(unpack_time(&out, 0).unwrap(), (7, value));
    }
}
