//! Deserialization helpers for the API's JSON conventions.
//!
//! Twitter payloads mix numeric and string ids, send `null` for absent
//! booleans and counters, escape HTML in tweet text, and use three different
//! date formats depending on the endpoint.

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Date format used by statuses, users, direct messages and saved searches.
const TWITTER_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

pub(crate) fn parse_twitter_date(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_str(raw, TWITTER_DATE_FORMAT).map(|d| d.with_timezone(&Utc))
}

/// Dates in either RFC 3339, RFC 2822 or the status date format.
pub(crate) fn parse_any_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .or_else(|_| DateTime::parse_from_str(raw, TWITTER_DATE_FORMAT))
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

/// `null` and missing both map to `T::default()`.
pub(crate) fn nullable<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

pub(crate) fn twitter_date<'de, D>(d: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(d)?.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => parse_twitter_date(raw)
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid date '{raw}': {e}"))),
    }
}

pub(crate) fn any_date<'de, D>(d: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(d)?.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => parse_any_date(raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid date '{raw}'"))),
    }
}

/// Trends `as_of`: epoch seconds (number or ten-digit string) or any
/// supported date string.
pub(crate) fn trends_date<'de, D>(d: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Option::<NumOrStr>::deserialize(d)? {
        None => return Ok(None),
        Some(NumOrStr::Num(secs)) => return Ok(DateTime::from_timestamp(secs, 0)),
        Some(NumOrStr::Str(raw)) => raw,
    };
    if raw.is_empty() {
        return Ok(None);
    }
    if raw.len() == 10 && raw.bytes().all(|b| b.is_ascii_digit()) {
        let secs: i64 = raw
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid epoch '{raw}'")))?;
        return Ok(DateTime::from_timestamp(secs, 0));
    }
    parse_any_date(&raw)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("invalid date '{raw}'")))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumOrStr {
    Num(i64),
    Str(String),
}

impl NumOrStr {
    fn into_i64<E: serde::de::Error>(self) -> Result<i64, E> {
        match self {
            NumOrStr::Num(n) => Ok(n),
            NumOrStr::Str(s) => s
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid numeric id '{s}'"))),
        }
    }
}

/// Numeric id sent as a number or a numeric string.
pub(crate) fn id<'de, D>(d: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    NumOrStr::deserialize(d)?.into_i64()
}

pub(crate) fn id_opt<'de, D>(d: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumOrStr>::deserialize(d)? {
        None => Ok(None),
        Some(NumOrStr::Str(s)) if s.is_empty() => Ok(None),
        Some(v) => v.into_i64().map(Some),
    }
}

pub(crate) fn id_vec<'de, D>(d: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<NumOrStr>>::deserialize(d)?
        .unwrap_or_default()
        .into_iter()
        .map(NumOrStr::into_i64)
        .collect()
}

/// `{"id": ...}` reduced to its id.
pub(crate) fn id_of_object<'de, D>(d: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct IdRef {
        #[serde(deserialize_with = "id")]
        id: i64,
    }
    Ok(Option::<IdRef>::deserialize(d)?.map(|r| r.id))
}

/// String with HTML entities decoded; `null` becomes empty.
pub(crate) fn unescaped<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(d)?
        .map(|s| unescape_html(&s))
        .unwrap_or_default())
}

pub(crate) fn unescape_html(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_status_dates() {
        let date = parse_twitter_date("Wed Aug 27 13:08:45 +0000 2008").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2008, 8, 27));
        assert_eq!((date.hour(), date.minute(), date.second()), (13, 8, 45));
    }

    #[test]
    fn parses_trend_dates_in_any_supported_format() {
        assert!(parse_any_date("2012-08-24T23:25:43Z").is_some());
        assert!(parse_any_date("Sat, 25 Aug 2012 00:38:33 +0000").is_some());
        assert!(parse_any_date("Wed Aug 27 13:08:45 +0000 2008").is_some());
        assert!(parse_any_date("yesterday").is_none());
    }

    #[test]
    fn trends_dates_accept_epoch_seconds() {
        #[derive(Deserialize)]
        struct AsOf {
            #[serde(default, deserialize_with = "trends_date")]
            as_of: Option<DateTime<Utc>>,
        }
        let parse = |json: &str| serde_json::from_str::<AsOf>(json).unwrap().as_of.map(|d| d.timestamp());
        assert_eq!(parse(r#"{"as_of": 1239763200}"#), Some(1239763200));
        assert_eq!(parse(r#"{"as_of": "1239763200"}"#), Some(1239763200));
        assert_eq!(parse(r#"{"as_of": "2009-04-15T02:40:00Z"}"#), Some(1239763200));
        assert_eq!(parse(r#"{"as_of": null}"#), None);
        assert!(serde_json::from_str::<AsOf>(r#"{"as_of": "soon"}"#).is_err());
    }

    #[test]
    fn unescapes_entities_once() {
        assert_eq!(unescape_html("a &amp;lt; b &lt; c"), "a &lt; b < c");
        assert_eq!(unescape_html("&quot;hi&quot; &#39;there&#39;"), "\"hi\" 'there'");
        assert_eq!(unescape_html("plain"), "plain");
    }

    #[test]
    fn ids_accept_numbers_and_strings() {
        #[derive(Deserialize)]
        struct Ids {
            #[serde(deserialize_with = "id")]
            a: i64,
            #[serde(default, deserialize_with = "id_opt")]
            b: Option<i64>,
            #[serde(default, deserialize_with = "id_vec")]
            c: Vec<i64>,
        }
        let ids: Ids = serde_json::from_str(r#"{"a": "12", "b": null, "c": [1, "2"]}"#).unwrap();
        assert_eq!(ids.a, 12);
        assert_eq!(ids.b, None);
        assert_eq!(ids.c, vec![1, 2]);

        let missing: Ids = serde_json::from_str(r#"{"a": 7}"#).unwrap();
        assert_eq!(missing.b, None);
        assert!(missing.c.is_empty());

        assert!(serde_json::from_str::<Ids>(r#"{"a": "x"}"#).is_err());
    }
}
