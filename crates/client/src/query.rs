//! Query-string parsing for invite links.
//!
//! The wizard is entered via a link carrying the drive identifier as a
//! query parameter, e.g. `https://host/?drive=reslig-202200001`.

use url::Url;

/// Query parameter naming the drive to offboard.
pub const DRIVE_PARAM: &str = "drive";

/// Parsed query parameters from an invite link.
#[derive(Debug, Clone, Default)]
pub struct RequestQuery {
    params: Vec<(String, String)>,
}

impl RequestQuery {
    /// Parse a raw query string. A leading `?` is tolerated.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let params = url::form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { params }
    }

    /// Parse the query portion of a full URL.
    pub fn from_url(url: &str) -> Result<Self, url::ParseError> {
        let parsed = Url::parse(url)?;
        Ok(Self::parse(parsed.query().unwrap_or("")))
    }

    /// First value for the given key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The drive identifier carried by the link.
    pub fn drive_id(&self) -> Option<&str> {
        self.get(DRIVE_PARAM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_drive_parameter() {
        let query = RequestQuery::parse("drive=reslig-202200001");
        assert_eq!(query.drive_id(), Some("reslig-202200001"));
    }

    #[test]
    fn tolerates_leading_question_mark() {
        let query = RequestQuery::parse("?drive=abc&foo=bar");
        assert_eq!(query.drive_id(), Some("abc"));
        assert_eq!(query.get("foo"), Some("bar"));
    }

    #[test]
    fn missing_parameter_is_none() {
        let query = RequestQuery::parse("foo=bar");
        assert_eq!(query.drive_id(), None);
        assert_eq!(RequestQuery::parse("").drive_id(), None);
    }

    #[test]
    fn first_value_wins_for_repeated_keys() {
        let query = RequestQuery::parse("drive=first&drive=second");
        assert_eq!(query.drive_id(), Some("first"));
    }

    #[test]
    fn percent_encoding_is_decoded() {
        let query = RequestQuery::parse("drive=research%20drive%2F01");
        assert_eq!(query.drive_id(), Some("research drive/01"));
    }

    #[test]
    fn parses_from_full_url() {
        let query =
            RequestQuery::from_url("https://archive.example.org/?drive=reslig-202200001").unwrap();
        assert_eq!(query.drive_id(), Some("reslig-202200001"));
    }

    #[test]
    fn url_without_query_has_no_parameters() {
        let query = RequestQuery::from_url("https://archive.example.org/").unwrap();
        assert_eq!(query.drive_id(), None);
    }

    #[test]
    fn invalid_url_is_an_error() {
        assert!(RequestQuery::from_url("not a url").is_err());
    }
}
