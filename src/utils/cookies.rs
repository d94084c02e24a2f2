use axum::http::header::COOKIE;
use axum::http::{HeaderMap, HeaderValue};

/// Cookie holding the list of poll ids this client has voted in, encoded
/// as a comma-separated string. Ids are hex, so commas never collide.
/// This is a soft one-vote-per-poll restriction, not a security control:
/// clearing cookies (or waiting out the expiry) resets it.
pub const VOTED_COOKIE: &str = "pollsVoted";

/// 15 minutes, after which the restriction silently resets.
pub const VOTED_COOKIE_MAX_AGE_SECS: u64 = 900;

pub fn voted_polls(headers: &HeaderMap) -> Vec<String> {
    let Some(cookie_header) = headers.get(COOKIE).and_then(|v| v.to_str().ok()) else {
        return Vec::new();
    };

    for cookie in cookie_header.split(';') {
        let cookie = cookie.trim();
        if let Some((name, value)) = cookie.split_once('=') {
            if name == VOTED_COOKIE {
                return value
                    .split(',')
                    .map(|id| id.trim())
                    .filter(|id| !id.is_empty())
                    .map(str::to_string)
                    .collect();
            }
        }
    }

    Vec::new()
}

pub fn has_voted(voted: &[String], poll_id: &str) -> bool {
    voted.iter().any(|id| id == poll_id)
}

pub fn voted_cookie_header(voted: &[String]) -> Option<HeaderValue> {
    let value = format!(
        "{}={}; Path=/; HttpOnly; Max-Age={}",
        VOTED_COOKIE,
        voted.join(","),
        VOTED_COOKIE_MAX_AGE_SECS
    );
    HeaderValue::from_str(&value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn no_cookie_header_means_no_votes() {
        assert!(voted_polls(&HeaderMap::new()).is_empty());
    }

    #[test]
    fn parses_voted_list_among_other_cookies() {
        let headers =
            headers_with_cookie("theme=dark; pollsVoted=aaa,bbb; session=zzz");
        assert_eq!(voted_polls(&headers), vec!["aaa", "bbb"]);
    }

    #[test]
    fn empty_value_parses_to_empty_list() {
        let headers = headers_with_cookie("pollsVoted=");
        assert!(voted_polls(&headers).is_empty());
    }

    #[test]
    fn membership_check() {
        let voted = vec!["aaa".to_string(), "bbb".to_string()];
        assert!(has_voted(&voted, "aaa"));
        assert!(!has_voted(&voted, "ccc"));
    }

    #[test]
    fn header_carries_attributes_and_round_trips() {
        let voted = vec!["aaa".to_string(), "bbb".to_string()];
        let header = voted_cookie_header(&voted).unwrap();
        let text = header.to_str().unwrap();
        assert!(text.starts_with("pollsVoted=aaa,bbb"));
        assert!(text.contains("HttpOnly"));
        assert!(text.contains("Max-Age=900"));
        assert!(text.contains("Path=/"));

        let headers = headers_with_cookie("pollsVoted=aaa,bbb");
        assert_eq!(voted_polls(&headers), voted);
    }
}
