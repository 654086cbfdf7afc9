//! Reading calculation requests from text and JSON.

use crate::models::{classify, compute_text, parse, SubnetError, SubnetInfo, MAX_LENGTH};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::sync::OnceLock;

/// Regex for `address`, `address/prefix` or `address prefix`.
static REQUEST_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_request_regex() -> &'static Regex {
    REQUEST_REGEX.get_or_init(|| {
        Regex::new(r"^\s*(?P<addr>[^\s/]+)\s*(?:[/\s]\s*(?P<prefix>[+-]?\d+))?\s*$")
            .expect("Invalid Regex")
    })
}

/// One address and prefix to calculate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub address: String,
    /// Missing prefix means the classful default.
    #[serde(default)]
    pub prefix_length: Option<i64>,
}

impl Request {
    /// Compute the result, filling a missing prefix with `fallback_prefix`
    /// or the class default.
    pub fn compute(&self, fallback_prefix: Option<i64>) -> Result<SubnetInfo, SubnetError> {
        let prefix = match self.prefix_length.or(fallback_prefix) {
            Some(prefix) => prefix,
            None => default_prefix_for(&self.address)?,
        };
        compute_text(&self.address, prefix)
    }
}

/// Classful default prefix for the address text, /32 for class D and E.
pub fn default_prefix_for(address: &str) -> Result<i64, SubnetError> {
    let (_class, default) = classify(parse(address)?);
    Ok(default.unwrap_or(MAX_LENGTH) as i64)
}

/// Split a request line into address text and optional prefix.
///
/// # Examples
/// ```
/// use subnet_calc::processing::split_request;
/// let req = split_request("192.168.1.10/24").unwrap();
/// assert_eq!(req.address, "192.168.1.10");
/// assert_eq!(req.prefix_length, Some(24));
/// ```
pub fn split_request(line: &str) -> Result<Request, SubnetError> {
    let caps = get_request_regex().captures(line).ok_or_else(|| {
        SubnetError::Parse {
            input: line.to_string(),
            kind: crate::models::ParseErrorKind::NonNumeric(line.trim().to_string()),
        }
    })?;

    let address = caps["addr"].to_string();
    let prefix_length = match caps.name("prefix") {
        Some(m) => Some(
            m.as_str()
                .parse::<i64>()
                .map_err(|_| SubnetError::InvalidPrefix(i64::MAX))?,
        ),
        None => None,
    };
    log::trace!("split_request({line:?}) -> {address} {prefix_length:?}");
    Ok(Request {
        address,
        prefix_length,
    })
}

/// Read a JSON array of requests from a file.
///
/// Errors name the JSON path of the offending element.
pub fn read_batch(path: &str) -> Result<Vec<Request>, Box<dyn Error>> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading batch file {path}: {e}"))?;
    log::info!("Reading batch file: {path}");
    parse_batch(&json)
}

/// Parse a JSON array of requests.
pub fn parse_batch(json: &str) -> Result<Vec<Request>, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let requests: Vec<Request> = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing batch JSON: path={} error={}", e.path(), e.inner()))?;
    log::info!("# Got request count = {}", requests.len());
    Ok(requests)
}
