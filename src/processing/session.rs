//! Keeps the last valid result while input is being edited.
//!
//! A front end calls [`Session::update`] on every change of the address text
//! or the prefix. Incomplete or invalid input leaves the previous result in
//! place so it can stay on screen.

use crate::models::{compute_text, SubnetError, SubnetInfo};

#[derive(Debug, Default, Clone)]
pub struct Session {
    address_text: String,
    prefix_length: i64,
    current: Option<SubnetInfo>,
    rejected: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute from new input. On error the previous result is kept.
    pub fn update<T>(&mut self, address_text: &str, prefix_length: T) -> Result<&SubnetInfo, SubnetError>
    where
        T: TryInto<i64> + Copy,
    {
        self.address_text = address_text.to_string();
        self.prefix_length = prefix_length.try_into().unwrap_or(i64::MAX);

        match compute_text(address_text, self.prefix_length) {
            Ok(info) => {
                log::debug!("Session updated to {info}");
                Ok(&*self.current.insert(info))
            }
            Err(e) => {
                self.rejected += 1;
                log::warn!(
                    "Ignoring input '{address_text}/{prefix}': {e}",
                    prefix = self.prefix_length
                );
                Err(e)
            }
        }
    }

    /// Switch to the classful default prefix of the current address.
    ///
    /// Returns the new result, or `None` when there is no result yet or the
    /// class has no default (D and E).
    pub fn apply_default_prefix(&mut self) -> Option<&SubnetInfo> {
        let info = self.current?.with_default_prefix()?;
        log::info!(
            "Applying class {class} default prefix /{prefix}",
            class = info.network_class,
            prefix = info.prefix_length
        );
        self.prefix_length = info.prefix_length as i64;
        Some(&*self.current.insert(info))
    }

    /// Last valid result.
    pub fn current(&self) -> Option<&SubnetInfo> {
        self.current.as_ref()
    }

    pub fn address_text(&self) -> &str {
        &self.address_text
    }

    pub fn prefix_length(&self) -> i64 {
        self.prefix_length
    }

    /// Number of inputs rejected so far.
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_update_keeps_last_valid() {
        let mut session = Session::new();
        assert!(session.current().is_none());

        session.update("192.168.1.10", 24).unwrap();
        let before = *session.current().unwrap();

        // Typing the next address one character at a time
        for partial in ["1", "10", "10.", "10.0.0", "10.0.0."] {
            assert!(session.update(partial, 24).unwrap_err().is_parse());
            assert_eq!(session.current(), Some(&before));
        }
        assert!(session.update("192.168.1.10", 40).unwrap_err().is_invalid_prefix());
        assert_eq!(session.current(), Some(&before));
        assert_eq!(session.rejected(), 6);

        let info = session.update("10.0.0.1", 8).unwrap();
        assert_eq!(info.network_address, Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(session.address_text(), "10.0.0.1");
    }

    #[test]
    fn test_apply_default_prefix() {
        let mut session = Session::new();
        assert!(session.apply_default_prefix().is_none());

        session.update("172.16.5.5", 30).unwrap();
        let info = session.apply_default_prefix().unwrap();
        assert_eq!(info.prefix_length, 16);
        assert_eq!(session.prefix_length(), 16);

        session.update("230.1.2.3", 30).unwrap();
        assert!(session.apply_default_prefix().is_none());
        assert_eq!(session.current().unwrap().prefix_length, 30);
    }
}
