use rand::RngCore;

/// Generates a fresh poll id: 12 random bytes, hex-encoded to 24 chars.
pub fn new_poll_id() -> String {
    let mut bytes = [0u8; 12];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_24_hex_chars() {
        let id = new_poll_id();
        assert_eq!(id.len(), 24);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn consecutive_ids_differ() {
        assert_ne!(new_poll_id(), new_poll_id());
    }
}
