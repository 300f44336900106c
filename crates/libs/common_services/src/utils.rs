const URL_SAFE: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-_";

/// Generate a random URL safe ID of the given length.
pub fn nice_id(length: usize) -> String {
    (0..length)
        .map(|_| URL_SAFE[rand::random_range(0..URL_SAFE.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_id_has_requested_length() {
        assert_eq!(nice_id(16).len(), 16);
        assert_eq!(nice_id(0).len(), 0);
    }

    #[test]
    fn nice_id_only_contains_url_safe_chars() {
        let id = nice_id(256);
        assert!(
            id.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }
}
