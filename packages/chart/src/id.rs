use uuid::Uuid;

/// A random id of `len` lowercase hex characters.
pub fn generate_id(len: usize) -> String {
    let mut id = String::with_capacity(len);
    while id.len() < len {
        let simple = Uuid::new_v4().simple().to_string();
        let take = (len - id.len()).min(simple.len());
        id.push_str(&simple[..take]);
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_length() {
        for len in [0, 1, 8, 32, 45, 100] {
            let id = generate_id(len);
            assert_eq!(id.len(), len);
            assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn ids_differ() {
        assert_ne!(generate_id(16), generate_id(16));
    }
}
