use rand::Rng;

/// Characters a generated name is drawn from.
pub(crate) const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789_";

/// Number of random characters appended to the prefix.
pub(crate) const NAME_LENGTH: usize = 8;

/// Represents a randomly generated leaf name.
pub(crate) struct RandomName {
    name: String,
}

impl RandomName {
    /// Generates `prefix` followed by [`NAME_LENGTH`] random characters.
    ///
    /// Not suitable where unguessable names are required; the names only
    /// need to avoid collisions.
    pub fn new(prefix: &str) -> Self {
        let mut rng = rand::rng();
        let mut name = String::with_capacity(prefix.len() + NAME_LENGTH);
        name.push_str(prefix);
        for _ in 0..NAME_LENGTH {
            name.push(char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]));
        }
        Self { name }
    }

    pub fn len(&self) -> usize {
        self.name.len()
    }
}

impl AsRef<str> for RandomName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_name() {
        let name = RandomName::new("test");
        assert!(name.as_ref().starts_with("test"));
        assert_eq!(name.len(), 4 + NAME_LENGTH);
    }

    #[test]
    fn suffix_uses_alphabet_only() {
        for _ in 0..200 {
            let name = RandomName::new("");
            assert_eq!(name.len(), NAME_LENGTH);
            assert!(name.as_ref().bytes().all(|b| ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn names_rarely_repeat() {
        let names: HashSet<String> = (0..1000)
            .map(|_| RandomName::new("tmp").as_ref().to_owned())
            .collect();
        assert_eq!(names.len(), 1000);
    }
}
