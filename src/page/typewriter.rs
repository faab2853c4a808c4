/// Yields successively longer prefixes of `text`, one character at a time.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: 0,
        }
    }
}

impl Iterator for Typewriter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let c = self.text[self.shown..].chars().next()?;
        self.shown += c.len_utf8();
        Some(self.text[..self.shown].to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_by_character() {
        let frames: Vec<_> = Typewriter::new("Hé!").collect();
        assert_eq!(frames, ["H", "Hé", "Hé!"]);
        assert_eq!(Typewriter::new("").next(), None);
    }
}
