use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// Why a contact submission was turned away. `Display` is the toast text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingField,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Required fields first, then email shape. Only the empty check trims;
    /// padding around the address makes it invalid.
    pub fn validate(&self) -> Result<(), FormError> {
        let fields = [&self.name, &self.email, &self.message];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(FormError::MissingField);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

/// `local@domain.tld`: one `@`, no whitespace, and a dot inside the domain
/// with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(is_valid_email("a@b..c"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a b@c.co"));
    }

    #[test]
    fn missing_field_wins_over_bad_email() {
        let form = ContactForm::new("", "nope", "hi");
        assert_eq!(form.validate(), Err(FormError::MissingField));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let form = ContactForm::new("Ada", "ada@example.com", "   ");
        assert_eq!(form.validate(), Err(FormError::MissingField));
    }

    #[test]
    fn padded_email_is_rejected() {
        let form = ContactForm::new("Ada", " a@b.co ", "hi");
        assert_eq!(form.validate(), Err(FormError::InvalidEmail));
        assert_eq!(ContactForm::new("Ada", "a@b.co", "hi").validate(), Ok(()));
    }

    #[test]
    fn toast_text() {
        assert_eq!(FormError::MissingField.to_string(), "Please fill in all fields");
        assert_eq!(FormError::InvalidEmail.to_string(), "Please enter a valid email address");
    }
}
