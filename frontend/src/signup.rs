use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Please enter your email address.")]
    EmailRequired,
    #[error("That doesn't look like an email address.")]
    InvalidEmail,
}

/// Light sanity check for the newsletter and popup forms. Returns the
/// trimmed address.
pub fn validate_email(input: &str) -> Result<String, SignupError> {
    let email = input.trim();
    if email.is_empty() {
        return Err(SignupError::EmailRequired);
    }

    let (local, domain) = email.split_once('@').ok_or(SignupError::InvalidEmail)?;
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@');
    if local.is_empty() || !domain_ok || email.chars().any(char::is_whitespace) {
        return Err(SignupError::InvalidEmail);
    }

    Ok(email.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupForm {
    Newsletter,
    Popup,
}

/// Title and body of the toast shown after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub title: &'static str,
    pub description: String,
}

impl SignupForm {
    /// Validates the address and picks the toast copy for this form. On
    /// success the cleaned address comes back with the feedback.
    pub fn submit(self, input: &str) -> Result<(String, Feedback), Feedback> {
        match validate_email(input) {
            Ok(email) => {
                let feedback = match self {
                    SignupForm::Newsletter => Feedback {
                        title: "Successfully subscribed!",
                        description: "Thank you for subscribing to Centra newsletter.".to_string(),
                    },
                    SignupForm::Popup => Feedback {
                        title: "Welcome to the future!",
                        description: "Thank you for joining Centra. We'll be in touch soon.".to_string(),
                    },
                };
                Ok((email, feedback))
            }
            Err(SignupError::EmailRequired) => Err(Feedback {
                title: "Email required",
                description: match self {
                    SignupForm::Newsletter => "Please enter your email address to subscribe.".to_string(),
                    SignupForm::Popup => SignupError::EmailRequired.to_string(),
                },
            }),
            Err(e) => Err(Feedback {
                title: "Invalid email",
                description: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_required_error() {
        assert_eq!(validate_email(""), Err(SignupError::EmailRequired));
        assert_eq!(validate_email("   "), Err(SignupError::EmailRequired));
    }

    #[test]
    fn accepts_and_trims_plain_addresses() {
        assert_eq!(validate_email(" hodl@centra.world "), Ok("hodl@centra.world".to_string()));
        assert_eq!(validate_email("a.b+news@mail.co.uk"), Ok("a.b+news@mail.co.uk".to_string()));
    }

    #[test]
    fn newsletter_and_popup_use_their_own_copy() {
        let (email, feedback) = SignupForm::Newsletter.submit("a@b.io").unwrap();
        assert_eq!(email, "a@b.io");
        assert_eq!(feedback.title, "Successfully subscribed!");

        let (_, feedback) = SignupForm::Popup.submit("a@b.io").unwrap();
        assert_eq!(feedback.title, "Welcome to the future!");
    }

    #[test]
    fn empty_submit_asks_for_an_email() {
        let newsletter = SignupForm::Newsletter.submit("").unwrap_err();
        assert_eq!(newsletter.title, "Email required");
        assert_eq!(newsletter.description, "Please enter your email address to subscribe.");

        let popup = SignupForm::Popup.submit(" ").unwrap_err();
        assert_eq!(popup.description, "Please enter your email address.");
    }

    #[test]
    fn malformed_submit_is_rejected() {
        let feedback = SignupForm::Popup.submit("not-an-email").unwrap_err();
        assert_eq!(feedback.title, "Invalid email");
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["centra", "@centra.world", "me@", "me@localhost", "me@.com", "me@x.", "a@b@c.io", "my name@x.io"] {
            assert_eq!(validate_email(bad), Err(SignupError::InvalidEmail), "{}", bad);
        }
    }
}
