//! Message bodies for the account-lifecycle mails.

/// Invitation mail sent when an admin provisions an account.
pub fn welcome_body(email: &str, set_password_url: &str) -> String {
    format!(
        r#"<html>
  <body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
    <h1>Welcome to Posthub</h1>
    <p>Hello,</p>
    <p>An account has been created for you at <strong>{email}</strong>.</p>
    <p>To get started, set up your password:</p>
    <p><a href="{set_password_url}">Set Your Password</a></p>
    <p>Or copy and paste this link into your browser:</p>
    <p>{set_password_url}</p>
    <p>If you did not expect this email, please contact our support team.</p>
    <p>This is an automated message, please do not reply.</p>
  </body>
</html>"#
    )
}

/// Confirmation mail sent after first-time credential setup.
pub fn password_set_body(login_url: &str) -> String {
    format!(
        r#"<html>
  <body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
    <h2>Password Set Successfully</h2>
    <p>Your password has been set. You can now log in to your account.</p>
    <p><a href="{login_url}">Login Now</a></p>
    <p>If you did not set this password, please contact our support team immediately.</p>
  </body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_body_contains_link() {
        let body = welcome_body(
            "invitee@example.com",
            "http://localhost:5173/set-password?email=invitee@example.com",
        );
        assert!(body.contains("invitee@example.com"));
        assert!(body.contains("/set-password?email="));
    }
}
