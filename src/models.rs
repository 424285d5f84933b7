use serde::{Deserialize, Serialize};

/// Authentication used against the gateway endpoint
#[derive(Clone, Debug, PartialEq, Deserialize, Default)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AuthType {
    #[default]
    None,
    Bearer {
        token: String,
    },
    Basic {
        username: String,
        password: String,
    },
}

/// Keeps only ASCII digits
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Turns a configured number like `+15555550100` into the digits the form edits
pub fn number_to_digits(number: &str) -> String {
    digits_only(number.strip_prefix('+').unwrap_or(number))
}

/// Input of the `debugSendSMS` mutation
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendSmsInput {
    pub from: String,
    pub to: String,
    pub body: String,
}

impl SendSmsInput {
    /// Builds the input from the digit-only form values, prefixing `+` to both numbers
    pub fn from_form(from_digits: &str, to_digits: &str, body: &str) -> Self {
        SendSmsInput {
            from: format!("+{}", from_digits),
            to: format!("+{}", to_digits),
            body: body.to_string(),
        }
    }
}

/// What the gateway returns for a sent message
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SendResult {
    pub id: String,
    #[serde(rename = "providerURL")]
    pub provider_url: String,
}

/// A successful send as shown by the form
#[derive(Clone, Debug)]
pub struct SentMessage {
    pub result: SendResult,
    pub sent_at: chrono::DateTime<chrono::Local>,
    pub time_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only_drops_everything_else() {
        assert_eq!(digits_only("+1 (555) 010-0199"), "15550100199");
        assert_eq!(digits_only("abc"), "");
        assert_eq!(digits_only("٣12"), "12");
    }

    #[test]
    fn test_number_to_digits_strips_leading_plus() {
        assert_eq!(number_to_digits("+15555550100"), "15555550100");
        assert_eq!(number_to_digits("15555550100"), "15555550100");
        assert_eq!(number_to_digits(""), "");
    }

    #[test]
    fn test_send_input_prefixes_plus() {
        let input = SendSmsInput::from_form("1234567890", "9876543210", "hello");
        assert_eq!(input.from, "+1234567890");
        assert_eq!(input.to, "+9876543210");
        assert_eq!(input.body, "hello");
    }

    #[test]
    fn test_send_result_uses_provider_url_key() {
        let result: SendResult =
            serde_json::from_str(r#"{"id":"SM1","providerURL":"https://example/SM1"}"#).unwrap();
        assert_eq!(result.id, "SM1");
        assert_eq!(result.provider_url, "https://example/SM1");
    }
}
