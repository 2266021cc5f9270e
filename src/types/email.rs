//! Email request types.

use super::RequestParameters;
use crate::builders::BuilderError;

/// Charset used for subject and bodies unless overridden.
pub const DEFAULT_CHARSET: &str = "UTF-8";

/// One address or a list of addresses.
///
/// Every recipient argument accepts either form; both are normalized to a
/// list before encoding.
///
/// ```
/// use integrations_aws_ses_query::types::Recipients;
///
/// let one: Recipients = "a@example.com".into();
/// let many: Recipients = vec!["a@example.com", "b@example.com"].into();
///
/// assert_eq!(one.len(), 1);
/// assert_eq!(many.into_vec(), vec!["a@example.com", "b@example.com"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipients {
    /// A single address.
    One(String),
    /// Several addresses, in the order they should be numbered.
    Many(Vec<String>),
}

impl Recipients {
    /// The addresses as a slice.
    pub fn as_slice(&self) -> &[String] {
        match self {
            Recipients::One(address) => std::slice::from_ref(address),
            Recipients::Many(addresses) => addresses,
        }
    }

    /// Number of addresses.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether there are no addresses.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Append an address, turning a single address into a list.
    pub fn push(&mut self, address: impl Into<String>) {
        let address = address.into();
        match self {
            Recipients::One(existing) => {
                let first = std::mem::take(existing);
                *self = Recipients::Many(vec![first, address]);
            }
            Recipients::Many(addresses) => addresses.push(address),
        }
    }

    /// Consume into a list.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Recipients::One(address) => vec![address],
            Recipients::Many(addresses) => addresses,
        }
    }
}

impl From<&str> for Recipients {
    fn from(address: &str) -> Self {
        Recipients::One(address.to_string())
    }
}

impl From<String> for Recipients {
    fn from(address: String) -> Self {
        Recipients::One(address)
    }
}

impl From<&String> for Recipients {
    fn from(address: &String) -> Self {
        Recipients::One(address.clone())
    }
}

impl From<Vec<String>> for Recipients {
    fn from(addresses: Vec<String>) -> Self {
        Recipients::Many(addresses)
    }
}

impl From<Vec<&str>> for Recipients {
    fn from(addresses: Vec<&str>) -> Self {
        Recipients::Many(addresses.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Recipients {
    fn from(addresses: &[&str]) -> Self {
        Recipients::Many(addresses.iter().map(|a| a.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Recipients {
    fn from(addresses: [&str; N]) -> Self {
        Recipients::Many(addresses.iter().map(|a| a.to_string()).collect())
    }
}

/// Parameters of a `SendEmail` call.
///
/// Built directly with [`SendEmailRequest::new`] or through
/// [`EmailBuilder`](crate::builders::EmailBuilder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendEmailRequest {
    /// Sender address.
    pub source: String,
    /// "To" recipients.
    pub destinations: Recipients,
    /// Subject line.
    pub subject: String,
    /// HTML body. Sent as an empty value when `None`.
    pub html_body: Option<String>,
    /// Plain text body. Sent as an empty value when `None`.
    pub text_body: Option<String>,
    /// "Cc" recipients. The whole family is omitted when `None`.
    pub cc: Option<Recipients>,
    /// "Bcc" recipients. The whole family is omitted when `None`.
    pub bcc: Option<Recipients>,
    /// Charset for subject and bodies.
    pub charset: Option<String>,
}

impl SendEmailRequest {
    /// Create a request with the required fields.
    pub fn new(
        source: impl Into<String>,
        destinations: impl Into<Recipients>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            destinations: destinations.into(),
            subject: subject.into(),
            html_body: None,
            text_body: None,
            cc: None,
            bcc: None,
            charset: None,
        }
    }

    /// Set the HTML body.
    pub fn with_html(mut self, body: impl Into<String>) -> Self {
        self.html_body = Some(body.into());
        self
    }

    /// Set the plain text body.
    pub fn with_text(mut self, body: impl Into<String>) -> Self {
        self.text_body = Some(body.into());
        self
    }

    /// Set the "Cc" recipients.
    pub fn with_cc(mut self, cc: impl Into<Recipients>) -> Self {
        self.cc = Some(cc.into());
        self
    }

    /// Set the "Bcc" recipients.
    pub fn with_bcc(mut self, bcc: impl Into<Recipients>) -> Self {
        self.bcc = Some(bcc.into());
        self
    }

    /// Set the charset.
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    /// The charset that will be sent.
    pub fn charset(&self) -> &str {
        self.charset.as_deref().unwrap_or(DEFAULT_CHARSET)
    }

    /// Check the request can be encoded.
    ///
    /// # Errors
    ///
    /// - empty `source`
    /// - no "To" recipients
    /// - an empty address in any recipient family
    /// - a supplied but empty "Cc" or "Bcc" list
    pub fn validate(&self) -> Result<(), BuilderError> {
        if self.source.trim().is_empty() {
            return Err(BuilderError::invalid_value("Source", "sender address is empty"));
        }

        if self.destinations.is_empty() {
            return Err(BuilderError::invalid_value(
                "Destination.ToAddresses",
                "at least one recipient is required",
            ));
        }
        check_addresses("Destination.ToAddresses", &self.destinations)?;

        if let Some(cc) = &self.cc {
            check_non_empty_family("Destination.CcAddresses", cc)?;
        }
        if let Some(bcc) = &self.bcc {
            check_non_empty_family("Destination.BccAddresses", bcc)?;
        }

        if self.charset().trim().is_empty() {
            return Err(BuilderError::invalid_value("Charset", "charset is empty"));
        }

        Ok(())
    }

    /// Encode into `SendEmail` form parameters.
    ///
    /// ```
    /// use integrations_aws_ses_query::types::SendEmailRequest;
    ///
    /// let params = SendEmailRequest::new("from@example.com", "to@example.com", "Hi")
    ///     .to_parameters();
    ///
    /// assert_eq!(params.get("Message.Subject.Charset"), Some("UTF-8"));
    /// assert_eq!(params.get("Message.Body.Text.Data"), Some(""));
    /// assert!(!params.contains_key("Destination.CcAddresses.member.1"));
    /// ```
    pub fn to_parameters(&self) -> RequestParameters {
        let charset = self.charset();
        let mut params = RequestParameters::new();

        params.insert("Source", self.source.as_str());
        params.insert("Message.Subject.Data", self.subject.as_str());
        params.insert("Message.Subject.Charset", charset);
        params.insert(
            "Message.Body.Text.Data",
            self.text_body.as_deref().unwrap_or_default(),
        );
        params.insert("Message.Body.Text.Charset", charset);
        params.insert(
            "Message.Body.Html.Data",
            self.html_body.as_deref().unwrap_or_default(),
        );
        params.insert("Message.Body.Html.Charset", charset);

        params.insert_members("Destination.ToAddresses", self.destinations.as_slice());
        if let Some(cc) = &self.cc {
            params.insert_members("Destination.CcAddresses", cc.as_slice());
        }
        if let Some(bcc) = &self.bcc {
            params.insert_members("Destination.BccAddresses", bcc.as_slice());
        }

        params
    }
}

fn check_non_empty_family(field: &str, recipients: &Recipients) -> Result<(), BuilderError> {
    if recipients.is_empty() {
        return Err(BuilderError::invalid_value(
            field,
            "recipient list is empty; leave it unset instead",
        ));
    }
    check_addresses(field, recipients)
}

fn check_addresses(field: &str, recipients: &Recipients) -> Result<(), BuilderError> {
    match recipients
        .as_slice()
        .iter()
        .position(|address| address.trim().is_empty())
    {
        Some(index) => Err(BuilderError::invalid_value(
            format!("{}.member.{}", field, index + 1),
            "address is empty",
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn member_values(params: &RequestParameters, prefix: &str) -> Vec<String> {
        params
            .iter()
            .filter(|(k, _)| k.starts_with(prefix))
            .map(|(_, v)| v.to_string())
            .collect()
    }

    #[rstest]
    #[case(vec!["a@example.com"])]
    #[case(vec!["a@example.com", "b@example.com"])]
    #[case(vec!["a@example.com", "b@example.com", "c@example.com", "d@example.com"])]
    fn test_to_members_numbered_in_order(#[case] addresses: Vec<&str>) {
        let request = SendEmailRequest::new("from@example.com", addresses.clone(), "Hi");
        let params = request.to_parameters();

        for (i, address) in addresses.iter().enumerate() {
            let key = format!("Destination.ToAddresses.member.{}", i + 1);
            assert_eq!(params.get(&key), Some(*address));
        }
        assert_eq!(
            member_values(&params, "Destination.ToAddresses.member."),
            addresses
        );
    }

    #[test]
    fn test_base_parameters_order_and_defaults() {
        let params = SendEmailRequest::new("from@example.com", "to@example.com", "Subject")
            .to_parameters();

        assert_eq!(
            params.keys().collect::<Vec<_>>(),
            vec![
                "Source",
                "Message.Subject.Data",
                "Message.Subject.Charset",
                "Message.Body.Text.Data",
                "Message.Body.Text.Charset",
                "Message.Body.Html.Data",
                "Message.Body.Html.Charset",
                "Destination.ToAddresses.member.1",
            ]
        );
        assert_eq!(params.get("Message.Body.Text.Data"), Some(""));
        assert_eq!(params.get("Message.Body.Html.Data"), Some(""));
        assert_eq!(params.get("Message.Body.Html.Charset"), Some("UTF-8"));
    }

    #[test]
    fn test_cc_and_bcc_numbered_independently() {
        let params = SendEmailRequest::new("from@example.com", ["t1@example.com", "t2@example.com"], "Hi")
            .with_cc("c1@example.com")
            .with_bcc(vec!["b1@example.com", "b2@example.com", "b3@example.com"])
            .to_parameters();

        assert_eq!(params.get("Destination.CcAddresses.member.1"), Some("c1@example.com"));
        assert!(!params.contains_key("Destination.CcAddresses.member.2"));
        assert_eq!(params.get("Destination.BccAddresses.member.1"), Some("b1@example.com"));
        assert_eq!(params.get("Destination.BccAddresses.member.3"), Some("b3@example.com"));
        assert_eq!(params.get("Destination.ToAddresses.member.2"), Some("t2@example.com"));
    }

    #[test]
    fn test_absent_cc_bcc_emit_nothing() {
        let params = SendEmailRequest::new("from@example.com", "to@example.com", "Hi").to_parameters();

        assert!(!params.keys().any(|k| k.starts_with("Destination.CcAddresses")));
        assert!(!params.keys().any(|k| k.starts_with("Destination.BccAddresses")));
    }

    #[test]
    fn test_custom_charset_applies_everywhere() {
        let params = SendEmailRequest::new("from@example.com", "to@example.com", "Hi")
            .with_charset("ISO-8859-1")
            .to_parameters();

        for key in [
            "Message.Subject.Charset",
            "Message.Body.Text.Charset",
            "Message.Body.Html.Charset",
        ] {
            assert_eq!(params.get(key), Some("ISO-8859-1"));
        }
    }

    #[test]
    fn test_validate_accepts_minimal_request() {
        let request = SendEmailRequest::new("from@example.com", "to@example.com", "Hi");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_destinations() {
        let request = SendEmailRequest::new("from@example.com", Vec::<String>::new(), "Hi");
        match request.validate() {
            Err(BuilderError::InvalidValue { field, .. }) => {
                assert_eq!(field, "Destination.ToAddresses")
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_empty_source() {
        let request = SendEmailRequest::new("  ", "to@example.com", "Hi");
        assert!(matches!(
            request.validate(),
            Err(BuilderError::InvalidValue { ref field, .. }) if field == "Source"
        ));
    }

    #[test]
    fn test_validate_points_at_empty_member() {
        let request = SendEmailRequest::new("from@example.com", "to@example.com", "Hi")
            .with_bcc(vec!["b1@example.com", ""]);
        match request.validate() {
            Err(BuilderError::InvalidValue { field, .. }) => {
                assert_eq!(field, "Destination.BccAddresses.member.2")
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_supplied_but_empty_cc() {
        let request = SendEmailRequest::new("from@example.com", "to@example.com", "Hi")
            .with_cc(Vec::<String>::new());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_recipients_push_promotes_single() {
        let mut recipients = Recipients::from("a@example.com");
        recipients.push("b@example.com");

        assert_eq!(
            recipients,
            Recipients::Many(vec!["a@example.com".to_string(), "b@example.com".to_string()])
        );
        assert_eq!(recipients.into_vec().len(), 2);
    }
}
