//! Ordered form parameters for query API actions.

use url::form_urlencoded;

/// Ordered mapping from parameter name to value.
///
/// Keys keep their insertion order so the encoded body is reproducible.
/// Inserting a key that already exists replaces its value in place.
///
/// # Example
///
/// ```
/// use integrations_aws_ses_query::types::RequestParameters;
///
/// let mut params = RequestParameters::new();
/// params.insert("EmailAddress", "a@example.com");
///
/// assert_eq!(
///     params.encode_body("VerifyEmailAddress"),
///     "Action=VerifyEmailAddress&EmailAddress=a%40example.com"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParameters {
    entries: Vec<(String, String)>,
}

impl RequestParameters {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Append `<prefix>.member.N` entries for each value, numbered from 1.
    ///
    /// A family that is already present is overwritten member by member.
    ///
    /// ```
    /// use integrations_aws_ses_query::types::RequestParameters;
    ///
    /// let mut params = RequestParameters::new();
    /// params.insert_members("Destination.ToAddresses", ["a@example.com", "b@example.com"]);
    ///
    /// assert_eq!(params.get("Destination.ToAddresses.member.1"), Some("a@example.com"));
    /// assert_eq!(params.get("Destination.ToAddresses.member.2"), Some("b@example.com"));
    /// ```
    pub fn insert_members<I, S>(&mut self, prefix: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fresh = !self.contains_key(&format!("{}.member.1", prefix));
        for (index, value) in values.into_iter().enumerate() {
            let key = format!("{}.member.{}", prefix, index + 1);
            if fresh {
                self.entries.push((key, value.into()));
            } else {
                self.insert(key, value);
            }
        }
    }

    /// Look up a parameter value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether a parameter is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parameter names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encode as `Action=<action>&<key>=<value>&...`.
    ///
    /// Values are form-urlencoded; names and the action are emitted as is.
    pub fn encode_body(&self, action: &str) -> String {
        let mut body = format!("Action={}", action);
        for (key, value) in &self.entries {
            body.push('&');
            body.push_str(key);
            body.push('=');
            body.extend(form_urlencoded::byte_serialize(value.as_bytes()));
        }
        body
    }
}

impl<K, V> FromIterator<(K, V)> for RequestParameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}
