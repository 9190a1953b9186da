use crate::base::cookieerror::CookieError;
use crate::cookies::directive::{self, Directive};
use crate::cookies::timefmt;
use indexmap::IndexMap;
use std::ops::Index;
use time::{Duration, OffsetDateTime};

/// A cookie holding application data pairs alongside its directives.
///
/// Data keys are case-sensitive and never collide with a reserved
/// [`Directive`] name. Valued directives are absent when unset; storing an
/// empty string unsets them. Data pairs keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BiscuitFields"))]
pub struct Biscuit {
    data: IndexMap<String, String>,
    domain: Option<String>,
    path: Option<String>,
    expires: Option<String>,
    max_age: Option<String>,
    secure: bool,
    http_only: bool,
}

impl Biscuit {
    /// An empty cookie: no data, no directives, both flags off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a cookie whose first data pair is `key=value`.
    ///
    /// ```
    /// use biscuit::Biscuit;
    ///
    /// let cookie = Biscuit::create("thisisakey", "thisisavalue")
    ///     .path("/")
    ///     .max_age("300")
    ///     .http_only(true)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(
    ///     cookie.render(true),
    ///     "Set-Cookie: thisisakey=thisisavalue; path=/; max-age=300; HttpOnly"
    /// );
    /// ```
    pub fn create(key: impl Into<String>, value: impl Into<String>) -> BiscuitBuilder {
        BiscuitBuilder::default().pair(key, value)
    }

    pub fn builder() -> BiscuitBuilder {
        BiscuitBuilder::default()
    }

    // ===== data =====

    pub fn has_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Value stored under `key`, or `""` when missing.
    pub fn get_key(&self, key: &str) -> &str {
        self.get_key_or(key, "")
    }

    pub fn get_key_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.data.get(key).map(String::as_str).unwrap_or(default)
    }

    /// Store `value` under `key`.
    ///
    /// Returns `Ok(false)` without touching the cookie when `overwrite` is
    /// off and the key already exists. Fails with
    /// [`CookieError::ReservedField`] when `key` names a directive.
    pub fn set_key(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        overwrite: bool,
    ) -> Result<bool, CookieError> {
        let key = key.into();
        if directive::is_reserved(&key) {
            tracing::debug!(key = %key, "rejected reserved name as cookie data key");
            return Err(CookieError::reserved_field(key));
        }
        if !overwrite && self.data.contains_key(&key) {
            return Ok(false);
        }
        self.data.insert(key, value.into());
        Ok(true)
    }

    /// Store a pair whose key is already known not to be reserved.
    pub(crate) fn put_data(&mut self, key: &str, value: &str) {
        self.data.insert(key.to_string(), value.to_string());
    }

    /// Overwriting write, the counterpart of reading with `cookie[key]`.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), CookieError> {
        self.set_key(key, value, true).map(|_| ())
    }

    /// Remove every data pair and return the removed keys in insertion order.
    pub fn clear_keys(&mut self) -> Vec<String> {
        self.data.drain(..).map(|(key, _)| key).collect()
    }

    /// Number of data pairs.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.data.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.data.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.data.values().map(String::as_str)
    }

    // ===== valued directives =====

    /// Value of a valued directive, `None` when absent or for flags.
    pub fn directive(&self, directive: Directive) -> Option<&str> {
        let slot = match directive {
            Directive::Domain => &self.domain,
            Directive::Path => &self.path,
            Directive::Expires => &self.expires,
            Directive::MaxAge => &self.max_age,
            Directive::Secure | Directive::HttpOnly => return None,
        };
        slot.as_deref()
    }

    pub fn has_directive(&self, directive: Directive) -> bool {
        match directive {
            Directive::Secure => self.secure,
            Directive::HttpOnly => self.http_only,
            _ => self.directive(directive).is_some(),
        }
    }

    /// Set a valued directive and return the previous value (`""` if it
    /// was absent). Flags are left untouched and yield `""`.
    pub fn set_directive(&mut self, directive: Directive, value: impl Into<String>) -> String {
        let slot = match directive {
            Directive::Domain => &mut self.domain,
            Directive::Path => &mut self.path,
            Directive::Expires => &mut self.expires,
            Directive::MaxAge => &mut self.max_age,
            Directive::Secure | Directive::HttpOnly => return String::new(),
        };
        replace(slot, value)
    }

    /// Apply a raw directive value as it appears on the wire.
    ///
    /// Flags are cleared only by a value of `false` (any case); every other
    /// value, including an empty one, sets them.
    pub(crate) fn apply_directive(&mut self, directive: Directive, value: &str) {
        match directive {
            Directive::Secure => self.secure = !value.eq_ignore_ascii_case("false"),
            Directive::HttpOnly => self.http_only = !value.eq_ignore_ascii_case("false"),
            _ => {
                self.set_directive(directive, value);
            }
        }
    }

    pub fn has_domain(&self) -> bool {
        self.domain.is_some()
    }

    pub fn domain(&self) -> &str {
        self.domain_or("")
    }

    pub fn domain_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.domain.as_deref().unwrap_or(default)
    }

    /// Set the domain and return the previous one (`""` if it was absent).
    pub fn set_domain(&mut self, value: impl Into<String>) -> String {
        self.set_directive(Directive::Domain, value)
    }

    pub fn has_path(&self) -> bool {
        self.path.is_some()
    }

    pub fn path(&self) -> &str {
        self.path_or("")
    }

    pub fn path_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.path.as_deref().unwrap_or(default)
    }

    pub fn set_path(&mut self, value: impl Into<String>) -> String {
        self.set_directive(Directive::Path, value)
    }

    pub fn has_expires(&self) -> bool {
        self.expires.is_some()
    }

    pub fn expires(&self) -> &str {
        self.expires_or("")
    }

    pub fn expires_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.expires.as_deref().unwrap_or(default)
    }

    pub fn set_expires(&mut self, value: impl Into<String>) -> String {
        self.set_directive(Directive::Expires, value)
    }

    pub fn has_max_age(&self) -> bool {
        self.max_age.is_some()
    }

    pub fn max_age(&self) -> &str {
        self.max_age_or("")
    }

    pub fn max_age_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.max_age.as_deref().unwrap_or(default)
    }

    pub fn set_max_age(&mut self, value: impl Into<String>) -> String {
        self.set_directive(Directive::MaxAge, value)
    }

    // ===== flags =====

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// Set the secure flag and return its previous state.
    pub fn set_secure(&mut self, secure: bool) -> bool {
        std::mem::replace(&mut self.secure, secure)
    }

    pub fn is_http_only(&self) -> bool {
        self.http_only
    }

    pub fn set_http_only(&mut self, http_only: bool) -> bool {
        std::mem::replace(&mut self.http_only, http_only)
    }

    // ===== time-aware accessors =====

    /// The `expires` directive as a UTC timestamp.
    pub fn expires_as_time(&self) -> Result<OffsetDateTime, CookieError> {
        timefmt::parse_expires(self.expires())
    }

    /// Store `at` as the `expires` directive and return the previous value.
    ///
    /// Returns `Ok(None)` when no expiry was set. Fails without modifying
    /// the cookie if the previous value does not follow the expires layout.
    pub fn set_expires_as_time(
        &mut self,
        at: OffsetDateTime,
    ) -> Result<Option<OffsetDateTime>, CookieError> {
        let previous = self
            .expires
            .as_deref()
            .map(timefmt::parse_expires)
            .transpose()?;
        self.expires = Some(timefmt::format_expires(at)?);
        Ok(previous)
    }

    /// The `max-age` directive as a duration in seconds.
    pub fn max_age_as_time(&self) -> Result<Duration, CookieError> {
        timefmt::parse_max_age(self.max_age())
    }

    /// Store the whole seconds of `age` as the `max-age` directive and
    /// return the previous value.
    pub fn set_max_age_as_time(&mut self, age: Duration) -> Result<Option<Duration>, CookieError> {
        let previous = self
            .max_age
            .as_deref()
            .map(timefmt::parse_max_age)
            .transpose()?;
        self.max_age = Some(timefmt::format_max_age(age));
        Ok(previous)
    }
}

/// Swap a directive slot, treating the empty string as absent on both sides.
fn replace(slot: &mut Option<String>, value: impl Into<String>) -> String {
    let value = value.into();
    let next = if value.is_empty() { None } else { Some(value) };
    std::mem::replace(slot, next).unwrap_or_default()
}

impl Index<&str> for Biscuit {
    type Output = str;

    fn index(&self, key: &str) -> &str {
        self.get_key(key)
    }
}

/// Iterator over a cookie's data pairs.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: indexmap::map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Biscuit {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Builder for [`Biscuit`] from explicit parameters.
///
/// Pairs are copied in; reserved keys are reported by [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct BiscuitBuilder {
    data: Vec<(String, String)>,
    domain: String,
    path: String,
    expires: String,
    max_age: String,
    secure: bool,
    http_only: bool,
}

impl BiscuitBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pair(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.push((key.into(), value.into()));
        self
    }

    pub fn data<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.data
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn expires(mut self, expires: impl Into<String>) -> Self {
        self.expires = expires.into();
        self
    }

    pub fn max_age(mut self, max_age: impl Into<String>) -> Self {
        self.max_age = max_age.into();
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    /// Later pairs with a repeated key overwrite earlier ones.
    pub fn build(self) -> Result<Biscuit, CookieError> {
        let mut biscuit = Biscuit::new();
        for (key, value) in self.data {
            biscuit.insert(key, value)?;
        }
        biscuit.set_domain(self.domain);
        biscuit.set_path(self.path);
        biscuit.set_expires(self.expires);
        biscuit.set_max_age(self.max_age);
        biscuit.set_secure(self.secure);
        biscuit.set_http_only(self.http_only);
        Ok(biscuit)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BiscuitFields {
    #[serde(default)]
    data: IndexMap<String, String>,
    #[serde(default)]
    domain: Option<String>,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    expires: Option<String>,
    #[serde(default)]
    max_age: Option<String>,
    #[serde(default)]
    secure: bool,
    #[serde(default)]
    http_only: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<BiscuitFields> for Biscuit {
    type Error = CookieError;

    fn try_from(fields: BiscuitFields) -> Result<Self, Self::Error> {
        BiscuitBuilder {
            data: fields.data.into_iter().collect(),
            domain: fields.domain.unwrap_or_default(),
            path: fields.path.unwrap_or_default(),
            expires: fields.expires.unwrap_or_default(),
            max_age: fields.max_age.unwrap_or_default(),
            secure: fields.secure,
            http_only: fields.http_only,
        }
        .build()
    }
}
