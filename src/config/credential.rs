//! Provider credential resolved once at process start.

/// Opaque API key. Never printed, never serialized.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw key; blank values are not credentials.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Startup client configuration: the credential, if one was found.
#[derive(Debug, Clone, Default)]
pub struct ClientConfiguration {
    credential: Option<Credential>,
}

impl ClientConfiguration {
    pub fn unconfigured() -> Self {
        Self { credential: None }
    }

    pub fn with_credential(credential: Credential) -> Self {
        Self {
            credential: Some(credential),
        }
    }

    /// Read the credential from the process environment.
    pub fn from_env(var_name: &str) -> Self {
        Self::resolve(var_name, |name| std::env::var(name).ok())
    }

    /// Resolve the credential through an arbitrary lookup (process env, test map).
    pub fn resolve<F>(var_name: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            credential: lookup(var_name).and_then(Credential::new),
        }
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }
}
