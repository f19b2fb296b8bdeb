//! # Request Context
//!
//! Explicit per-request session context, sourced once at the boundary
//! (cookie jar, session middleware) and threaded into every call. The
//! request layer never reaches into ambient storage itself.

/// Session context attached to every outgoing request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Bearer token; `None` for guest sessions (no Authorization header)
    pub token: Option<String>,

    /// Locale tag for `Accept-Language`; falls back to the configured
    /// default when `None`
    pub locale: Option<String>,
}

impl RequestContext {
    /// Context for an unauthenticated (guest) session.
    pub fn guest() -> Self {
        RequestContext::default()
    }

    /// Context for an authenticated session.
    pub fn authenticated(token: impl Into<String>) -> Self {
        RequestContext {
            token: Some(token.into()),
            locale: None,
        }
    }

    /// Sets the locale tag.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_has_no_token() {
        let ctx = RequestContext::guest();
        assert!(ctx.token.is_none());
        assert!(ctx.locale.is_none());
    }

    #[test]
    fn test_authenticated_with_locale() {
        let ctx = RequestContext::authenticated("tok-1").with_locale("ar");
        assert_eq!(ctx.token.as_deref(), Some("tok-1"));
        assert_eq!(ctx.locale.as_deref(), Some("ar"));
    }
}
