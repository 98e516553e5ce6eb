use sweetshop_auth::Claims;

/// Authenticated identity for a request.
///
/// Inserted by the auth middleware after token validation; present on all
/// protected routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    claims: Claims,
}

impl CurrentUser {
    pub fn new(claims: Claims) -> Self {
        Self { claims }
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }
}
