//! Navigation seam used by the access gate to send the operator to login.

/// Presentation-layer hook for redirect-equivalent navigation.
///
/// The access gate calls this when a protected operation is attempted
/// without a valid session. A CLI prints guidance; a UI would switch views.
pub trait Navigator: Send + Sync + std::fmt::Debug {
    /// Navigate to the entry/login surface.
    fn redirect_to_login(&self);
}

