//! Terminal rendering of the "go to login" navigation.

use shopdesk_core::traits::Navigator;

use crate::output;

/// Points the operator at the login command.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliNavigator;

impl Navigator for CliNavigator {
    fn redirect_to_login(&self) {
        output::print_warning("Administrator login required: run `shopdesk login`.");
    }
}
