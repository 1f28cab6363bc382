//! Bundled command providers.
//!
//! Each provider contributes one scope. Hosts can add their own through
//! [`Discovery::add`].

mod dir;
mod math;

pub use dir::DirectoryCommands;
pub use math::MathCommands;

use crate::commands::Discovery;

/// Register the bundled providers with a discovery pass.
pub fn register_providers(discovery: &mut Discovery) {
    discovery.add_default::<DirectoryCommands>("directory");
    discovery.add_default::<MathCommands>("math");
}
