mod replacement;
mod sender;

pub use replacement::{Replacement, Replacements};
pub use sender::MessageSender;
