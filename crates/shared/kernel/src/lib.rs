//! Kernel utilities shared across the launch stack.
//! Keep this crate lightweight; it provides config loading, the launch
//! state container, and ergonomic ID helpers.
//!
//! ## ID generation
//! Use `launch_id!` for URL-safe, unambiguous session IDs:
//! ```rust
//! # use ign_kernel::launch_id;
//! let id = launch_id!();
//! assert_eq!(id.len(), 12);
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use ign_kernel::config::load_config;
//! let cfg: serde_json::Value = load_config::<serde_json::Value>(Some("host")).unwrap();
//! ```

pub mod config;
pub mod launch;

// Alphabet excludes visually ambiguous characters (I, O, l, 0, 1).
pub const SAFE_ALPHABET: &[char; 55] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub use ign_domain as domain;
pub use nanoid::nanoid;

/// Generates an unambiguous `NanoID` (no visually confusing characters),
/// used to tag a launch session in logs.
#[macro_export]
macro_rules! launch_id {
    () => {
        $crate::nanoid!(12, $crate::SAFE_ALPHABET)
    };
    ($size:expr) => {
        $crate::nanoid!($size, $crate::SAFE_ALPHABET)
    };
}
