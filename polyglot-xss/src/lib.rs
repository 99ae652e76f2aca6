//! # Polyglot XSS
//!
//! Allowlist sanitizer for HTML fragments taken from translation catalogs.
//!
//! ## Features
//!
//! - ✅ **Allowlist only** - Unknown tags are removed with their content
//! - ✅ **Attribute filtering** - Only allowlisted attribute names survive
//! - ✅ **Case-insensitive** - `<P CLASS>` matches `p` and `class`
//! - ✅ **Configurable** - Policy is plain data, loadable from site config
//!
//! ## Quick Start
//!
//! ```rust
//! use polyglot_xss::{HtmlSanitizer, SanitizerPolicy};
//!
//! let policy = SanitizerPolicy::new(["p", "strong"], ["class"]);
//! let sanitizer = HtmlSanitizer::from_policy(&policy);
//!
//! let clean = sanitizer
//!     .sanitize(r#"<p class="x" onclick="go()">Hi <strong>there</strong></p><script>alert(1)</script>"#)
//!     .unwrap();
//! assert_eq!(clean, r#"<p class="x">Hi <strong>there</strong></p>"#);
//! ```
//!
//! ## Removal semantics
//!
//! A disallowed element is dropped together with its whole subtree, including
//! children that would be allowed on their own:
//!
//! ```rust
//! use polyglot_xss::{HtmlSanitizer, SanitizerPolicy};
//!
//! let sanitizer = HtmlSanitizer::from_policy(&SanitizerPolicy::new(["p"], Vec::<String>::new()));
//! assert_eq!(sanitizer.sanitize("<div><p>gone</p></div><p>kept</p>").unwrap(), "<p>kept</p>");
//! ```

pub mod error;
pub mod policy;
pub mod sanitizer;

pub use error::{Result, XssError};
pub use policy::SanitizerPolicy;
pub use sanitizer::HtmlSanitizer;
