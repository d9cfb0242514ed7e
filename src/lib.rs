//! org-secrets - Manage GitHub organization Actions secrets from the command line.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── bin/
//! │   ├── add_org_secrets            # Bulk-load secrets from a CSV file
//! │   └── generate_secret_for_org    # Encrypt one string for an organization
//! ├── cli/              # Argument parsing, logging, terminal output
//! └── core/             # Core library components
//!     ├── api/          # HTTP client and the Actions secrets endpoints
//!     ├── cipher/       # Sealed-box encryption
//!     ├── config        # Immutable run configuration
//!     ├── csv           # name,value record reader
//!     ├── secrets       # Encrypt, add and bulk-load operations
//!     ├── types         # Wire and domain types
//!     └── validation    # Secret name rules
//! ```
//!
//! # Protocol
//!
//! For every secret: fetch the organization's public key, seal the value in
//! an anonymous X25519 + XSalsa20-Poly1305 box, then `PUT` the base64
//! ciphertext together with the key id. Calls are strictly sequential and
//! every write is followed by a one second pause.

pub mod cli;
pub mod core;
pub mod error;
