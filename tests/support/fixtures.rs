//! Test fixtures and constants.

/// Organization used by every test.
pub const ORG: &str = "octo-org";

/// Token the binaries are given; the mock server requires it.
pub const TOKEN: &str = "ghp_test_token_0123456789";

/// Key id served alongside the mock public key.
pub const KEY_ID: &str = "568250167242549743";

/// Standard test secrets used across multiple tests.
pub const STANDARD_SECRETS: &[(&str, &str)] = &[
    ("DATABASE_URL", "postgres://localhost/mydb"),
    ("API_KEY", "sk-test-12345"),
    ("JWT_SECRET", "super-secret-jwt-token"),
];

/// CSV with quoting edge cases: an embedded comma, doubled quotes and a
/// multi-line value.
pub const SAMPLE_CSV_COMPLEX: &str = "PLAIN,value\n\
CSV_LIST,\"a,b,c\"\n\
QUOTED,\"say \"\"hi\"\"\"\n\
PEM,\"-----BEGIN KEY-----\nMIIB\n-----END KEY-----\"\n";
