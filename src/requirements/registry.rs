//! Compiled-in requirement tables.
//!
//! The required extension list is fixed at build time and is not
//! configurable. Only the alias table can be extended at runtime.

use super::capability::{RequiredCapability, VersionRange};

/// Extensions required on every supported PHP version.
pub const REQUIRED_EXTENSIONS: &[&str] = &[
    "mongodb",
    "FFI",
    "SPX",
    "curl",
    "openssl",
    "PDO",
    "pdo_mysql",
    "pdo_pgsql",
    "pdo_sqlite",
    "mysqli",
    "redis",
    "gd",
    "mbstring",
    "zip",
    "intl",
    "bcmath",
    "gmp",
    "opcache",
    "apcu",
    "imagick",
    "soap",
    "xml",
    "dom",
    "simplexml",
    "xmlreader",
    "xmlwriter",
    "xsl",
    "pcntl",
    "posix",
    "sockets",
    "fileinfo",
    "filter",
    "tokenizer",
    "calendar",
    "sodium",
    "zlib",
    "bz2",
    "exif",
    "ctype",
    "iconv",
    "session",
    "phar",
];

/// `imap` was unbundled in PHP 8.4, so it is only required on 8.3.
pub const IMAP_RANGE: VersionRange = VersionRange::minor_series(8, 3);

/// The extension backing the database driver check.
pub const DRIVER_EXTENSION: &str = "mongodb";

/// Classes the database driver must provide.
pub const DRIVER_CLASSES: &[&str] = &[
    "MongoDB\\Driver\\Manager",
    "MongoDB\\Driver\\Command",
    "MongoDB\\Driver\\Query",
    "MongoDB\\Driver\\BulkWrite",
    "MongoDB\\BSON\\ObjectId",
];

/// Server the driver check pings when no URI is configured.
pub const DEFAULT_DRIVER_URI: &str = "mongodb://localhost:27017";

/// The full required extension table, in report order.
pub fn required_extensions() -> Vec<RequiredCapability> {
    let mut required: Vec<RequiredCapability> = REQUIRED_EXTENSIONS
        .iter()
        .map(|name| RequiredCapability::always(*name))
        .collect();
    required.push(RequiredCapability::when("imap", IMAP_RANGE));
    required
}
