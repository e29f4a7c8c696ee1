//! Database driver introspection.
//!
//! The driver check asks the runtime whether the MongoDB driver classes
//! exist, whether basic objects can be constructed, and whether a server
//! answers a ping. Only the first two decide the outcome; the ping is
//! advisory.

use serde::{Deserialize, Serialize};

use crate::error::{ExtcheckError, Result};

/// Server selection timeout handed to the driver for the ping, in ms.
const PING_TIMEOUT_MS: u32 = 2000;

/// Whether one driver class exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassPresence {
    pub name: String,
    pub exists: bool,
}

/// Result of the connectivity ping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Connectivity {
    /// The server answered.
    Connected,
    /// The ping raised; holds the exception class.
    Unreachable(String),
    /// No ping was attempted (construction did not get that far).
    NotAttempted,
}

/// Everything the driver introspection script reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverReport {
    /// `PHP_VERSION` of the probed runtime.
    pub php_version: String,
    /// Loaded extension names, for membership checks and diagnostics.
    pub extensions: Vec<String>,
    /// `phpversion('mongodb')`, when loaded.
    pub extension_version: Option<String>,
    /// Presence of each probed class, in probe order.
    pub classes: Vec<ClassPresence>,
    /// Whether a `Manager` was constructed.
    pub manager: bool,
    /// String form of a freshly created `ObjectId`.
    pub object_id: Option<String>,
    /// Message of the exception raised during construction.
    pub construct_error: Option<String>,
    /// `"ok"` or the exception class raised by the ping.
    pub ping: Option<String>,
}

impl DriverReport {
    /// Decode the JSON document printed by the driver script.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json.trim()).map_err(|e| ExtcheckError::ProbeFailed {
            message: format!("unexpected driver introspection output: {}", e),
        })
    }

    /// Outcome of the advisory ping.
    pub fn connectivity(&self) -> Connectivity {
        match self.ping.as_deref() {
            None => Connectivity::NotAttempted,
            Some("ok") => Connectivity::Connected,
            Some(class) => Connectivity::Unreachable(class.to_string()),
        }
    }
}

/// Quote a string as a PHP single-quoted literal.
pub fn php_single_quoted(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}'", escaped)
}

/// Build the driver introspection script for `uri` and `classes`.
pub fn driver_script(uri: &str, classes: &[&str]) -> String {
    let class_list = classes
        .iter()
        .map(|c| php_single_quoted(c))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        concat!(
            "$r = ['php_version' => PHP_VERSION, 'extensions' => get_loaded_extensions(), ",
            "'extension_version' => phpversion('mongodb') ?: null, ",
            "'classes' => [], 'manager' => false, 'object_id' => null, ",
            "'construct_error' => null, 'ping' => null];",
            "foreach ([{classes}] as $c) {{ $r['classes'][] = ['name' => $c, 'exists' => class_exists($c)]; }}",
            "if (!in_array(false, array_column($r['classes'], 'exists'), true)) {{",
            " try {{",
            "  $m = new MongoDB\\Driver\\Manager({uri}, ['serverSelectionTimeoutMS' => {timeout}]);",
            "  $r['manager'] = true;",
            "  $r['object_id'] = (string) new MongoDB\\BSON\\ObjectId();",
            "  try {{ $m->executeCommand('admin', new MongoDB\\Driver\\Command(['ping' => 1])); $r['ping'] = 'ok'; }}",
            "  catch (Throwable $e) {{ $r['ping'] = get_class($e); }}",
            " }} catch (Throwable $e) {{ $r['construct_error'] = $e->getMessage(); }}",
            "}}",
            "echo json_encode($r);"
        ),
        classes = class_list,
        uri = php_single_quoted(uri),
        timeout = PING_TIMEOUT_MS,
    )
}
