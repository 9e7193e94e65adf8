use serde_json::Value;

/// One decoded result document, shape unconstrained.
///
/// Accessors never fail: a section or field that is absent or has the wrong
/// JSON type reads as `None`, which the extractor turns into the schema
/// default.
#[derive(Debug, Clone)]
pub struct RawResult(Value);

impl RawResult {
    pub const fn new(doc: Value) -> Self {
        Self(doc)
    }

    fn field(&self, section: &str, name: &str) -> Option<&Value> {
        self.0.get(section).and_then(|s| s.get(name))
    }

    /// Non-negative integer from the `config` section, 0 when absent or malformed.
    pub fn config_u64(&self, name: &str) -> u64 {
        self.field("config", name).and_then(Value::as_u64).unwrap_or(0)
    }

    /// Number from the `summary` section, 0 when absent or malformed.
    pub fn summary_f64(&self, name: &str) -> f64 {
        self.field("summary", name).and_then(Value::as_f64).unwrap_or(0.0)
    }

    /// String from the `environment` section, `None` when absent or malformed.
    pub fn environment_str(&self, name: &str) -> Option<&str> {
        self.field("environment", name).and_then(Value::as_str)
    }
}

/// The canonical comparison unit, one per successfully loaded input file.
///
/// Every field is always populated; extraction defaults rather than fails.
/// Rows are never mutated after creation. The only change a row collection
/// undergoes is the entries-ascending reordering applied by
/// [`crate::charts::prepare`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub entries: u64,
    pub iters: u64,
    pub runs: u64,
    pub interval_ns: u64,

    pub median_ops_per_sec: f64,
    pub min_ops_per_sec: f64,
    pub max_ops_per_sec: f64,
    pub stddev_ops_per_sec: f64,
    pub median_p50_ns: f64,
    pub median_p95_ns: f64,
    pub median_p99_ns: f64,
    pub median_p999_ns: f64,

    /// Kernel identification, `sysname` and `release` joined with a single
    /// space. When only one of the two is present the field holds just that
    /// one; when neither is, it is empty.
    pub kernel: String,
    pub machine: String,

    /// Base name of the originating path. Unique per invocation in practice,
    /// but not enforced.
    pub source_file: String,
}

impl ResultRow {
    /// Extract the fixed metric schema from a raw result document.
    pub fn from_raw(raw: &RawResult, source_file: impl Into<String>) -> Self {
        let kernel = match (raw.environment_str("sysname"), raw.environment_str("release")) {
            (Some(sysname), Some(release)) => format!("{sysname} {release}"),
            (Some(only), None) | (None, Some(only)) => only.to_string(),
            (None, None) => String::new(),
        };

        Self {
            entries: raw.config_u64("entries"),
            iters: raw.config_u64("iters"),
            runs: raw.config_u64("runs"),
            interval_ns: raw.config_u64("interval_ns"),
            median_ops_per_sec: raw.summary_f64("median_ops_per_sec"),
            min_ops_per_sec: raw.summary_f64("min_ops_per_sec"),
            max_ops_per_sec: raw.summary_f64("max_ops_per_sec"),
            stddev_ops_per_sec: raw.summary_f64("stddev_ops_per_sec"),
            median_p50_ns: raw.summary_f64("median_p50_ns"),
            median_p95_ns: raw.summary_f64("median_p95_ns"),
            median_p99_ns: raw.summary_f64("median_p99_ns"),
            median_p999_ns: raw.summary_f64("median_p999_ns"),
            kernel,
            machine: raw.environment_str("machine").unwrap_or_default().to_string(),
            source_file: source_file.into(),
        }
    }
}
