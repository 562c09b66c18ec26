/// Settings for a single `netwalk` invocation.
///
/// Built once from the command line and passed down explicitly.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Output verbosity reduction, one step per `-q`.
    ///
    /// `0` prints headers and summaries, `1` keeps only results,
    /// `2` or more also silences info logging.
    pub quiet: u8,
    /// Disables ANSI colors in terminal output.
    pub no_color: bool,
    /// Stops a walk after this many addresses.
    pub limit: Option<u64>,
}

impl Config {
    /// Whether a walk that already emitted `emitted` addresses must stop.
    pub fn limit_reached(&self, emitted: u64) -> bool {
        self.limit.is_some_and(|limit| emitted >= limit)
    }
}
