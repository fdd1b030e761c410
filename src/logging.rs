#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

use crate::config::LOG_ENV_VAR;

/// Level selection parsed from a directive list such as
/// `info,reqwest=warn,robot_mover::transport=debug`.
///
/// A bare level sets the default; `target=level` overrides it for that
/// module path and everything below it. The longest matching target wins.
/// Malformed directives are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilter {
    default: LevelFilter,
    targets: Vec<(String, LevelFilter)>,
}

impl LogFilter {
    pub fn parse(spec: &str) -> Self {
        let mut default = LevelFilter::Info;
        let mut targets = Vec::new();
        for directive in spec.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            match directive.split_once('=') {
                Some((target, level)) => {
                    if let Ok(level) = level.trim().parse() {
                        targets.push((target.trim().to_string(), level));
                    }
                }
                None => {
                    if let Ok(level) = directive.parse() {
                        default = level;
                    }
                }
            }
        }
        Self { default, targets }
    }

    pub fn level_for(&self, target: &str) -> LevelFilter {
        self.targets
            .iter()
            .filter(|(prefix, _)| {
                target == prefix
                    || target
                        .strip_prefix(prefix.as_str())
                        .is_some_and(|rest| rest.starts_with("::"))
            })
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, level)| *level)
            .unwrap_or(self.default)
    }

    /// Most verbose level any target can reach.
    pub fn max_level(&self) -> LevelFilter {
        self.targets
            .iter()
            .map(|(_, level)| *level)
            .fold(self.default, Ord::max)
    }
}

impl Default for LogFilter {
    fn default() -> Self {
        Self::parse("")
    }
}

struct TargetLogger {
    filter: LogFilter,
}

impl log::Log for TargetLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filter.level_for(metadata.target())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Initialize logging from the `ROBOT_MOVER_LOG` environment variable, read
/// as a [`LogFilter`] directive list. Defaults to `info` everywhere. Output
/// goes to stderr so it does not interleave with the rendered grid.
pub fn init_logging() {
    let filter = env::var(LOG_ENV_VAR)
        .map(|spec| LogFilter::parse(&spec))
        .unwrap_or_default();
    let max = filter.max_level();
    let _ = log::set_boxed_logger(Box::new(TargetLogger { filter }))
        .map(|()| log::set_max_level(max));
}
