use std::fmt::Display;
use std::time::Duration;

use colored::*;
use netwalk_common::config::Config;
use tracing::info;

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "netwalk::print";

const KEY_WIDTH: usize = 10;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn header(msg: &str, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn aligned_line<V: Display>(key: &str, value: V) {
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    let colon: String = format!("{}{}", dots.bright_black(), ":".bright_black());
    print(&format!("{}{} {}", key.cyan(), colon, value.to_string().white()));
}

pub fn summary(emitted: u64, total_time: Duration, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let unit: &str = if emitted == 1 { "address" } else { "addresses" };
    let count: ColoredString = format!("{emitted} {unit}").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();

    print(&format!("{}", "═".repeat(TOTAL_WIDTH).bright_black()));
    print(&format!("Walk complete: {count} in {total_time}"));
}
