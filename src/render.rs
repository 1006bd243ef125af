//! Table output: plain stdout or a styled pass-through.
//!
//! Styled mode hands the finished table to an external styling command and
//! prints whatever comes back. The column layout is computed upstream and is
//! identical in both modes; when the styling command is missing or fails the
//! renderer logs a warning and falls back to plain output rather than
//! failing the run.

use std::io::Write;
use std::process::{Command, Stdio};

/// External styling command and its arguments.
const STYLE_COMMAND: &str = "gum";
const STYLE_ARGS: &[&str] = &["format"];

/// Writes `table` to stdout, optionally piping it through the styling
/// command first.
pub fn print_table(table: &str, styled: bool) {
    if styled {
        match style(table) {
            Ok(rendered) => {
                // Both modes end with exactly one newline regardless of
                // whether the styling command emitted one.
                println!("{}", rendered.trim_end_matches('\n'));
                return;
            }
            Err(e) => {
                log::warn!("styled output unavailable ({e}), falling back to plain");
            }
        }
    }

    println!("{table}");
}

fn style(table: &str) -> std::io::Result<String> {
    let mut child = Command::new(STYLE_COMMAND)
        .args(STYLE_ARGS)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(table.as_bytes())?;
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("{STYLE_COMMAND} exited with {}", output.status),
        ));
    }

    String::from_utf8(output.stdout)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}
