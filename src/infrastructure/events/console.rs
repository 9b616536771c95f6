//! Console Event Sink
//!
//! Human-readable progress lines. Per-file events are only shown at
//! higher verbosity.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{RenderEvent, RenderEventSink};

pub struct ConsoleEventSink {
    verbose: bool,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(verbose: bool) -> Self {
        Self::with_writer(verbose, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(verbose: bool, writer: W) -> Self {
        Self {
            verbose,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
        }
    }
}

impl RenderEventSink for ConsoleEventSink {
    fn on_event(&self, event: RenderEvent) {
        match event {
            RenderEvent::Started { destination } => {
                self.line(format!("Generating {}", destination.display()));
            }
            RenderEvent::Resolved {
                flag_count,
                defaulted_count,
            } => {
                self.line(format!(
                    "  resolved {} flags ({} defaulted)",
                    flag_count, defaulted_count
                ));
            }
            RenderEvent::NodeExcluded { path } => {
                self.line(format!("  - {}", path));
            }
            RenderEvent::Rendered {
                file_count,
                dir_count,
                digest,
            } => {
                let short = digest.strip_prefix("sha256:").unwrap_or(&digest);
                self.line(format!(
                    "  rendered {} files in {} directories [{}]",
                    file_count,
                    dir_count,
                    &short[..short.len().min(12)]
                ));
            }
            RenderEvent::FileWritten { path, .. } => {
                self.line(format!("  + {}", path));
            }
            RenderEvent::Completed {
                destination,
                file_count,
                dry_run,
            } => {
                if dry_run {
                    self.line(format!(
                        "Dry run: {} files would be written to {}",
                        file_count,
                        destination.display()
                    ));
                } else {
                    self.line(format!(
                        "Created {} files in {}",
                        file_count,
                        destination.display()
                    ));
                }
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose
    }
}
