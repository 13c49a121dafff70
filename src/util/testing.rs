use std::collections::VecDeque;
use std::io;
use std::sync::Once;
use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::infrastructure::traits::Console;

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // RUST_LOG wins, otherwise debug
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Console fed from a fixed script, recording everything written.
///
/// Output is tagged: plain lines verbatim, `"ok: "` for successes,
/// `"err: "` for errors. Prompts are recorded separately.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    pub output: Vec<String>,
    pub prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn prompt(&mut self, label: &str) -> io::Result<()> {
        self.prompts.push(label.to_string());
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn success(&mut self, msg: &str) -> io::Result<()> {
        self.output.push(format!("ok: {msg}"));
        Ok(())
    }

    fn error(&mut self, msg: &str) -> io::Result<()> {
        self.output.push(format!("err: {msg}"));
        Ok(())
    }
}
