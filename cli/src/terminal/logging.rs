use std::fmt;
use std::io::IsTerminal;

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

/// Renders events as `[*] 10.0.0.1/: message` lines.
///
/// A `range` field is pulled in front of the message so every diagnostic
/// names the expression it is about.
pub struct CidrFormatter;

impl<S, N> FormatEvent<S, N> for CidrFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
            match *event.metadata().level() {
                Level::TRACE => ("[ ]", |s| s.dimmed()),
                Level::DEBUG => ("[?]", |s| s.blue()),
                Level::INFO => ("[+]", |s| s.green().bold()),
                Level::WARN => ("[*]", |s| s.yellow().bold()),
                Level::ERROR => ("[-]", |s| s.red().bold()),
            };

        let mut fields = EventFields::default();
        event.record(&mut fields);

        write!(writer, "{} ", color_func(symbol.into()))?;
        if let Some(range) = &fields.range {
            write!(writer, "{}: ", range.bold())?;
        }
        write!(writer, "{}", fields.message)?;
        for extra in &fields.extra {
            write!(writer, " {}", extra.dimmed())?;
        }
        writeln!(writer)
    }
}

#[derive(Default)]
struct EventFields {
    message: String,
    range: Option<String>,
    extra: Vec<String>,
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = value.to_string(),
            "range" => self.range = Some(value.to_string()),
            name => self.extra.push(format!("{name}={value}")),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            "range" => self.range = Some(format!("{value:?}")),
            name => self.extra.push(format!("{name}={value:?}")),
        }
    }
}

/// Installs the stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise each `-v` lowers the threshold one level from `warn`.
pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    if !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::from_level(default_level(verbosity)).into())
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(CidrFormatter)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

fn default_level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
