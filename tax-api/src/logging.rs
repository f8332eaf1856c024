use std::fmt::{self, Write as _};
use std::io::{self, IsTerminal};

use anyhow::Result;
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext, FormattedFields,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

// --- Formatter ---

/// `<local timestamp> <LEVEL> <file:line> <span{fields}>: <fields>`.
///
/// Spans are written root first, so an event inside a connection reads
/// `conn{peer=127.0.0.1:51234}: request rejected ...`.
struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        styled(
            &mut writer,
            "2",
            Local::now().format("%Y-%m-%dT%H:%M:%S%.6f%:z"),
        )?;
        writer.write_char(' ')?;
        styled(&mut writer, level_style(*meta.level()), format_args!("{:>5}", meta.level()))?;
        writer.write_char(' ')?;

        if let (Some(file), Some(line)) = (meta.file().map(short_file), meta.line()) {
            styled(&mut writer, "36", format_args!("{file}:{line}"))?;
            writer.write_char(' ')?;
        }

        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                styled(&mut writer, "1", span.name())?;
                let extensions = span.extensions();
                if let Some(fields) = extensions.get::<FormattedFields<N>>()
                    && !fields.is_empty()
                {
                    write!(writer, "{{{fields}}}")?;
                }
                writer.write_str(": ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Writes `text` wrapped in the ANSI SGR `style` when the writer supports it.
fn styled(
    writer: &mut Writer<'_>,
    style: &str,
    text: impl fmt::Display,
) -> fmt::Result {
    if writer.has_ansi_escapes() {
        write!(writer, "\x1b[{style}m{text}\x1b[0m")
    } else {
        write!(writer, "{text}")
    }
}

fn level_style(level: Level) -> &'static str {
    match level {
        Level::ERROR => "1;31",
        Level::WARN => "1;33",
        Level::INFO => "1;32",
        Level::DEBUG => "1;34",
        Level::TRACE => "1;35",
    }
}

/// Source path relative to its crate's `src/`.
fn short_file(file: &str) -> &str {
    file.strip_prefix("src/")
        .or_else(|| file.strip_prefix("src\\"))
        .unwrap_or(file)
}

// --- Public API ---

/// Parses a level ("error", "warn", "info", "debug", "trace") or any full
/// `EnvFilter` directive.
pub fn filter_for(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).map_err(|e| anyhow::anyhow!("invalid log level '{level}': {e}"))
}

/// Initializes logging. Call once at startup.
///
/// - Stdout: coloured when attached to a terminal, plain when piped.
/// - Level: the `RUST_LOG` env var when set, otherwise `default_level`.
pub fn init_logging(default_level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => filter_for(default_level)?,
    };

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(io::stdout().is_terminal());

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logging already initialized: {e}"))
}
