//! Event trace, indented three spaces per scope level.

use std::io::{self, Write};

use symtab_core::{Event, EventSink};

use crate::TraceMode;

fn indent(level: u32) -> String {
    "   ".repeat(level as usize)
}

/// Render one event as a trace line.
///
/// Returns `None` for events with no trace line (creation of the global scope).
pub fn render_event(event: &Event) -> Option<String> {
    let line = match event {
        Event::ScopeCreated { level: 0, .. } => return None,
        Event::ScopeCreated { level, .. } => {
            format!("{}[Scope Level {level}] New scope created.", indent(*level))
        }
        Event::ScopeExited { level } => {
            format!("{}[Scope Level {level}] Exited scope.", indent(*level))
        }
        Event::ScopeExitDenied => "Cannot exit global scope.".to_string(),
        Event::ScopeLimitReached { level, limit } => format!(
            "{}[Scope Level {level}] Cannot create scope: limit of {limit} scopes reached.",
            indent(*level)
        ),
        Event::Assigned { level, name, value } => format!(
            "{}[Scope Level {level}] Assigned {name} = {value}",
            indent(*level)
        ),
        Event::CapacityExceeded { level, name } => format!(
            "{}[Scope Level {level}] Symbol table full! Could not assign {name}",
            indent(*level)
        ),
        Event::Found {
            query_level,
            name,
            found_level,
            value,
        } => format!(
            "{}[Scope Level {query_level}] Looked up {name} from [Scope {found_level}] -- Found {name} = {value}",
            indent(*query_level)
        ),
        Event::NotFound { query_level, name } => format!(
            "{}[Scope Level {query_level}] Looked up {name} -- Variable not found",
            indent(*query_level)
        ),
    };
    Some(line)
}

/// [`EventSink`] writing each event to `writer` as it happens.
///
/// The first write error is kept and every later event is dropped; it is
/// returned by [`finish`](Self::finish).
pub struct TraceEmitter<W: Write> {
    writer: W,
    mode: TraceMode,
    error: Option<io::Error>,
}

impl<W: Write> TraceEmitter<W> {
    pub fn new(writer: W, mode: TraceMode) -> Self {
        TraceEmitter {
            writer,
            mode,
            error: None,
        }
    }

    /// Flush and hand back the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> EventSink for TraceEmitter<W> {
    fn emit(&mut self, event: &Event) {
        if self.error.is_some() {
            return;
        }
        let line = match self.mode {
            TraceMode::Trace => render_event(event),
            TraceMode::Events => Some(format!("{event:?}")),
            TraceMode::Quiet => None,
        };
        if let Some(line) = line {
            if let Err(error) = writeln!(self.writer, "{line}") {
                self.error = Some(error);
            }
        }
    }
}
