//! Plain-text [`Renderer`] for terminals.
//!
//! Output looks like:
//!
//! ```text
//! PLCs (1)
//!   [1717171717000] Line 1  ip=10.0.0.5  tags=Motor1,Speed
//! Database connections (0)
//! ok: loaded 1 PLCs, 0 database connections
//! ```

use std::io::Write;

use plc_config_core::{DatabaseConnection, PlcRecord};
use tracing::warn;

use crate::application::config_list::{Notice, Renderer};

/// Writes the lists and notices to any [`Write`] sink.
pub struct ConsoleRenderer<W: Write + Send> {
    out: W,
}

impl ConsoleRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_lines(&mut self, lines: &[String]) {
        let result = lines
            .iter()
            .try_for_each(|line| writeln!(self.out, "{line}"))
            .and_then(|()| self.out.flush());
        if let Err(e) = result {
            warn!("console output failed: {e}");
        }
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

impl<W: Write + Send> Renderer for ConsoleRenderer<W> {
    fn render_plc_list(&mut self, plc: &[PlcRecord]) {
        let mut lines = vec![format!("PLCs ({})", plc.len())];
        lines.extend(plc.iter().map(|p| {
            format!(
                "  [{}] {}  ip={}  tags={}",
                p.id,
                or_dash(&p.name),
                or_dash(&p.ip),
                or_dash(&p.tags.join(","))
            )
        }));
        self.write_lines(&lines);
    }

    fn render_database_connections(&mut self, databases: &[DatabaseConnection]) {
        let mut lines = vec![format!("Database connections ({})", databases.len())];
        lines.extend(databases.iter().map(|d| {
            format!(
                "  [{}] {}  type={}  connection={}",
                d.id,
                or_dash(&d.name),
                or_dash(&d.kind),
                or_dash(&d.connection_string)
            )
        }));
        self.write_lines(&lines);
    }

    fn notify(&mut self, notice: &Notice) {
        let line = match notice {
            Notice::Loaded { plc, databases } => {
                format!("ok: loaded {plc} PLCs, {databases} database connections")
            }
            Notice::Saved => "ok: configuration saved".to_string(),
            Notice::LoadFailed(reason) => format!("error: could not load configuration ({reason})"),
            Notice::SaveFailed(reason) => format!("error: could not save configuration ({reason})"),
        };
        self.write_lines(&[line]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plc_config_core::RecordId;

    fn rendered(f: impl FnOnce(&mut ConsoleRenderer<Vec<u8>>)) -> String {
        let mut renderer = ConsoleRenderer::new(Vec::new());
        f(&mut renderer);
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_plc_list_prints_header_and_one_line_per_record() {
        // Arrange
        let plc = vec![
            PlcRecord {
                id: RecordId(1),
                name: "Line 1".to_string(),
                ip: "10.0.0.5".to_string(),
                tags: vec!["Motor1".to_string(), "Speed".to_string()],
            },
            PlcRecord::empty(RecordId(2)),
        ];

        // Act
        let out = rendered(|r| r.render_plc_list(&plc));

        // Assert
        assert_eq!(
            out,
            "PLCs (2)\n  [1] Line 1  ip=10.0.0.5  tags=Motor1,Speed\n  [2] -  ip=-  tags=-\n"
        );
    }

    #[test]
    fn test_database_list_uses_type_label() {
        let dbs = vec![DatabaseConnection {
            id: RecordId(7),
            kind: "sqlite".to_string(),
            connection_string: "file:plant.db".to_string(),
            name: "Local".to_string(),
        }];

        let out = rendered(|r| r.render_database_connections(&dbs));

        assert!(out.starts_with("Database connections (1)\n"));
        assert!(out.contains("[7] Local  type=sqlite  connection=file:plant.db"));
    }

    #[test]
    fn test_failure_notices_are_marked_as_errors() {
        let out = rendered(|r| {
            r.notify(&Notice::SaveFailed("server error: HTTP 500".to_string()));
            r.notify(&Notice::Saved);
        });

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "error: could not save configuration (server error: HTTP 500)",
                "ok: configuration saved",
            ]
        );
    }
}
