//! Console tests driven by a scripted line editor

use std::sync::Arc;

use markerutils_foundation::Result;
use markerutils_runtime::{Console, ConsoleEffects, ConsoleSender, LineEditor, ReadResult};

use crate::{Fixture, MARKERS};

struct ScriptedEditor {
    lines: std::vec::IntoIter<&'static str>,
    history: Vec<String>,
}

impl ScriptedEditor {
    fn new(lines: Vec<&'static str>) -> Self {
        Self {
            lines: lines.into_iter(),
            history: Vec::new(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(match self.lines.next() {
            Some("^C") => ReadResult::Interrupted,
            Some(line) => ReadResult::Line(line.to_string()),
            None => ReadResult::Eof,
        })
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }
}

#[test]
fn session_runs_every_line() {
    let fixture = Fixture::new(MARKERS);
    let command = Arc::new(fixture.command());
    let editor = ScriptedEditor::new(vec![
        "tp Old Spawn (old_spawn)",
        "^C",
        "delete (My Marker)",
        ":complete info sh",
    ]);
    let sender = ConsoleSender::with_output(Vec::new()).as_player("Steve");
    let mut console = Console::new(editor, command, sender, ConsoleEffects::new()).without_banner();

    console.run().unwrap();

    assert_eq!(console.effects().teleports().len(), 1);
    assert_eq!(
        console.effects().dispatched(),
        &["dmarker delete id:My Marker".to_string()]
    );
    assert_eq!(
        String::from_utf8_lossy(console.sender().output()),
        "Shop (shop)\n"
    );
}

#[test]
fn banner_names_the_source() {
    let fixture = Fixture::new(MARKERS);
    let command = Arc::new(fixture.command());
    let sender = ConsoleSender::with_output(Vec::new());
    let editor = ScriptedEditor::new(vec![]);
    let mut console = Console::new(editor, command, sender, ConsoleEffects::new());

    console.run().unwrap();

    let output = String::from_utf8_lossy(console.sender().output()).into_owned();
    assert!(output.contains(&fixture.path.display().to_string()));
}
