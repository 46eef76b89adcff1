use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::io::{self, BufRead, IsTerminal};

/// Shown on the right of the prompt.
pub const INPUT_HINT: &str = "pages, multiple of 4";

enum LineSource {
    Editor {
        line_editor: Box<Reedline>,
        prompt: DefaultPrompt,
    },
    Piped(io::Lines<Box<dyn BufRead>>),
}

/// Reads page counts and commands, from a line editor on a terminal or
/// line by line from a pipe.
pub struct Repl {
    source: LineSource,
}

impl Repl {
    pub fn new(label: &str) -> Self {
        if io::stdin().is_terminal() {
            Self::editor(label)
        } else {
            Self::from_reader(Box::new(io::stdin().lock()))
        }
    }

    pub fn editor(label: &str) -> Self {
        Self {
            source: LineSource::Editor {
                line_editor: Box::new(Reedline::create()),
                prompt: DefaultPrompt::new(
                    DefaultPromptSegment::Basic(label.to_string()),
                    DefaultPromptSegment::Basic(INPUT_HINT.to_string()),
                ),
            },
        }
    }

    pub fn from_reader(reader: Box<dyn BufRead>) -> Self {
        Self {
            source: LineSource::Piped(reader.lines()),
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self.source, LineSource::Editor { .. })
    }

    /// `None` on Ctrl-D, Ctrl-C or end of input.
    pub fn read_line(&mut self) -> Result<Option<String>, io::Error> {
        match &mut self.source {
            LineSource::Editor { line_editor, prompt } => match line_editor.read_line(&*prompt)? {
                Signal::Success(buffer) => Ok(Some(buffer)),
                Signal::CtrlD | Signal::CtrlC => Ok(None),
            },
            LineSource::Piped(lines) => lines.next().transpose(),
        }
    }
}
