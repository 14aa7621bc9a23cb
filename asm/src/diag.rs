//! Located diagnostics, printed rustc-style.

use color_print::cprintln;

/// One error bound to a source position. Diagnostics are collected by each
/// stage and printed in order by the driver; the stages themselves never
/// print.
#[derive(Debug, Clone)]
pub struct Msg {
    text: String,
    file: String,
    pos: Option<(usize, String)>,
}

impl Msg {
    /// An error at a specific line. `raw` is the line as it appears in the
    /// source, echoed under the message.
    pub fn error(text: String, file: &str, line_no: usize, raw: &str) -> Self {
        Msg {
            text,
            file: file.to_string(),
            pos: Some((line_no, raw.to_string())),
        }
    }

    /// An error scoped to the whole file rather than one line.
    pub fn file_error(text: String, file: &str) -> Self {
        Msg {
            text,
            file: file.to_string(),
            pos: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn print(&self) {
        cprintln!("<red,bold>error</>: {}", self.text);
        match &self.pos {
            Some((line_no, raw)) => {
                cprintln!("     <blue>--></> <underline>{}:{}</>", self.file, line_no);
                cprintln!("      <blue>|</>");
                cprintln!(" <blue>{:>4} |</> {}", line_no, raw);
                cprintln!("      <blue>|</>");
            }
            None => {
                cprintln!("     <blue>--></> <underline>{}</>", self.file);
            }
        }
    }
}

pub fn dump(msgs: &[Msg]) {
    for msg in msgs {
        msg.print();
    }
}
