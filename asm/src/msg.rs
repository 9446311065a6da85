use color_print::cprintln;

#[derive(Debug)]
pub enum Msg {
    Error(String),
    Warn(String),
    Note(String),
}

impl Msg {
    pub fn print(&self) {
        match self {
            Msg::Error(msg) => cprintln!("<red,bold>error</>: {}", msg),
            Msg::Warn(msg) => cprintln!("<yellow,bold>warn</>: {}", msg),
            Msg::Note(msg) => cprintln!("<green,bold>note</>: {}", msg),
        }
    }

    /// Print with the location `file:line` and the source line itself.
    /// `line_idx` is 0-based, displayed 1-based.
    pub fn diag(&self, file: &str, line_idx: usize, source: &str) {
        let line_num = line_idx + 1;
        let raw = source.lines().nth(line_idx).unwrap_or("");
        self.print();
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line_num, raw);
        cprintln!("      <blue>|</>");
    }
}
