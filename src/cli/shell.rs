use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use crate::discover;
use crate::packager::{self, PackOptions};

pub fn run(output_dir: Option<PathBuf>, json: bool) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let scan_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let options = PackOptions { output_dir };
    Shell::new(stdin.lock(), stdout.lock(), scan_dir, options, json).run()
}

/// Interactive menu wrapped around the packager. Holds the selected
/// project path between actions and is generic over its input and
/// output streams.
pub struct Shell<R, W> {
    input: R,
    output: W,
    scan_dir: PathBuf,
    options: PackOptions,
    json: bool,
    project: Option<PathBuf>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, scan_dir: PathBuf, options: PackOptions, json: bool) -> Self {
        Self {
            input,
            output,
            scan_dir,
            options,
            json,
            project: None,
        }
    }

    /// Menu loop; returns on quit or end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "QGIS project packager")?;
        loop {
            self.show_menu()?;
            let Some(line) = self.read_line()? else { break };
            match line.trim() {
                "1" => self.choose_file()?,
                "2" => self.enter_path()?,
                "3" => self.start()?,
                "q" | "quit" => break,
                "" => {}
                other => writeln!(self.output, "unknown choice '{other}'")?,
            }
        }
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        let selection = match &self.project {
            Some(path) => path.display().to_string(),
            None => "(none)".to_string(),
        };
        writeln!(self.output)?;
        writeln!(self.output, "project: {selection}")?;
        writeln!(self.output, "  1) choose a project file")?;
        writeln!(self.output, "  2) enter a path")?;
        writeln!(self.output, "  3) start packaging")?;
        writeln!(self.output, "  q) quit")?;
        write!(self.output, "Choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// The browse action: a numbered pick over project files found under
    /// the scan directory.
    fn choose_file(&mut self) -> Result<()> {
        let found = discover::find_project_files(&self.scan_dir);
        if found.is_empty() {
            writeln!(
                self.output,
                "no project files found under {}",
                self.scan_dir.display()
            )?;
            return Ok(());
        }

        for (index, path) in found.iter().enumerate() {
            writeln!(self.output, "  {}) {}", index + 1, path.display())?;
        }
        write!(self.output, "Choice [1]: ")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(());
        };
        let choice = line.trim();
        let index: usize = if choice.is_empty() {
            1
        } else {
            choice.parse().unwrap_or(0)
        };
        match found.get(index.wrapping_sub(1)) {
            Some(path) => {
                self.project = Some(path.clone());
                writeln!(self.output, "selected {}", path.display())?;
            }
            None => writeln!(self.output, "no such entry '{choice}'")?,
        }
        Ok(())
    }

    fn enter_path(&mut self) -> Result<()> {
        write!(self.output, "Project file path: ")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(());
        };
        let path = line.trim();
        if path.is_empty() {
            writeln!(self.output, "no path entered")?;
        } else {
            self.project = Some(PathBuf::from(path));
        }
        Ok(())
    }

    /// Runs the packager on the current selection. A failed run is
    /// reported and the menu comes back.
    fn start(&mut self) -> Result<()> {
        let Some(project) = self.project.clone() else {
            writeln!(self.output, "select or enter a project file first")?;
            return Ok(());
        };

        match packager::pack(&project, &self.options) {
            Ok(report) if self.json => {
                writeln!(self.output, "{}", serde_json::to_string_pretty(&report)?)?;
            }
            Ok(report) => writeln!(self.output, "{report}")?,
            Err(error) => {
                writeln!(self.output, "error: {:#}", anyhow::Error::from(error))?;
            }
        }
        Ok(())
    }

    /// One input line; `None` once the input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
