use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io::{self, BufRead, Write};

/// Operator input: single command keys and whole-line prompt answers.
///
/// Both methods block until input is available and return `None` when the
/// input is exhausted or the operator interrupts.
pub trait Terminal {
    fn read_key(&mut self) -> io::Result<Option<char>>;
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads operator input from an interactive terminal in raw mode.
///
/// Command keys and prompt answers both come from crossterm's event reader, so
/// keys typed ahead of a prompt are never split between two input buffers.
/// Prompt answers are echoed and support backspace.
#[derive(Debug, Default)]
pub struct RawTerminal;

impl RawTerminal {
    pub fn new() -> Self {
        Self
    }
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// What a single key press means to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyInput {
    Char(char),
    Erase,
    Submit,
    Cancel,
    Ignore,
}

impl From<KeyEvent> for KeyInput {
    fn from(key: KeyEvent) -> Self {
        if key.kind != KeyEventKind::Press {
            return KeyInput::Ignore;
        }
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('d')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                KeyInput::Cancel
            }
            KeyCode::Char(c) => KeyInput::Char(c),
            KeyCode::Backspace => KeyInput::Erase,
            KeyCode::Enter => KeyInput::Submit,
            _ => KeyInput::Ignore,
        }
    }
}

fn next_key() -> io::Result<KeyInput> {
    loop {
        if let Event::Key(key) = event::read()? {
            return Ok(KeyInput::from(key));
        }
    }
}

impl Terminal for RawTerminal {
    fn read_key(&mut self) -> io::Result<Option<char>> {
        let _guard = RawModeGuard::enable()?;
        loop {
            match next_key()? {
                KeyInput::Char(c) => return Ok(Some(c)),
                KeyInput::Cancel => return Ok(None),
                _ => continue,
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let _guard = RawModeGuard::enable()?;
        let mut out = io::stdout();
        let mut line = String::new();
        loop {
            match next_key()? {
                KeyInput::Char(c) => {
                    line.push(c);
                    write!(out, "{c}")?;
                }
                KeyInput::Erase => {
                    if line.pop().is_some() {
                        write!(out, "\x08 \x08")?;
                    }
                }
                KeyInput::Submit => {
                    write!(out, "\r\n")?;
                    out.flush()?;
                    return Ok(Some(line));
                }
                KeyInput::Cancel => {
                    write!(out, "\r\n")?;
                    out.flush()?;
                    return Ok(None);
                }
                KeyInput::Ignore => continue,
            }
            out.flush()?;
        }
    }
}

/// Reads both command keys and prompt answers from a line-oriented source.
///
/// Each command is the first character of a non-blank line. Used when stdin is
/// not a terminal (pipes, scripts) and in tests.
pub struct ScriptedTerminal<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ScriptedTerminal<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Terminal for ScriptedTerminal<R> {
    fn read_key(&mut self) -> io::Result<Option<char>> {
        loop {
            match read_trimmed_line(&mut self.reader)? {
                None => return Ok(None),
                Some(line) => {
                    if let Some(c) = line.trim().chars().next() {
                        return Ok(Some(c));
                    }
                }
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        read_trimmed_line(&mut self.reader)
    }
}

fn read_trimmed_line<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_keys_skip_blank_lines() {
        let mut term = ScriptedTerminal::new("\n  \nl\nQ extra\n".as_bytes());
        assert_eq!(term.read_key().unwrap(), Some('l'));
        assert_eq!(term.read_key().unwrap(), Some('Q'));
        assert_eq!(term.read_key().unwrap(), None);
    }

    #[test]
    fn test_scripted_lines_strip_line_endings() {
        let mut term = ScriptedTerminal::new("Alice\r\nSavings\n\nlast".as_bytes());
        assert_eq!(term.read_line().unwrap().as_deref(), Some("Alice"));
        assert_eq!(term.read_line().unwrap().as_deref(), Some("Savings"));
        assert_eq!(term.read_line().unwrap().as_deref(), Some(""));
        assert_eq!(term.read_line().unwrap().as_deref(), Some("last"));
        assert_eq!(term.read_line().unwrap(), None);
    }

    #[test]
    fn test_key_input_mapping() {
        let press = |code, modifiers| KeyInput::from(KeyEvent::new(code, modifiers));

        assert_eq!(press(KeyCode::Char('a'), KeyModifiers::NONE), KeyInput::Char('a'));
        assert_eq!(press(KeyCode::Char('A'), KeyModifiers::SHIFT), KeyInput::Char('A'));
        assert_eq!(press(KeyCode::Enter, KeyModifiers::NONE), KeyInput::Submit);
        assert_eq!(press(KeyCode::Backspace, KeyModifiers::NONE), KeyInput::Erase);
        assert_eq!(press(KeyCode::Char('c'), KeyModifiers::CONTROL), KeyInput::Cancel);
        assert_eq!(press(KeyCode::Char('d'), KeyModifiers::CONTROL), KeyInput::Cancel);
        assert_eq!(press(KeyCode::Left, KeyModifiers::NONE), KeyInput::Ignore);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(KeyInput::from(key), KeyInput::Ignore);
    }
}
