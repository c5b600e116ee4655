/// A menu command selected by a single key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Deposit,
    Withdraw,
    List,
    SaveAndQuit,
    QuitWithoutSaving,
    Invalid(char),
}

impl Command {
    /// Maps a key to a command. Keys are case-insensitive.
    pub fn from_key(key: char) -> Self {
        match key.to_ascii_lowercase() {
            'a' => Command::Add,
            'd' => Command::Deposit,
            'w' => Command::Withdraw,
            'l' => Command::List,
            'q' => Command::SaveAndQuit,
            'x' => Command::QuitWithoutSaving,
            _ => Command::Invalid(key),
        }
    }
}

pub const MENU: &str = "Press the appropriate key\n\
    \x20      (A) Add new account\n\
    \x20      (D) Deposit funds\n\
    \x20      (L) List existing accounts\n\
    \x20      (W) Withdraw\n\
    \x20      (Q) Quit program and save account changes\n\
    \x20      (X) Exit without saving changes to accounts";
