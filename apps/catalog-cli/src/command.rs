//! Menu choices.

/// Menu shown before every choice.
pub const MENU: &str = "
==== Product CRUD ====
1) Create
2) List
3) Show details by ID
4) Update
5) Delete
0) Exit
Choice: ";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Create,
    List,
    Show,
    Update,
    Delete,
    Exit,
}

impl Command {
    /// Maps a typed menu choice to a command. Surrounding whitespace is ignored.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Command::Create),
            "2" => Some(Command::List),
            "3" => Some(Command::Show),
            "4" => Some(Command::Update),
            "5" => Some(Command::Delete),
            "0" => Some(Command::Exit),
            _ => None,
        }
    }

    /// Header printed when the command starts. For `Exit` it is the
    /// goodbye line.
    pub fn title(self) -> &'static str {
        match self {
            Command::Create => "== Create product ==",
            Command::List => "== List products ==",
            Command::Show => "== Product details ==",
            Command::Update => "== Update product ==",
            Command::Delete => "== Delete product ==",
            Command::Exit => "Bye",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_choice() {
        assert_eq!(Command::from_choice("1"), Some(Command::Create));
        assert_eq!(Command::from_choice(" 2 "), Some(Command::List));
        assert_eq!(Command::from_choice("3"), Some(Command::Show));
        assert_eq!(Command::from_choice("4"), Some(Command::Update));
        assert_eq!(Command::from_choice("5"), Some(Command::Delete));
        assert_eq!(Command::from_choice("0"), Some(Command::Exit));

        assert_eq!(Command::from_choice(""), None);
        assert_eq!(Command::from_choice("6"), None);
        assert_eq!(Command::from_choice("create"), None);
    }

    #[test]
    fn test_titles() {
        assert_eq!(Command::Create.title(), "== Create product ==");
        assert_eq!(Command::Update.title(), "== Update product ==");
        assert_eq!(Command::Exit.title(), "Bye");
    }
}
