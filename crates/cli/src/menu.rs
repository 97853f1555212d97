//! Main menu: the four actions and the two loop states.

use showroom_core::{DomainError, DomainResult};

/// Menu block printed at the start of every loop turn.
pub const MENU: &str = "\nFlooring Showroom Menu:\n\
                        1. View Flooring Options\n\
                        2. Add Flooring Option\n\
                        3. Calculate Cost\n\
                        4. Exit\n";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    View,
    Add,
    Calculate,
    Exit,
}

impl MenuChoice {
    /// Match the raw line exactly; `" 1"` or `"1."` are not choices.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        match raw {
            "1" => Ok(Self::View),
            "2" => Ok(Self::Add),
            "3" => Ok(Self::Calculate),
            "4" => Ok(Self::Exit),
            _ => Err(DomainError::invalid_choice(raw)),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_actions() {
        assert_eq!(MenuChoice::parse("1"), Ok(MenuChoice::View));
        assert_eq!(MenuChoice::parse("2"), Ok(MenuChoice::Add));
        assert_eq!(MenuChoice::parse("3"), Ok(MenuChoice::Calculate));
        assert_eq!(MenuChoice::parse("4"), Ok(MenuChoice::Exit));
    }

    #[test]
    fn anything_else_is_an_invalid_choice() {
        for raw in ["", "0", "5", " 1", "1 ", "exit", "01"] {
            assert_eq!(MenuChoice::parse(raw), Err(DomainError::invalid_choice(raw)));
        }
    }

    #[test]
    fn menu_lists_four_numbered_actions() {
        let lines: Vec<&str> = MENU.lines().collect();
        assert_eq!(
            lines,
            [
                "",
                "Flooring Showroom Menu:",
                "1. View Flooring Options",
                "2. Add Flooring Option",
                "3. Calculate Cost",
                "4. Exit",
            ]
        );
    }
}
