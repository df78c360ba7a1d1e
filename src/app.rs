use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use molar_mass::{evaluate, history::History, input::FormulaInput, Evaluation};

/// Something the user asked the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Raise,
    Lower,
    Submit,
    Clear,
    Recall,
    Copy,
    Quit,
}

impl Action {
    /// Map a key press to an action. Releases and unbound keys give `None`.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let action = match key.code {
            KeyCode::Char('c') if ctrl => Self::Quit,
            KeyCode::Char('y') if ctrl => Self::Copy,
            KeyCode::Char('l') if ctrl => Self::Clear,
            KeyCode::Char('r') if ctrl => Self::Recall,
            KeyCode::Char(c) if !ctrl => Self::Insert(c),
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Delete => Self::Delete,
            KeyCode::Left => Self::Left,
            KeyCode::Right => Self::Right,
            KeyCode::Home => Self::Home,
            KeyCode::End => Self::End,
            KeyCode::Up => Self::Raise,
            KeyCode::Down => Self::Lower,
            KeyCode::Enter => Self::Submit,
            KeyCode::Esc => Self::Quit,
            _ => return None,
        };
        Some(action)
    }
}

/// What the event loop should do after an action was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Put this text on the clipboard.
    Copy(String),
    Quit,
}

/// State of the tui.
#[derive(Debug)]
pub struct App {
    pub input: FormulaInput,
    pub history: History,
    /// Live result for the current input.
    pub preview: Evaluation,
    pub status: String,
    pub precision: usize,
}

impl App {
    pub fn new(history: usize, precision: usize) -> Self {
        Self {
            input: FormulaInput::default(),
            history: History::new(history),
            preview: Evaluation::default(),
            status: String::new(),
            precision,
        }
    }

    pub fn format_mass(&self, mass: f64) -> String {
        format!("{:.*} g/mol", self.precision, mass)
    }

    pub fn handle(&mut self, action: Action) -> Effect {
        match action {
            Action::Insert(c) => {
                if !self.input.insert(c) {
                    return Effect::None;
                }
            }
            Action::Backspace => self.input.backspace(),
            Action::Delete => self.input.delete(),
            Action::Left => self.input.left(),
            Action::Right => self.input.right(),
            Action::Home => self.input.home(),
            Action::End => self.input.end(),
            Action::Raise => self.input.raise(),
            Action::Lower => self.input.lower(),
            Action::Clear => self.input.clear(),
            Action::Recall => {
                if let Some(entry) = self.history.latest() {
                    self.input.set_text(&entry.formula);
                }
            }
            Action::Submit => {
                self.submit();
                return Effect::None;
            }
            Action::Copy => {
                return match self.history.latest() {
                    Some(entry) => {
                        let text = format!("{:.*}", self.precision, entry.mass);
                        self.status = format!("copied {text}");
                        Effect::Copy(text)
                    }
                    None => {
                        self.status = "nothing to copy".to_string();
                        Effect::None
                    }
                };
            }
            Action::Quit => return Effect::Quit,
        }
        self.refresh();
        Effect::None
    }

    fn refresh(&mut self) {
        self.preview = evaluate(&self.input.text());
        self.status = unresolved_status(&self.preview);
    }

    fn submit(&mut self) {
        if self.input.is_empty() {
            return;
        }
        let formula = self.input.text();
        let evaluation = evaluate(&formula);
        evaluation.log_unresolved();
        tracing::info!(%formula, mass = evaluation.mass, "recorded result");
        self.status = unresolved_status(&evaluation);
        self.history.push(formula, evaluation.mass);
        self.preview = evaluation;
    }
}

fn unresolved_status(evaluation: &Evaluation) -> String {
    if evaluation.unresolved.is_empty() {
        String::new()
    } else {
        format!("unknown element: {}", evaluation.unresolved.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle(Action::Insert(c));
        }
    }

    #[test]
    fn typing_updates_preview() {
        let mut app = App::new(5, 3);
        type_str(&mut app, "H2O");
        assert!((app.preview.mass - molar_mass::molar_mass("H2O")).abs() < 1e-9);
        assert!(app.status.is_empty());
        assert!(app.history.is_empty());
    }

    #[test]
    fn submit_records_history() {
        let mut app = App::new(5, 3);
        type_str(&mut app, "NaCl");
        assert_eq!(app.handle(Action::Submit), Effect::None);
        let entry = app.history.latest().unwrap();
        assert_eq!(entry.formula, "NaCl");
        assert_eq!(app.format_mass(entry.mass), "58.443 g/mol");
    }

    #[test]
    fn submit_ignores_empty_input() {
        let mut app = App::new(5, 3);
        app.handle(Action::Submit);
        assert!(app.history.is_empty());
    }

    #[test]
    fn unknown_elements_show_in_status() {
        let mut app = App::new(5, 3);
        type_str(&mut app, "Xx9");
        assert_eq!(app.status, "unknown element: Xx");
        assert_eq!(app.preview.mass, 0.0);
    }

    #[test]
    fn copy_uses_latest_result() {
        let mut app = App::new(5, 2);
        assert_eq!(app.handle(Action::Copy), Effect::None);
        type_str(&mut app, "H2");
        app.handle(Action::Submit);
        assert_eq!(app.handle(Action::Copy), Effect::Copy("2.02".to_string()));
    }

    #[test]
    fn recall_restores_latest_formula() {
        let mut app = App::new(5, 3);
        type_str(&mut app, "CO2");
        app.handle(Action::Submit);
        app.handle(Action::Clear);
        app.handle(Action::Recall);
        assert_eq!(app.input.text(), "CO2");
        assert_eq!(app.input.display(), "CO₂");
        assert_eq!(app.input.cursor(), 3);
        assert!((app.preview.mass - molar_mass::molar_mass("CO2")).abs() < 1e-9);
    }

    #[test]
    fn key_mapping() {
        let key = |code, modifiers| KeyEvent::new(code, modifiers);
        assert_eq!(
            Action::from_key(key(KeyCode::Char('H'), KeyModifiers::SHIFT)),
            Some(Action::Insert('H'))
        );
        assert_eq!(
            Action::from_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(
            Action::from_key(key(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            Some(Action::Recall)
        );
        assert_eq!(
            Action::from_key(key(KeyCode::Down, KeyModifiers::NONE)),
            Some(Action::Lower)
        );
        assert_eq!(Action::from_key(key(KeyCode::Tab, KeyModifiers::NONE)), None);
    }

    #[test]
    fn quit_and_clear() {
        let mut app = App::new(5, 3);
        type_str(&mut app, "O2");
        app.handle(Action::Clear);
        assert!(app.input.is_empty());
        assert_eq!(app.preview.mass, 0.0);
        assert_eq!(app.handle(Action::Quit), Effect::Quit);
    }
}
