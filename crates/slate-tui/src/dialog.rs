use crossterm::event::KeyCode;
use slate_core::InputState;
use slate_domain::{Board, DEFAULT_COLUMN_ID};

/// Which field of the create-task form has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Content,
    Column,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    None,
    Cancel,
    Submit,
}

/// State of the create-task popup: required title, optional description,
/// and a column selector that starts on "To Do".
pub struct CreateTaskForm {
    pub title: InputState,
    pub content: InputState,
    pub column_index: usize,
    pub field: FormField,
}

impl CreateTaskForm {
    pub fn new(board: &Board) -> Self {
        let column_index = board
            .column_order
            .iter()
            .position(|id| id == DEFAULT_COLUMN_ID)
            .unwrap_or(0);
        Self {
            title: InputState::new(),
            content: InputState::new(),
            column_index,
            field: FormField::Title,
        }
    }

    pub fn selected_column<'a>(&self, board: &'a Board) -> &'a str {
        board
            .column_order
            .get(self.column_index)
            .map(String::as_str)
            .unwrap_or(DEFAULT_COLUMN_ID)
    }

    fn next_field(&mut self) {
        self.field = match self.field {
            FormField::Title => FormField::Content,
            FormField::Content => FormField::Column,
            FormField::Column => FormField::Title,
        };
    }

    fn prev_field(&mut self) {
        self.field = match self.field {
            FormField::Title => FormField::Column,
            FormField::Content => FormField::Title,
            FormField::Column => FormField::Content,
        };
    }

    /// Route a key press. Enter with a blank title is swallowed: the
    /// dialog simply does not submit.
    pub fn handle_key(&mut self, code: KeyCode, column_count: usize) -> FormAction {
        match code {
            KeyCode::Esc => FormAction::Cancel,
            KeyCode::Enter => {
                if self.title.as_str().trim().is_empty() {
                    FormAction::None
                } else {
                    FormAction::Submit
                }
            }
            KeyCode::Tab => {
                self.next_field();
                FormAction::None
            }
            KeyCode::BackTab => {
                self.prev_field();
                FormAction::None
            }
            _ => {
                match self.field {
                    FormField::Title => edit_input(&mut self.title, code),
                    FormField::Content => edit_input(&mut self.content, code),
                    FormField::Column => match code {
                        KeyCode::Left | KeyCode::Up => {
                            self.column_index = self.column_index.saturating_sub(1);
                        }
                        KeyCode::Right | KeyCode::Down => {
                            if column_count > 0 {
                                self.column_index =
                                    (self.column_index + 1).min(column_count - 1);
                            }
                        }
                        _ => {}
                    },
                }
                FormAction::None
            }
        }
    }
}

fn edit_input(input: &mut InputState, code: KeyCode) {
    match code {
        KeyCode::Char(c) => input.insert_char(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CreateTaskForm {
        CreateTaskForm::new(&Board::default())
    }

    fn type_str(form: &mut CreateTaskForm, text: &str) {
        for c in text.chars() {
            form.handle_key(KeyCode::Char(c), 5);
        }
    }

    #[test]
    fn starts_on_title_with_todo_selected() {
        let board = Board::default();
        let form = CreateTaskForm::new(&board);
        assert_eq!(form.field, FormField::Title);
        assert_eq!(form.selected_column(&board), DEFAULT_COLUMN_ID);
    }

    #[test]
    fn enter_with_blank_title_does_not_submit() {
        let mut form = form();
        assert_eq!(form.handle_key(KeyCode::Enter, 5), FormAction::None);
        type_str(&mut form, "   ");
        assert_eq!(form.handle_key(KeyCode::Enter, 5), FormAction::None);
    }

    #[test]
    fn enter_with_title_submits() {
        let mut form = form();
        type_str(&mut form, "Write spec");
        assert_eq!(form.handle_key(KeyCode::Enter, 5), FormAction::Submit);
        assert_eq!(form.title.as_str(), "Write spec");
    }

    #[test]
    fn escape_cancels() {
        let mut form = form();
        assert_eq!(form.handle_key(KeyCode::Esc, 5), FormAction::Cancel);
    }

    #[test]
    fn tab_cycles_through_all_fields() {
        let mut form = form();
        form.handle_key(KeyCode::Tab, 5);
        assert_eq!(form.field, FormField::Content);
        form.handle_key(KeyCode::Tab, 5);
        assert_eq!(form.field, FormField::Column);
        form.handle_key(KeyCode::Tab, 5);
        assert_eq!(form.field, FormField::Title);
        form.handle_key(KeyCode::BackTab, 5);
        assert_eq!(form.field, FormField::Column);
    }

    #[test]
    fn typing_lands_in_the_focused_field() {
        let mut form = form();
        type_str(&mut form, "title");
        form.handle_key(KeyCode::Tab, 5);
        type_str(&mut form, "body");
        assert_eq!(form.title.as_str(), "title");
        assert_eq!(form.content.as_str(), "body");
    }

    #[test]
    fn column_selector_stays_in_bounds() {
        let board = Board::default();
        let mut form = CreateTaskForm::new(&board);
        form.handle_key(KeyCode::Tab, 5);
        form.handle_key(KeyCode::Tab, 5);
        assert_eq!(form.field, FormField::Column);

        for _ in 0..10 {
            form.handle_key(KeyCode::Right, 5);
        }
        assert_eq!(form.selected_column(&board), "done");

        for _ in 0..10 {
            form.handle_key(KeyCode::Left, 5);
        }
        assert_eq!(form.selected_column(&board), "backlog");
    }
}
