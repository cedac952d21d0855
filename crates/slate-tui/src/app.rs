use crate::dialog::{CreateTaskForm, FormAction};
use crate::events::{Event, EventHandler};
use crate::ui;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{backend::CrosstermBackend, Terminal};
use slate_core::SelectionState;
use slate_domain::Board;
use slate_persistence::{BoardStore, JsonFileStore};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    CreateTask,
}

/// The board owner. Key gestures are translated into board transitions;
/// every transition that yields a new board is saved before the next
/// event is handled.
pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub board: Board,
    pub focused_column: usize,
    pub card_selection: SelectionState,
    pub form: CreateTaskForm,
    store: JsonFileStore,
}

impl App {
    pub fn new(store: JsonFileStore, board: Board) -> Self {
        let form = CreateTaskForm::new(&board);
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            board,
            focused_column: 0,
            card_selection: SelectionState::new(),
            form,
            store,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        tracing::debug!("opening board at {}", self.store.path().display());
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let mut events = EventHandler::new();
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;
            match events.next().await {
                Some(Event::Key(key)) => self.on_key(key).await?,
                Some(Event::Tick) => {}
                None => break,
            }
        }
        events.stop();

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        Ok(())
    }

    pub async fn on_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        match self.mode {
            AppMode::Normal => self.on_normal_key(key.code).await,
            AppMode::CreateTask => self.on_form_key(key.code).await,
        }
    }

    async fn on_normal_key(&mut self, code: KeyCode) -> anyhow::Result<()> {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('n') => {
                self.form = CreateTaskForm::new(&self.board);
                self.mode = AppMode::CreateTask;
            }
            KeyCode::Left | KeyCode::Char('h') => self.focus_column(-1),
            KeyCode::Right | KeyCode::Char('l') => self.focus_column(1),
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.focused_column_len();
                self.card_selection.next(len);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.focused_column_len() > 0 {
                    self.card_selection.prev();
                }
            }
            KeyCode::Char('J') => self.reorder_selected(1).await?,
            KeyCode::Char('K') => self.reorder_selected(-1).await?,
            KeyCode::Char('H') => self.send_selected(-1).await?,
            KeyCode::Char('L') => self.send_selected(1).await?,
            KeyCode::Char('d') => self.delete_selected().await?,
            _ => {}
        }
        Ok(())
    }

    async fn on_form_key(&mut self, code: KeyCode) -> anyhow::Result<()> {
        match self.form.handle_key(code, self.board.column_order.len()) {
            FormAction::Cancel => self.mode = AppMode::Normal,
            FormAction::Submit => {
                let column_id = self.form.selected_column(&self.board).to_string();
                let title = self.form.title.as_str().to_string();
                let content = self.form.content.as_str().to_string();
                if let Some(next) = self.board.create_task(&title, &content, &column_id) {
                    self.commit(next).await?;
                }
                self.mode = AppMode::Normal;
            }
            FormAction::None => {}
        }
        Ok(())
    }

    /// Save the next board, then make it current.
    async fn commit(&mut self, next: Board) -> anyhow::Result<()> {
        self.store.save(&next).await?;
        self.board = next;
        Ok(())
    }

    pub fn focused_column_id(&self) -> Option<&str> {
        self.board
            .column_order
            .get(self.focused_column)
            .map(String::as_str)
    }

    fn focused_column_len(&self) -> usize {
        self.focused_column_id()
            .and_then(|id| self.board.column(id))
            .map(|column| column.task_ids.len())
            .unwrap_or(0)
    }

    fn focus_column(&mut self, delta: isize) {
        let count = self.board.column_order.len() as isize;
        let target = self.focused_column as isize + delta;
        if target < 0 || target >= count {
            return;
        }
        self.focused_column = target as usize;
        let len = self.focused_column_len();
        self.card_selection.clamp(len);
    }

    /// The selected card as owned values, to keep borrows out of the
    /// mutation paths.
    fn selected_card(&self) -> Option<(String, usize, String)> {
        let column_id = self.focused_column_id()?;
        let column = self.board.column(column_id)?;
        let index = self.card_selection.get()?;
        let task_id = column.task_ids.get(index)?;
        Some((column_id.to_string(), index, task_id.clone()))
    }

    /// Move the selected card up (-1) or down (+1) within its column.
    async fn reorder_selected(&mut self, delta: isize) -> anyhow::Result<()> {
        let Some((column_id, index, task_id)) = self.selected_card() else {
            return Ok(());
        };
        let len = self.focused_column_len();
        let dest = index as isize + delta;
        if dest < 0 || dest as usize >= len {
            return Ok(());
        }
        let dest = dest as usize;

        if let Some(next) =
            self.board
                .move_task(&task_id, &column_id, index, Some(&column_id), dest)
        {
            self.commit(next).await?;
            self.card_selection.set(Some(dest));
        }
        Ok(())
    }

    /// Send the selected card to the adjacent column, keeping its index
    /// where the destination allows it.
    async fn send_selected(&mut self, delta: isize) -> anyhow::Result<()> {
        let Some((column_id, index, task_id)) = self.selected_card() else {
            return Ok(());
        };
        let count = self.board.column_order.len() as isize;
        let target = self.focused_column as isize + delta;
        if target < 0 || target >= count {
            return Ok(());
        }
        let target = target as usize;
        let dest_column_id = self.board.column_order[target].clone();
        let dest_len = self
            .board
            .column(&dest_column_id)
            .map(|column| column.task_ids.len())
            .unwrap_or(0);
        let dest_index = index.min(dest_len);

        if let Some(next) =
            self.board
                .move_task(&task_id, &column_id, index, Some(&dest_column_id), dest_index)
        {
            self.commit(next).await?;
            self.focused_column = target;
            self.card_selection.set(Some(dest_index));
        }
        Ok(())
    }

    async fn delete_selected(&mut self) -> anyhow::Result<()> {
        let Some((column_id, _, task_id)) = self.selected_card() else {
            return Ok(());
        };
        let next = self.board.delete_task(&task_id, &column_id);
        self.commit(next).await?;
        let len = self.focused_column_len();
        self.card_selection.clamp(len);
        Ok(())
    }
}
