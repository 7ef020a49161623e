//! Application state and logic
//!
//! All state transitions live here and are free of terminal I/O, so the
//! form/table behavior can be unit tested without a backend. Persistence is
//! the caller's concern (load at startup, save at exit).

use gradebook_core::{validate, Roster, RosterError, Student};

/// Which part of the screen has focus
///
/// The three form fields and the table share one focus cycle, in visual
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Name,
    Email,
    Gpa,
    Table,
}

impl Focus {
    /// Move to the next focus target (wrapping)
    pub fn next(self) -> Self {
        match self {
            Focus::Name => Focus::Email,
            Focus::Email => Focus::Gpa,
            Focus::Gpa => Focus::Table,
            Focus::Table => Focus::Name,
        }
    }

    /// Move to the previous focus target (wrapping)
    pub fn prev(self) -> Self {
        match self {
            Focus::Name => Focus::Table,
            Focus::Email => Focus::Name,
            Focus::Gpa => Focus::Email,
            Focus::Table => Focus::Gpa,
        }
    }

    /// Whether focus is on one of the form fields
    pub fn in_form(self) -> bool {
        !matches!(self, Focus::Table)
    }
}

/// Column the table view is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    Name,
    Email,
    Gpa,
}

impl SortColumn {
    /// Cycle to the next column
    pub fn next(self) -> Self {
        match self {
            SortColumn::Id => SortColumn::Name,
            SortColumn::Name => SortColumn::Email,
            SortColumn::Email => SortColumn::Gpa,
            SortColumn::Gpa => SortColumn::Id,
        }
    }

    /// Column label for the table title
    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Id => "ID",
            SortColumn::Name => "Name",
            SortColumn::Email => "Email",
            SortColumn::Gpa => "GPA",
        }
    }
}

/// Severity of a feedback modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Blocking modal requiring dismissal before the app continues
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Feedback message, dismissed by any key
    Feedback { severity: Severity, message: String },
    /// Delete confirmation, answered with y/n
    ConfirmDelete { id: u32 },
}

/// Application state
pub struct App {
    /// Whether the app should exit
    pub should_quit: bool,
    /// Current focus target
    pub focus: Focus,
    /// Name form field contents
    pub name_input: String,
    /// Email form field contents
    pub email_input: String,
    /// GPA form field contents
    pub gpa_input: String,
    /// Id of the selected student, if any (survives re-sorting)
    pub selected_id: Option<u32>,
    /// Row index into the sorted view
    pub table_index: usize,
    /// Column the display view is sorted by
    pub sort_column: SortColumn,
    /// Sort direction
    pub sort_ascending: bool,
    /// Currently displayed modal, if any
    pub modal: Option<Modal>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new app with an empty form
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: Focus::Name,
            name_input: String::new(),
            email_input: String::new(),
            gpa_input: String::new(),
            selected_id: None,
            table_index: 0,
            sort_column: SortColumn::Id,
            sort_ascending: true,
            modal: None,
        }
    }

    // ==================== Feedback ====================

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.modal = Some(Modal::Feedback {
            severity: Severity::Info,
            message: message.into(),
        });
    }

    pub fn set_warning(&mut self, message: impl Into<String>) {
        self.modal = Some(Modal::Feedback {
            severity: Severity::Warning,
            message: message.into(),
        });
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.modal = Some(Modal::Feedback {
            severity: Severity::Error,
            message: message.into(),
        });
    }

    /// Dismiss the current modal
    pub fn dismiss_modal(&mut self) {
        self.modal = None;
    }

    // ==================== Form editing ====================

    /// Mutable buffer of the focused form field, if focus is in the form
    fn focused_input(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Name => Some(&mut self.name_input),
            Focus::Email => Some(&mut self.email_input),
            Focus::Gpa => Some(&mut self.gpa_input),
            Focus::Table => None,
        }
    }

    /// Type a character into the focused form field
    pub fn input_char(&mut self, c: char) {
        if let Some(input) = self.focused_input() {
            input.push(c);
        }
    }

    /// Delete the last character of the focused form field
    pub fn input_backspace(&mut self) {
        if let Some(input) = self.focused_input() {
            input.pop();
        }
    }

    /// Clear the form and drop the table selection
    pub fn clear_form(&mut self) {
        self.name_input.clear();
        self.email_input.clear();
        self.gpa_input.clear();
        self.selected_id = None;
        self.focus = Focus::Name;
    }

    /// Copy a student's fields into the form
    fn populate_form(&mut self, student: &Student) {
        self.name_input = student.name.clone();
        self.email_input = student.email.clone();
        self.gpa_input = student.gpa.to_string();
    }

    // ==================== Table view ====================

    /// The display view: students sorted by the current column/direction
    ///
    /// Computed on read; never mutates roster order.
    pub fn sorted_view<'a>(&self, roster: &'a Roster) -> Vec<&'a Student> {
        let mut view: Vec<&Student> = roster.students().iter().collect();
        view.sort_by(|a, b| {
            let ord = match self.sort_column {
                SortColumn::Id => a.id.cmp(&b.id),
                SortColumn::Name => a.name.cmp(&b.name),
                SortColumn::Email => a.email.cmp(&b.email),
                SortColumn::Gpa => a.gpa.partial_cmp(&b.gpa).unwrap_or(std::cmp::Ordering::Equal),
            };
            if self.sort_ascending {
                ord
            } else {
                ord.reverse()
            }
        });
        view
    }

    /// Re-derive the table index after a sort change or roster mutation
    ///
    /// The selection is tracked by id, so the highlighted record stays the
    /// same when the view re-sorts. A selection whose id vanished is
    /// dropped.
    pub fn sync_table_index(&mut self, roster: &Roster) {
        let view = self.sorted_view(roster);
        if let Some(id) = self.selected_id {
            match view.iter().position(|s| s.id == id) {
                Some(pos) => self.table_index = pos,
                None => self.selected_id = None,
            }
        }
        self.table_index = self.table_index.min(view.len().saturating_sub(1));
    }

    /// Select the row at `table_index` and populate the form from it
    pub fn select_current_row(&mut self, roster: &Roster) {
        let view = self.sorted_view(roster);
        if let Some(student) = view.get(self.table_index) {
            self.selected_id = Some(student.id);
            let student = (*student).clone();
            self.populate_form(&student);
        }
    }

    /// Move the table selection up
    pub fn table_up(&mut self, roster: &Roster) {
        if self.table_index > 0 {
            self.table_index -= 1;
        }
        self.select_current_row(roster);
    }

    /// Move the table selection down
    pub fn table_down(&mut self, roster: &Roster) {
        let len = roster.len();
        if self.table_index < len.saturating_sub(1) {
            self.table_index += 1;
        }
        self.select_current_row(roster);
    }

    /// Cycle the sort column
    pub fn cycle_sort_column(&mut self, roster: &Roster) {
        self.sort_column = self.sort_column.next();
        self.sync_table_index(roster);
    }

    /// Toggle the sort direction
    pub fn toggle_sort_direction(&mut self, roster: &Roster) {
        self.sort_ascending = !self.sort_ascending;
        self.sync_table_index(roster);
    }

    // ==================== Actions ====================

    /// Submit the form: Add when nothing is selected, Update otherwise
    pub fn submit(&mut self, roster: &mut Roster) {
        match self.selected_id {
            None => self.add(roster),
            Some(_) => self.update(roster),
        }
    }

    /// Validate the form and add a new student
    pub fn add(&mut self, roster: &mut Roster) {
        match validate(&self.name_input, &self.email_input, &self.gpa_input) {
            Ok(draft) => {
                let id = roster.add(draft.name, draft.email, draft.gpa);
                self.clear_form();
                self.sync_table_index(roster);
                self.set_info(format!("Added student with ID {}", id));
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Validate the form and update the selected student in place
    pub fn update(&mut self, roster: &mut Roster) {
        let Some(id) = self.selected_id else {
            self.set_warning("Select a row to update.");
            return;
        };
        match validate(&self.name_input, &self.email_input, &self.gpa_input) {
            Ok(draft) => match roster.update(id, draft.name, draft.email, draft.gpa) {
                Ok(()) => {
                    // The edit may move the row within the sorted view
                    self.sync_table_index(roster);
                    self.set_info("Student updated.");
                }
                Err(e @ RosterError::NotFound { .. }) => {
                    // Selection vanished between selecting and acting
                    self.selected_id = None;
                    self.sync_table_index(roster);
                    self.set_error(e.to_string());
                }
            },
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Ask for delete confirmation on the selected student
    pub fn request_delete(&mut self) {
        match self.selected_id {
            Some(id) => self.modal = Some(Modal::ConfirmDelete { id }),
            None => self.set_warning("Select a row to delete."),
        }
    }

    /// Delete after confirmation
    pub fn confirm_delete(&mut self, roster: &mut Roster) {
        let id = match self.modal {
            Some(Modal::ConfirmDelete { id }) => id,
            _ => return,
        };
        self.modal = None;
        match roster.remove(id) {
            Ok(_) => {
                self.clear_form();
                self.sync_table_index(roster);
                self.set_info("Student deleted.");
            }
            Err(e @ RosterError::NotFound { .. }) => {
                self.selected_id = None;
                self.sync_table_index(roster);
                self.set_error(e.to_string());
            }
        }
    }

    // ==================== Focus ====================

    /// Move focus to the next field (wrapping into the table)
    pub fn focus_next(&mut self, roster: &Roster) {
        self.focus = self.focus.next();
        if self.focus == Focus::Table && !roster.is_empty() {
            self.select_current_row(roster);
        }
    }

    /// Move focus to the previous field
    pub fn focus_prev(&mut self, roster: &Roster) {
        self.focus = self.focus.prev();
        if self.focus == Focus::Table && !roster.is_empty() {
            self.select_current_row(roster);
        }
    }
}
