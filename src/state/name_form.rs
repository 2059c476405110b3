use ob_forms::NameField;

/// First/last name entry with a single cursor in the focused field.
#[derive(Debug, Clone)]
pub struct NameForm {
    pub first: String,
    pub last: String,
    pub focus: NameField,
    /// Byte offset into the focused field
    pub cursor: usize,
}

impl Default for NameForm {
    fn default() -> Self {
        Self { first: String::new(), last: String::new(), focus: NameField::First, cursor: 0 }
    }
}

impl NameForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn field(&self, field: NameField) -> &str {
        match field {
            NameField::First => &self.first,
            NameField::Last => &self.last,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            NameField::First => &mut self.first,
            NameField::Last => &mut self.last,
        }
    }

    /// Move focus to `field`, cursor at its end.
    pub fn focus(&mut self, field: NameField) {
        self.focus = field;
        self.cursor = self.field(field).len();
    }

    pub fn toggle_focus(&mut self) {
        let next = match self.focus {
            NameField::First => NameField::Last,
            NameField::Last => NameField::First,
        };
        self.focus(next);
    }

    pub fn insert_char(&mut self, c: char) {
        let cursor = self.cursor;
        self.focused_mut().insert(cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let cursor = self.cursor;
            let field = self.focused_mut();
            let prev_boundary = field[..cursor].char_indices().last().map(|(i, _)| i).unwrap_or(0);
            field.remove(prev_boundary);
            self.cursor = prev_boundary;
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        let cursor = self.cursor;
        let field = self.focused_mut();
        if cursor < field.len() {
            field.remove(cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            let prev_boundary =
                self.field(self.focus)[..self.cursor].char_indices().last().map(|(i, _)| i).unwrap_or(0);
            self.cursor = prev_boundary;
        }
    }

    pub fn cursor_right(&mut self) {
        let cursor = self.cursor;
        let field = self.field(self.focus);
        if cursor < field.len() {
            let next_boundary = field[cursor..].char_indices().nth(1).map(|(i, _)| cursor + i).unwrap_or(field.len());
            self.cursor = next_boundary;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.field(self.focus).len();
    }
}
