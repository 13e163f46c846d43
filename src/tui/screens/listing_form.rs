//! Listing form screen: every listing field, the image pickers, and the
//! Cancel/Submit buttons on one scrolling form.

use std::sync::LazyLock;

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tracing::{debug, info, warn};

use crate::model::{
    Amenity, Country, ErrorKey, ErrorMap, FieldId, FieldKind, FieldValue, FormFields, PetFeeType,
    Section, filter_digits, validate,
};
use crate::staging::{ImageStaging, load_batch, load_single};
use crate::submit::ListingSnapshot;
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::form::{FocusRing, FormRow, draw_form};

/// A focusable row of the listing form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    /// An editable listing field.
    Field(FieldId),
    /// The main image picker.
    MainImage,
    /// The additional images picker.
    AdditionalImages,
    /// The Cancel button.
    Cancel,
    /// The Submit button.
    Submit,
}

impl Row {
    /// The section this row is grouped under; buttons have none.
    fn section(self) -> Option<Section> {
        match self {
            Self::Field(id) => Some(id.section()),
            Self::MainImage | Self::AdditionalImages => Some(Section::Images),
            Self::Cancel | Self::Submit => None,
        }
    }

    /// The error slot shown next to this row.
    fn error_key(self) -> Option<ErrorKey> {
        match self {
            Self::Field(id) => Some(ErrorKey::Field(id)),
            Self::MainImage => Some(ErrorKey::MainImage),
            _ => None,
        }
    }
}

/// Form rows in display order: the fields, the two pickers, then the buttons.
static ROWS: LazyLock<Vec<Row>> = LazyLock::new(|| {
    FieldId::all()
        .iter()
        .map(|&id| Row::Field(id))
        .chain([
            Row::MainImage,
            Row::AdditionalImages,
            Row::Cancel,
            Row::Submit,
        ])
        .collect()
});

/// Which image slot a path prompt fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Main,
    Additional,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PathPrompt {
    slot: ImageSlot,
    input: String,
}

/// State for the listing form screen.
#[derive(Debug, Clone)]
pub struct ListingFormState {
    fields: FormFields,
    staging: ImageStaging,
    errors: ErrorMap,
    focus: FocusRing,
    amenity_cursor: usize,
    image_cursor: usize,
    prompt: Option<PathPrompt>,
    submitting: bool,
}

impl Default for ListingFormState {
    fn default() -> Self {
        Self::new(ImageStaging::default())
    }
}

impl ScreenState for ListingFormState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.prompt.is_some() {
            return self.handle_prompt_key(key);
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') => self.submit(),
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                let fields = &self.fields;
                self.focus.focus_next(|i| row_enabled(fields, ROWS[i]));
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                let fields = &self.fields;
                self.focus.focus_prev(|i| row_enabled(fields, ROWS[i]));
                Action::None
            }
            KeyCode::Left => {
                self.cycle(false);
                Action::None
            }
            KeyCode::Right => {
                self.cycle(true);
                Action::None
            }
            KeyCode::Backspace => {
                self.delete_char();
                Action::None
            }
            KeyCode::Delete => {
                self.delete_image();
                Action::None
            }
            KeyCode::Enter => self.activate(),
            KeyCode::Esc => Action::Quit,
            KeyCode::Char(' ') => {
                self.handle_space();
                Action::None
            }
            KeyCode::Char(ch) => {
                self.insert_char(ch);
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl ListingFormState {
    /// Creates an empty draft that stages images into `staging`.
    pub fn new(staging: ImageStaging) -> Self {
        Self {
            fields: FormFields::default(),
            staging,
            errors: ErrorMap::default(),
            focus: FocusRing::new(ROWS.len()),
            amenity_cursor: 0,
            image_cursor: 0,
            prompt: None,
            submitting: false,
        }
    }

    /// Returns the current draft.
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Returns the staged images.
    pub fn staging(&self) -> &ImageStaging {
        &self.staging
    }

    /// Returns the errors from the last submit attempt and image selection.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Returns the focused row.
    pub fn focused_row(&self) -> Row {
        ROWS[self.focus.focus()]
    }

    /// Returns the amenity under the cursor.
    pub fn amenity_cursor(&self) -> Amenity {
        Amenity::all()[self.amenity_cursor]
    }

    /// Returns the index of the selected additional image.
    pub fn image_cursor(&self) -> usize {
        self.image_cursor
    }

    /// Returns the slot and text of the open path prompt, if any.
    pub fn prompt(&self) -> Option<(ImageSlot, &str)> {
        self.prompt.as_ref().map(|p| (p.slot, p.input.as_str()))
    }

    /// Returns `true` while a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Marks the form as submitting or idle.
    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    /// Builds the display rows for the form widget.
    pub fn form_rows(&self) -> Vec<FormRow> {
        let mut prev_section = None;
        ROWS.iter()
            .map(|&row| {
                let section = row.section();
                let heading = if section != prev_section {
                    section.map(Section::title)
                } else {
                    None
                };
                prev_section = section;
                FormRow {
                    heading,
                    ..self.display_row(row)
                }
            })
            .collect()
    }

    fn display_row(&self, row: Row) -> FormRow {
        let error = row
            .error_key()
            .and_then(|key| self.errors.get(key))
            .map(str::to_string);
        let enabled = row_enabled(&self.fields, row);

        match row {
            Row::Field(id) => {
                let (value, is_placeholder) = self.field_value(id);
                FormRow {
                    label: id.label().to_string(),
                    value,
                    is_placeholder,
                    error,
                    required: id.is_required(),
                    enabled,
                    text_cursor: matches!(id.kind(), FieldKind::Text | FieldKind::Numeric),
                    heading: None,
                }
            }
            Row::MainImage => {
                let (value, is_placeholder) = match self.staging.main() {
                    Some(image) => (image.preview_label(), false),
                    None => ("No file selected".to_string(), true),
                };
                FormRow {
                    label: "Main Image".to_string(),
                    value,
                    is_placeholder,
                    error,
                    required: true,
                    enabled,
                    ..FormRow::default()
                }
            }
            Row::AdditionalImages => {
                let images = self.staging.additional();
                let (value, is_placeholder) = match images.get(self.image_cursor) {
                    Some(image) => (
                        format!(
                            "< {}/{}: {} >",
                            self.image_cursor + 1,
                            images.len(),
                            image.preview_label()
                        ),
                        false,
                    ),
                    None => ("No files selected".to_string(), true),
                };
                FormRow {
                    label: "Additional Images".to_string(),
                    value,
                    is_placeholder,
                    enabled,
                    ..FormRow::default()
                }
            }
            Row::Cancel => FormRow {
                label: "[ Cancel ]".to_string(),
                enabled,
                ..FormRow::default()
            },
            Row::Submit => FormRow {
                label: if self.submitting {
                    "[ Submitting... ]".to_string()
                } else {
                    "[ Submit ]".to_string()
                },
                enabled,
                ..FormRow::default()
            },
        }
    }

    /// Returns the rendered value of a field and whether it is hint text.
    fn field_value(&self, id: FieldId) -> (String, bool) {
        let hint = |text: &str| (text.to_string(), true);
        match id {
            FieldId::Country => match self.fields.country() {
                Some(country) => (format!("< {country} >"), false),
                None => hint(id.placeholder().unwrap_or_default()),
            },
            FieldId::PetFeeType => match self.fields.pet_fee_type() {
                Some(fee_type) => (format!("< {fee_type} >"), false),
                None => hint("Select fee type"),
            },
            FieldId::PetsAllowed => {
                let mark = if self.fields.pets_allowed() {
                    "[x] Yes"
                } else {
                    "[ ] No"
                };
                (mark.to_string(), false)
            }
            FieldId::Amenities => {
                let current = self.amenity_cursor();
                let mark = if self.fields.amenities().contains(&current) {
                    'x'
                } else {
                    ' '
                };
                (
                    format!(
                        "< [{mark}] {current} >  ({} selected)",
                        self.fields.amenities().len()
                    ),
                    false,
                )
            }
            _ => match self.fields.text(id) {
                Some(text) if !text.is_empty() => (text.to_string(), false),
                _ => hint(id.placeholder().unwrap_or_default()),
            },
        }
    }

    /// Applies an update, logging and ignoring values the field does not accept.
    fn update(&mut self, id: FieldId, value: FieldValue) {
        match self.fields.with(id, value) {
            Ok(next) => self.fields = next,
            Err(e) => warn!(error = %e, "update rejected"),
        }
    }

    fn focused_field(&self) -> Option<FieldId> {
        match self.focused_row() {
            Row::Field(id) if self.fields.is_enabled(id) => Some(id),
            _ => None,
        }
    }

    /// Inserts a character into the focused text row.
    ///
    /// Numeric rows keep only digits.
    fn insert_char(&mut self, ch: char) {
        let Some(id) = self.focused_field() else {
            return;
        };
        let Some(current) = self.fields.text(id) else {
            return;
        };
        let mut next = format!("{current}{ch}");
        if id.is_numeric() {
            next = filter_digits(&next);
        }
        self.update(id, next.into());
    }

    fn delete_char(&mut self) {
        let Some(id) = self.focused_field() else {
            return;
        };
        let Some(current) = self.fields.text(id) else {
            return;
        };
        let mut next = current.to_string();
        if next.pop().is_some() {
            self.update(id, next.into());
        }
    }

    /// Space toggles flags and amenities; elsewhere it is typed.
    fn handle_space(&mut self) {
        match self.focused_field() {
            Some(FieldId::PetsAllowed) => {
                let allowed = !self.fields.pets_allowed();
                self.update(FieldId::PetsAllowed, allowed.into());
            }
            Some(FieldId::Amenities) => {
                let current = self.amenity_cursor();
                let mut amenities = self.fields.amenities().clone();
                if !amenities.remove(&current) {
                    amenities.insert(current);
                }
                self.update(FieldId::Amenities, amenities.into());
            }
            _ => self.insert_char(' '),
        }
    }

    /// Left/Right: cycles selects and moves the list cursors.
    fn cycle(&mut self, forward: bool) {
        match self.focused_row() {
            Row::Field(FieldId::Country) => {
                let next = cycle(Country::all(), self.fields.country(), forward);
                self.update(FieldId::Country, next.into());
            }
            Row::Field(FieldId::PetFeeType) if self.fields.pets_allowed() => {
                let next = cycle(PetFeeType::all(), self.fields.pet_fee_type(), forward);
                self.update(FieldId::PetFeeType, next.into());
            }
            Row::Field(FieldId::Amenities) => {
                let current = self.amenity_cursor();
                let next = cycle(Amenity::all(), Some(current), forward);
                self.amenity_cursor = Amenity::all()
                    .iter()
                    .position(|&a| a == next)
                    .unwrap_or_default();
            }
            Row::AdditionalImages => {
                let last = self.staging.additional().len().saturating_sub(1);
                self.image_cursor = if forward {
                    (self.image_cursor + 1).min(last)
                } else {
                    self.image_cursor.saturating_sub(1)
                };
            }
            _ => {}
        }
    }

    /// Enter: opens image prompts, presses buttons, and submits from field rows.
    fn activate(&mut self) -> Action {
        match self.focused_row() {
            Row::MainImage => {
                self.open_prompt(ImageSlot::Main);
                Action::None
            }
            Row::AdditionalImages => {
                self.open_prompt(ImageSlot::Additional);
                Action::None
            }
            Row::Cancel => Action::Quit,
            Row::Submit | Row::Field(_) => self.submit(),
        }
    }

    fn open_prompt(&mut self, slot: ImageSlot) {
        self.prompt = Some(PathPrompt {
            slot,
            input: String::new(),
        });
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) -> Action {
        let Some(prompt) = self.prompt.as_mut() else {
            return Action::None;
        };
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                prompt.input.push(ch);
                Action::None
            }
            KeyCode::Backspace => {
                prompt.input.pop();
                Action::None
            }
            KeyCode::Esc => {
                self.prompt = None;
                Action::None
            }
            KeyCode::Enter => match self.prompt.take() {
                Some(prompt) => self.stage(prompt),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    /// Stages the files named by a confirmed prompt.
    fn stage(&mut self, prompt: PathPrompt) -> Action {
        if prompt.input.trim().is_empty() {
            return Action::None;
        }
        match prompt.slot {
            ImageSlot::Main => {
                self.errors.remove(ErrorKey::MainImage);
                let staged =
                    load_single(&prompt.input).and_then(|image| self.staging.accept_main(image));
                if let Err(e) = staged {
                    self.errors.insert(ErrorKey::MainImage, e.inline_message());
                }
                Action::None
            }
            ImageSlot::Additional => {
                let (images, unreadable) = load_batch(&prompt.input);
                let outcome = self.staging.accept_additional(images);
                let notices: Vec<String> = unreadable
                    .iter()
                    .map(|e| e.notice())
                    .chain(outcome.notices())
                    .collect();
                if notices.is_empty() {
                    Action::None
                } else {
                    Action::Notify(notices)
                }
            }
        }
    }

    /// Delete: removes the main image or the additional image under the cursor.
    fn delete_image(&mut self) {
        match self.focused_row() {
            Row::MainImage => {
                if let Some(image) = self.staging.clear_main() {
                    info!(file = image.name(), "main image removed");
                }
            }
            Row::AdditionalImages => {
                if let Some(image) = self.staging.remove_additional(self.image_cursor) {
                    info!(file = image.name(), "additional image removed");
                }
                let last = self.staging.additional().len().saturating_sub(1);
                self.image_cursor = self.image_cursor.min(last);
            }
            _ => {}
        }
    }

    /// Validates the draft and, if clean, hands a snapshot to the app.
    ///
    /// On failure focus moves to the first row with an error.
    fn submit(&mut self) -> Action {
        if self.submitting {
            debug!("submit ignored: already submitting");
            return Action::None;
        }

        self.errors = validate(&self.fields, self.staging.has_main());
        if let Some(first) = self.errors.first_key() {
            info!(errors = self.errors.len(), first = %first, "submission blocked by validation");
            if let Some(index) = ROWS.iter().position(|row| row.error_key() == Some(first)) {
                self.focus.set_focus(index);
            }
            return Action::None;
        }

        Action::Submit(ListingSnapshot::assemble(
            &self.fields,
            &self.staging,
            Utc::now(),
        ))
    }
}

/// Returns `true` if `row` can take focus.
fn row_enabled(fields: &FormFields, row: Row) -> bool {
    match row {
        Row::Field(id) => fields.is_enabled(id),
        _ => true,
    }
}

/// Returns the element after (or before) `current`, wrapping around.
///
/// With nothing selected, forward starts at the first item and backward at
/// the last.
fn cycle<T: PartialEq + Copy>(items: &[T], current: Option<T>, forward: bool) -> T {
    let len = items.len();
    let next = match current.and_then(|c| items.iter().position(|&x| x == c)) {
        Some(pos) if forward => (pos + 1) % len,
        Some(pos) => (pos + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    items[next]
}

/// Renders the listing form screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_listing_form(state: &ListingFormState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" New Listing ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, prompt_area, footer_area] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(&state.form_rows(), state.focus.focus(), frame, form_area);

    if let Some((slot, input)) = state.prompt() {
        let label = match slot {
            ImageSlot::Main => "Main image path: ",
            ImageSlot::Additional => "Image paths (comma-separated): ",
        };
        let prompt = Line::from(vec![
            Span::styled(label, Style::default().fg(Color::Yellow)),
            Span::raw(input),
            Span::raw("\u{2588}"),
        ]);
        frame.render_widget(Paragraph::new(prompt), prompt_area);
    }

    let hint = if state.prompt().is_some() {
        "Enter: stage  Esc: cancel"
    } else {
        "Tab/\u{2191}\u{2193}: move  \u{2190}\u{2192}: choose  Space: toggle  Enter: pick/submit  Del: remove  Ctrl+S: submit  F1: help  Esc: quit"
    };
    let footer = Paragraph::new(Line::from(hint)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
