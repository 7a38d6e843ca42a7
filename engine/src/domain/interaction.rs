//! Add/edit flow state machine for the month view.
//!
//! Translates day-cell clicks and chip clicks into the budget/schedule
//! add and edit flows. The viewport class is an explicit constructor input
//! rather than a runtime probe, so the machine is deterministic under test:
//! wide viewports jump straight to the add choice, narrow viewports open a
//! day summary drawer first.
//!
//! Transition methods return whether the event applied; stale clicks that
//! arrive in the wrong state are ignored rather than treated as errors.
//! There is no terminal state - every flow ends back in `Idle`.

use shared::{BudgetEntry, PresentationMode, ScheduleEvent};

/// Which kind of item a form creates or edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Budget,
    Schedule,
}

/// What an open form is doing.
#[derive(Debug, Clone, PartialEq)]
pub enum FormIntent {
    /// Creating a new item of `kind` with the clicked date pre-filled
    Create { kind: FormKind, date: String },
    /// Editing an existing budget entry
    EditEntry(BudgetEntry),
    /// Editing an existing schedule
    EditSchedule(ScheduleEvent),
}

impl FormIntent {
    pub fn kind(&self) -> FormKind {
        match self {
            FormIntent::Create { kind, .. } => *kind,
            FormIntent::EditEntry(_) => FormKind::Budget,
            FormIntent::EditSchedule(_) => FormKind::Schedule,
        }
    }
}

/// Where the user is in the current interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionState {
    Idle,
    /// Narrow-viewport day summary for the clicked date
    DayDrawerOpen { date: String },
    /// Waiting for the budget-or-schedule choice for the clicked date
    ChoicePending { date: String },
    FormOpen(FormIntent),
}

/// State machine mediating date-cell clicks and the add/edit flows.
#[derive(Debug, Clone)]
pub struct InteractionController {
    mode: PresentationMode,
    state: InteractionState,
}

impl InteractionController {
    pub fn new(mode: PresentationMode) -> Self {
        Self {
            mode,
            state: InteractionState::Idle,
        }
    }

    pub fn mode(&self) -> PresentationMode {
        self.mode
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Handle a click on a day cell.
    ///
    /// From `Idle` this opens the day drawer (narrow) or the add choice
    /// (wide); in any other state the click is ignored.
    pub fn date_clicked(&mut self, date: &str) -> bool {
        if self.state != InteractionState::Idle {
            return false;
        }
        self.state = match self.mode {
            PresentationMode::Narrow => InteractionState::DayDrawerOpen {
                date: date.to_string(),
            },
            PresentationMode::Wide => InteractionState::ChoicePending {
                date: date.to_string(),
            },
        };
        log::info!("day cell clicked: {date}");
        true
    }

    /// Handle the add button inside the narrow-viewport day drawer.
    pub fn add_requested(&mut self) -> bool {
        let date = match &self.state {
            InteractionState::DayDrawerOpen { date } => date.clone(),
            _ => return false,
        };
        self.state = InteractionState::ChoicePending { date };
        true
    }

    /// Handle the budget-or-schedule choice, opening the create form with
    /// the clicked date pre-filled.
    pub fn choice_selected(&mut self, kind: FormKind) -> bool {
        let date = match &self.state {
            InteractionState::ChoicePending { date } => date.clone(),
            _ => return false,
        };
        log::info!("opening {kind:?} form for {date}");
        self.state = InteractionState::FormOpen(FormIntent::Create { kind, date });
        true
    }

    /// Handle a click on an existing entry chip: straight to the edit form,
    /// bypassing the choice.
    pub fn entry_clicked(&mut self, entry: &BudgetEntry) -> bool {
        if !self.can_open_edit() {
            return false;
        }
        log::info!("editing budget entry {}", entry.id);
        self.state = InteractionState::FormOpen(FormIntent::EditEntry(entry.clone()));
        true
    }

    /// Handle a click on an existing schedule chip or bar: straight to the
    /// edit form, bypassing the choice.
    pub fn schedule_clicked(&mut self, schedule: &ScheduleEvent) -> bool {
        if !self.can_open_edit() {
            return false;
        }
        log::info!("editing schedule {}", schedule.id);
        self.state = InteractionState::FormOpen(FormIntent::EditSchedule(schedule.clone()));
        true
    }

    /// Handle a successful form submission.
    pub fn form_submitted(&mut self) -> bool {
        if !matches!(self.state, InteractionState::FormOpen(_)) {
            return false;
        }
        self.state = InteractionState::Idle;
        true
    }

    /// Cancel whatever is open - form, choice, or drawer - back to `Idle`.
    pub fn cancelled(&mut self) -> bool {
        if self.state == InteractionState::Idle {
            return false;
        }
        self.state = InteractionState::Idle;
        true
    }

    fn can_open_edit(&self) -> bool {
        matches!(
            self.state,
            InteractionState::Idle | InteractionState::DayDrawerOpen { .. }
        )
    }
}
