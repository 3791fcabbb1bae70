//! # Antenna Form
//!
//! "Add New Antenna" / "Edit Antenna" dialog from the admin dashboard.
//! Features are typed as one comma-separated line; the maintenance date as
//! `YYYY-MM-DD`.

use chrono::NaiveDate;

use crate::core::action::Action;
use crate::core::error::FieldError;
use crate::core::features::{join_features, parse_features};
use crate::core::model::{Antenna, AntennaDraft, AntennaStatus, AntennaType, Location};
use crate::core::request::DATE_FORMAT;
use crate::tui::component::EventHandler;
use crate::tui::components::form::{
    FormEvent, FormField, FormLayout, FormRow, field_problem, handle_form_event,
};
use crate::tui::components::select_field::SelectField;
use crate::tui::components::text_field::TextField;
use crate::tui::event::TuiEvent;

pub struct AntennaForm {
    /// `Some(id)` when editing an existing antenna.
    pub editing: Option<u32>,
    name: TextField,
    antenna_type: SelectField<AntennaType>,
    frequency: TextField,
    location: SelectField<Location>,
    status: SelectField<AntennaStatus>,
    description: TextField,
    features: TextField,
    last_maintenance: TextField,
    focus: usize,
}

impl AntennaForm {
    /// Blank form; maintenance date defaults to `today`.
    pub fn create(today: NaiveDate) -> Self {
        Self::from_draft(None, &AntennaDraft::blank(today))
    }

    pub fn edit(antenna: &Antenna) -> Self {
        Self::from_draft(Some(antenna.id), &antenna.to_draft())
    }

    fn from_draft(editing: Option<u32>, draft: &AntennaDraft) -> Self {
        Self {
            editing,
            name: TextField::new(draft.name.as_str()).placeholder("e.g., Aurora Array Gamma"),
            antenna_type: SelectField::new(AntennaType::ALL, draft.antenna_type.as_ref())
                .placeholder("Select type"),
            frequency: TextField::new(draft.frequency.as_str()).placeholder("e.g., 1-30 MHz"),
            location: SelectField::new(Location::ALL, draft.location.as_ref())
                .placeholder("Select location"),
            status: SelectField::new(AntennaStatus::ALL, Some(&draft.status)),
            description: TextField::new(draft.description.as_str()),
            features: TextField::new(join_features(&draft.features))
                .placeholder("Feature 1, Feature 2, ..."),
            last_maintenance: TextField::new(draft.last_maintenance.format(DATE_FORMAT).to_string())
                .placeholder("YYYY-MM-DD"),
            focus: 0,
        }
    }

    /// Collect the fields into a draft. Fails only on an unreadable date;
    /// missing required values are left for the repository to report.
    pub fn draft(&self) -> Result<AntennaDraft, FieldError> {
        let last_maintenance =
            NaiveDate::parse_from_str(self.last_maintenance.value().trim(), DATE_FORMAT)
                .map_err(|_| FieldError::malformed("last maintenance"))?;
        Ok(AntennaDraft {
            name: self.name.trimmed(),
            antenna_type: self.antenna_type.value().copied(),
            frequency: self.frequency.trimmed(),
            location: self.location.value().copied(),
            status: self.status.value().copied().unwrap_or_default(),
            description: self.description.trimmed(),
            features: parse_features(self.features.value()),
            last_maintenance,
        })
    }
}

impl FormLayout for AntennaForm {
    fn title(&self) -> String {
        match self.editing {
            Some(_) => "Edit Antenna".to_string(),
            None => "Add New Antenna".to_string(),
        }
    }

    fn rows(&self) -> Vec<FormRow<'_>> {
        vec![
            FormRow { label: "Name", required: true, field: &self.name },
            FormRow { label: "Type", required: true, field: &self.antenna_type },
            FormRow { label: "Frequency", required: true, field: &self.frequency },
            FormRow { label: "Location", required: true, field: &self.location },
            FormRow { label: "Status", required: false, field: &self.status },
            FormRow { label: "Description", required: false, field: &self.description },
            FormRow { label: "Features", required: false, field: &self.features },
            FormRow { label: "Last maintenance", required: false, field: &self.last_maintenance },
        ]
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut dyn FormField> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.antenna_type),
            2 => Some(&mut self.frequency),
            3 => Some(&mut self.location),
            4 => Some(&mut self.status),
            5 => Some(&mut self.description),
            6 => Some(&mut self.features),
            7 => Some(&mut self.last_maintenance),
            _ => None,
        }
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, index: usize) {
        self.focus = index;
    }

    fn submit(&self) -> FormEvent {
        match self.draft() {
            Ok(draft) => FormEvent::Dispatch(match self.editing {
                Some(id) => Action::UpdateAntenna { id, draft },
                None => Action::CreateAntenna(draft),
            }),
            Err(error) => field_problem(error),
        }
    }
}

impl EventHandler for AntennaForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        handle_form_event(self, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Level;
    use crate::test_support::seeded_antennas;
    use crate::tui::components::form::tests::render_text;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
    }

    fn type_str(form: &mut AntennaForm, text: &str) {
        for c in text.chars() {
            form.handle_event(&TuiEvent::InputChar(c));
        }
    }

    fn next(form: &mut AntennaForm) {
        form.handle_event(&TuiEvent::NextField);
    }

    #[test]
    fn test_blank_form_defaults() {
        let form = AntennaForm::create(today());
        let draft = form.draft().unwrap();
        assert_eq!(draft, AntennaDraft::blank(today()));
        assert_eq!(form.title(), "Add New Antenna");
    }

    #[test]
    fn test_fill_in_and_submit_creates() {
        let mut form = AntennaForm::create(today());
        type_str(&mut form, "Gamma");
        next(&mut form);
        form.handle_event(&TuiEvent::CursorLeft); // wraps to the last type
        next(&mut form);
        type_str(&mut form, "1-40 GHz");
        next(&mut form);
        form.handle_event(&TuiEvent::CursorRight);
        next(&mut form);
        next(&mut form);
        next(&mut form);
        type_str(&mut form, "Horn, , Turntable ");

        let Some(FormEvent::Dispatch(Action::CreateAntenna(draft))) =
            form.handle_event(&TuiEvent::Submit)
        else {
            panic!("expected a create action");
        };
        assert_eq!(draft.name, "Gamma");
        assert_eq!(draft.antenna_type, Some(AntennaType::Microwave));
        assert_eq!(draft.frequency, "1-40 GHz");
        assert_eq!(draft.location, Some(Location::North));
        assert_eq!(draft.features, vec!["Horn", "Turntable"]);
        assert_eq!(draft.last_maintenance, today());
    }

    #[test]
    fn test_edit_prefills_and_updates() {
        let repo = seeded_antennas();
        let antenna = repo.get(2).unwrap();
        let mut form = AntennaForm::edit(antenna);
        assert_eq!(form.title(), "Edit Antenna");
        assert_eq!(form.draft().unwrap(), antenna.to_draft());

        form.set_focus(4);
        form.handle_event(&TuiEvent::CursorLeft);
        let Some(FormEvent::Dispatch(Action::UpdateAntenna { id, draft })) =
            form.handle_event(&TuiEvent::Submit)
        else {
            panic!("expected an update action");
        };
        assert_eq!(id, 2);
        assert_eq!(draft.status, AntennaStatus::Available);
    }

    #[test]
    fn test_bad_date_raises_notification() {
        let mut form = AntennaForm::create(today());
        form.set_focus(7);
        form.handle_event(&TuiEvent::Backspace);
        let Some(FormEvent::Dispatch(Action::Notify { level, message, .. })) =
            form.handle_event(&TuiEvent::Submit)
        else {
            panic!("expected a notification");
        };
        assert_eq!(level, Level::Error);
        assert!(message.contains("last maintenance is not valid"));
    }

    #[test]
    fn test_render_shows_placeholders() {
        let form = AntennaForm::create(today());
        let text = render_text(&form, 90, 20);
        assert!(text.contains("Add New Antenna"));
        assert!(text.contains("Select type"));
        assert!(text.contains("Select location"));
        assert!(text.contains("2024-07-01"));
    }
}
