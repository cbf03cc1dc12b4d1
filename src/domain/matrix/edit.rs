//! Typed edit commands for a decision matrix.
//!
//! `MatrixEdit` names every supported change explicitly, one variant per
//! field or structural operation, so a presentation layer can queue or log
//! edits without a generic "set field" escape hatch.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CriterionId, Icon, OptionId};

use super::{DecisionMatrix, NewCriterion, NewOption};

/// A single edit to apply to a matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatrixEdit {
    SetValue {
        option: String,
        criterion: String,
        value: i32,
    },
    AddCriterion {
        name: String,
        weight: i32,
        inverted: bool,
    },
    AddOption {
        name: String,
    },
    RenameCriterion {
        id: CriterionId,
        name: String,
    },
    RenameOption {
        id: OptionId,
        name: String,
    },
    UpdateWeight {
        id: CriterionId,
        weight: i32,
    },
    ToggleInverted {
        id: CriterionId,
    },
    DeleteCriterion {
        id: CriterionId,
    },
    DeleteOption {
        id: OptionId,
    },
    ResetValues,
    Retitle {
        title: String,
    },
    Redescribe {
        description: Option<String>,
    },
    ChangeIcon {
        icon: Icon,
    },
}

impl MatrixEdit {
    /// Short, stable name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            MatrixEdit::SetValue { .. } => "set_value",
            MatrixEdit::AddCriterion { .. } => "add_criterion",
            MatrixEdit::AddOption { .. } => "add_option",
            MatrixEdit::RenameCriterion { .. } => "rename_criterion",
            MatrixEdit::RenameOption { .. } => "rename_option",
            MatrixEdit::UpdateWeight { .. } => "update_weight",
            MatrixEdit::ToggleInverted { .. } => "toggle_inverted",
            MatrixEdit::DeleteCriterion { .. } => "delete_criterion",
            MatrixEdit::DeleteOption { .. } => "delete_option",
            MatrixEdit::ResetValues => "reset_values",
            MatrixEdit::Retitle { .. } => "retitle",
            MatrixEdit::Redescribe { .. } => "redescribe",
            MatrixEdit::ChangeIcon { .. } => "change_icon",
        }
    }
}

impl DecisionMatrix {
    /// Applies an edit, returning the edited matrix.
    pub fn apply(&self, edit: &MatrixEdit) -> Self {
        match edit {
            MatrixEdit::SetValue {
                option,
                criterion,
                value,
            } => self.set_value(option, criterion, *value),
            MatrixEdit::AddCriterion {
                name,
                weight,
                inverted,
            } => self.add_criterion(NewCriterion::new(name.clone(), *weight, *inverted)),
            MatrixEdit::AddOption { name } => self.add_option(NewOption::new(name.clone())),
            MatrixEdit::RenameCriterion { id, name } => self.rename_criterion(*id, name),
            MatrixEdit::RenameOption { id, name } => self.rename_option(*id, name),
            MatrixEdit::UpdateWeight { id, weight } => self.update_weight(*id, *weight),
            MatrixEdit::ToggleInverted { id } => self.toggle_inverted(*id),
            MatrixEdit::DeleteCriterion { id } => self.delete_criterion(*id),
            MatrixEdit::DeleteOption { id } => self.delete_option(*id),
            MatrixEdit::ResetValues => self.reset_values(),
            MatrixEdit::Retitle { title } => self.with_title(title.clone()),
            MatrixEdit::Redescribe { description } => self.with_description(description.clone()),
            MatrixEdit::ChangeIcon { icon } => self.with_icon(*icon),
        }
    }
}
