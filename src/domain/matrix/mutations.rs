//! Structural and value edits on a decision matrix.
//!
//! Every operation borrows the matrix and returns a new one. Unknown ids and
//! name collisions return an unchanged copy instead of an error; callers that
//! need feedback check with [`DecisionMatrix::criterion`] and friends first.
//! Each effective edit bumps `last_accessed`.

use crate::domain::foundation::{CriterionId, Icon, MatrixId, OptionId, Timestamp};

use super::aggregate::{zero_grid, Criterion, DecisionMatrix, MatrixOption, NewCriterion, NewOption};

impl DecisionMatrix {
    /// Returns a copy with `last_accessed` set to now.
    pub fn touch(&self) -> Self {
        Self {
            last_accessed: Timestamp::now(),
            ..self.clone()
        }
    }

    /// Stores a raw value at (option, criterion). The value is not range-checked.
    pub fn set_value(&self, option_name: &str, criterion_name: &str, value: i32) -> Self {
        let mut next = self.touch();
        next.data
            .entry(option_name.to_string())
            .or_default()
            .insert(criterion_name.to_string(), value);
        next
    }

    /// Appends a criterion and gives every existing option a zero cell for it.
    pub fn add_criterion(&self, criterion: NewCriterion) -> Self {
        let mut next = self.touch();
        let criterion = Criterion {
            id: CriterionId::new(),
            name: criterion.name,
            weight: criterion.weight,
            inverted: criterion.inverted,
        };

        for option in &next.options {
            next.data
                .entry(option.name.clone())
                .or_default()
                .insert(criterion.name.clone(), 0);
        }

        next.criteria.push(criterion);
        next
    }

    /// Appends an option with a zero cell for every existing criterion.
    pub fn add_option(&self, option: NewOption) -> Self {
        let mut next = self.touch();
        let option = MatrixOption {
            id: OptionId::new(),
            name: option.name,
        };

        let row = next.data.entry(option.name.clone()).or_default();
        for criterion in &next.criteria {
            row.insert(criterion.name.clone(), 0);
        }

        next.options.push(option);
        next
    }

    /// Renames a criterion and migrates its cells to the new name.
    pub fn rename_criterion(&self, id: CriterionId, new_name: &str) -> Self {
        let Some(old_name) = self.criterion(id).map(|c| c.name.clone()) else {
            return self.clone();
        };
        let collides = self
            .criteria
            .iter()
            .any(|c| c.id != id && c.name == new_name);
        if collides {
            return self.clone();
        }

        let mut next = self.touch();
        for criterion in next.criteria.iter_mut().filter(|c| c.id == id) {
            criterion.name = new_name.to_string();
        }
        for row in next.data.values_mut() {
            if let Some(value) = row.remove(&old_name) {
                row.insert(new_name.to_string(), value);
            }
        }
        next
    }

    /// Renames an option and migrates its cells to the new name.
    pub fn rename_option(&self, id: OptionId, new_name: &str) -> Self {
        let Some(old_name) = self.option(id).map(|o| o.name.clone()) else {
            return self.clone();
        };
        let collides = self
            .options
            .iter()
            .any(|o| o.id != id && o.name == new_name);
        if collides {
            return self.clone();
        }

        let mut next = self.touch();
        for option in next.options.iter_mut().filter(|o| o.id == id) {
            option.name = new_name.to_string();
        }
        if let Some(row) = next.data.remove(&old_name) {
            next.data.insert(new_name.to_string(), row);
        }
        next
    }

    /// Replaces a criterion's weight. Bounds are not enforced here.
    pub fn update_weight(&self, id: CriterionId, new_weight: i32) -> Self {
        if self.criterion(id).is_none() {
            return self.clone();
        }
        let mut next = self.touch();
        for criterion in next.criteria.iter_mut().filter(|c| c.id == id) {
            criterion.weight = new_weight;
        }
        next
    }

    /// Flips whether lower values are better for a criterion.
    pub fn toggle_inverted(&self, id: CriterionId) -> Self {
        if self.criterion(id).is_none() {
            return self.clone();
        }
        let mut next = self.touch();
        for criterion in next.criteria.iter_mut().filter(|c| c.id == id) {
            criterion.inverted = !criterion.inverted;
        }
        next
    }

    /// Removes a criterion and every cell keyed by its name.
    pub fn delete_criterion(&self, id: CriterionId) -> Self {
        let Some(name) = self.criterion(id).map(|c| c.name.clone()) else {
            return self.clone();
        };

        let mut next = self.touch();
        next.criteria.retain(|c| c.id != id);
        for row in next.data.values_mut() {
            row.remove(&name);
        }
        next
    }

    /// Removes an option and its column of cells.
    pub fn delete_option(&self, id: OptionId) -> Self {
        let Some(name) = self.option(id).map(|o| o.name.clone()) else {
            return self.clone();
        };

        let mut next = self.touch();
        next.options.retain(|o| o.id != id);
        next.data.remove(&name);
        next
    }

    /// Sets every cell back to 0, keeping rows, columns and weights.
    pub fn reset_values(&self) -> Self {
        let mut next = self.touch();
        next.data = zero_grid(&next.options, &next.criteria);
        next
    }

    /// Creates a fresh, non-template matrix from this one's structure.
    ///
    /// Criteria are copied as-is (same ids); options and cells start empty.
    pub fn clone_as_instance(&self, new_title: impl Into<String>) -> Self {
        let now = Timestamp::now();
        DecisionMatrix::reconstitute(
            MatrixId::new(),
            new_title,
            self.description.clone(),
            self.icon,
            self.criteria.clone(),
            Vec::new(),
            Default::default(),
            false,
            now,
            now,
        )
    }

    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.touch()
        }
    }

    pub fn with_description(&self, description: Option<String>) -> Self {
        Self {
            description,
            ..self.touch()
        }
    }

    pub fn with_icon(&self, icon: Icon) -> Self {
        Self {
            icon,
            ..self.touch()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::NewMatrix;
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    fn sample() -> DecisionMatrix {
        NewMatrix::titled("Travel")
            .criterion("Cost", 5, true)
            .criterion("Weather", 3, false)
            .option("Greece")
            .option("Italy")
            .build()
            .set_value("Greece", "Cost", 2)
            .set_value("Greece", "Weather", 5)
            .set_value("Italy", "Cost", 4)
            .set_value("Italy", "Weather", 4)
    }

    fn criterion_id(matrix: &DecisionMatrix, name: &str) -> CriterionId {
        matrix.criterion_by_name(name).unwrap().id
    }

    fn option_id(matrix: &DecisionMatrix, name: &str) -> OptionId {
        matrix.option_by_name(name).unwrap().id
    }

    /// `sample()` with both timestamps pushed back to 2024.
    fn aged() -> DecisionMatrix {
        let m = sample();
        let old = Timestamp::from_ymd(2024, 1, 1).unwrap();
        DecisionMatrix::reconstitute(
            m.id(),
            m.title(),
            m.description().map(str::to_string),
            m.icon(),
            m.criteria().to_vec(),
            m.options().to_vec(),
            m.data().clone(),
            m.is_template(),
            old,
            old,
        )
    }

    #[test]
    fn every_effective_mutation_bumps_last_accessed() {
        let before = aged();
        let cost = criterion_id(&before, "Cost");
        let greece = option_id(&before, "Greece");

        let cases: Vec<(&str, DecisionMatrix)> = vec![
            ("add_criterion", before.add_criterion(NewCriterion::new("Food", 2, false))),
            ("add_option", before.add_option(NewOption::new("Spain"))),
            ("rename_criterion", before.rename_criterion(cost, "Budget")),
            ("rename_option", before.rename_option(greece, "Crete")),
            ("update_weight", before.update_weight(cost, 1)),
            ("toggle_inverted", before.toggle_inverted(cost)),
            ("delete_criterion", before.delete_criterion(cost)),
            ("delete_option", before.delete_option(greece)),
            ("reset_values", before.reset_values()),
            ("with_title", before.with_title("Holidays")),
            ("with_description", before.with_description(Some("Summer".to_string()))),
            ("with_icon", before.with_icon(Icon::MapPin)),
        ];

        for (name, after) in cases {
            assert!(
                after.last_accessed().is_after(&before.last_accessed()),
                "{name} did not bump last_accessed"
            );
            assert_eq!(after.created_at(), before.created_at(), "{name} changed created_at");
        }
    }

    // set_value

    #[test]
    fn set_value_stores_value_without_touching_input() {
        let before = sample();
        let after = before.set_value("Italy", "Weather", 1);

        assert_eq!(after.value("Italy", "Weather"), Some(1));
        assert_eq!(before.value("Italy", "Weather"), Some(4));
    }

    #[test]
    fn set_value_bumps_last_accessed() {
        let before = sample();
        sleep(Duration::from_millis(5));
        let after = before.set_value("Italy", "Weather", 1);
        assert!(after.last_accessed().is_after(&before.last_accessed()));
        assert_eq!(after.created_at(), before.created_at());
    }

    #[test]
    fn set_value_does_not_range_check() {
        let after = sample().set_value("Italy", "Weather", 9);
        assert_eq!(after.value("Italy", "Weather"), Some(9));
    }

    // add_criterion / add_option

    #[test]
    fn add_criterion_keeps_grid_dense() {
        let after = sample().add_criterion(NewCriterion::new("Food", 4, false));

        assert_eq!(after.criteria().len(), 3);
        for option in after.options() {
            for criterion in after.criteria() {
                assert!(after.value(&option.name, &criterion.name).is_some());
            }
        }
        assert_eq!(after.value("Greece", "Food"), Some(0));
        assert_eq!(after.value("Greece", "Cost"), Some(2));
    }

    #[test]
    fn add_option_keeps_grid_dense() {
        let after = sample().add_option(NewOption::new("Spain"));

        assert_eq!(after.options().len(), 3);
        assert_eq!(after.value("Spain", "Cost"), Some(0));
        assert_eq!(after.value("Spain", "Weather"), Some(0));
    }

    #[test]
    fn added_entities_get_fresh_ids() {
        let base = sample();
        let after = base.add_criterion(NewCriterion::new("Food", 4, false));
        let food = after.criterion_by_name("Food").unwrap();
        assert!(base.criterion(food.id).is_none());
    }

    // rename

    #[test]
    fn rename_criterion_migrates_cells() {
        let before = sample();
        let after = before.rename_criterion(criterion_id(&before, "Cost"), "Price");

        assert!(after.criterion_by_name("Cost").is_none());
        assert_eq!(after.value("Greece", "Price"), Some(2));
        assert_eq!(after.value("Italy", "Price"), Some(4));
        assert_eq!(after.value("Greece", "Cost"), None);
    }

    #[test]
    fn rename_criterion_round_trip_restores_cells() {
        let before = sample();
        let id = criterion_id(&before, "Cost");
        let after = before.rename_criterion(id, "Price").rename_criterion(id, "Cost");

        assert_eq!(after.data(), before.data());
        assert_eq!(after.criteria(), before.criteria());
    }

    #[test]
    fn rename_criterion_collision_is_noop() {
        let before = sample();
        let after = before.rename_criterion(criterion_id(&before, "Cost"), "Weather");
        assert_eq!(after, before);
    }

    #[test]
    fn rename_unknown_criterion_is_noop() {
        let before = sample();
        assert_eq!(before.rename_criterion(CriterionId::new(), "X"), before);
    }

    #[test]
    fn rename_option_migrates_cells() {
        let before = sample();
        let after = before.rename_option(option_id(&before, "Italy"), "Portugal");

        assert_eq!(after.value("Portugal", "Cost"), Some(4));
        assert_eq!(after.value("Italy", "Cost"), None);
        assert_eq!(after.options()[1].name, "Portugal");
    }

    #[test]
    fn rename_option_collision_is_noop() {
        let before = sample();
        let after = before.rename_option(option_id(&before, "Italy"), "Greece");
        assert_eq!(after, before);
    }

    #[test]
    fn rename_option_round_trip_restores_cells() {
        let before = sample();
        let id = option_id(&before, "Italy");
        let after = before.rename_option(id, "Rome").rename_option(id, "Italy");
        assert_eq!(after.data(), before.data());
    }

    // weight / inversion

    #[test]
    fn update_weight_replaces_only_target() {
        let before = sample();
        let after = before.update_weight(criterion_id(&before, "Weather"), 1);

        assert_eq!(after.criterion_by_name("Weather").unwrap().weight, 1);
        assert_eq!(after.criterion_by_name("Cost").unwrap().weight, 5);
    }

    #[test]
    fn update_weight_does_not_validate_bounds() {
        let before = sample();
        let after = before.update_weight(criterion_id(&before, "Weather"), 12);
        assert_eq!(after.criterion_by_name("Weather").unwrap().weight, 12);
    }

    #[test]
    fn toggle_inverted_flips_flag() {
        let before = sample();
        let id = criterion_id(&before, "Cost");
        let once = before.toggle_inverted(id);
        let twice = once.toggle_inverted(id);

        assert!(!once.criterion(id).unwrap().inverted);
        assert!(twice.criterion(id).unwrap().inverted);
    }

    #[test]
    fn unknown_ids_leave_matrix_unchanged() {
        let before = sample();
        assert_eq!(before.update_weight(CriterionId::new(), 2), before);
        assert_eq!(before.toggle_inverted(CriterionId::new()), before);
        assert_eq!(before.delete_criterion(CriterionId::new()), before);
        assert_eq!(before.delete_option(OptionId::new()), before);
        assert_eq!(before.rename_option(OptionId::new(), "X"), before);
    }

    // delete

    #[test]
    fn delete_criterion_purges_cells() {
        let before = sample();
        let after = before.delete_criterion(criterion_id(&before, "Cost"));

        assert_eq!(after.criteria().len(), 1);
        assert_eq!(after.value("Greece", "Cost"), None);
        assert_eq!(after.value("Greece", "Weather"), Some(5));
    }

    #[test]
    fn delete_option_purges_column() {
        let before = sample();
        let after = before.delete_option(option_id(&before, "Greece"));

        assert_eq!(after.options().len(), 1);
        assert!(!after.data().contains_key("Greece"));
        assert_eq!(after.value("Italy", "Cost"), Some(4));
    }

    // reset

    #[test]
    fn reset_values_zeroes_cells_and_keeps_structure() {
        let before = sample();
        let after = before.reset_values();

        assert_eq!(after.criteria(), before.criteria());
        assert_eq!(after.options(), before.options());
        for option in after.options() {
            for criterion in after.criteria() {
                assert_eq!(after.value(&option.name, &criterion.name), Some(0));
            }
        }
    }

    // templates

    #[test]
    fn clone_as_instance_copies_criteria_and_starts_empty() {
        let template = NewMatrix::titled("Travel Template")
            .description("Trips")
            .icon(Icon::Plane)
            .criterion("Cost", 5, true)
            .template()
            .build();

        let instance = template.clone_as_instance("Summer 2026");

        assert_ne!(instance.id(), template.id());
        assert_eq!(instance.title(), "Summer 2026");
        assert_eq!(instance.description(), Some("Trips"));
        assert_eq!(instance.icon(), Icon::Plane);
        assert_eq!(instance.criteria(), template.criteria());
        assert!(instance.options().is_empty());
        assert!(instance.data().is_empty());
        assert!(!instance.is_template());
    }

    // metadata

    #[test]
    fn metadata_edits_replace_fields() {
        let after = sample()
            .with_title("Holidays")
            .with_description(Some("Where to go".to_string()))
            .with_icon(Icon::MapPin);

        assert_eq!(after.title(), "Holidays");
        assert_eq!(after.description(), Some("Where to go"));
        assert_eq!(after.icon(), Icon::MapPin);
    }
}
