//! Integration tests for the in-memory matrix workflow.
//!
//! Covers the path a user takes through the library:
//! 1. Start from the starter library
//! 2. Instantiate a template and fill it in through typed edits
//! 3. Score, rank and explain the result

use decision_matrix::domain::analysis::{ScoreCalculator, WinType, WinnerAnalyzer};
use decision_matrix::domain::library::{MatrixLibrary, DEFAULT_RECENT_LIMIT};
use decision_matrix::domain::matrix::{DecisionMatrix, MatrixEdit};

// =============================================================================
// Helpers
// =============================================================================

fn starter_by_title(library: &MatrixLibrary, title: &str) -> DecisionMatrix {
    library
        .matrices()
        .iter()
        .find(|m| m.title() == title)
        .cloned()
        .unwrap_or_else(|| panic!("starter matrix '{}' missing", title))
}

fn set(option: &str, criterion: &str, value: i32) -> MatrixEdit {
    MatrixEdit::SetValue {
        option: option.to_string(),
        criterion: criterion.to_string(),
        value,
    }
}

// =============================================================================
// Starter content
// =============================================================================

#[test]
fn car_purchase_is_a_close_win() {
    let library = MatrixLibrary::starter();
    let car = starter_by_title(&library, "Car Purchase Decision");

    let scores = ScoreCalculator::compute_scores(&car);
    assert_eq!(scores["Honda Civic"], 90);
    assert_eq!(scores["Toyota Camry"], 84);
    assert_eq!(scores["BMW 3 Series"], 47);

    let analysis = WinnerAnalyzer::analyze(&car).unwrap();
    assert_eq!(analysis.win_type, WinType::Close);
    assert_eq!(
        analysis.explanation,
        "Honda Civic narrowly beats Toyota Camry 90.0 to 84.0 (7.1% margin) with the decisive factor being Price, where Honda Civic contributed 5.0 more points than Toyota Camry."
    );
}

#[test]
fn job_opportunities_is_a_dominant_win() {
    let library = MatrixLibrary::starter();
    let job = starter_by_title(&library, "Job Opportunities");

    let analysis = WinnerAnalyzer::analyze(&job).unwrap();

    assert_eq!(analysis.winner, "Remote Company");
    assert_eq!(analysis.runner_up, "Big Corporation");
    assert_eq!((analysis.winner_score, analysis.runner_up_score), (88, 65));
    assert_eq!(analysis.win_type, WinType::Dominant);
    assert_eq!(
        analysis.explanation,
        "Remote Company achieves a dominant 88.0-65.0 victory by outperforming Big Corporation in every area, with key advantages in Work-Life Balance (+10.0), Commute Time (+9.0), Growth Potential (+4.0) points."
    );
}

#[test]
fn templates_have_nothing_to_analyze() {
    let library = MatrixLibrary::starter();
    for template in library.templates() {
        assert!(WinnerAnalyzer::analyze(template).is_none());
    }
}

// =============================================================================
// Template to decision
// =============================================================================

#[test]
fn template_to_decision() {
    let library = MatrixLibrary::starter();
    let template = starter_by_title(&library, "Travel Destination Template");

    let (library, id) = library.instantiate_template(&template.id(), "Spring break");
    let id = id.unwrap();

    let edits = [
        MatrixEdit::AddOption {
            name: "Lisbon".to_string(),
        },
        MatrixEdit::AddOption {
            name: "Reykjavik".to_string(),
        },
        set("Lisbon", "Cost", 2),
        set("Lisbon", "Weather", 5),
        set("Lisbon", "Safety", 4),
        set("Reykjavik", "Cost", 5),
        set("Reykjavik", "Weather", 1),
        set("Reykjavik", "Safety", 5),
    ];
    let library = edits
        .iter()
        .fold(library, |lib, edit| lib.with_edit(&id, edit));

    let matrix = library.get(&id).unwrap();
    assert_eq!(matrix.options().len(), 2);
    // Unset cells stay 0 and are skipped.
    assert_eq!(matrix.value("Lisbon", "Culture"), Some(0));

    // Lisbon: (6-2)*5 + 5*3 + 4*5 = 55; Reykjavik: 1*5 + 1*3 + 5*5 = 33
    assert_eq!(ScoreCalculator::winners(matrix), vec!["Lisbon".to_string()]);
    let analysis = WinnerAnalyzer::analyze(matrix).unwrap();
    assert_eq!((analysis.winner_score, analysis.runner_up_score), (55, 33));

    // The template itself is untouched.
    assert!(library.get(&template.id()).unwrap().options().is_empty());
    assert_eq!(library.recent(DEFAULT_RECENT_LIMIT)[0].id(), id);
}

#[test]
fn rename_keeps_scores() {
    let library = MatrixLibrary::starter();
    let car = starter_by_title(&library, "Car Purchase Decision");
    let before = ScoreCalculator::compute_scores(&car);

    let price = car.criterion_by_name("Price").unwrap().id;
    let civic = car.option_by_name("Honda Civic").unwrap().id;
    let library = library
        .with_edit(
            &car.id(),
            &MatrixEdit::RenameCriterion {
                id: price,
                name: "Sticker Price".to_string(),
            },
        )
        .with_edit(
            &car.id(),
            &MatrixEdit::RenameOption {
                id: civic,
                name: "Civic".to_string(),
            },
        );

    let after = ScoreCalculator::compute_scores(library.get(&car.id()).unwrap());
    assert_eq!(after["Civic"], before["Honda Civic"]);
    assert_eq!(after["Toyota Camry"], before["Toyota Camry"]);
}

#[test]
fn reset_then_delete() {
    let library = MatrixLibrary::starter();
    let job = starter_by_title(&library, "Job Opportunities");

    let library = library.with_edit(&job.id(), &MatrixEdit::ResetValues);
    let reset = library.get(&job.id()).unwrap();
    assert!(ScoreCalculator::compute_scores(reset).values().all(|&s| s == 0));
    assert!(WinnerAnalyzer::analyze(reset).is_none());
    assert_eq!(reset.criteria().len(), 5);

    let library = library.without(&job.id());
    assert!(library.get(&job.id()).is_none());
    assert_eq!(library.len(), 3);
}
