//! Built-in starter content shown before the user has saved anything.
//!
//! Two templates and two filled-in examples. Ids are fixed so the same
//! starter matrix is recognised across runs.

use crate::domain::foundation::{CriterionId, Icon, MatrixId, OptionId, Timestamp};

use super::{CellGrid, Criterion, DecisionMatrix, MatrixOption};

/// Returns the starter matrices in display order.
pub fn starter_matrices() -> Vec<DecisionMatrix> {
    vec![
        travel_template(),
        car_purchase(),
        job_opportunities(),
        house_template(),
    ]
}

fn date(year: i32, month: u32, day: u32) -> Timestamp {
    Timestamp::from_ymd(year, month, day).unwrap_or_else(Timestamp::now)
}

fn criterion(id: u128, name: &str, weight: i32, inverted: bool) -> Criterion {
    Criterion {
        id: CriterionId::from_u128(id),
        name: name.to_string(),
        weight,
        inverted,
    }
}

fn option(id: u128, name: &str) -> MatrixOption {
    MatrixOption {
        id: OptionId::from_u128(id),
        name: name.to_string(),
    }
}

/// Builds a cell grid from `(option, [(criterion, value)])` rows.
fn grid(rows: Vec<(&str, Vec<(&str, i32)>)>) -> CellGrid {
    rows.into_iter()
        .map(|(option, cells)| {
            let row = cells
                .into_iter()
                .map(|(criterion, value)| (criterion.to_string(), value))
                .collect();
            (option.to_string(), row)
        })
        .collect()
}

fn travel_template() -> DecisionMatrix {
    DecisionMatrix::reconstitute(
        MatrixId::from_u128(0x1001),
        "Travel Destination Template",
        Some("Compare travel destinations based on key criteria".to_string()),
        Icon::Plane,
        vec![
            criterion(0x1101, "Cost", 5, true),
            criterion(0x1102, "Weather", 3, false),
            criterion(0x1103, "Culture", 2, false),
            criterion(0x1104, "Safety", 5, false),
            criterion(0x1105, "Language Barrier", 2, true),
        ],
        Vec::new(),
        CellGrid::new(),
        true,
        date(2024, 1, 15),
        date(2024, 1, 15),
    )
}

fn car_purchase() -> DecisionMatrix {
    DecisionMatrix::reconstitute(
        MatrixId::from_u128(0x2001),
        "Car Purchase Decision",
        Some("Comparing different car options".to_string()),
        Icon::Car,
        vec![
            criterion(0x2101, "Price", 5, true),
            criterion(0x2102, "Reliability", 5, false),
            criterion(0x2103, "Fuel Efficiency", 4, false),
            criterion(0x2104, "Comfort", 3, false),
            criterion(0x2105, "Maintenance Cost", 4, true),
        ],
        vec![
            option(0x2201, "Honda Civic"),
            option(0x2202, "Toyota Camry"),
            option(0x2203, "BMW 3 Series"),
        ],
        grid(vec![
            (
                "Honda Civic",
                vec![
                    ("Price", 2),
                    ("Reliability", 5),
                    ("Fuel Efficiency", 5),
                    ("Comfort", 3),
                    ("Maintenance Cost", 2),
                ],
            ),
            (
                "Toyota Camry",
                vec![
                    ("Price", 3),
                    ("Reliability", 5),
                    ("Fuel Efficiency", 4),
                    ("Comfort", 4),
                    ("Maintenance Cost", 2),
                ],
            ),
            (
                "BMW 3 Series",
                vec![
                    ("Price", 5),
                    ("Reliability", 3),
                    ("Fuel Efficiency", 2),
                    ("Comfort", 5),
                    ("Maintenance Cost", 5),
                ],
            ),
        ]),
        false,
        date(2024, 1, 20),
        date(2024, 1, 25),
    )
}

fn job_opportunities() -> DecisionMatrix {
    DecisionMatrix::reconstitute(
        MatrixId::from_u128(0x3001),
        "Job Opportunities",
        Some("Evaluating different job offers".to_string()),
        Icon::Briefcase,
        vec![
            criterion(0x3101, "Salary", 4, false),
            criterion(0x3102, "Work-Life Balance", 5, false),
            criterion(0x3103, "Growth Potential", 4, false),
            criterion(0x3104, "Commute Time", 3, true),
            criterion(0x3105, "Stress Level", 5, true),
        ],
        vec![
            option(0x3201, "Tech Startup"),
            option(0x3202, "Big Corporation"),
            option(0x3203, "Remote Company"),
        ],
        grid(vec![
            (
                "Tech Startup",
                vec![
                    ("Salary", 3),
                    ("Work-Life Balance", 2),
                    ("Growth Potential", 5),
                    ("Commute Time", 3),
                    ("Stress Level", 4),
                ],
            ),
            (
                "Big Corporation",
                vec![
                    ("Salary", 4),
                    ("Work-Life Balance", 3),
                    ("Growth Potential", 2),
                    ("Commute Time", 4),
                    ("Stress Level", 2),
                ],
            ),
            (
                "Remote Company",
                vec![
                    ("Salary", 4),
                    ("Work-Life Balance", 5),
                    ("Growth Potential", 3),
                    ("Commute Time", 1),
                    ("Stress Level", 2),
                ],
            ),
        ]),
        false,
        date(2024, 1, 18),
        date(2024, 1, 22),
    )
}

fn house_template() -> DecisionMatrix {
    DecisionMatrix::reconstitute(
        MatrixId::from_u128(0x4001),
        "House Buying Template",
        Some("Evaluate potential homes".to_string()),
        Icon::Home,
        vec![
            criterion(0x4101, "Price", 5, true),
            criterion(0x4102, "Location", 4, false),
            criterion(0x4103, "Size", 3, false),
            criterion(0x4104, "Condition", 4, false),
            criterion(0x4105, "School District", 3, false),
            criterion(0x4106, "Commute to Work", 4, true),
        ],
        Vec::new(),
        CellGrid::new(),
        true,
        date(2024, 1, 10),
        date(2024, 1, 10),
    )
}
