//! Reference engines compared against their Carnot limit.

use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

use super::{CarnotError, compute_efficiency};

/// Header line of [`comparison_csv`].
pub const COMPARISON_CSV_HEADER: &str = "engine_name,actual_efficiency,carnot_limit_efficiency";

/// A real engine whose reservoirs and measured efficiency are well known.
struct ReferenceEngine {
    name: &'static str,
    hot_celsius: f64,
    cold_celsius: f64,
    actual_efficiency: f64,
}

const REFERENCE_ENGINES: [ReferenceEngine; 3] = [
    ReferenceEngine {
        name: "Car Engine (Gasoline)",
        hot_celsius: 600.0,
        cold_celsius: 60.0,
        actual_efficiency: 0.25,
    },
    ReferenceEngine {
        name: "Power Plant (Steam)",
        hot_celsius: 700.0,
        cold_celsius: 40.0,
        actual_efficiency: 0.35,
    },
    ReferenceEngine {
        name: "Diesel Engine",
        hot_celsius: 650.0,
        cold_celsius: 80.0,
        actual_efficiency: 0.30,
    },
];

impl ReferenceEngine {
    fn row(&self) -> Result<EngineComparisonRow, CarnotError> {
        let limit = compute_efficiency(
            ThermodynamicTemperature::new::<degree_celsius>(self.hot_celsius),
            ThermodynamicTemperature::new::<degree_celsius>(self.cold_celsius),
        )?;

        Ok(EngineComparisonRow {
            engine_name: self.name.to_owned(),
            actual_efficiency: Ratio::new::<ratio>(self.actual_efficiency),
            carnot_limit_efficiency: limit.efficiency.into_inner(),
        })
    }
}

/// One line of the read-only engine comparison table.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineComparisonRow {
    pub engine_name: String,
    pub actual_efficiency: Ratio,
    pub carnot_limit_efficiency: Ratio,
}

impl EngineComparisonRow {
    /// Returns how far the engine falls short of its Carnot limit.
    ///
    /// The gap is lost to friction, heat leaks and other irreversibilities.
    #[must_use]
    pub fn efficiency_gap(&self) -> Ratio {
        self.carnot_limit_efficiency - self.actual_efficiency
    }
}

/// Returns the reference engine table.
///
/// # Errors
///
/// Returns a [`CarnotError`] if a reference entry has invalid reservoirs.
pub fn comparison_table() -> Result<Vec<EngineComparisonRow>, CarnotError> {
    REFERENCE_ENGINES.iter().map(ReferenceEngine::row).collect()
}

/// Serializes comparison rows as CSV text with a header line.
///
/// Efficiencies are written as plain fractions. Names containing a comma,
/// quote or line break are quoted.
#[must_use]
pub fn comparison_csv(rows: &[EngineComparisonRow]) -> String {
    let mut csv = String::from(COMPARISON_CSV_HEADER);
    csv.push('\n');

    for row in rows {
        let line = format!(
            "{},{},{}\n",
            csv_field(&row.engine_name),
            row.actual_efficiency.get::<ratio>(),
            row.carnot_limit_efficiency.get::<ratio>(),
        );
        csv.push_str(&line);
    }

    csv
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn reference_table() {
        let rows = comparison_table().unwrap();
        let names: Vec<&str> = rows.iter().map(|row| row.engine_name.as_str()).collect();
        assert_eq!(
            names,
            ["Car Engine (Gasoline)", "Power Plant (Steam)", "Diesel Engine"]
        );

        let car = &rows[0];
        assert_relative_eq!(car.actual_efficiency.get::<ratio>(), 0.25);
        assert_relative_eq!(
            car.carnot_limit_efficiency.get::<ratio>(),
            1.0 - 333.15 / 873.15,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            car.efficiency_gap().get::<ratio>(),
            1.0 - 333.15 / 873.15 - 0.25,
            epsilon = 1e-12
        );
    }

    #[test]
    fn every_engine_falls_short_of_its_limit() {
        for row in comparison_table().unwrap() {
            assert!(
                row.efficiency_gap().get::<ratio>() > 0.0,
                "{} beats Carnot",
                row.engine_name
            );
        }
    }

    #[test]
    fn csv_export() {
        let rows = comparison_table().unwrap();
        let csv = comparison_csv(&rows);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], COMPARISON_CSV_HEADER);
        assert!(lines[1].starts_with("Car Engine (Gasoline),0.25,0.618"));
        assert!(lines[3].starts_with("Diesel Engine,0.3,0.617"));
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn csv_quotes_awkward_names() {
        let rows = [EngineComparisonRow {
            engine_name: "Stirling, \"beta\"".to_owned(),
            actual_efficiency: Ratio::new::<ratio>(0.5),
            carnot_limit_efficiency: Ratio::new::<ratio>(0.75),
        }];

        assert_eq!(
            comparison_csv(&rows),
            "engine_name,actual_efficiency,carnot_limit_efficiency\n\"Stirling, \"\"beta\"\"\",0.5,0.75\n"
        );
    }

    #[test]
    fn csv_of_no_rows_is_just_the_header() {
        assert_eq!(comparison_csv(&[]), format!("{COMPARISON_CSV_HEADER}\n"));
    }
}
