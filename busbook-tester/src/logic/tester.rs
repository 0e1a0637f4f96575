use busbook_core::BookingData;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::scenario::{Scenario, ScenarioCtx};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
    #[serde(with = "duration_vec_serde")]
    pub performance_data: Vec<Duration>,
}

/// Runs scenarios against the core booking flow, one fresh store per
/// iteration.
pub struct LogicTester {
    data: BookingData,
    verbose: bool,
}

impl LogicTester {
    pub fn new(verbose: bool) -> Self {
        Self::with_data(BookingData::load_from_static(), verbose)
    }

    pub fn with_data(data: BookingData, verbose: bool) -> Self {
        Self { data, verbose }
    }

    pub fn run_scenario(&self, scenario: &Scenario, iterations: usize) -> ScenarioResult {
        if self.verbose {
            println!("🧪 Testing scenario: {}", scenario.name.bright_white());
        }

        let mut successes = 0;
        let mut failures = Vec::new();
        let mut performance_data = Vec::new();

        for i in 0..iterations {
            let ctx = ScenarioCtx::new(&self.data, self.verbose);
            let start_time = Instant::now();
            match (scenario.run)(&ctx) {
                Ok(()) => {
                    successes += 1;
                    let duration = start_time.elapsed();
                    performance_data.push(duration);
                    if self.verbose {
                        println!("  ✅ Iteration {}/{iterations} passed ({duration:?})", i + 1);
                    }
                }
                Err(err) => {
                    log::debug!("{} iteration {} failed: {err:?}", scenario.key, i + 1);
                    let message = format!("{err:#}");
                    if self.verbose {
                        println!(
                            "  ❌ Iteration {}/{iterations} failed: {}",
                            i + 1,
                            message.clone().red()
                        );
                    }
                    failures.push(format!("Iteration {}: {message}", i + 1));
                }
            }
        }

        let average_duration = if performance_data.is_empty() {
            Duration::ZERO
        } else {
            performance_data.iter().sum::<Duration>()
                / u32::try_from(performance_data.len()).unwrap_or(u32::MAX)
        };

        ScenarioResult {
            scenario_name: scenario.name.to_string(),
            passed: iterations > 0 && failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
            performance_data,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

mod duration_vec_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(durations: &[Duration], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis: Vec<u128> = durations.iter().map(Duration::as_millis).collect();
        millis.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = Vec::<u64>::deserialize(deserializer)?;
        Ok(millis.into_iter().map(Duration::from_millis).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    fn failing(_: &ScenarioCtx) -> anyhow::Result<()> {
        bail!("seat 3 was selectable")
    }

    fn writes_log(ctx: &ScenarioCtx) -> anyhow::Result<()> {
        let form = busbook_core::SeatSelectionForm {
            bus_name: "Super Bus".into(),
            seat_numbers: "1".into(),
        };
        ctx.flow.submit_seat_selection(&form)?;
        anyhow::ensure!(ctx.log_entries()?.len() == 1, "store shared between runs");
        Ok(())
    }

    fn tester() -> LogicTester {
        LogicTester::with_data(BookingData::default(), false)
    }

    #[test]
    fn failures_are_collected_per_iteration() {
        let scenario = Scenario {
            key: "failing",
            name: "Failing",
            run: failing,
        };
        let result = tester().run_scenario(&scenario, 2);
        assert!(!result.passed);
        assert_eq!(result.successful_iterations, 0);
        assert_eq!(result.failures.len(), 2);
        assert_eq!(result.failures[1], "Iteration 2: seat 3 was selectable");
        assert_eq!(result.average_duration, Duration::ZERO);
    }

    #[test]
    fn zero_iterations_is_not_a_pass() {
        let scenario = Scenario {
            key: "failing",
            name: "Failing",
            run: failing,
        };
        let result = tester().run_scenario(&scenario, 0);
        assert!(!result.passed);
        assert_eq!(result.iterations_run, 0);
    }

    #[test]
    fn each_iteration_gets_a_fresh_store() {
        let scenario = Scenario {
            key: "writes-log",
            name: "Writes Log",
            run: writes_log,
        };
        let result = tester().run_scenario(&scenario, 3);
        assert!(result.passed, "{:?}", result.failures);
        assert_eq!(result.performance_data.len(), 3);
    }

    #[test]
    fn durations_serialize_as_millis() {
        let result = ScenarioResult {
            scenario_name: "Smoke Test".into(),
            passed: true,
            iterations_run: 1,
            successful_iterations: 1,
            failures: Vec::new(),
            average_duration: Duration::from_millis(12),
            performance_data: vec![Duration::from_millis(12)],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["average_duration"], 12);
        assert_eq!(json["performance_data"][0], 12);
        let back: ScenarioResult = serde_json::from_value(json).unwrap();
        assert_eq!(back.average_duration, Duration::from_millis(12));
    }
}
