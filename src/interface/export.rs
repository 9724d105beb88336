use std::path::Path;

use time::Date;

use crate::error::{Result, TrackerError};
use crate::models::GoalSummary;
use crate::state::JournalManager;
use crate::tracker::{day_end, generate_goals_and_sums, resolve_meals, to_fixed};

/// Goal progress of one calendar day.
#[derive(Debug, Clone)]
pub struct DaySummary {
    pub date: Date,
    pub meal_count: usize,
    pub summary: GoalSummary,
}

/// Summaries for every day from `from` to `to`, both included.
pub fn summaries_between(manager: &JournalManager, from: Date, to: Date) -> Result<Vec<DaySummary>> {
    if from > to {
        return Err(TrackerError::InvalidInput(format!(
            "{} is after {}",
            from, to
        )));
    }

    let mut days = Vec::new();
    let mut date = from;
    loop {
        let records = manager.records_for_day(date);
        let day = day_end(date);
        days.push(DaySummary {
            date,
            meal_count: resolve_meals(&records, day).len(),
            summary: generate_goals_and_sums(&records, day),
        });

        if date == to {
            break;
        }
        date = date
            .next_day()
            .ok_or_else(|| TrackerError::InvalidDate(date.to_string()))?;
    }
    Ok(days)
}

/// Write day summaries to a CSV file.
pub fn write_summary_csv(days: &[DaySummary], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "date",
        "meals",
        "carbs_total",
        "carbs_consumed",
        "carbs_ratio",
        "proteins_total",
        "proteins_consumed",
        "proteins_ratio",
        "fats_total",
        "fats_consumed",
        "fats_ratio",
    ])?;

    for day in days {
        let s = &day.summary;
        wtr.write_record([
            day.date.to_string(),
            day.meal_count.to_string(),
            s.carbs.total.clone(),
            s.carbs.consumed.clone(),
            to_fixed(s.carbs.ratio, 0),
            s.proteins.total.clone(),
            s.proteins.consumed.clone(),
            to_fixed(s.proteins.ratio, 0),
            s.fats.total.clone(),
            s.fats.consumed.clone(),
            to_fixed(s.fats.ratio, 0),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FoodDraft, Journal, MealDraft};
    use time::macros::{date, datetime};

    fn manager() -> JournalManager {
        let mut manager = JournalManager::new(Journal::default());
        let created = datetime!(2024-01-01 12:00 UTC);
        manager
            .add_meal(
                MealDraft {
                    name: "Dinner".to_string(),
                    carbs_goal: 80.0,
                    proteins_goal: 40.0,
                    fats_goal: 20.0,
                },
                created,
            )
            .unwrap();
        manager
            .add_food(
                FoodDraft {
                    name: "Rice".to_string(),
                    amount: 100.0,
                    unit: "g".to_string(),
                    carbs: 28.0,
                    proteins: 2.7,
                    fats: 0.3,
                    ..Default::default()
                },
                created,
            )
            .unwrap();
        manager
    }

    #[test]
    fn test_summaries_between_includes_both_ends() {
        let mut manager = manager();
        manager.add_intake(1, 1, date!(2024 - 01 - 03), 200.0).unwrap();

        let days = summaries_between(&manager, date!(2024 - 01 - 01), date!(2024 - 01 - 03)).unwrap();
        assert_eq!(days.len(), 3);
        // Created at noon on the 1st: counted from that day on.
        assert_eq!(days[0].meal_count, 1);
        assert_eq!(days[0].summary.carbs.total, "80.0");
        assert_eq!(days[1].meal_count, 1);
        assert_eq!(days[2].summary.carbs.consumed, "56.0");
        assert_eq!(days[2].summary.carbs.ratio, 70.0);
    }

    #[test]
    fn test_summaries_between_rejects_reversed_range() {
        let manager = manager();
        assert!(summaries_between(&manager, date!(2024 - 01 - 05), date!(2024 - 01 - 01)).is_err());
    }

    #[test]
    fn test_write_summary_csv() {
        let mut manager = manager();
        manager.add_intake(1, 1, date!(2024 - 01 - 02), 100.0).unwrap();
        let days = summaries_between(&manager, date!(2024 - 01 - 02), date!(2024 - 01 - 02)).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");
        write_summary_csv(&days, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert!(lines.next().unwrap().starts_with("date,meals,carbs_total"));
        assert_eq!(
            lines.next().unwrap(),
            "2024-01-02,1,80.0,28.0,35,40.0,2.7,7,20.0,0.3,2"
        );
    }
}
