use indexmap::IndexMap;

use crate::models::aggregate::{AggregateCounts, NameCount};
use crate::models::vacancy::VacancyRecord;

/// Counts occurrences per distinct value, preserving first-seen order.
pub fn count_by<'a, I>(values: I) -> IndexMap<&'a str, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: IndexMap<&'a str, usize> = IndexMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    counts
}

fn to_entries(counts: IndexMap<&str, usize>) -> Vec<NameCount> {
    counts
        .into_iter()
        .map(|(name, count)| NameCount {
            name: name.to_string(),
            count,
        })
        .collect()
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Copy)]
pub struct AggregateService {
    min_skill_threshold: usize,
}

impl AggregateService {
    pub fn new(min_skill_threshold: usize) -> Self {
        Self {
            min_skill_threshold,
        }
    }

    pub fn summarize(&self, records: &[VacancyRecord]) -> AggregateCounts {
        let skill_counts = count_by(
            records
                .iter()
                .flat_map(|v| v.key_skills.iter().map(String::as_str)),
        );
        let skills = skill_counts
            .into_iter()
            .filter(|(_, count)| *count >= self.min_skill_threshold)
            .map(|(name, count)| NameCount {
                name: name.to_string(),
                count,
            })
            .collect();

        let experience = to_entries(count_by(
            records.iter().filter_map(|v| present(&v.experience)),
        ));
        let schedule = to_entries(count_by(
            records.iter().filter_map(|v| present(&v.schedule)),
        ));

        AggregateCounts {
            skills,
            experience,
            schedule,
        }
    }
}
