use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::debug;

use crate::config::PointsTable;
use crate::models::{
    Gender, IndividualStanding, RankedResult, ResultRow, ScoreSheet, TeamStanding,
};

/// Competition ("rank-min") places for an already sorted sequence.
///
/// Tied neighbours share the place of the first of them and the next distinct
/// value takes its 1-based position: `[10, 10, 11]` gives `[1, 1, 3]`.
pub fn rank_min<T>(sorted: &[T], mut tied: impl FnMut(&T, &T) -> bool) -> Vec<u32> {
    let mut places: Vec<u32> = Vec::with_capacity(sorted.len());

    for (idx, item) in sorted.iter().enumerate() {
        let place = match idx.checked_sub(1) {
            Some(prev) if tied(&sorted[prev], item) => places[prev],
            _ => idx as u32 + 1,
        };
        places.push(place);
    }

    places
}

/// Ranks every (event, category) group, awards points and builds the
/// individual and team standings.
pub fn score(rows: &[ResultRow], points: &PointsTable) -> ScoreSheet {
    let ranked = rank_results(rows, points);
    let individuals = individual_standings(&ranked);
    let teams = team_standings(&ranked);

    debug!(
        "Scored {} result(s): {} individual(s), {} team(s)",
        ranked.len(),
        individuals.len(),
        teams.len()
    );

    ScoreSheet {
        ranked,
        individuals,
        teams,
    }
}

fn rank_results(rows: &[ResultRow], points: &PointsTable) -> Vec<RankedResult> {
    let mut groups: BTreeMap<(&str, &str), Vec<&ResultRow>> = BTreeMap::new();
    for row in rows {
        groups
            .entry((row.event_label.as_str(), row.category.as_str()))
            .or_default()
            .push(row);
    }

    let mut ranked = Vec::with_capacity(rows.len());
    for (_, mut members) in groups {
        members.sort_by(|a, b| a.finish_time.compare(&b.finish_time));
        let places = rank_min(&members, |a, b| {
            a.finish_time.compare(&b.finish_time) == Ordering::Equal
        });

        for (row, place) in members.into_iter().zip(places) {
            ranked.push(RankedResult {
                row: row.clone(),
                place,
                points: points.points_for(place),
            });
        }
    }

    ranked
}

fn individual_standings(ranked: &[RankedResult]) -> Vec<IndividualStanding> {
    let mut totals: BTreeMap<(&str, Option<Gender>, &str, &str), u64> = BTreeMap::new();
    for result in ranked {
        let key = (
            result.row.category.as_str(),
            result.gender(),
            result.row.name.as_str(),
            result.row.team.as_str(),
        );
        *totals.entry(key).or_default() += u64::from(result.points);
    }

    let mut groups: BTreeMap<(&str, Option<Gender>), Vec<(&str, &str, u64)>> = BTreeMap::new();
    for ((category, gender, name, team), total) in totals {
        groups
            .entry((category, gender))
            .or_default()
            .push((name, team, total));
    }

    let mut standings = Vec::new();
    for ((category, gender), mut swimmers) in groups {
        swimmers.sort_by(|a, b| b.2.cmp(&a.2));
        let places = rank_min(&swimmers, |a, b| a.2 == b.2);

        for ((name, team, total_points), overall_place) in swimmers.into_iter().zip(places) {
            standings.push(IndividualStanding {
                name: name.to_string(),
                team: team.to_string(),
                category: category.to_string(),
                gender,
                total_points,
                overall_place,
            });
        }
    }

    standings
}

fn team_standings(ranked: &[RankedResult]) -> Vec<TeamStanding> {
    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    for result in ranked {
        *totals.entry(result.row.team.as_str()).or_default() += u64::from(result.points);
    }

    let mut teams: Vec<(&str, u64)> = totals.into_iter().collect();
    teams.sort_by(|a, b| b.1.cmp(&a.1));
    let places = rank_min(&teams, |a, b| a.1 == b.1);

    teams
        .into_iter()
        .zip(places)
        .map(|((team, total_points), overall_place)| TeamStanding {
            team: team.to_string(),
            total_points,
            overall_place,
        })
        .collect()
}
