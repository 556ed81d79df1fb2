use std::collections::BTreeMap;

use tracing::debug;

use crate::config::validate_lanes;
use crate::error::Result;
use crate::models::{Entrant, Gender, Heat};

/// Lane order for a pool, fastest seed first.
///
/// Starts at the centre lane `ceil(lanes / 2)` and alternates outward, right
/// side first: 8 lanes give `[4, 5, 3, 6, 2, 7, 1, 8]`, 5 lanes give
/// `[3, 4, 2, 5, 1]`.
pub fn seed_order(lanes: u32) -> Result<Vec<u32>> {
    let lanes = validate_lanes(lanes)?;
    let center = lanes.div_ceil(2);

    let mut order = Vec::with_capacity(lanes as usize);
    order.push(center);

    let mut offset = 1;
    while order.len() < lanes as usize {
        if center + offset <= lanes {
            order.push(center + offset);
        }
        if offset < center {
            order.push(center - offset);
        }
        offset += 1;
    }

    Ok(order)
}

/// Seeds every (event, gender, category) group found in `entrants`.
///
/// Groups come out ordered by event, then gender, then category; heats of a
/// group are numbered from 1 in swim order, slowest heat first.
pub fn seed(entrants: &[Entrant], lanes: u32) -> Result<Vec<Heat>> {
    let order = seed_order(lanes)?;

    let mut groups: BTreeMap<(&str, Gender, &str), Vec<&Entrant>> = BTreeMap::new();
    for entrant in entrants {
        groups
            .entry((
                entrant.event.as_str(),
                entrant.gender,
                entrant.category.as_str(),
            ))
            .or_default()
            .push(entrant);
    }

    let mut heats = Vec::new();
    for ((event, gender, category), members) in groups {
        let group_heats = seed_group(event, gender, category, members, &order);
        debug!(
            "Seeded {} / {}: {} heat(s)",
            gender.event_label(event),
            category,
            group_heats.len()
        );
        heats.extend(group_heats);
    }

    Ok(heats)
}

fn seed_group(
    event: &str,
    gender: Gender,
    category: &str,
    mut members: Vec<&Entrant>,
    order: &[u32],
) -> Vec<Heat> {
    // Stable: equal entry times keep registration order.
    members.sort_by(|a, b| a.entry_time.compare(&b.entry_time));

    let lanes = order.len();
    let blocks: Vec<&[&Entrant]> = members.chunks(lanes).collect();

    // The fastest block swims last, so a short block ends up as heat 1.
    blocks
        .into_iter()
        .rev()
        .enumerate()
        .map(|(idx, block)| {
            let mut slots: Vec<Option<Entrant>> = vec![None; lanes];
            for (entrant, lane) in block.iter().zip(order) {
                slots[(*lane - 1) as usize] = Some((*entrant).clone());
            }

            Heat {
                event: event.to_string(),
                gender,
                category: category.to_string(),
                number: idx as u32 + 1,
                lanes: slots,
            }
        })
        .collect()
}
