use crate::traits::HeatRenderer;
use meet::models::Heat;

/// Compact text listing of the seeding, one line per heat.
pub struct PreviewExporter;

impl HeatRenderer for PreviewExporter {
    type Output = String;

    fn render(&self, heats: &[Heat]) -> String {
        let mut out = String::new();

        for heat in heats {
            let lanes: Vec<String> = heat
                .occupied_lanes()
                .map(|(lane, entrant)| {
                    format!("{}:{} ({})", lane, entrant.name, entrant.entry_time)
                })
                .collect();

            out.push_str(&format!(
                "{} | {} | Heat {} | {}\n",
                heat.event_label(),
                heat.category,
                heat.number,
                lanes.join(", ")
            ));
        }

        out
    }
}
