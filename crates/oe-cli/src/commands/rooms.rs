use comfy_table::{ContentArrangement, Table};
use oe_core::RoomId;
use oe_game::RoomGraph;
use oe_game::gate::rule_for;
use serde::Serialize;

/// One row of the room listing.
#[derive(Debug, Serialize)]
struct RoomSummary {
    name: &'static str,
    description: String,
    exits: Vec<String>,
    hotspots: Vec<String>,
    items: Vec<String>,
    requires: Vec<&'static str>,
}

pub fn run(format: &str) -> Result<(), String> {
    let graph = RoomGraph::office();
    let rooms: Vec<RoomSummary> = RoomId::ALL
        .iter()
        .filter_map(|id| graph.room(*id).ok())
        .map(|room| RoomSummary {
            name: room.name(),
            description: room.description().to_string(),
            exits: room
                .exits()
                .iter()
                .map(|(direction, to)| format!("{direction} -> {to}"))
                .collect(),
            hotspots: room.interactables().map(|h| h.id.clone()).collect(),
            items: room.inventory.names().map(str::to_string).collect(),
            requires: rule_for(room.id())
                .map(|rule| rule.requires.iter().map(|r| r.phrase()).collect())
                .unwrap_or_default(),
        })
        .collect();

    match format.to_lowercase().as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&rooms)
                .map_err(|e| format!("failed to serialize rooms: {e}"))?;
            println!("{json}");
        }
        "table" => print_table(&rooms),
        other => return Err(format!("unknown format '{other}' (expected table or json)")),
    }
    Ok(())
}

fn print_table(rooms: &[RoomSummary]) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Room", "Description", "Hotspots", "Items", "To enter"]);

    for room in rooms {
        let or_dash = |values: Vec<String>| {
            if values.is_empty() {
                "-".to_string()
            } else {
                values.join(", ")
            }
        };
        table.add_row(vec![
            room.name.to_string(),
            room.description.clone(),
            or_dash(room.hotspots.clone()),
            or_dash(room.items.clone()),
            or_dash(room.requires.iter().map(|r| r.to_string()).collect()),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} rooms", rooms.len());
}
