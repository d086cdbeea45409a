//! Show command - print one Digimon's stats.

use colored::Colorize;

use crate::database::Database;

pub fn run(
    db: &Database,
    name: &str,
    json: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let digimon = db.find_digimon(name)?;

    if json {
        println!("{}", serde_json::to_string_pretty(digimon)?);
        return Ok(());
    }

    println!(
        "{} #{} {}",
        digimon.digimon.white().bold(),
        digimon.number,
        format!("({} {}, {})", digimon.stage, digimon.kind, digimon.attribute).dimmed()
    );
    println!();

    println!("{}", "Slots:".yellow().bold());
    println!("  Memory:      {}", digimon.memory);
    println!("  Equip slots: {}", digimon.equip_slots);
    println!();

    println!("{}", "Level 50 stats:".yellow().bold());
    for (label, value) in [
        ("HP", digimon.lv_50_hp),
        ("SP", digimon.lv_50_sp),
        ("ATK", digimon.lv_50_atk),
        ("DEF", digimon.lv_50_def),
        ("INT", digimon.lv_50_int),
        ("SPD", digimon.lv_50_spd),
    ] {
        println!("  {:4} {}", label, value.to_string().white());
    }

    Ok(())
}
