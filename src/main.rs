mod display;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use display::output::{
    display_damage_breakdown, display_effective_health_summary, display_error,
    display_gold_advantage, display_impact_table, display_info, display_item_summary,
    display_success,
};
use rift_analytics::analysis::effective_health::CINDERHULK_HEALTH_MULT;
use rift_analytics::{
    annotate_item, armor_negated, damage_multiplier, effective_health,
    gold_per_effective_health, loader, percent_damage_increase, rank_participants,
    reshape_timeline, stat_gold_values,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "Rift Analytics")]
#[command(about = "In-match analytics over exported match, timeline and item JSON", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank a match's participants by impact and flag the MVP
    Impact {
        /// Match JSON file
        match_file: PathBuf,
    },

    /// Compute the per-frame team gold advantage series from a timeline
    Timeline {
        /// Timeline JSON file (array of frames)
        timeline_file: PathBuf,
        /// Match JSON file (for team assignment)
        match_file: PathBuf,
    },

    /// Annotate an item with per-stat gold values
    Item {
        /// Item JSON file
        item_file: PathBuf,
    },

    /// Evaluate lethality and percent pen against a target's armor
    Damage {
        /// Target armor
        #[arg(short, long, default_value = "100")]
        armor: f64,

        /// Flat lethality
        #[arg(short, long, default_value = "0")]
        lethality: f64,

        /// Percent armor penetration (0-100)
        #[arg(short = 'p', long, default_value = "0")]
        armor_pen: f64,

        /// Champion level (default: 18)
        #[arg(short = 'L', long, default_value = "18")]
        level: i32,
    },

    /// Gold efficiency of added health and resistances
    EffectiveHealth {
        /// Item gold cost
        #[arg(short, long)]
        gold: f64,

        /// Current health
        #[arg(long, default_value = "1000")]
        health: f64,

        /// Current armor or magic resist
        #[arg(long, default_value = "0")]
        resist: f64,

        /// Health added by the item
        #[arg(long, default_value = "0")]
        health_added: f64,

        /// Armor or magic resist added by the item
        #[arg(long, default_value = "0")]
        resist_added: f64,

        /// Apply the Cinderhulk bonus-health multiplier
        #[arg(long)]
        cinderhulk: bool,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Impact { match_file } => {
            let mut match_data = loader::load_match(&match_file)
                .with_context(|| format!("loading match from {}", match_file.display()))?;
            display_info(&format!(
                "Ranking {} participants ({} min game)",
                match_data.participants.len(),
                match_data.game_duration / 60_000
            ));

            rank_participants(&mut match_data.participants);
            display_impact_table(&match_data);
        }

        Command::Timeline { timeline_file, match_file } => {
            let match_data = loader::load_match(&match_file)
                .with_context(|| format!("loading match from {}", match_file.display()))?;
            let mut frames = loader::load_timeline(&timeline_file)
                .with_context(|| format!("loading timeline from {}", timeline_file.display()))?;
            display_success(&format!("Loaded {} timeline frames", frames.len()));

            reshape_timeline(&mut frames, &match_data.participants);
            display_gold_advantage(&frames);
        }

        Command::Item { item_file } => {
            let item = loader::load_item(&item_file)
                .with_context(|| format!("loading item from {}", item_file.display()))?;

            let annotated = annotate_item(&item, &stat_gold_values());
            display_item_summary(&annotated);
        }

        Command::Damage { armor, lethality, armor_pen, level } => {
            let pen_fraction = armor_pen / 100.0;
            let negated = armor_negated(armor, lethality, pen_fraction, level);
            let increase = percent_damage_increase(armor, lethality, pen_fraction, level);
            display_damage_breakdown(
                armor,
                negated,
                damage_multiplier(armor),
                damage_multiplier(armor - negated),
                increase,
            );
        }

        Command::EffectiveHealth {
            gold,
            health,
            resist,
            health_added,
            resist_added,
            cinderhulk,
        } => {
            let before = effective_health(health, resist);
            let mut health_after = health + health_added;
            if cinderhulk {
                health_after *= CINDERHULK_HEALTH_MULT;
            }
            let after = effective_health(health_after, resist + resist_added);
            let gold_per_point = gold_per_effective_health(
                gold,
                health,
                resist,
                health_added,
                resist_added,
                cinderhulk,
            );
            display_effective_health_summary(before, after, gold_per_point);
        }
    }

    Ok(())
}
