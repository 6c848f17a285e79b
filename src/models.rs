use serde::Deserialize;
use std::collections::HashMap;

fn default_level() -> i32 {
    1
}

// Item document from the static-data API
#[derive(Debug, Deserialize, Clone)]
#[allow(dead_code)]
pub struct Item {
    pub id: i32,
    pub name: String,
    /// Raw HTML description; stat phrases are extracted from it by the annotator.
    #[serde(default)]
    pub description: String,
    pub gold: ItemGold,
    #[serde(default)]
    pub stats: HashMap<String, f64>,
    #[serde(default)]
    pub maps: HashMap<String, bool>,
    #[serde(default)]
    pub required_champion: Option<String>,
    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ItemGold {
    #[serde(default)]
    pub total: i32,
    #[serde(default)]
    pub sell: i32,
    #[serde(default)]
    pub purchasable: bool,
}

// Match document
#[derive(Debug, Deserialize, Clone)]
#[allow(dead_code)]
pub struct Match {
    #[serde(rename = "_id")]
    pub id: String,
    /// Milliseconds.
    pub game_duration: i64,
    #[serde(default)]
    pub queue_id: i32,
    #[serde(default)]
    pub map_id: i32,
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub teams: Vec<Team>,
}

#[derive(Debug, Deserialize, Clone)]
#[allow(dead_code)]
pub struct Team {
    #[serde(rename = "_id")]
    pub id: i32,
    #[serde(default)]
    pub win: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[allow(dead_code)]
pub struct Participant {
    #[serde(rename = "_id")]
    pub id: i32,
    /// 100 (blue) or 200 (red).
    pub team_id: i32,
    #[serde(default)]
    pub puuid: String,
    #[serde(default)]
    pub champion_id: i32,
    pub stats: ParticipantStats,
    /// Filled in by the impact ranker, absent in API responses.
    #[serde(default)]
    pub impact: f64,
    #[serde(default)]
    pub impact_rank: i32,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[allow(dead_code)]
pub struct ParticipantStats {
    #[serde(default)]
    pub kills: i32,
    #[serde(default)]
    pub deaths: i32,
    #[serde(default)]
    pub assists: i32,
    #[serde(default)]
    pub total_damage_dealt_to_champions: i64,
    #[serde(default)]
    pub damage_dealt_to_objectives: i64,
    #[serde(default)]
    pub damage_dealt_to_turrets: i64,
    #[serde(default)]
    pub vision_score: i32,
    #[serde(default)]
    pub total_heal: i64,
    #[serde(default)]
    pub time_ccing_others: i64,
    #[serde(default = "default_level")]
    pub champ_level: i32,
    #[serde(default)]
    pub win: bool,
}

// Timeline documents
#[derive(Debug, Deserialize, Clone)]
#[allow(dead_code)]
pub struct TimelineFrame {
    /// Milliseconds since game start.
    pub timestamp: i64,
    #[serde(default)]
    pub participantframes: Vec<ParticipantFrame>,
    #[serde(default)]
    pub buildingkillevents: Vec<TimelineEvent>,
    #[serde(default)]
    pub championkillevents: Vec<TimelineEvent>,
    #[serde(default)]
    pub elitemonsterkillevents: Vec<TimelineEvent>,
    #[serde(default)]
    pub turretplatedestroyedevents: Vec<TimelineEvent>,
    #[serde(default)]
    pub itempurchaseevents: Vec<TimelineEvent>,
    #[serde(default)]
    pub itemsoldevents: Vec<TimelineEvent>,
    #[serde(default)]
    pub itemundoevents: Vec<TimelineEvent>,
    /// Some timeline payloads carry a flat event list instead of the typed ones.
    #[serde(default)]
    pub events: Option<Vec<TimelineEvent>>,

    // Derived by the reshaper, absent in API responses.
    #[serde(default)]
    pub team100_gold: i64,
    #[serde(default)]
    pub team200_gold: i64,
    #[serde(default)]
    pub team100_adv: i64,
    #[serde(default)]
    pub team200_adv: i64,
    #[serde(default)]
    pub team100_perc_adv: f64,
    #[serde(default)]
    pub team200_perc_adv: f64,
}

#[derive(Debug, Deserialize, Clone)]
#[allow(dead_code)]
pub struct ParticipantFrame {
    pub participant_id: i32,
    #[serde(default)]
    pub total_gold: i64,
    #[serde(default)]
    pub jungle_minions_killed: i32,
    #[serde(default)]
    pub minions_killed: i32,
    /// Derived by the reshaper: jungle_minions_killed + minions_killed.
    #[serde(default)]
    pub cs: i32,
}

#[derive(Debug, Deserialize, Clone)]
#[allow(dead_code)]
pub struct TimelineEvent {
    #[serde(default)]
    pub timestamp: i64,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub participant_id: i32,
    #[serde(default)]
    pub killer_id: i32,
    #[serde(default)]
    pub victim_id: i32,
    #[serde(default)]
    pub item_id: i32,
}
