//! Combat log killmail parser
//!
//! A killmail starts with a timestamp and the victim's details, followed by an
//! `Involved parties:` block and the `Destroyed items:` and `Dropped items:`
//! sections. Item lines look like `Name[, Qty: N][ (Location)]`.
//!
//! The parser only engages when the input carries a victim line or an item
//! section header.

use super::field_parsers::{clean_line, parse_quantity};
use super::{Input, ParseContext, ParseResult};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

const FINAL_BLOW_SUFFIX: &str = " (laid the final blow)";

lazy_static! {
    static ref TIMESTAMP: Regex = Regex::new(r"^\d{4}\.\d{2}\.\d{2} \d{2}:\d{2}(?::\d{2})?$")
        .expect("killmail timestamp pattern is valid");
    static ref FIELD: Regex =
        Regex::new(r"^([A-Za-z][A-Za-z ]*): (.*)$").expect("killmail field pattern is valid");
    static ref ITEM_LINE: Regex = Regex::new(
        r"^([^,()\t]+?)(?:, Qty: ([\d,'\.]+))?(?: \(([^)]+)\))?$"
    )
    .expect("killmail item pattern is valid");
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KillmailVictim {
    pub name: String,
    pub corporation: String,
    pub alliance: String,
    pub faction: String,
    pub ship: String,
    pub system: String,
    pub security: String,
    pub damage_taken: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KillmailInvolved {
    pub name: String,
    pub final_blow: bool,
    pub security: String,
    pub corporation: String,
    pub alliance: String,
    pub faction: String,
    pub ship: String,
    pub weapon: String,
    pub damage_done: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KillmailItem {
    pub name: String,
    pub quantity: i64,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Killmail {
    pub datetime: String,
    pub victim: KillmailVictim,
    pub involved: Vec<KillmailInvolved>,
    pub destroyed: Vec<KillmailItem>,
    pub dropped: Vec<KillmailItem>,
    pub lines: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Victim,
    Involved,
    Destroyed,
    Dropped,
}

fn is_killmail(input: &Input) -> bool {
    input.iter().any(|(_, text)| {
        let line = clean_line(text);
        line.starts_with("Victim: ") || line == "Destroyed items:" || line == "Dropped items:"
    })
}

fn parse_item(line: &str) -> Option<KillmailItem> {
    let captures = ITEM_LINE.captures(line)?;
    let quantity = captures
        .get(2)
        .map(|m| parse_quantity(m.as_str()))
        .unwrap_or(1);
    Some(KillmailItem {
        name: captures[1].trim().to_string(),
        quantity,
        location: captures
            .get(3)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
    })
}

fn apply_victim_field(victim: &mut KillmailVictim, key: &str, value: &str) {
    match key {
        "Victim" => victim.name = value.to_string(),
        "Corp" => victim.corporation = value.to_string(),
        "Alliance" => victim.alliance = value.to_string(),
        "Faction" => victim.faction = value.to_string(),
        "Destroyed" => victim.ship = value.to_string(),
        "System" => victim.system = value.to_string(),
        "Security" => victim.security = value.to_string(),
        "Damage Taken" => victim.damage_taken = parse_quantity(value),
        _ => {}
    }
}

fn apply_involved_field(involved: &mut KillmailInvolved, key: &str, value: &str) {
    match key {
        "Security" => involved.security = value.to_string(),
        "Corp" => involved.corporation = value.to_string(),
        "Alliance" => involved.alliance = value.to_string(),
        "Faction" => involved.faction = value.to_string(),
        "Ship" => involved.ship = value.to_string(),
        "Weapon" => involved.weapon = value.to_string(),
        "Damage Done" => involved.damage_done = parse_quantity(value),
        _ => {}
    }
}

pub fn parse_killmail(input: &Input, _context: &ParseContext<'_>) -> (ParseResult, Input) {
    if !is_killmail(input) {
        return (ParseResult::Killmail(Killmail::default()), input.clone());
    }

    let mut killmail = Killmail::default();
    let mut section = Section::Victim;

    for (line_number, text) in input.iter() {
        let line = clean_line(text);

        let consumed = match line {
            "" => true,
            "Involved parties:" => {
                section = Section::Involved;
                true
            }
            "Destroyed items:" => {
                section = Section::Destroyed;
                true
            }
            "Dropped items:" => {
                section = Section::Dropped;
                true
            }
            _ => match section {
                Section::Victim if TIMESTAMP.is_match(line) => {
                    killmail.datetime = line.to_string();
                    true
                }
                Section::Victim => match FIELD.captures(line) {
                    Some(captures) => {
                        apply_victim_field(&mut killmail.victim, &captures[1], captures[2].trim());
                        true
                    }
                    None => false,
                },
                Section::Involved => match FIELD.captures(line) {
                    Some(captures) if &captures[1] == "Name" => {
                        let name = captures[2].trim();
                        let (name, final_blow) = match name.strip_suffix(FINAL_BLOW_SUFFIX) {
                            Some(stripped) => (stripped, true),
                            None => (name, false),
                        };
                        killmail.involved.push(KillmailInvolved {
                            name: name.to_string(),
                            final_blow,
                            ..KillmailInvolved::default()
                        });
                        true
                    }
                    Some(captures) => {
                        if let Some(involved) = killmail.involved.last_mut() {
                            apply_involved_field(involved, &captures[1], captures[2].trim());
                        }
                        true
                    }
                    None => false,
                },
                Section::Destroyed | Section::Dropped => match parse_item(line) {
                    Some(item) if section == Section::Destroyed => {
                        killmail.destroyed.push(item);
                        true
                    }
                    Some(item) => {
                        killmail.dropped.push(item);
                        true
                    }
                    None => false,
                },
            },
        };

        if consumed {
            killmail.lines.push(line_number);
        } else {
            debug!("Killmail line {} not recognised: {:?}", line_number, line);
        }
    }

    let rest = input.without(&killmail.lines);
    (ParseResult::Killmail(killmail), rest)
}
