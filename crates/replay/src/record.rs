// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand history record parsing.
//!
//! A record is one comma separated line with a fixed layout: the hand
//! header, 10 seats of 4 fields each, then one 5 fields group per event.
use crate::{Action, Chips, Event, Hand, Player, ReplayError};

/// Number of seats in a record.
const SEATS: usize = 10;
/// First seat field position.
const PLAYERS_START: usize = 8;
/// Fields per seat: name, straddle, cards, stack.
const FIELDS_PER_PLAYER: usize = 4;
/// First event field position.
const EVENTS_START: usize = PLAYERS_START + SEATS * FIELDS_PER_PLAYER;
/// Fields per event: time, action, seat, card, amount.
const FIELDS_PER_EVENT: usize = 5;

/// Splits a comma separated record into its fields.
///
/// Double quoted fields may contain commas, a doubled quote inside a
/// quoted field escapes a quote. An empty line yields no fields.
pub fn split_record(line: &str) -> Vec<String> {
    if line.trim().is_empty() {
        return Vec::new();
    }

    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    quoted = false;
                }
            }
            '"' if field.is_empty() => quoted = true,
            ',' if !quoted => fields.push(std::mem::take(&mut field)),
            c => field.push(c),
        }
    }

    fields.push(field);
    fields
}

/// Parses a record into a hand.
///
/// Returns `None` for empty records and `//` comment records. The
/// parsed hand still has to be replayed to fill in the pot, the board,
/// and the winners.
pub fn parse_record(fields: &[String]) -> Result<Option<Hand>, ReplayError> {
    if fields.is_empty() || fields[0].starts_with("//") {
        return Ok(None);
    }

    if fields.len() < EVENTS_START {
        return Err(ReplayError::TruncatedRecord(fields.len()));
    }

    let title = fields[1].clone();
    let number = title
        .strip_prefix("Hand ")
        .and_then(|n| n.trim().parse().ok());

    let mut hand = Hand {
        starting_time: fields[0].clone(),
        title,
        number,
        ante: fields[2].clone(),
        small_blind: required_chips(fields, 3)?,
        big_blind: required_chips(fields, 4)?,
        dealer: fields[5].clone(),
        small_blind_seat: required_number(fields, 6)? as usize,
        big_blind_seat: required_number(fields, 7)? as usize,
        ..Hand::default()
    };

    for seat in 1..=SEATS {
        let start = PLAYERS_START + (seat - 1) * FIELDS_PER_PLAYER;
        let name = &fields[start];

        // Empty seats are recorded as SEAT placeholders.
        if name.starts_with("SEAT") {
            continue;
        }

        if hand.players.len() + 1 != seat {
            return Err(ReplayError::SeatOutOfOrder(seat));
        }

        let stack = required_chips(fields, start + 3)?;
        hand.players.push(Player {
            seat,
            name: name.clone(),
            straddle: optional_chips(fields, start + 1)?.unwrap_or(Chips::ZERO),
            pocket: fields[start + 2].parse()?,
            starting_stack: stack,
            ending_stack: stack,
            folded: false,
            winner: false,
            strength: None,
        });
    }

    let mut start = EVENTS_START;
    while start < fields.len() {
        let time = &fields[start];

        // The recorder pads hands with empty event groups.
        if time.is_empty() {
            start += FIELDS_PER_EVENT;
            continue;
        }

        let action = match field(fields, start + 1) {
            "BOARD" => Action::Board,
            "BET" => Action::Bet,
            "CALL" => Action::Call,
            "FOLD" => Action::Fold,
            other => return Err(ReplayError::UnknownAction(other.to_string())),
        };

        // The last event is often cut off, missing fields stay empty.
        let seat = optional_number(fields, start + 2)?.map(|n| n as usize);
        let card = match field(fields, start + 3) {
            "" => None,
            token => Some(token.parse()?),
        };
        let amount = optional_chips(fields, start + 4)?;

        hand.events
            .push(Event::new(time.clone(), action, seat, card, amount));
        start += FIELDS_PER_EVENT;
    }

    Ok(Some(hand))
}

/// Returns the field at the given position, missing fields are empty.
fn field(fields: &[String], pos: usize) -> &str {
    fields.get(pos).map(String::as_str).unwrap_or("")
}

fn required_number(fields: &[String], pos: usize) -> Result<u32, ReplayError> {
    let value = field(fields, pos);
    value.parse().map_err(|_| ReplayError::InvalidNumber {
        field: pos,
        value: value.to_string(),
    })
}

fn optional_number(fields: &[String], pos: usize) -> Result<Option<u32>, ReplayError> {
    let value = field(fields, pos);
    if value.is_empty() {
        Ok(None)
    } else {
        required_number(fields, pos).map(Some)
    }
}

fn required_chips(fields: &[String], pos: usize) -> Result<Chips, ReplayError> {
    required_number(fields, pos).map(Chips::new)
}

fn optional_chips(fields: &[String], pos: usize) -> Result<Option<Chips>, ReplayError> {
    Ok(optional_number(fields, pos)?.map(Chips::new))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_record_fields() {
        assert_eq!(split_record(""), Vec::<String>::new());
        assert_eq!(split_record("  "), Vec::<String>::new());
        assert_eq!(split_record("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_record("a,,c"), vec!["a", "", "c"]);
        assert_eq!(split_record("a,b,"), vec!["a", "b", ""]);
        assert_eq!(split_record(r#""Hand 1, final",x"#), vec!["Hand 1, final", "x"]);
        assert_eq!(split_record(r#""say ""hi""",x"#), vec![r#"say "hi""#, "x"]);
    }

    #[test]
    fn parse_record_comments() {
        let fields = split_record("// a comment, with fields");
        assert!(parse_record(&fields).unwrap().is_none());
        assert!(parse_record(&[]).unwrap().is_none());
    }

    #[test]
    fn parse_record_truncated() {
        let fields = split_record("12:00:00,Hand 1,,10,20");
        assert!(matches!(
            parse_record(&fields),
            Err(ReplayError::TruncatedRecord(5))
        ));
    }

    fn header() -> Vec<String> {
        ["12:00:00", "Hand 7", "", "10", "20", "Dealer", "1", "2"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn push_seats(fields: &mut Vec<String>, players: &[(&str, &str, &str)]) {
        for seat in 1..=SEATS {
            if let Some((name, cards, stack)) = players.get(seat - 1) {
                fields.push(name.to_string());
                fields.push("0".to_string());
                fields.push(cards.to_string());
                fields.push(stack.to_string());
            } else {
                fields.push(format!("SEAT {seat}"));
                fields.push(String::new());
                fields.push(String::new());
                fields.push("0".to_string());
            }
        }
    }

    fn push_event(fields: &mut Vec<String>, event: (&str, &str, &str, &str, &str)) {
        let (time, action, seat, card, amount) = event;
        for f in [time, action, seat, card, amount] {
            fields.push(f.to_string());
        }
    }

    #[test]
    fn parse_record_players_and_events() {
        let mut fields = header();
        push_seats(
            &mut fields,
            &[
                ("Alice", "ah ad", "1000"),
                ("Bob", "kh kc", "1000"),
                ("Carol", "", "500"),
            ],
        );
        push_event(&mut fields, ("12:00:01", "FOLD", "3", "", ""));
        push_event(&mut fields, ("12:00:02", "BET", "1", "", "40"));
        // Truncated last event.
        fields.extend(["12:00:03".to_string(), "CALL".to_string(), "2".to_string()]);

        let hand = parse_record(&fields).unwrap().unwrap();
        assert_eq!(hand.number, Some(7));
        assert_eq!(hand.small_blind, Chips::new(10));
        assert_eq!(hand.big_blind, Chips::new(20));
        assert_eq!(hand.players.len(), 3);
        assert_eq!(hand.players[0].name, "Alice");
        assert!(!hand.players[0].pocket.is_hidden());
        assert!(hand.players[2].pocket.is_hidden());
        assert_eq!(hand.players[2].starting_stack, Chips::new(500));

        assert_eq!(hand.events.len(), 3);
        assert_eq!(hand.events[0].action, Action::Fold);
        assert_eq!(hand.events[0].seat, Some(3));
        assert_eq!(hand.events[1].amount, Some(Chips::new(40)));
        assert_eq!(hand.events[2].action, Action::Call);
        assert_eq!(hand.events[2].amount, None);
    }

    #[test]
    fn parse_record_seats_gap() {
        let mut fields = header();
        // Occupied seat after an empty one.
        for seat in 1..=SEATS {
            if seat == 3 {
                fields.push("Alice".to_string());
                fields.push("0".to_string());
                fields.push(String::new());
                fields.push("1000".to_string());
            } else {
                fields.push(format!("SEAT {seat}"));
                fields.push(String::new());
                fields.push(String::new());
                fields.push("0".to_string());
            }
        }

        assert!(matches!(
            parse_record(&fields),
            Err(ReplayError::SeatOutOfOrder(3))
        ));
    }

    #[test]
    fn parse_record_unknown_action() {
        let mut fields = header();
        push_seats(&mut fields, &[("Alice", "", "1000")]);
        push_event(&mut fields, ("12:00:01", "SHOVE", "1", "", "10"));

        assert!(matches!(
            parse_record(&fields),
            Err(ReplayError::UnknownAction(a)) if a == "SHOVE"
        ));
    }

    #[test]
    fn parse_record_invalid_number() {
        let mut fields = header();
        fields[3] = "ten".to_string();
        push_seats(&mut fields, &[("Alice", "", "1000")]);

        assert!(matches!(
            parse_record(&fields),
            Err(ReplayError::InvalidNumber { field: 3, .. })
        ));
    }
}
