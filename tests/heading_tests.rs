use robot_mover::Heading;
use proptest::prelude::*;
use std::collections::HashSet;

fn heading() -> impl Strategy<Value = Heading> {
    prop::sample::select(Heading::ALL.to_vec())
}

#[test]
fn glyphs_and_labels_are_distinct() {
    let glyphs: HashSet<char> = Heading::ALL.iter().map(|h| h.glyph()).collect();
    let labels: HashSet<&str> = Heading::ALL.iter().map(|h| h.label()).collect();
    assert_eq!(glyphs.len(), 4);
    assert_eq!(labels.len(), 4);
}

#[test]
fn presentation_table() {
    assert_eq!(Heading::North.glyph(), '↑');
    assert_eq!(Heading::East.glyph(), '→');
    assert_eq!(Heading::South.glyph(), '↓');
    assert_eq!(Heading::West.glyph(), '←');
    assert_eq!(Heading::North.label(), "North ↑");
    assert_eq!(Heading::East.label(), "East →");
    assert_eq!(Heading::South.label(), "South ↓");
    assert_eq!(Heading::West.label(), "West ←");
}

#[test]
fn turn_right_order() {
    assert_eq!(Heading::North.turn_right(), Heading::East);
    assert_eq!(Heading::East.turn_right(), Heading::South);
    assert_eq!(Heading::South.turn_right(), Heading::West);
    assert_eq!(Heading::West.turn_right(), Heading::North);
}

#[test]
fn parse_wire_names() {
    assert_eq!("NORTH".parse::<Heading>(), Ok(Heading::North));
    assert_eq!("west".parse::<Heading>(), Ok(Heading::West));
    assert!("UP".parse::<Heading>().is_err());
    assert_eq!(Heading::South.to_string(), "SOUTH");
}

#[test]
fn json_decoding_matches_from_str() {
    let cases = [
        ("\"EAST\"", Heading::East),
        ("\"east\"", Heading::East),
        ("\"North\"", Heading::North),
    ];
    for (raw, expected) in cases {
        let decoded: Heading = serde_json::from_str(raw).unwrap();
        assert_eq!(decoded, expected);
    }
    assert!(serde_json::from_str::<Heading>("\"UP\"").is_err());
    assert_eq!(serde_json::to_string(&Heading::West).unwrap(), "\"WEST\"");
}

proptest! {
    #[test]
    fn four_right_turns_is_identity(h in heading()) {
        let back = h.turn_right().turn_right().turn_right().turn_right();
        prop_assert_eq!(back, h);
    }

    #[test]
    fn any_casing_parses(h in heading(), mask in any::<u8>()) {
        let mixed: String = h
            .name()
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if mask & (1 << (i % 8)) != 0 {
                    c.to_ascii_lowercase()
                } else {
                    c
                }
            })
            .collect();
        prop_assert_eq!(mixed.parse::<Heading>(), Ok(h));
    }

    #[test]
    fn single_turn_never_identity(h in heading()) {
        prop_assert_ne!(h.turn_right(), h);
    }
}
